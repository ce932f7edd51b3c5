use crate::models::HabitsResponse;

pub fn render_index(view: &HabitsResponse) -> String {
    INDEX_HTML
        .replace("{{DATE}}", &view.date)
        .replace("{{DONE}}", &view.completed_today.to_string())
        .replace("{{TOTAL}}", &view.total.to_string())
        .replace("{{PERCENT}}", &format!("{:.0}", view.progress))
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    body.dark {
      --bg-1: #1d232b;
      --bg-2: #2f4858;
      --ink: #f1ece2;
      --card: rgba(34, 40, 49, 0.92);
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), var(--bg-1) 60%, var(--bg-2) 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      align-items: flex-start;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #8b857d;
      font-size: 1rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-theme {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
      white-space: nowrap;
    }

    .add-form {
      display: flex;
      gap: 12px;
    }

    .add-form input {
      flex: 1;
      border: 1px solid rgba(47, 72, 88, 0.18);
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 1rem;
      font-family: inherit;
      background: white;
      color: #2b2a28;
    }

    .btn-add {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .progress-area {
      display: grid;
      gap: 8px;
    }

    .progress-area .label {
      display: flex;
      justify-content: space-between;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    progress {
      width: 100%;
      height: 14px;
      appearance: none;
      border: none;
      border-radius: 999px;
      overflow: hidden;
      background: rgba(47, 72, 88, 0.12);
    }

    progress::-webkit-progress-bar {
      background: rgba(47, 72, 88, 0.12);
    }

    progress::-webkit-progress-value {
      background: var(--accent);
    }

    progress::-moz-progress-bar {
      background: var(--accent);
    }

    .habit-list {
      display: grid;
      gap: 10px;
    }

    .habit {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      background: white;
      color: #2b2a28;
      border-radius: 18px;
      padding: 14px 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .habit label {
      display: flex;
      align-items: center;
      gap: 12px;
      flex: 1;
      cursor: pointer;
    }

    .habit input[type="checkbox"] {
      width: 20px;
      height: 20px;
      accent-color: var(--accent);
    }

    .habit .done {
      text-decoration: line-through;
      color: #8b857d;
    }

    .habit .actions {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .streak {
      font-weight: 600;
      color: var(--accent-2);
      white-space: nowrap;
    }

    .btn-delete {
      background: transparent;
      padding: 6px 10px;
      font-size: 1.1rem;
      box-shadow: none;
    }

    .empty {
      text-align: center;
      color: #8b857d;
      padding: 18px;
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .chart-card h2 {
      margin: 0 0 4px;
      font-size: 1.3rem;
      color: #2b2a28;
    }

    .chart-card .subtitle {
      margin: 0 0 12px;
      font-size: 0.9rem;
    }

    #chart {
      width: 100%;
      height: 220px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-bar {
      fill: #00adb5;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .add-form {
        flex-direction: column;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Habit Tracker</h1>
        <p class="subtitle">{{DATE}} &middot; {{DONE}} of {{TOTAL}} done today</p>
      </div>
      <button class="btn-theme" id="theme-btn" type="button">Toggle theme</button>
    </header>

    <form class="add-form" id="habit-form">
      <input id="habit-input" type="text" placeholder="Add a habit..." autocomplete="off" />
      <button class="btn-add" type="submit">Add</button>
    </form>

    <section class="progress-area">
      <div class="label">
        <span>Today's progress</span>
        <span id="progress-text">{{PERCENT}}%</span>
      </div>
      <progress id="progress" max="100" value="{{PERCENT}}"></progress>
    </section>

    <section class="habit-list" id="habit-list"></section>

    <section class="chart-card">
      <h2>Last 7 days</h2>
      <p class="subtitle">Habits completed per day.</p>
      <svg id="chart" viewBox="0 0 600 220" aria-label="Completions chart" role="img"></svg>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const form = document.getElementById('habit-form');
    const input = document.getElementById('habit-input');
    const listEl = document.getElementById('habit-list');
    const progressEl = document.getElementById('progress');
    const progressTextEl = document.getElementById('progress-text');
    const chartEl = document.getElementById('chart');
    const statusEl = document.getElementById('status');
    const themeBtn = document.getElementById('theme-btn');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const renderList = (data) => {
      listEl.innerHTML = '';

      if (!data.habits.length) {
        const empty = document.createElement('div');
        empty.className = 'empty';
        empty.textContent = 'No habits yet. Add one above.';
        listEl.appendChild(empty);
      }

      data.habits.forEach((habit) => {
        const row = document.createElement('div');
        row.className = 'habit';

        const label = document.createElement('label');
        const checkbox = document.createElement('input');
        checkbox.type = 'checkbox';
        checkbox.checked = habit.done_today;
        checkbox.addEventListener('change', () => toggle(habit.id));

        const name = document.createElement('span');
        name.textContent = habit.name;
        if (habit.done_today) {
          name.className = 'done';
        }

        label.appendChild(checkbox);
        label.appendChild(name);

        const actions = document.createElement('div');
        actions.className = 'actions';

        const streak = document.createElement('span');
        streak.className = 'streak';
        streak.textContent = `\u{1F525} ${habit.streak}`;

        const delBtn = document.createElement('button');
        delBtn.className = 'btn-delete';
        delBtn.type = 'button';
        delBtn.textContent = '\u{1F5D1}\u{FE0F}';
        delBtn.addEventListener('click', () => remove(habit.id));

        actions.appendChild(streak);
        actions.appendChild(delBtn);

        row.appendChild(label);
        row.appendChild(actions);
        listEl.appendChild(row);
      });

      progressEl.value = data.progress;
      progressTextEl.textContent = `${Math.round(data.progress)}%`;
    };

    const renderBarChart = (days) => {
      const width = 600;
      const height = 220;
      const paddingX = 44;
      const paddingY = 30;
      const top = 16;

      const max = Math.max(1, ...days.map((day) => day.completed));
      const innerWidth = width - paddingX * 2;
      const innerHeight = height - top - paddingY;
      const slot = innerWidth / days.length;
      const barWidth = slot * 0.6;
      const y = (value) => height - paddingY - (value / max) * innerHeight;

      let grid = '';
      for (let tick = 0; tick <= max; tick += 1) {
        const yPos = y(tick);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${tick}</text>`;
      }

      const bars = days
        .map((day, index) => {
          const x = paddingX + index * slot + (slot - barWidth) / 2;
          const barTop = y(day.completed);
          const barHeight = height - paddingY - barTop;
          return `<rect class="chart-bar" x="${x.toFixed(2)}" y="${barTop.toFixed(2)}" width="${barWidth.toFixed(2)}" height="${barHeight.toFixed(2)}" rx="4" />`;
        })
        .join('');

      const labels = days
        .map((day, index) => {
          const x = paddingX + index * slot + slot / 2;
          return `<text class="chart-label" x="${x.toFixed(2)}" y="${height - paddingY + 18}" text-anchor="middle">${day.label}</text>`;
        })
        .join('');

      chartEl.innerHTML = `${grid}${bars}${labels}`;
    };

    const request = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const loadChart = async () => {
      const chart = await request('/api/chart');
      renderBarChart(chart.days);
    };

    const refresh = async (data) => {
      renderList(data || (await request('/api/habits')));
      await loadChart();
    };

    const add = async (name) => {
      const data = await request('/api/habits', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ name })
      });
      input.value = '';
      await refresh(data);
    };

    const toggle = async (id) => {
      const data = await request(`/api/habits/${id}/toggle`, { method: 'POST' });
      await refresh(data);
    };

    const remove = async (id) => {
      const data = await request(`/api/habits/${id}`, { method: 'DELETE' });
      await refresh(data);
    };

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      add(input.value).catch((err) => setStatus(err.message, 'error'));
    });

    themeBtn.addEventListener('click', () => {
      document.body.classList.toggle('dark');
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
