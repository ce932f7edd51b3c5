use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct HabitView {
    id: u64,
    name: String,
    done_today: bool,
    streak: u32,
}

#[derive(Debug, Deserialize)]
struct HabitsResponse {
    date: String,
    habits: Vec<HabitView>,
    completed_today: u64,
    total: u64,
    progress: f64,
}

#[derive(Debug, Deserialize)]
struct ChartPoint {
    date: String,
    label: String,
    completed: u64,
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    days: Vec<ChartPoint>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("habit_tracker_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/habits")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_habit_tracker"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn list_habits(client: &Client, base_url: &str) -> HabitsResponse {
    client
        .get(format!("{base_url}/api/habits"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn add_habit(client: &Client, base_url: &str, name: &str) -> HabitsResponse {
    let response = client
        .post(format!("{base_url}/api/habits"))
        .json(&serde_json::json!({ "name": name }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_add_habit_appends_to_list() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = list_habits(&client, &server.base_url).await;
    let after = add_habit(&client, &server.base_url, "Read a chapter").await;

    assert_eq!(after.total, before.total + 1);
    let added = after.habits.last().expect("habit missing");
    assert_eq!(added.name, "Read a chapter");
    assert_eq!(added.streak, 0);
    assert!(!added.done_today);
    assert!(!after.date.is_empty());
}

#[tokio::test]
async fn http_blank_name_changes_nothing() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = list_habits(&client, &server.base_url).await;
    let after = add_habit(&client, &server.base_url, "   ").await;

    assert_eq!(after.total, before.total);
}

#[tokio::test]
async fn http_toggle_flips_today_and_moves_streak() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let added = add_habit(&client, &server.base_url, "Stretch").await;
    let id = added.habits.last().unwrap().id;
    let completed_before = added.completed_today;

    let on: HabitsResponse = client
        .post(format!("{}/api/habits/{id}/toggle", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let habit = on.habits.iter().find(|h| h.id == id).unwrap();
    assert!(habit.done_today);
    assert_eq!(habit.streak, 1);
    assert_eq!(on.completed_today, completed_before + 1);

    let off: HabitsResponse = client
        .post(format!("{}/api/habits/{id}/toggle", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let habit = off.habits.iter().find(|h| h.id == id).unwrap();
    assert!(!habit.done_today);
    assert_eq!(habit.streak, 0);
    assert_eq!(off.completed_today, completed_before);
}

#[tokio::test]
async fn http_delete_removes_habit_then_404s() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let added = add_habit(&client, &server.base_url, "Floss").await;
    let id = added.habits.last().unwrap().id;

    let after: HabitsResponse = client
        .delete(format!("{}/api/habits/{id}", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after.total, added.total - 1);
    assert!(after.habits.iter().all(|h| h.id != id));

    let missing = client
        .delete(format!("{}/api/habits/{id}", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_progress_tracks_completed_ratio() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let view = add_habit(&client, &server.base_url, "Journal").await;
    let expected = if view.total == 0 {
        0.0
    } else {
        view.completed_today as f64 / view.total as f64 * 100.0
    };
    assert!((view.progress - expected).abs() < 1e-9);
}

#[tokio::test]
async fn http_chart_has_seven_days_ending_today() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let view = list_habits(&client, &server.base_url).await;
    let chart: ChartResponse = client
        .get(format!("{}/api/chart", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(chart.days.len(), 7);
    let today = chart.days.last().unwrap();
    assert_eq!(today.date, view.date);
    assert_eq!(today.label, view.date[5..]);
    assert_eq!(today.completed, view.completed_today);
}

#[tokio::test]
async fn http_index_serves_page() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client.get(&server.base_url).send().await.unwrap();
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("Habit Tracker"));
    assert!(body.contains("id=\"habit-form\""));
}
