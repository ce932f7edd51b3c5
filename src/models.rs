use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub completed: BTreeMap<String, bool>,
    #[serde(default)]
    pub streak: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub next_id: u64,
}

impl AppData {
    /// Data files written before habits carried ids have `id: 0` everywhere.
    /// Hands out fresh ids so every habit stays addressable and bumps
    /// `next_id` past everything already taken.
    pub fn assign_missing_ids(&mut self) {
        let mut next = self.next_id.max(1);
        for habit in &mut self.habits {
            if habit.id == 0 {
                habit.id = next;
            }
            next = next.max(habit.id + 1);
        }
        self.next_id = next;
    }

    /// Appends a habit with a fresh id. A name that trims to empty is
    /// ignored and leaves the list untouched.
    pub fn add_habit(&mut self, raw_name: &str) -> Option<&Habit> {
        let name = raw_name.trim();
        if name.is_empty() {
            return None;
        }

        if self.next_id == 0 {
            self.next_id = 1;
        }
        let id = self.next_id;
        self.next_id += 1;

        self.habits.push(Habit {
            id,
            name: name.to_string(),
            completed: BTreeMap::new(),
            streak: 0,
        });
        self.habits.last()
    }

    /// Flips completion for `date` on the habit with `id` and moves the
    /// streak counter: +1 when the day becomes done, -1 (floored at 0) when
    /// it becomes undone. The counter follows toggles only; it does not
    /// inspect day history.
    pub fn toggle_habit(&mut self, id: u64, date: &str) -> Option<&Habit> {
        let habit = self.habits.iter_mut().find(|habit| habit.id == id)?;
        let done = habit.completed.entry(date.to_string()).or_insert(false);
        *done = !*done;
        if *done {
            habit.streak = habit.streak.saturating_add(1);
        } else {
            habit.streak = habit.streak.saturating_sub(1);
        }
        Some(&*habit)
    }

    /// Removes the habit with `id`, keeping the order of the rest. Returns
    /// false when no habit has that id.
    pub fn delete_habit(&mut self, id: u64) -> bool {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != id);
        self.habits.len() != before
    }

    pub fn completed_on(&self, date: &str) -> u64 {
        self.habits
            .iter()
            .filter(|habit| habit.completed.get(date).copied().unwrap_or(false))
            .count() as u64
    }
}

#[derive(Debug, Deserialize)]
pub struct AddHabitRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct HabitView {
    pub id: u64,
    pub name: String,
    pub done_today: bool,
    pub streak: u32,
}

#[derive(Debug, Serialize)]
pub struct HabitsResponse {
    pub date: String,
    pub habits: Vec<HabitView>,
    pub completed_today: u64,
    pub total: u64,
    pub progress: f64,
}

#[derive(Debug, Serialize)]
pub struct ChartPoint {
    pub date: String,
    pub label: String,
    pub completed: u64,
}

#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub days: Vec<ChartPoint>,
}
