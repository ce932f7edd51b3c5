use crate::models::{AppData, ChartPoint, ChartResponse};
use chrono::{Duration, Local, NaiveDate};

pub fn build_chart(data: &AppData) -> ChartResponse {
    build_chart_at(Local::now().date_naive(), data)
}

/// Completion counts for the last seven calendar days, oldest first so the
/// chart reads left to right with today on the right edge.
pub fn build_chart_at(today: NaiveDate, data: &AppData) -> ChartResponse {
    let mut days = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        let key = date_key(date);
        days.push(ChartPoint {
            completed: data.completed_on(&key),
            label: date.format("%m-%d").to_string(),
            date: key,
        });
    }

    ChartResponse { days }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn today_key() -> String {
    date_key(Local::now().date_naive())
}
