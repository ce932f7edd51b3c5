use crate::errors::AppError;
use crate::models::{AddHabitRequest, AppData, ChartResponse, HabitView, HabitsResponse};
use crate::state::AppState;
use crate::stats::{build_chart, today_key};
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = today_key();
    let data = state.data.lock().await;
    let view = build_view(&date, &data);
    Html(render_index(&view))
}

pub async fn list_habits(State(state): State<AppState>) -> Result<Json<HabitsResponse>, AppError> {
    let date = today_key();
    let data = state.data.lock().await;
    Ok(Json(build_view(&date, &data)))
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(payload): Json<AddHabitRequest>,
) -> Result<Json<HabitsResponse>, AppError> {
    let date = today_key();
    let mut data = state.data.lock().await;

    // A blank name is dropped silently, nothing to persist either.
    if data.add_habit(&payload.name).is_some() {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(build_view(&date, &data)))
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<HabitsResponse>, AppError> {
    let date = today_key();
    let mut data = state.data.lock().await;

    if data.toggle_habit(id, &date).is_none() {
        return Err(AppError::not_found(format!("no habit with id {id}")));
    }

    persist_data(&state.data_path, &data).await?;
    Ok(Json(build_view(&date, &data)))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<HabitsResponse>, AppError> {
    let date = today_key();
    let mut data = state.data.lock().await;

    if !data.delete_habit(id) {
        return Err(AppError::not_found(format!("no habit with id {id}")));
    }

    persist_data(&state.data_path, &data).await?;
    Ok(Json(build_view(&date, &data)))
}

pub async fn get_chart(State(state): State<AppState>) -> Result<Json<ChartResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_chart(&data)))
}

pub fn build_view(date: &str, data: &AppData) -> HabitsResponse {
    let habits: Vec<HabitView> = data
        .habits
        .iter()
        .map(|habit| HabitView {
            id: habit.id,
            name: habit.name.clone(),
            done_today: habit.completed.get(date).copied().unwrap_or(false),
            streak: habit.streak,
        })
        .collect();

    let total = habits.len() as u64;
    let completed_today = data.completed_on(date);
    let progress = if total == 0 {
        0.0
    } else {
        completed_today as f64 / total as f64 * 100.0
    };

    HabitsResponse {
        date: date.to_string(),
        habits,
        completed_today,
        total,
        progress,
    }
}
