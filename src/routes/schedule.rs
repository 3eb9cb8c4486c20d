use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;

use crate::{
    error::AppError,
    schedule::{generate, stats},
    state::AppState,
    types::plan::TrainingDay,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/schedule", get(full_schedule))
        .route("/api/schedule/today", get(today))
        .route("/api/stats", get(summary))
}

async fn full_schedule(State(state): State<AppState>) -> Json<Vec<TrainingDay>> {
    Json(current_schedule(&state))
}

async fn today(State(state): State<AppState>) -> Result<Json<TrainingDay>, AppError> {
    let today = Utc::now().date_naive();
    let day = current_schedule(&state)
        .into_iter()
        .find(|d| d.date == today)
        .ok_or_else(|| AppError::NotFound(format!("No training day scheduled for {}", today)))?;

    Ok(Json(day))
}

async fn summary(State(state): State<AppState>) -> Json<stats::StatsSummary> {
    let schedule = current_schedule(&state);
    let logs = state.run_logs_snapshot();
    let today = Utc::now().date_naive();

    Json(stats::summarize(&schedule, &logs, today))
}

fn current_schedule(state: &AppState) -> Vec<TrainingDay> {
    let (completed, overrides) = state.plan_inputs();
    generate(state.config(), &completed, &overrides)
}
