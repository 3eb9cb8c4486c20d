use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Serialize;

use crate::{error::AppError, state::AppState};

use super::parse_date;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/completions", get(list_completions))
        .route("/api/completions/:date/toggle", post(toggle_completion))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToggleResponse {
    date: NaiveDate,
    is_completed: bool,
}

async fn list_completions(State(state): State<AppState>) -> Json<Vec<NaiveDate>> {
    Json(state.completions_sorted())
}

async fn toggle_completion(
    State(state): State<AppState>,
    Path(raw_date): Path<String>,
) -> Result<Json<ToggleResponse>, AppError> {
    let date = parse_date(&raw_date)?;
    let is_completed = state.toggle_completion(date);

    tracing::debug!("Completion for {} toggled to {}", date, is_completed);

    Ok(Json(ToggleResponse { date, is_completed }))
}
