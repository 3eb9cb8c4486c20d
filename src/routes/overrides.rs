use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use chrono::NaiveDate;

use crate::{error::AppError, state::AppState, types::plan::DayOverride};

use super::parse_date;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/overrides", get(list_overrides))
        .route("/api/overrides/:date", put(put_override))
        .route("/api/overrides/:date", delete(delete_override))
}

async fn list_overrides(State(state): State<AppState>) -> Json<HashMap<NaiveDate, DayOverride>> {
    Json(state.overrides_snapshot())
}

async fn put_override(
    State(state): State<AppState>,
    Path(raw_date): Path<String>,
    Json(day_override): Json<DayOverride>,
) -> Result<Json<DayOverride>, AppError> {
    let date = parse_date(&raw_date)?;
    let stored = state.put_override(date, day_override)?;

    tracing::debug!(
        "Override stored for {} ({} activities)",
        date,
        stored.activities.len()
    );

    Ok(Json(stored))
}

async fn delete_override(
    State(state): State<AppState>,
    Path(raw_date): Path<String>,
) -> Result<StatusCode, AppError> {
    let date = parse_date(&raw_date)?;
    state
        .remove_override(date)
        .ok_or_else(|| AppError::NotFound(format!("No override stored for {}", date)))?;

    Ok(StatusCode::NO_CONTENT)
}
