use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use chrono::NaiveDate;

use crate::{
    error::AppError,
    state::AppState,
    types::journal::{RunLog, RunLogPatch},
};

use super::parse_date;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/logs", get(list_logs))
        .route("/api/logs/:date", put(update_log))
}

async fn list_logs(State(state): State<AppState>) -> Json<HashMap<NaiveDate, RunLog>> {
    Json(state.run_logs_snapshot())
}

async fn update_log(
    State(state): State<AppState>,
    Path(raw_date): Path<String>,
    Json(patch): Json<RunLogPatch>,
) -> Result<Json<RunLog>, AppError> {
    let date = parse_date(&raw_date)?;
    let merged = state.update_log(date, patch);

    Ok(Json(merged))
}
