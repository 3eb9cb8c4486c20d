use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, ValidationError},
    state::AppState,
    types::plan::ActivityKind,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/activities", get(list_activities))
        .route("/api/activities", post(add_activity))
}

#[derive(Debug, Serialize)]
struct ActivityListResponse {
    builtin: Vec<&'static str>,
    custom: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AddActivityRequest {
    name: String,
}

async fn list_activities(State(state): State<AppState>) -> Json<ActivityListResponse> {
    Json(ActivityListResponse {
        builtin: ActivityKind::BUILTIN_LABELS.to_vec(),
        custom: state.custom_activities().await,
    })
}

async fn add_activity(
    State(state): State<AppState>,
    Json(payload): Json<AddActivityRequest>,
) -> Result<Json<ActivityListResponse>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(ValidationError::BlankActivityName.into());
    }

    let custom = state.add_custom_activity(&payload.name).await;

    Ok(Json(ActivityListResponse {
        builtin: ActivityKind::BUILTIN_LABELS.to_vec(),
        custom,
    }))
}
