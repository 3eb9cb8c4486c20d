use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;
use crate::sync::{self, SyncMetadata, SyncStatus};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/sync/status", get(sync_status))
}

#[derive(Debug, Serialize)]
struct SyncStatusResponse {
    status: SyncStatus,
    metadata: SyncMetadata,
}

async fn sync_status(State(state): State<AppState>) -> Json<SyncStatusResponse> {
    let metadata = state.sync_metadata().clone();

    Json(SyncStatusResponse {
        status: sync::status(&metadata),
        metadata,
    })
}
