use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use crate::{state::AppState, types::journal::UserProfile};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/profile", get(get_profile))
        .route("/api/profile", put(put_profile))
        .route("/api/reset", post(reset_all))
}

async fn get_profile(State(state): State<AppState>) -> Json<UserProfile> {
    Json(state.profile().await)
}

async fn put_profile(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Json<UserProfile> {
    Json(state.set_profile(profile).await)
}

async fn reset_all(State(state): State<AppState>) -> StatusCode {
    state.reset_all().await;
    StatusCode::NO_CONTENT
}
