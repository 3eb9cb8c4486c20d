use axum::{routing::get, Json, Router};

use crate::state::AppState;
use crate::tips::{Tip, TIPS};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/tips", get(list_tips))
}

async fn list_tips() -> Json<&'static [Tip]> {
    Json(TIPS)
}
