use axum::{
    body::{to_bytes, Body},
    http::Request,
    Router,
};
use runplan_rs::{config::Config, routes, state::AppState};
use tower::ServiceExt;

fn app() -> Router {
    let config = Config::from_env();
    let state = AppState::new(config);
    Router::new()
        .merge(routes::profile::router())
        .merge(routes::completions::router())
        .merge(routes::overrides::router())
        .merge(routes::journal::router())
        .merge(routes::activities::router())
        .with_state(state)
}

async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> axum::response::Response {
    let builder = Request::builder().uri(uri).method(method);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    app.clone().oneshot(request).await.expect("response")
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&body).expect("json")
}

#[tokio::test]
async fn profile_starts_with_defaults() {
    let response = request(&app(), "GET", "/api/profile", None).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let profile = json_body(response).await;
    assert_eq!(profile["name"], "Runner");
    assert_eq!(profile["goalTime"], "2:00:00");
    assert_eq!(profile["shoeModel"], "");
}

#[tokio::test]
async fn profile_updates_replace_the_stored_profile() {
    let app = app();

    let put = request(
        &app,
        "PUT",
        "/api/profile",
        Some(r#"{"name":"Alex","goalTime":"1:55:00","shoeModel":"Pegasus 41"}"#),
    )
    .await;
    assert_eq!(put.status(), axum::http::StatusCode::OK);

    let get = request(&app, "GET", "/api/profile", None).await;
    let profile = json_body(get).await;
    assert_eq!(profile["name"], "Alex");
    assert_eq!(profile["goalTime"], "1:55:00");
    assert_eq!(profile["shoeModel"], "Pegasus 41");
}

#[tokio::test]
async fn reset_restores_first_launch_state() {
    let app = app();

    request(&app, "POST", "/api/completions/2026-02-10/toggle", None).await;
    request(
        &app,
        "PUT",
        "/api/overrides/2026-02-10",
        Some(r#"{"activities":[{"id":"a","activity":"Yoga","description":"One."}]}"#),
    )
    .await;
    request(
        &app,
        "PUT",
        "/api/logs/2026-02-10",
        Some(r#"{"notes":"Big day"}"#),
    )
    .await;
    request(&app, "POST", "/api/activities", Some(r#"{"name":"Yoga"}"#)).await;
    request(
        &app,
        "PUT",
        "/api/profile",
        Some(r#"{"name":"Alex","goalTime":"1:50:00","shoeModel":"Vaporfly"}"#),
    )
    .await;

    let reset = request(&app, "POST", "/api/reset", None).await;
    assert_eq!(reset.status(), axum::http::StatusCode::NO_CONTENT);

    let profile = json_body(request(&app, "GET", "/api/profile", None).await).await;
    assert_eq!(profile["name"], "Runner");

    let completions = json_body(request(&app, "GET", "/api/completions", None).await).await;
    assert_eq!(completions.as_array().expect("array").len(), 0);

    let overrides = json_body(request(&app, "GET", "/api/overrides", None).await).await;
    assert_eq!(overrides.as_object().expect("object").len(), 0);

    let logs = json_body(request(&app, "GET", "/api/logs", None).await).await;
    assert_eq!(logs.as_object().expect("object").len(), 0);

    let activities = json_body(request(&app, "GET", "/api/activities", None).await).await;
    assert_eq!(activities["custom"].as_array().expect("array").len(), 0);
}
