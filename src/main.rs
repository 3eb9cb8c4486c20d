use axum::Router;
use mimalloc::MiMalloc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use runplan_rs::config::Config;
use runplan_rs::routes;
use runplan_rs::state::AppState;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "runplan_rs=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    if config.race_date < config.start_date {
        tracing::warn!(
            "Race date {} precedes plan start {}; the schedule will be empty",
            config.race_date,
            config.start_date
        );
    }

    let state = AppState::new(config.clone());

    // Build router
    let serve_dir = ServeDir::new("assets/web")
        .not_found_service(ServeFile::new("assets/web/index.html"));

    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::schedule::router())
        .merge(routes::completions::router())
        .merge(routes::overrides::router())
        .merge(routes::journal::router())
        .merge(routes::profile::router())
        .merge(routes::activities::router())
        .merge(routes::tips::router())
        .merge(routes::sync::router())
        .fallback_service(serve_dir)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("RunPlan-RS listening on {}", addr);
    tracing::info!(
        "Training plan: {} through race day {}",
        config.start_date,
        config.race_date
    );
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Schedule: GET http://{}/api/schedule", addr);

    axum::serve(listener, app).await.unwrap();
}
