use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod auth;
mod config;
mod db;
mod error;
mod handlers;
mod models;
#[cfg(test)]
mod test_util;

use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}

/// Builds the full route table. Split out of `main` so tests can drive the
/// router directly without binding a socket.
pub fn app(state: AppState) -> Router {
    // The client may be served from any origin; no credentials are involved.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        // Moods
        .route("/add_mood", post(handlers::moods::add_mood))
        .route("/weekly_moods", get(handlers::moods::weekly_moods))
        // Journals
        .route("/add_journal", post(handlers::journals::add_journal))
        .route("/get_journals", get(handlers::journals::get_journals))
        // Guided exercises
        .route(
            "/breathing_complete",
            post(handlers::sessions::breathing_complete),
        )
        .route(
            "/grounding_complete",
            post(handlers::sessions::grounding_complete),
        )
        .route("/focus_complete", post(handlers::sessions::focus_complete))
        // Relief actions
        .route("/vent_anger", post(handlers::relief::vent_anger))
        .route("/save_overwhelm", post(handlers::relief::save_overwhelm))
        .route("/quick_reset", post(handlers::relief::quick_reset))
        // Aggregates
        .route(
            "/dashboard_summary",
            get(handlers::dashboard::dashboard_summary),
        )
        // Auth
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mindmate_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env();

    // Database
    let db = db::pool::create_pool(&config.database_url).await;

    db::schema::init_schema(&db)
        .await
        .expect("Failed to initialize database schema");

    tracing::info!("Database schema ensured");

    let state = AppState { db };
    let app = app(state);

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
