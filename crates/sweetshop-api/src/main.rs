//! Sweet Shop API server entry point.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use sweetshop_api::config::{self, ApiConfig};
use sweetshop_api::error::AppError;
use sweetshop_api::state::AppState;
use sweetshop_api::telemetry;
use sweetshop_store::MIGRATOR;
use sweetshop_store::pg_sweet_repository::PgSweetRepository;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // .env must be loaded before telemetry reads RUST_LOG and the OTLP endpoint.
    let dotenv_path = config::load_dotenv();
    let _telemetry = telemetry::init("sweetshop-api")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Sweet Shop API server");
    if let Some(path) = dotenv_path {
        tracing::info!(path = %path.display(), "loaded environment file");
    }

    let config = ApiConfig::from_env()?;
    let addr = config.socket_addr()?;

    // Create database connection pool.
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    tracing::info!(database = %config.redacted_database_url(), "database connected");

    MIGRATOR.run(&pool).await?;

    let app_state = AppState::new(Arc::new(PgSweetRepository::new(pool)));

    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = sweetshop_api::app(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
