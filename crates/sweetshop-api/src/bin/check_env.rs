//! Prints the effective server configuration and fails if it is incomplete.

use std::process::ExitCode;

use sweetshop_api::config::{self, ApiConfig};

fn main() -> ExitCode {
    let dotenv_path = config::load_dotenv();
    tracing_subscriber::fmt().with_target(false).init();

    match dotenv_path {
        Some(path) => tracing::info!(path = %path.display(), "loaded environment file"),
        None => tracing::info!("no .env file found, using process environment only"),
    }

    match ApiConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                database_url = %config.redacted_database_url(),
                host = %config.host,
                port = config.port,
                max_connections = config.max_connections,
                "all required environment variables are set"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "environment is incomplete; check your .env file");
            ExitCode::FAILURE
        }
    }
}
