//! Sweet Shop: API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use sweetshop_core::error::DomainError;
use thiserror::Error;
use tracing::error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or pool error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Tracing or exporter setup failed.
    #[error("telemetry error: {0}")]
    Telemetry(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// The catalog operation a request was performing. Selects the message used
/// when the store fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// POST /add
    Create,
    /// GET /view-all
    List,
    /// GET /search
    Search,
    /// DELETE /delete/{id}
    Delete,
    /// POST /purchase/{id}
    Purchase,
    /// POST /restock/{id}
    Restock,
    /// GET /categories
    Categories,
}

impl Operation {
    /// Client-facing message for a store failure during this operation.
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Create => "Error creating sweet",
            Self::List => "Error fetching sweets",
            Self::Search => "Error searching sweets",
            Self::Delete => "Error deleting sweet",
            Self::Purchase => "Error processing purchase",
            Self::Restock => "Error processing restock",
            Self::Categories => "Error fetching categories",
        }
    }
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError {
    /// Operation that failed.
    pub operation: Operation,
    /// Underlying domain error.
    pub error: DomainError,
}

impl ApiError {
    /// Wraps `error` as a failure of `operation`.
    #[must_use]
    pub fn new(operation: Operation, error: DomainError) -> Self {
        Self { operation, error }
    }

    /// Returns a `map_err` adapter that tags errors with `operation`.
    pub fn during(operation: Operation) -> impl Fn(DomainError) -> Self {
        move |error| Self::new(operation, error)
    }

    /// Status code and client message for this error.
    #[must_use]
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match &self.error {
            DomainError::MissingFields
            | DomainError::InvalidNumeric
            | DomainError::OutOfRange
            | DomainError::DuplicateName
            | DomainError::InvalidQuantity(_)
            | DomainError::InsufficientStock => (StatusCode::BAD_REQUEST, self.error.to_string()),
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, self.error.to_string()),
            DomainError::Infrastructure(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                self.operation.failure_message().to_owned(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!(operation = ?self.operation, error = %self.error, "request failed");
        }

        (status, Json(ErrorBody { message })).into_response()
    }
}
