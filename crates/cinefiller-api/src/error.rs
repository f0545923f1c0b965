//! Cinefiller API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cinefiller_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;

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

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer error.
///
/// Lookups report a missing entity as `None`; handlers turn that into
/// `NotFound` here, at the edge.
#[derive(Debug)]
pub enum ApiError {
    /// A domain failure from a query handler.
    Domain(DomainError),
    /// The requested entity does not exist.
    NotFound {
        /// Machine-readable error code, e.g. `scene_not_found`.
        code: &'static str,
        /// Human-readable error message.
        message: String,
    },
}

impl ApiError {
    /// Creates a `NotFound` error.
    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            message: message.into(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::NotFound { code, message } => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: code,
                    message,
                },
            ),
            Self::Domain(err) => {
                let (status, error) = match &err {
                    DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
                    DomainError::Infrastructure(_) => {
                        tracing::error!(error = %err, "request failed");
                        (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
                    }
                };
                (
                    status,
                    ErrorBody {
                        error,
                        message: err.to_string(),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
