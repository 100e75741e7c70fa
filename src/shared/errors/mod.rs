//! Error Types
//!
//! Layered error types with HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// SQLSTATE codes PostgreSQL raises when a write loses a race with another writer
const CONCURRENCY_SQLSTATES: [&str; 2] = ["40001", "40P01"];

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage error{}: {message}", code_suffix(.code))]
    Storage { message: String, code: Option<String> },

    #[error("Concurrency conflict: {0}")]
    Concurrency(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let code = db_err.code().map(|c| c.into_owned());
            if code.as_deref().is_some_and(|c| CONCURRENCY_SQLSTATES.contains(&c)) {
                return Self::Concurrency(db_err.message().to_string());
            }
            return Self::Storage {
                message: db_err.message().to_string(),
                code,
            };
        }

        Self::Storage {
            message: err.to_string(),
            code: None,
        }
    }
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref().map(|c| format!(" [{c}]")).unwrap_or_default()
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Repository(RepositoryError::Concurrency(_)) => "CONCURRENCY_CONFLICT",
            Self::Repository(RepositoryError::Storage { .. }) => "STORAGE_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid driver id: {0}")]
    InvalidId(String),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::UseCase(uc_error) => {
                if uc_error.status_code().is_server_error() {
                    tracing::error!(error = %uc_error, "Request failed");
                }
                (uc_error.status_code(), uc_error.error_code(), uc_error.to_string())
            }
            ApiError::InvalidId(_) => (StatusCode::BAD_REQUEST, "INVALID_ID", self.to_string()),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<std::num::ParseIntError> for ApiError {
    fn from(err: std::num::ParseIntError) -> Self {
        ApiError::InvalidId(err.to_string())
    }
}
