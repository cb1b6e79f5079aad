//! Unified error type for the roster service
//!
//! Every failure is surfaced to the caller as a JSON body of the form
//! `{"error": "<message>"}` with the matching HTTP status. Nothing is
//! retried; database errors are logged once at the conversion boundary.

use axum::Json;
use axum::response::IntoResponse;
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

/// Application error
///
/// One variant per failure class the API can report:
/// - `Validation`: a required field is missing (400)
/// - `NotFound`: zero rows returned or affected (404)
/// - `Database`: statement execution failed, carries the driver text (500)
/// - `Internal`: anything else, generic message (500)
#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("{message}")]
    Database { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result type for API operations
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.http_status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Bridge sqlx errors into [`AppError`] so handlers can use `?` end to end.
///
/// Connection-level failures are reported with a generic message; statement
/// execution failures carry the driver error text.
#[cfg(feature = "db")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "Database error");
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => Self::internal("Database connection failed"),
            other => Self::database(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_mapping() {
        assert_eq!(
            AppError::validation("name is required").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("Employee").http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::database("syntax error").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::internal("boom").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_message() {
        let err = AppError::not_found("Employee");
        assert_eq!(err.to_string(), "Employee not found");
    }

    #[test]
    fn validation_message_passthrough() {
        let err = AppError::validation("email is required");
        assert_eq!(err.to_string(), "email is required");
    }

    #[cfg(feature = "db")]
    #[test]
    fn sqlx_row_not_found_maps_to_database() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Database { .. }));
    }

    #[cfg(feature = "db")]
    #[test]
    fn sqlx_pool_timeout_maps_to_generic_internal() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::Internal { .. }));
        assert_eq!(err.to_string(), "Database connection failed");
    }
}
