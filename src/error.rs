//! `AppError` and its JSON error envelope.
//!
//! Bad input, unknown references and blocked deletes answer 400, missing
//! keys, copies or staff answer 404, and store failures answer 500 with the
//! cause kept in the log.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Client input errors**: malformed body, unknown foreign key, delete blocked
///   by dependent rows (400)
/// - **Not found**: identity does not resolve (404)
/// - **Infrastructure errors**: any sqlx::Error from database operations (500)
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// Foreign key violations raised by the store are reported as client
    /// errors; everything else is a 500 with details kept in the logs.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested record does not exist. Carries the entity label, e.g. "Key".
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A foreign key in the request body points at nothing.
    /// Carries the referenced entity label, e.g. "Staff".
    #[error("{0} ID does not exist")]
    InvalidReference(&'static str),

    /// Delete refused because other records still reference the target.
    #[error("{0}")]
    DeleteBlocked(String),

    /// Request body or parameters are invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidRequest(format!("Invalid path parameter: {}", rejection.body_text()))
    }
}

impl AppError {
    /// Map each variant to (HTTP status, error code, client-facing message).
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::InvalidReference(_) => (
                StatusCode::BAD_REQUEST,
                "invalid_reference",
                self.to_string(),
            ),
            AppError::DeleteBlocked(msg) => (StatusCode::BAD_REQUEST, "delete_blocked", msg.clone()),
            AppError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Database(err) if is_foreign_key_violation(err) => (
                StatusCode::BAD_REQUEST,
                "invalid_reference",
                "Referenced record does not exist".to_string(),
            ),
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        }
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(%status, code, %message, "request rejected");
        }

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
