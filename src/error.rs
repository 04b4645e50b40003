//! Error types for the library service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Library Error Enum ==
/// Unified error type for the library service.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// No book with the requested id
    #[error("Book not found: {0}")]
    NotFound(i64),

    /// ISBN uniqueness violated
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Malformed, missing or mistyped input
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unanticipated SQLite failure
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for LibraryError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            LibraryError::NotFound(_) => (StatusCode::NOT_FOUND, "Book not found".to_string()),
            LibraryError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            LibraryError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            LibraryError::Storage(err) => {
                tracing::error!("Storage error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            LibraryError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the library service.
pub type Result<T> = std::result::Result<T, LibraryError>;
