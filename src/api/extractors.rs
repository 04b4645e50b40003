//! Request Extractors
//!
//! Validating wrappers around axum's `Path` and `Json` extractors. Every
//! rejection becomes a [`LibraryError::Validation`] so malformed input is
//! reported uniformly before it reaches storage.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};

use crate::error::LibraryError;
use crate::models::BookInput;

/// Book id taken from the `:id` path segment.
#[derive(Debug, Clone, Copy)]
pub struct BookId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = LibraryError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| LibraryError::Validation(rejection.body_text()))?;

        Ok(Self(id))
    }
}

/// JSON book body that deserialized and passed [`BookInput::validate`].
#[derive(Debug, Clone)]
pub struct ValidBook(pub BookInput);

#[async_trait]
impl<S> FromRequest<S> for ValidBook
where
    S: Send + Sync,
{
    type Rejection = LibraryError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(input) = Json::<BookInput>::from_request(req, state)
            .await
            .map_err(|rejection| LibraryError::Validation(rejection.body_text()))?;

        if let Some(error_msg) = input.validate() {
            return Err(LibraryError::Validation(error_msg));
        }

        Ok(Self(input))
    }
}
