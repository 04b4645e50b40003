//! API Handlers
//!
//! HTTP request handlers for each library endpoint.
//!
//! Storage calls are synchronous, so every handler moves its work onto
//! tokio's blocking pool with its own clone of the store handle.

use axum::{extract::State, Json};

use super::extractors::{BookId, ValidBook};
use crate::config::Config;
use crate::error::{LibraryError, Result};
use crate::models::{Book, DeleteResponse, HealthResponse};
use crate::storage::BookStore;

/// Application state shared across all handlers.
///
/// Holds only the store handle; connections are opened per request.
#[derive(Clone)]
pub struct AppState {
    /// Book storage handle
    pub store: BookStore,
}

impl AppState {
    /// Creates a new AppState with the given store.
    pub fn new(store: BookStore) -> Self {
        Self { store }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Opens the database and initializes the schema.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(BookStore::from_config(config)?))
    }
}

/// Runs a storage operation on the blocking pool.
async fn with_store<T, F>(state: &AppState, op: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&BookStore) -> Result<T> + Send + 'static,
{
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(|err| LibraryError::Internal(format!("storage task failed: {}", err)))?
}

/// Handler for GET /items
///
/// Returns every stored book.
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<Book>>> {
    let books = with_store(&state, |store| store.list()).await?;
    Ok(Json(books))
}

/// Handler for GET /items/:id
pub async fn get_handler(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<Json<Book>> {
    let book = with_store(&state, move |store| store.get(id)).await?;
    Ok(Json(book))
}

/// Handler for POST /items
///
/// Creates a book and returns it with the assigned id.
pub async fn create_handler(
    State(state): State<AppState>,
    ValidBook(input): ValidBook,
) -> Result<Json<Book>> {
    let book = with_store(&state, move |store| store.create(&input)).await?;
    Ok(Json(book))
}

/// Handler for PUT /items/:id
///
/// Replaces all mutable fields of an existing book.
pub async fn update_handler(
    State(state): State<AppState>,
    BookId(id): BookId,
    ValidBook(input): ValidBook,
) -> Result<Json<Book>> {
    let book = with_store(&state, move |store| store.update(id, &input)).await?;
    Ok(Json(book))
}

/// Handler for DELETE /items/:id
pub async fn delete_handler(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> Result<Json<DeleteResponse>> {
    with_store(&state, move |store| store.delete(id)).await?;
    Ok(Json(DeleteResponse::deleted()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
