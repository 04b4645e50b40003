//! API Module
//!
//! HTTP handlers, extractors and routing for the library REST API.
//!
//! # Endpoints
//! - `GET /items` - List all books
//! - `POST /items` - Create a book
//! - `GET /items/:id` - Retrieve a book by id
//! - `PUT /items/:id` - Replace a book's fields
//! - `DELETE /items/:id` - Delete a book
//! - `GET /health` - Health check endpoint

pub mod extractors;
pub mod handlers;
pub mod routes;

pub use extractors::{BookId, ValidBook};
pub use handlers::*;
pub use routes::create_router;
