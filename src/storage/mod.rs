//! Storage Module
//!
//! SQLite persistence for book records. Each operation runs on its own
//! connection inside its own transaction.

mod schema;
mod store;


// Re-export public types
pub use schema::{init_schema, BOOKS_SCHEMA};
pub use store::BookStore;

// == Public Constants ==
/// Columns selected for every book read, in decoding order
pub const BOOK_COLUMNS: &str = "id, title, author, publication_year, isbn";
