//! Library API - A small book-record service
//!
//! Exposes create/read/update/delete operations on book records over HTTP,
//! persisted in a single SQLite table.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use api::AppState;
pub use config::Config;
pub use error::LibraryError;
pub use storage::BookStore;
