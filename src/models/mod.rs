//! Record, request and response models for the library API
//!
//! This module defines the book record and the DTOs (Data Transfer Objects)
//! used for serializing/deserializing HTTP request and response bodies.

pub mod book;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use book::Book;
pub use requests::BookInput;
pub use responses::{DeleteResponse, ErrorResponse, HealthResponse};
