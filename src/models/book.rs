//! Book record
//!
//! The single entity persisted by the service.

use serde::{Deserialize, Serialize};

use super::BookInput;

/// A stored book, as returned by every read and write endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Server-assigned identifier, immutable once created
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publication_year: i64,
    /// Globally unique
    pub isbn: String,
}

impl Book {
    /// Attaches an id to the given input fields.
    pub fn from_input(id: i64, input: BookInput) -> Self {
        Self {
            id,
            title: input.title,
            author: input.author,
            publication_year: input.publication_year,
            isbn: input.isbn,
        }
    }

    /// Returns true if every mutable field equals the input.
    pub fn matches(&self, input: &BookInput) -> bool {
        self.title == input.title
            && self.author == input.author
            && self.publication_year == input.publication_year
            && self.isbn == input.isbn
    }
}
