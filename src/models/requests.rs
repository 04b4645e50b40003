//! Request DTOs for the library API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for create (POST /items) and update (PUT /items/:id)
///
/// Every field is required. The id is never accepted from the client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub publication_year: i64,
    pub isbn: String,
}

impl BookInput {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.trim().is_empty() {
            return Some("title must not be empty".to_string());
        }
        if self.author.trim().is_empty() {
            return Some("author must not be empty".to_string());
        }
        if self.isbn.trim().is_empty() {
            return Some("isbn must not be empty".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_input_deserialize() {
        let json = r#"{"title": "Dune", "author": "Herbert", "publication_year": 1965, "isbn": "123"}"#;
        let req: BookInput = serde_json::from_str(json).unwrap();
        assert_eq!(req.title, "Dune");
        assert_eq!(req.author, "Herbert");
        assert_eq!(req.publication_year, 1965);
        assert_eq!(req.isbn, "123");
    }

    #[test]
    fn test_book_input_ignores_client_id() {
        let json = r#"{"id": 5, "title": "Dune", "author": "Herbert", "publication_year": 1965, "isbn": "123"}"#;
        let req: BookInput = serde_json::from_str(json).unwrap();
        assert_eq!(req.isbn, "123");
    }

    #[test]
    fn test_book_input_missing_field() {
        let json = r#"{"title": "Dune", "author": "Herbert", "isbn": "123"}"#;
        assert!(serde_json::from_str::<BookInput>(json).is_err());
    }

    #[test]
    fn test_book_input_mistyped_year() {
        let json = r#"{"title": "Dune", "author": "Herbert", "publication_year": "soon", "isbn": "123"}"#;
        assert!(serde_json::from_str::<BookInput>(json).is_err());
    }

    #[test]
    fn test_validate_empty_title() {
        let req = BookInput {
            title: "  ".to_string(),
            author: "Herbert".to_string(),
            publication_year: 1965,
            isbn: "123".to_string(),
        };
        assert_eq!(req.validate().as_deref(), Some("title must not be empty"));
    }

    #[test]
    fn test_validate_empty_author() {
        let req = BookInput {
            title: "Dune".to_string(),
            author: "".to_string(),
            publication_year: 1965,
            isbn: "123".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        let req = BookInput {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            publication_year: 1965,
            isbn: "123".to_string(),
        };
        assert!(req.validate().is_none());
    }
}
