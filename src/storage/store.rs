//! Book Store Module
//!
//! Executes parameterized CRUD statements against the `books` table.
//!
//! Every call opens a fresh connection, runs exactly one statement and, for
//! writes, commits a transaction. A transaction that is dropped without
//! `commit` rolls back, so a failed write never leaves partial state.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rusqlite::{ffi, params, Connection, ErrorCode, OptionalExtension, Row};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{LibraryError, Result};
use crate::models::{Book, BookInput};
use crate::storage::{init_schema, BOOK_COLUMNS};

// == Book Store ==
/// Handle to the SQLite database holding book records.
///
/// Cheap to clone; holds no open connection between operations.
#[derive(Debug, Clone)]
pub struct BookStore {
    /// Database file
    path: PathBuf,
    /// Time a connection waits on a locked database before failing
    busy_timeout: Duration,
}

impl BookStore {
    // == Constructor ==
    /// Opens the store at `path` and creates the schema if missing.
    ///
    /// # Arguments
    /// * `path` - SQLite database file, created if absent
    /// * `busy_timeout` - How long writers wait for a lock held by another connection
    pub fn open(path: impl Into<PathBuf>, busy_timeout: Duration) -> Result<Self> {
        let store = Self {
            path: path.into(),
            busy_timeout,
        };

        let started_at = Instant::now();
        let conn = store.connect()?;
        init_schema(&conn)?;
        info!(
            "Schema ready at {} in {}ms",
            store.path.display(),
            started_at.elapsed().as_millis()
        );

        Ok(store)
    }

    /// Opens the store described by the configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::open(
            config.database_path.clone(),
            Duration::from_millis(config.busy_timeout_ms),
        )
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // == Connection ==
    /// Opens a connection scoped to a single operation.
    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(self.busy_timeout)?;
        Ok(conn)
    }

    // == List ==
    /// Returns every book in the order SQLite yields them.
    pub fn list(&self) -> Result<Vec<Book>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!("SELECT {BOOK_COLUMNS} FROM books"))?;
        let books = stmt
            .query_map([], book_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!("Listed {} books", books.len());
        Ok(books)
    }

    // == Get ==
    /// Returns the book with the given id.
    ///
    /// Fails with `NotFound` if no row has that id.
    pub fn get(&self, id: i64) -> Result<Book> {
        let conn = self.connect()?;
        conn.query_row(
            &format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = ?1"),
            params![id],
            book_from_row,
        )
        .optional()?
        .ok_or(LibraryError::NotFound(id))
    }

    // == Create ==
    /// Inserts a new book and returns it with its assigned id.
    ///
    /// Fails with `Conflict` if the isbn is already taken.
    pub fn create(&self, input: &BookInput) -> Result<Book> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let book = tx
            .query_row(
                &format!(
                    "INSERT INTO books (title, author, publication_year, isbn)
                     VALUES (?1, ?2, ?3, ?4)
                     RETURNING {BOOK_COLUMNS}"
                ),
                params![
                    input.title,
                    input.author,
                    input.publication_year,
                    input.isbn
                ],
                book_from_row,
            )
            .map_err(write_error)?;

        tx.commit()?;
        debug!("Created book id={} isbn={}", book.id, book.isbn);
        Ok(book)
    }

    // == Update ==
    /// Replaces every mutable field of the book with the given id.
    ///
    /// Fails with `NotFound` if the id is absent and with `Conflict` if the
    /// new isbn belongs to another book.
    pub fn update(&self, id: i64, input: &BookInput) -> Result<Book> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let book = tx
            .query_row(
                &format!(
                    "UPDATE books
                     SET title = ?1, author = ?2, publication_year = ?3, isbn = ?4
                     WHERE id = ?5
                     RETURNING {BOOK_COLUMNS}"
                ),
                params![
                    input.title,
                    input.author,
                    input.publication_year,
                    input.isbn,
                    id
                ],
                book_from_row,
            )
            .optional()
            .map_err(write_error)?
            .ok_or(LibraryError::NotFound(id))?;

        tx.commit()?;
        debug!("Updated book id={}", book.id);
        Ok(book)
    }

    // == Delete ==
    /// Removes the book with the given id.
    ///
    /// Fails with `NotFound` if the id is absent.
    pub fn delete(&self, id: i64) -> Result<()> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        tx.query_row(
            "DELETE FROM books WHERE id = ?1 RETURNING id",
            params![id],
            |row| row.get::<_, i64>(0),
        )
        .optional()?
        .ok_or(LibraryError::NotFound(id))?;

        tx.commit()?;
        debug!("Deleted book id={}", id);
        Ok(())
    }

    // == Count ==
    /// Returns the number of stored books.
    pub fn count(&self) -> Result<u64> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }
}

// == Row Decoding ==
/// Decodes a row selected with `BOOK_COLUMNS`.
fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        publication_year: row.get(3)?,
        isbn: row.get(4)?,
    })
}

/// Maps a failed write, turning isbn uniqueness violations into `Conflict`.
fn write_error(err: rusqlite::Error) -> LibraryError {
    if let rusqlite::Error::SqliteFailure(failure, _) = &err {
        if failure.code == ErrorCode::ConstraintViolation
            && failure.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
        {
            return LibraryError::Conflict("ISBN already exists".to_string());
        }
    }
    LibraryError::Storage(err)
}
