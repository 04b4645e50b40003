//! Schema Module
//!
//! Idempotent creation of the `books` table.

use rusqlite::Connection;

/// DDL for the `books` table. Safe to run against an existing database.
pub const BOOKS_SCHEMA: &str = include_str!("schema.sql");

/// Creates the `books` table if it does not exist yet.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(BOOKS_SCHEMA)
}
