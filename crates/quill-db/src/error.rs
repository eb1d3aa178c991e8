//! Database error types for quill-db.

use quill_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// An attribute assignment was rejected before any SQL ran.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// A UNIQUE constraint rejected the write.
    #[error("{table}.{column} must be unique: '{value}' already exists")]
    UniqueViolation {
        table: &'static str,
        column: &'static str,
        value: String,
    },

    /// A SQL query failed or returned data that could not be parsed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl DatabaseError {
    /// Map a write error to `UniqueViolation` when SQLite reports a UNIQUE
    /// constraint failure, otherwise wrap it unchanged.
    pub(crate) fn from_write(
        err: libsql::Error,
        table: &'static str,
        column: &'static str,
        value: &str,
    ) -> Self {
        if err.to_string().contains("UNIQUE constraint failed") {
            Self::UniqueViolation {
                table,
                column,
                value: value.to_string(),
            }
        } else {
            Self::LibSql(err)
        }
    }
}
