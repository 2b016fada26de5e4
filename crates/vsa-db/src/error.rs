//! Database error types for vsa-db.

use thiserror::Error;

/// Errors from record store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned malformed data.
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

    /// The caller tried to store something the schema does not allow.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The store directory could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
