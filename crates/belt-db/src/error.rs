//! Database error types for belt-db.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The database could not be opened at all. Fatal at process start.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// An operation targeted a task id with no row behind it.
    #[error("Task {0} not found")]
    TaskNotFound(i64),

    /// An operation targeted a user id with no row behind it.
    #[error("User {0} not found")]
    UserNotFound(i64),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
