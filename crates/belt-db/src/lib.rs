//! # belt-db
//!
//! libSQL database operations for Taskbelt state management.
//!
//! Handles all relational state: tasks flowing through the pipeline and the
//! users they can be assigned to. Storage is a local libSQL file (`:memory:`
//! for tests); the schema is migrated automatically on open.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29): stable API,
//! per-connection PRAGMAs, scoped transactions for read-then-write updates.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Taskbelt state operations.
///
/// Wraps a libSQL database and connection. Repository methods live in
/// [`repos`] as `impl` blocks on this handle.
pub struct BeltDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl BeltDb {
    /// Open a local database at the given path (`:memory:` for ephemeral).
    ///
    /// Runs migrations automatically on every open.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Unavailable`] if the database cannot be opened
    /// or connected, and [`DatabaseError::Migration`] if the schema cannot be
    /// applied.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path)
            .build()
            .await
            .map_err(|e| DatabaseError::Unavailable(format!("open '{path}': {e}")))?;
        let conn = db
            .connect()
            .map_err(|e| DatabaseError::Unavailable(format!("connect '{path}': {e}")))?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let belt_db = Self { db, conn };
        belt_db.run_migrations().await?;
        tracing::debug!(path, "database opened and migrated");
        Ok(belt_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
