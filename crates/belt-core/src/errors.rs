//! Cross-cutting error types for Taskbelt.
//!
//! This module defines errors that can originate from any crate in the system.
//! Domain-specific errors (e.g. `DatabaseError`, `ConfigError`) are defined in
//! their respective crates and converge into `anyhow` at the CLI.

use thiserror::Error;

/// Errors that can be raised by any Taskbelt crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A removal (dequeue, pop, peek, extract) was attempted on an empty
    /// container. Pipeline code checks emptiness first, so hitting this is a
    /// contract violation by the caller.
    #[error("Container '{container}' is empty")]
    EmptyContainer { container: &'static str },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: task {id} from {from} to {to}")]
    InvalidTransition {
        id: i64,
        from: String,
        to: String,
    },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
