//! Pipeline error types.

use belt_core::CoreError;
use belt_db::error::DatabaseError;
use thiserror::Error;

/// Errors surfaced by pipeline orchestration.
///
/// Per-task persistence failures inside a drain loop are logged and counted,
/// not raised; this enum covers the calls where an error stops the operation
/// itself (standalone gateway calls and container contract violations).
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}
