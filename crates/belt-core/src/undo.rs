//! Undo records for reversible pipeline mutations.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::TaskStatus;

/// A single reversible mutation, captured at the moment the forward change
/// was durably committed.
///
/// Each variant carries exactly the fields its reversal needs, so a record
/// missing required data cannot be constructed. The only kind so far is a
/// status rollback; applying it consumes the record (no redo).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UndoAction {
    /// Restore `task_id` to the status it had before an update.
    UpdateStatus { task_id: i64, previous: TaskStatus },
}

impl UndoAction {
    /// Stable name of the action kind, as used in serialized form.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UpdateStatus { .. } => "update_status",
        }
    }
}

impl fmt::Display for UndoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpdateStatus { task_id, previous } => {
                write!(f, "update_status: task {task_id} back to {previous}")
            }
        }
    }
}
