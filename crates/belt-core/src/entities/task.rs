use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TaskStatus;
use crate::errors::CoreError;

/// A unit of work flowing through the pipeline, optionally assigned to a user.
///
/// `task_id` is [`Task::UNSAVED_ID`] until the first persistence write assigns
/// the row id; it is immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub task_id: i64,
    pub assignee_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: i64,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Row id of a task that has not been persisted yet. SQLite row ids start
    /// at 1, so 0 never collides with a real id.
    pub const UNSAVED_ID: i64 = 0;

    /// Highest urgency.
    pub const PRIORITY_MIN: i64 = 1;
    /// Lowest urgency.
    pub const PRIORITY_MAX: i64 = 5;
    pub const PRIORITY_DEFAULT: i64 = 3;

    /// Build an unsaved task with status `pending`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `title` is empty (or whitespace
    /// only) or `priority` falls outside `1..=5`.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        priority: i64,
        assignee_id: Option<i64>,
    ) -> Result<Self, CoreError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CoreError::Validation("task title must not be empty".into()));
        }
        if !(Self::PRIORITY_MIN..=Self::PRIORITY_MAX).contains(&priority) {
            return Err(CoreError::Validation(format!(
                "task priority must be between {} and {}, got {priority}",
                Self::PRIORITY_MIN,
                Self::PRIORITY_MAX
            )));
        }
        Ok(Self {
            task_id: Self::UNSAVED_ID,
            assignee_id,
            title,
            description,
            status: TaskStatus::Pending,
            priority,
            created_at: Utc::now(),
        })
    }

    /// Whether persistence has assigned this task a row id.
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        self.task_id != Self::UNSAVED_ID
    }
}
