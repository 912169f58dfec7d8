//! Task repository: create, pending-queue loads, status updates.

use belt_core::{Task, TaskStatus};

use crate::BeltDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum};

const SELECT_COLS: &str =
    "task_id, assignee_id, title, description, status, priority, created_at";

fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    Ok(Task {
        task_id: row.get(0)?,
        assignee_id: row.get::<Option<i64>>(1)?,
        title: row.get(2)?,
        description: get_opt_string(row, 3)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        priority: row.get(5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl BeltDb {
    /// Insert a task and return it with its generated row id filled in.
    /// Consumes the unsaved value; after this call the row is the task.
    pub async fn create_task(&self, task: Task) -> Result<Task, DatabaseError> {
        self.conn
            .execute(
                "INSERT INTO tasks (assignee_id, title, description, status, priority, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    task.assignee_id,
                    task.title.as_str(),
                    task.description.as_deref(),
                    task.status.as_str(),
                    task.priority,
                    task.created_at.to_rfc3339()
                ],
            )
            .await?;

        let task_id = self.conn.last_insert_rowid();
        Ok(Task { task_id, ..task })
    }

    pub async fn get_task(&self, task_id: i64) -> Result<Task, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {SELECT_COLS} FROM tasks WHERE task_id = ?1"),
                [task_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or(DatabaseError::TaskNotFound(task_id))?;
        row_to_task(&row)
    }

    /// All `pending` rows, ordered by (priority asc, created_at asc, task_id
    /// asc). The trailing id key keeps the order total when timestamps tie,
    /// so equal-priority tasks always load in creation order.
    pub async fn pending_tasks_by_priority(&self) -> Result<Vec<Task>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM tasks WHERE status = ?1
                     ORDER BY priority, created_at, task_id"
                ),
                [TaskStatus::Pending.as_str()],
            )
            .await?;

        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }

    /// Set a task's status and return the status it had before.
    ///
    /// The read and the write run inside one transaction: no reader can
    /// observe the row between the two, and any failure rolls the unit of
    /// work back with the row unchanged.
    ///
    /// Deliberately does not consult the forward transition table: undo
    /// legitimately writes `completed` back to `pending`. Callers that only
    /// want forward moves check `can_transition_to` first.
    pub async fn update_task_status(
        &self,
        task_id: i64,
        new_status: TaskStatus,
    ) -> Result<TaskStatus, DatabaseError> {
        let tx = self.conn.transaction().await?;

        let mut rows = tx
            .query("SELECT status FROM tasks WHERE task_id = ?1", [task_id])
            .await?;
        let Some(row) = rows.next().await? else {
            tx.rollback().await?;
            return Err(DatabaseError::TaskNotFound(task_id));
        };
        let previous: TaskStatus = parse_enum(&row.get::<String>(0)?)?;

        // An error from here on drops the transaction uncommitted, which
        // rolls it back.
        tx.execute(
            "UPDATE tasks SET status = ?1 WHERE task_id = ?2",
            libsql::params![new_status.as_str(), task_id],
        )
        .await?;
        tx.commit().await?;

        Ok(previous)
    }

    pub async fn list_tasks(
        &self,
        status: Option<TaskStatus>,
        limit: u32,
    ) -> Result<Vec<Task>, DatabaseError> {
        let mut rows = match status {
            Some(status) => {
                self.conn
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM tasks WHERE status = ?1
                             ORDER BY priority, created_at, task_id LIMIT {limit}"
                        ),
                        [status.as_str()],
                    )
                    .await?
            }
            None => {
                self.conn
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM tasks
                             ORDER BY priority, created_at, task_id LIMIT {limit}"
                        ),
                        (),
                    )
                    .await?
            }
        };

        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }
}
