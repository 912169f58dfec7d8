//! Task pipeline: capture → persist → schedule → execute → undo.
//!
//! Orchestrates one end-to-end run over the task containers and the database.
//! The stages, in fixed order:
//! 1. `submit` captures new tasks (unsaved, id 0) into the FIFO intake queue
//! 2. `persist_new` drains the intake queue into storage, collecting row ids
//! 3. `load_pending` pulls every pending row into the priority scheduler
//! 4. `run_scheduler` drains the scheduler in priority order, committing each
//!    task's status transitions and recording one undo action per started task
//! 5. `undo_last` (caller-invoked) reverts the most recently committed
//!    transition
//!
//! A single logical thread of control drives the whole run; every container is
//! drained to empty before the run ends. Per-task persistence failures are
//! logged and counted, never abort the surrounding drain.

use belt_core::{FifoQueue, PriorityQueue, Stack, Task, TaskStatus, UndoAction};
use belt_db::BeltDb;
use serde::Serialize;

use crate::error::PipelineError;

/// Pipeline over one database handle.
///
/// Owns the three in-memory containers; the intake queue holds each captured
/// task exclusively until `persist_new` moves it into storage, and the
/// scheduler holds each loaded task exclusively until `run_scheduler` moves it
/// into the execution frame.
pub struct TaskPipeline<'db> {
    db: &'db BeltDb,
    intake: FifoQueue<Task>,
    scheduler: PriorityQueue<Task>,
    history: Stack<UndoAction>,
}

/// Result of draining the intake queue into storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersistOutcome {
    /// Row ids assigned by storage, in submission order.
    pub saved: Vec<i64>,
    /// Tasks dropped from this run because their insert failed.
    pub failed: usize,
}

/// Result of draining the scheduler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Row ids completed, in execution order.
    pub completed: Vec<i64>,
    /// Tasks left at their last durable status after a failed write.
    pub skipped: usize,
}

/// Merged counts for a full `run()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    pub persisted: usize,
    pub persist_failed: usize,
    pub loaded: usize,
    pub completed: usize,
    pub skipped: usize,
}

/// What `undo_last` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UndoOutcome {
    /// The most recent transition was written back.
    Reverted { task_id: i64, restored: TaskStatus },
    /// The history was empty; durable state untouched.
    NothingToUndo,
}

impl<'db> TaskPipeline<'db> {
    #[must_use]
    pub fn new(db: &'db BeltDb) -> Self {
        Self {
            db,
            intake: FifoQueue::new(),
            scheduler: PriorityQueue::new(),
            history: Stack::new(),
        }
    }

    /// Capture a new task into the intake queue.
    ///
    /// The task is constructed unsaved (id 0, status `pending`) and held in
    /// memory until `persist_new` drains the queue.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Core`] when the title is empty or the
    /// priority falls outside `1..=5`.
    pub fn submit(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        priority: i64,
        assignee_id: Option<i64>,
    ) -> Result<(), PipelineError> {
        let task = Task::new(title, description, priority, assignee_id)?;
        tracing::debug!(title = %task.title, priority = task.priority, "task captured");
        self.intake.enqueue(task);
        Ok(())
    }

    /// Number of captured tasks not yet persisted.
    #[must_use]
    pub fn queued(&self) -> usize {
        self.intake.len()
    }

    /// Number of undo records held from this run.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Drain the intake queue into storage.
    ///
    /// Each dequeued task moves into `create_task`; only the assigned row id
    /// is kept. A failed insert drops that task from the run (logged and
    /// counted) and the drain continues with the next one.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Core`] only on a container contract
    /// violation, which the emptiness check rules out.
    pub async fn persist_new(&mut self) -> Result<PersistOutcome, PipelineError> {
        let mut outcome = PersistOutcome::default();
        while !self.intake.is_empty() {
            let task = self.intake.dequeue()?;
            match self.db.create_task(task).await {
                Ok(saved) => {
                    tracing::debug!(task_id = saved.task_id, "task persisted");
                    outcome.saved.push(saved.task_id);
                }
                Err(error) => {
                    tracing::warn!(%error, "task insert failed; dropped from this run");
                    outcome.failed += 1;
                }
            }
        }
        Ok(outcome)
    }

    /// Load every pending row into the priority scheduler.
    ///
    /// Storage returns rows ordered by (priority, created_at, task_id);
    /// inserting in that order is what makes equal priorities come back out
    /// in creation order, since the scheduler breaks ties by insertion.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Database`] when the query fails.
    pub async fn load_pending(&mut self) -> Result<usize, PipelineError> {
        let tasks = self.db.pending_tasks_by_priority().await?;
        let loaded = tasks.len();
        for task in tasks {
            let key = task.priority;
            self.scheduler.insert(task, key);
        }
        tracing::debug!(loaded, "pending tasks scheduled");
        Ok(loaded)
    }

    /// Drain the scheduler, executing tasks in priority order.
    ///
    /// Each extracted task moves through `pending → in_progress → completed`,
    /// with one undo record pushed after the first write commits. If the
    /// `in_progress` write fails the task is abandoned: no undo record, no
    /// completion attempt, the drain moves on. If the completion write fails
    /// the task stays `in_progress` durably and its undo record stands.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Core`] only on a container contract
    /// violation, which the emptiness check rules out.
    pub async fn run_scheduler(&mut self) -> Result<RunReport, PipelineError> {
        let mut report = RunReport::default();
        while !self.scheduler.is_empty() {
            let task = self.scheduler.extract_min()?;

            let previous = match self
                .db
                .update_task_status(task.task_id, TaskStatus::InProgress)
                .await
            {
                Ok(previous) => previous,
                Err(error) => {
                    tracing::warn!(
                        task_id = task.task_id,
                        %error,
                        "start transition failed; task abandoned for this run"
                    );
                    report.skipped += 1;
                    continue;
                }
            };
            self.history.push(UndoAction::UpdateStatus {
                task_id: task.task_id,
                previous,
            });

            match self
                .db
                .update_task_status(task.task_id, TaskStatus::Completed)
                .await
            {
                Ok(_) => {
                    tracing::info!(task_id = task.task_id, "task completed");
                    report.completed.push(task.task_id);
                }
                Err(error) => {
                    tracing::warn!(
                        task_id = task.task_id,
                        %error,
                        "completion failed; task left in progress"
                    );
                    report.skipped += 1;
                }
            }
            // task dropped here: once durable, nothing in memory owns it
        }
        Ok(report)
    }

    /// Revert the most recently committed transition.
    ///
    /// An empty history is a no-op, reported as [`UndoOutcome::NothingToUndo`]
    /// rather than an error. There is no redo: the popped record is consumed
    /// even when the revert write fails.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Database`] when the revert write fails.
    pub async fn undo_last(&mut self) -> Result<UndoOutcome, PipelineError> {
        if self.history.is_empty() {
            tracing::debug!("nothing to undo");
            return Ok(UndoOutcome::NothingToUndo);
        }
        let action = self.history.pop()?;
        match action {
            UndoAction::UpdateStatus { task_id, previous } => {
                self.db.update_task_status(task_id, previous).await?;
                tracing::info!(task_id, restored = %previous, "transition reverted");
                Ok(UndoOutcome::Reverted {
                    task_id,
                    restored: previous,
                })
            }
        }
    }

    /// Execute a full run: persist captured tasks, load pending rows, drain
    /// the scheduler, and merge the stage counts.
    ///
    /// A failed pending load leaves the scheduler empty and the run still
    /// completes with what it has.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Core`] only on a container contract
    /// violation, which the emptiness checks rule out.
    pub async fn run(&mut self) -> Result<PipelineReport, PipelineError> {
        let persist = self.persist_new().await?;

        let loaded = match self.load_pending().await {
            Ok(loaded) => loaded,
            Err(error) => {
                tracing::warn!(%error, "pending load failed; nothing scheduled this run");
                0
            }
        };

        let run = self.run_scheduler().await?;

        Ok(PipelineReport {
            persisted: persist.saved.len(),
            persist_failed: persist.failed,
            loaded,
            completed: run.completed.len(),
            skipped: run.skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use belt_core::CoreError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    async fn memory_db() -> BeltDb {
        BeltDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn submit_rejects_invalid_fields() {
        let db = memory_db().await;
        let mut pipeline = TaskPipeline::new(&db);

        let empty_title = pipeline.submit("   ", None, 3, None);
        assert!(matches!(
            empty_title,
            Err(PipelineError::Core(CoreError::Validation(_)))
        ));

        let bad_priority = pipeline.submit("Valid title", None, 0, None);
        assert!(matches!(
            bad_priority,
            Err(PipelineError::Core(CoreError::Validation(_)))
        ));

        assert_eq!(pipeline.queued(), 0);
    }

    #[tokio::test]
    async fn submit_counts_queued_tasks() {
        let db = memory_db().await;
        let mut pipeline = TaskPipeline::new(&db);

        pipeline.submit("First", None, 3, None).unwrap();
        pipeline.submit("Second", None, 1, None).unwrap();
        assert_eq!(pipeline.queued(), 2);
        assert_eq!(pipeline.undo_depth(), 0);
    }

    #[tokio::test]
    async fn persist_new_drains_intake_in_submission_order() {
        let db = memory_db().await;
        let mut pipeline = TaskPipeline::new(&db);

        pipeline.submit("First", None, 5, None).unwrap();
        pipeline.submit("Second", None, 1, None).unwrap();

        let outcome = pipeline.persist_new().await.unwrap();
        assert_eq!(pipeline.queued(), 0);
        assert_eq!(outcome.failed, 0);
        assert_eq!(outcome.saved.len(), 2);
        // Submission order, not priority order: the intake queue is FIFO.
        assert!(outcome.saved[0] < outcome.saved[1]);

        let first = db.get_task(outcome.saved[0]).await.unwrap();
        assert_eq!(first.title, "First");
    }

    #[test]
    fn undo_outcome_serializes_snake_case() {
        let nothing = serde_json::to_value(UndoOutcome::NothingToUndo).unwrap();
        assert_eq!(nothing, json!("nothing_to_undo"));

        let reverted = serde_json::to_value(UndoOutcome::Reverted {
            task_id: 3,
            restored: TaskStatus::Pending,
        })
        .unwrap();
        assert_eq!(
            reverted,
            json!({"reverted": {"task_id": 3, "restored": "pending"}})
        );
    }
}
