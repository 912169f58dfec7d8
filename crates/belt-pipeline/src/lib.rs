//! # belt-pipeline
//!
//! The Taskbelt orchestrator. One run drives tasks through
//! FIFO intake → storage → priority scheduler → storage → undo history,
//! in that fixed order; see [`TaskPipeline`] for stage semantics.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{PersistOutcome, PipelineReport, RunReport, TaskPipeline, UndoOutcome};
