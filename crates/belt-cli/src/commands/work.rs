use belt_pipeline::{PipelineReport, TaskPipeline, UndoOutcome};
use serde::Serialize;

use crate::cli::{GlobalFlags, WorkArgs};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct WorkResponse {
    #[serde(flatten)]
    report: PipelineReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    undo: Option<UndoOutcome>,
}

/// Drain pending tasks through the scheduler, optionally undoing the
/// last transition afterwards.
pub async fn run(args: WorkArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut pipeline = TaskPipeline::new(&ctx.db);
    let report = pipeline.run().await?;

    let undo = if args.undo_last {
        Some(pipeline.undo_last().await?)
    } else {
        None
    };

    output(&WorkResponse { report, undo }, flags.format)
}
