use belt_pipeline::TaskPipeline;

use crate::cli::{AddArgs, GlobalFlags};
use crate::context::AppContext;
use crate::output::output;

/// Capture a new task and persist it immediately.
pub async fn run(args: AddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let priority = args
        .priority
        .unwrap_or(ctx.config.general.default_priority);

    let mut pipeline = TaskPipeline::new(&ctx.db);
    pipeline.submit(args.title, args.description, priority, args.assignee)?;
    let outcome = pipeline.persist_new().await?;

    let Some(&task_id) = outcome.saved.first() else {
        anyhow::bail!("task was not saved (storage rejected the insert)");
    };

    let task = ctx.db.get_task(task_id).await?;
    output(&task, flags.format)
}
