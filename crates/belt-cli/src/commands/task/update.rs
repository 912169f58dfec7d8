use belt_core::{CoreError, TaskStatus};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Move a task along the forward status path.
///
/// Only `pending -> in_progress` and `in_progress -> completed` are
/// allowed here. Reversals happen through `belt work --undo-last`,
/// which replays recorded transitions instead.
pub async fn run(
    id: i64,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let target: TaskStatus = parse_enum(status, "status")?;

    let task = ctx.db.get_task(id).await?;
    if !task.status.can_transition_to(target) {
        return Err(CoreError::InvalidTransition {
            id,
            from: task.status.to_string(),
            to: target.to_string(),
        }
        .into());
    }

    ctx.db.update_task_status(id, target).await?;
    let task = ctx.db.get_task(id).await?;
    output(&task, flags.format)
}
