mod get;
mod list;
mod update;

use crate::cli::{GlobalFlags, TaskCommands};
use crate::context::AppContext;

pub async fn handle(
    action: TaskCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::List { status, limit } => list::run(status, limit, ctx, flags).await,
        TaskCommands::Get { id } => get::run(id, ctx, flags).await,
        TaskCommands::Update { id, status } => update::run(id, &status, ctx, flags).await,
    }
}
