mod add;
mod get;
mod list;
mod rm;

use crate::cli::{GlobalFlags, UserCommands};
use crate::context::AppContext;

pub async fn handle(
    action: UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::Add { username } => add::run(&username, ctx, flags).await,
        UserCommands::Get { id } => get::run(id, ctx, flags).await,
        UserCommands::List => list::run(ctx, flags).await,
        UserCommands::Rm { id } => rm::run(id, ctx, flags).await,
    }
}
