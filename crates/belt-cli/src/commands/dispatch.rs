use crate::cli::{Commands, GlobalFlags};
use crate::commands::{add, task, user, work};
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Add(args) => add::run(args, ctx, flags).await,
        Commands::Work(args) => work::run(args, ctx, flags).await,
        Commands::Task { action } => task::handle(action, ctx, flags).await,
        Commands::User { action } => user::handle(action, ctx, flags).await,
    }
}
