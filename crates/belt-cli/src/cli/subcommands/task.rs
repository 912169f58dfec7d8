use clap::Subcommand;

/// Task entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// List tasks.
    List {
        /// Filter by status (pending, in_progress, completed).
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a task by id.
    Get { id: i64 },
    /// Move a task's status forward along the allowed transitions.
    Update {
        id: i64,
        #[arg(long)]
        status: String,
    },
}
