use clap::{Args, Subcommand};

use crate::cli::subcommands::{TaskCommands, UserCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Capture a task and persist it.
    Add(AddArgs),
    /// Run the pipeline over all pending tasks.
    Work(WorkArgs),
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Users.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}

/// Arguments for `belt add`.
#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    /// Task title.
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Priority 1 (highest) to 5 (lowest); defaults from configuration.
    #[arg(long)]
    pub priority: Option<i64>,
    /// Assignee user id.
    #[arg(long)]
    pub assignee: Option<i64>,
}

/// Arguments for `belt work`.
#[derive(Clone, Debug, Args)]
pub struct WorkArgs {
    /// Revert the most recent status transition after the run.
    #[arg(long)]
    pub undo_last: bool,
}
