use clap::Subcommand;

/// User entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Create a user.
    Add { username: String },
    /// Get a user by id.
    Get { id: i64 },
    /// List users.
    List,
    /// Delete a user; their tasks keep running unassigned.
    Rm { id: i64 },
}
