mod task;
mod user;

pub use task::TaskCommands;
pub use user::UserCommands;
