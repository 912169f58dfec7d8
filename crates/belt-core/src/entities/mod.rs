//! Entity structs for the Taskbelt domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod task;
mod user;

pub use task::Task;
pub use user::User;
