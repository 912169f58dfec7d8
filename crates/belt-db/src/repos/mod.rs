//! Repository modules implementing CRUD operations for the Taskbelt entities.
//!
//! Each module adds methods to [`BeltDb`] via `impl BeltDb` blocks.
//!
//! [`BeltDb`]: crate::BeltDb

pub mod task;
pub mod user;
