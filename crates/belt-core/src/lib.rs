//! # belt-core
//!
//! Core types, containers, and error types for Taskbelt.
//!
//! This crate provides the foundational pieces shared across all Taskbelt crates:
//! - Entity structs for the domain objects (tasks, users)
//! - Status enums with state machine transitions
//! - The undo action record for reversible mutations
//! - Generic pipeline containers (FIFO queue, LIFO stack, stable min-priority queue)
//! - Cross-cutting error types

pub mod collections;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod undo;

pub use collections::{FifoQueue, PriorityQueue, Stack};
pub use entities::{Task, User};
pub use enums::TaskStatus;
pub use errors::CoreError;
pub use undo::UndoAction;
