//! Generic in-memory containers for the pipeline stages.
//!
//! All three containers move their payloads: removal transfers ownership of
//! the stored value to the caller. Removing from an empty container returns
//! [`CoreError::EmptyContainer`]; pipeline code checks `is_empty()` before
//! every removal, so the error marks a caller bug rather than normal flow.
//!
//! [`CoreError::EmptyContainer`]: crate::errors::CoreError::EmptyContainer

mod fifo;
mod priority;
mod stack;

pub use fifo::FifoQueue;
pub use priority::PriorityQueue;
pub use stack::Stack;
