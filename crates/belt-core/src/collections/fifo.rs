use std::collections::VecDeque;

use crate::errors::CoreError;

/// First-in-first-out queue backed by a ring buffer.
///
/// Holds newly captured tasks until the pipeline drains them into storage.
/// Insertion order is removal order; there is no reordering and no duplicate
/// detection.
#[derive(Debug)]
pub struct FifoQueue<T> {
    items: VecDeque<T>,
}

impl<T> FifoQueue<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append an item at the tail. O(1).
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove the head item and hand it to the caller. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyContainer`] when the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, CoreError> {
        self.items
            .pop_front()
            .ok_or(CoreError::EmptyContainer { container: "queue" })
    }

    /// Head item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
