use crate::errors::CoreError;

/// Last-in-first-out stack.
///
/// Holds undo records for the current run; the most recently committed
/// mutation is the first one reverted.
#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Place an item on top. O(1).
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the top item and hand it to the caller. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyContainer`] when the stack is empty.
    pub fn pop(&mut self) -> Result<T, CoreError> {
        self.items
            .pop()
            .ok_or(CoreError::EmptyContainer { container: "stack" })
    }

    /// Top item without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyContainer`] when the stack is empty.
    pub fn peek(&self) -> Result<&T, CoreError> {
        self.items
            .last()
            .ok_or(CoreError::EmptyContainer { container: "stack" })
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

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_order_is_reverse_of_push_order() {
        let mut stack = Stack::new();
        for n in 1..=5 {
            stack.push(n);
        }
        let drained: Vec<i32> = std::iter::from_fn(|| stack.pop().ok()).collect();
        assert_eq!(drained, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn pop_and_peek_on_empty_are_errors() {
        let mut stack: Stack<i32> = Stack::new();
        assert!(matches!(
            stack.pop().unwrap_err(),
            CoreError::EmptyContainer { container: "stack" }
        ));
        assert!(matches!(
            stack.peek().unwrap_err(),
            CoreError::EmptyContainer { container: "stack" }
        ));
    }

    #[test]
    fn peek_returns_top_without_removing() {
        let mut stack = Stack::new();
        stack.push("bottom");
        stack.push("top");
        assert_eq!(stack.peek().unwrap(), &"top");
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop().unwrap(), "top");
        assert_eq!(stack.peek().unwrap(), &"bottom");
    }

    #[test]
    fn len_tracks_pushes_minus_pops() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.len(), 3);
        stack.pop().unwrap();
        assert_eq!(stack.len(), 2);
        assert!(!stack.is_empty());
    }
}
