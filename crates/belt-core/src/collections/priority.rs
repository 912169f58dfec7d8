use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::errors::CoreError;

/// Wrapper for heap ordering (min by key, then by insertion sequence).
#[derive(Debug)]
struct HeapEntry<T> {
    key: i64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smaller key first, then lower sequence (earlier insert). Comparisons
        // are reversed because BinaryHeap is a max-heap.
        match other.key.cmp(&self.key) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            ordering => ordering,
        }
    }
}

/// Min-priority queue with insertion-order tie-break.
///
/// A plain binary heap is not stable, so every entry carries a monotonically
/// increasing sequence number: among equal keys, the earliest inserted item is
/// extracted first. Scheduling stays deterministic and fair regardless of how
/// the heap rebalances.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<HeapEntry<T>>,
    next_seq: u64,
}

impl<T> PriorityQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Add an item under an integer priority key. O(log n).
    pub fn insert(&mut self, item: T, key: i64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(HeapEntry { key, seq, item });
    }

    /// Remove the item with the smallest key and hand it to the caller;
    /// equal keys come out in insertion order. O(log n).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyContainer`] when the queue is empty.
    pub fn extract_min(&mut self) -> Result<T, CoreError> {
        self.heap.pop().map(|entry| entry.item).ok_or(
            CoreError::EmptyContainer {
                container: "priority queue",
            },
        )
    }

    /// Item with the smallest key without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<&T> {
        self.heap.peek().map(|entry| &entry.item)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_non_decreasing_key_order() {
        let mut queue = PriorityQueue::new();
        for (name, key) in [("d", 4), ("a", 1), ("e", 5), ("b", 2), ("c", 3)] {
            queue.insert(name, key);
        }
        let drained: Vec<&str> = std::iter::from_fn(|| queue.extract_min().ok()).collect();
        assert_eq!(drained, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn equal_keys_extract_in_insertion_order() {
        let mut queue = PriorityQueue::new();
        queue.insert("first", 2);
        queue.insert("second", 2);
        queue.insert("third", 2);
        assert_eq!(queue.extract_min().unwrap(), "first");
        assert_eq!(queue.extract_min().unwrap(), "second");
        assert_eq!(queue.extract_min().unwrap(), "third");
    }

    #[test]
    fn tie_break_applies_within_mixed_keys() {
        let mut queue = PriorityQueue::new();
        for (name, key) in [
            ("urgent-early", 1),
            ("normal", 2),
            ("low", 4),
            ("lowest", 5),
            ("urgent-late", 1),
        ] {
            queue.insert(name, key);
        }
        assert_eq!(queue.extract_min().unwrap(), "urgent-early");
        assert_eq!(queue.extract_min().unwrap(), "urgent-late");
        assert_eq!(queue.extract_min().unwrap(), "normal");
    }

    #[test]
    fn extract_on_empty_is_an_error() {
        let mut queue: PriorityQueue<i32> = PriorityQueue::new();
        assert!(matches!(
            queue.extract_min().unwrap_err(),
            CoreError::EmptyContainer {
                container: "priority queue"
            }
        ));
    }

    #[test]
    fn interleaved_inserts_keep_ordering() {
        let mut queue = PriorityQueue::new();
        queue.insert("b1", 2);
        queue.insert("a1", 1);
        assert_eq!(queue.extract_min().unwrap(), "a1");
        queue.insert("a2", 1);
        queue.insert("c1", 3);
        assert_eq!(queue.extract_min().unwrap(), "a2");
        assert_eq!(queue.extract_min().unwrap(), "b1");
        assert_eq!(queue.extract_min().unwrap(), "c1");
        assert!(queue.is_empty());
    }

    #[test]
    fn peek_min_does_not_remove() {
        let mut queue = PriorityQueue::new();
        queue.insert("only", 3);
        assert_eq!(queue.peek_min(), Some(&"only"));
        assert_eq!(queue.len(), 1);
    }
}
