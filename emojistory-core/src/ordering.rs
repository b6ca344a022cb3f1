//! Reordering of completions that arrive out of sequence.

use std::collections::BTreeMap;

/// Holds completed items until every earlier sequence number has arrived.
///
/// Sequence numbers start at 0. Items come out of [`ReorderBuffer::pop_ready`]
/// strictly in sequence order, regardless of the order they were pushed in.
#[derive(Debug)]
pub struct ReorderBuffer<T> {
    next: u64,
    waiting: BTreeMap<u64, T>,
}

impl<T> Default for ReorderBuffer<T> {
    fn default() -> Self {
        Self {
            next: 0,
            waiting: BTreeMap::new(),
        }
    }
}

impl<T> ReorderBuffer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an item under its sequence number.
    ///
    /// Returns false (and drops the item) if `seq` was already released or is
    /// already waiting.
    pub fn push(&mut self, seq: u64, item: T) -> bool {
        if seq < self.next || self.waiting.contains_key(&seq) {
            return false;
        }
        self.waiting.insert(seq, item);
        true
    }

    /// Release the next item if it has arrived.
    pub fn pop_ready(&mut self) -> Option<T> {
        let item = self.waiting.remove(&self.next)?;
        self.next += 1;
        Some(item)
    }

    /// Release every item that is now in order.
    pub fn drain_ready(&mut self) -> Vec<T> {
        std::iter::from_fn(|| self.pop_ready()).collect()
    }

    /// Sequence number the buffer is waiting for.
    pub fn next_seq(&self) -> u64 {
        self.next
    }

    /// Number of items held back behind a gap.
    pub fn waiting(&self) -> usize {
        self.waiting.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order() {
        let mut buf = ReorderBuffer::new();
        assert!(buf.push(0, "fire"));
        assert_eq!(buf.drain_ready(), vec!["fire"]);
        assert!(buf.push(1, "ice"));
        assert_eq!(buf.drain_ready(), vec!["ice"]);
        assert_eq!(buf.next_seq(), 2);
    }

    #[test]
    fn test_holds_back_until_gap_fills() {
        let mut buf = ReorderBuffer::new();
        assert!(buf.push(1, "ice"));
        assert!(buf.push(2, "water"));
        assert!(buf.drain_ready().is_empty());
        assert_eq!(buf.waiting(), 2);

        assert!(buf.push(0, "fire"));
        assert_eq!(buf.drain_ready(), vec!["fire", "ice", "water"]);
        assert_eq!(buf.waiting(), 0);
    }

    #[test]
    fn test_rejects_duplicates_and_stale() {
        let mut buf = ReorderBuffer::new();
        assert!(buf.push(0, 'a'));
        assert_eq!(buf.pop_ready(), Some('a'));

        assert!(!buf.push(0, 'b'), "already released");
        assert!(buf.push(2, 'c'));
        assert!(!buf.push(2, 'd'), "already waiting");
        assert_eq!(buf.pop_ready(), None);
    }
}
