//! Bounded FIFO used for the on-screen packet list

use std::collections::VecDeque;

/// A fixed-capacity buffer that evicts the oldest entry when full.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    buf: VecDeque<T>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    /// Create a new ring buffer with the given capacity (at least 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buf: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a value, evicting the oldest if at capacity.
    pub fn push(&mut self, value: T) {
        if self.buf.len() == self.capacity {
            self.buf.pop_front();
        }
        self.buf.push_back(value);
    }

    /// Keep only the items matching `keep`, preserving order.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.buf.retain(keep);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Iterate over items from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_overflow_evicts_oldest() {
        let mut buf = RingBuffer::new(3);
        for i in 1..=4 {
            buf.push(i);
        }
        assert_eq!(buf.len(), 3);
        let items: Vec<_> = buf.iter().copied().collect();
        assert_eq!(items, vec![2, 3, 4]);
    }

    #[test]
    fn test_ring_buffer_retain_keeps_order() {
        let mut buf = RingBuffer::new(5);
        for i in 1..=5 {
            buf.push(i);
        }
        buf.retain(|v| v % 2 == 1);
        let items: Vec<_> = buf.iter().copied().collect();
        assert_eq!(items, vec![1, 3, 5]);

        // Freed slots are reusable without eviction
        buf.push(6);
        buf.push(7);
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.iter().next(), Some(&1));
    }

    #[test]
    fn test_ring_buffer_zero_capacity_is_clamped() {
        let mut buf = RingBuffer::new(0);
        assert!(buf.is_empty());
        buf.push('a');
        buf.push('b');
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.iter().next(), Some(&'b'));
    }
}
