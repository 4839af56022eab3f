//! Fixed-capacity FIFO ring buffer
//!
//! Storage is a plain array of `N` slots that is never resized. The live
//! elements occupy `[head, head + len)` modulo `N`; `tail` always points one
//! past the newest element, so a full queue has `tail == head`.

use crate::error::{ActionError, Container};

/// Bounded circular queue of upcoming pieces
#[derive(Debug, Clone)]
pub struct BoundedQueue<T, const N: usize> {
    slots: [Option<T>; N],
    /// Index of the oldest element
    head: usize,
    /// Index one past the newest element
    tail: usize,
    /// Number of live elements
    count: usize,
}

impl<T, const N: usize> Default for BoundedQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> BoundedQueue<T, N> {
    /// Create an empty queue
    pub fn new() -> Self {
        const { assert!(N > 0, "queue capacity must be positive") };
        Self {
            slots: std::array::from_fn(|_| None),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Append at the back. Fails without touching anything when full.
    pub fn enqueue(&mut self, item: T) -> Result<(), ActionError> {
        if self.count == N {
            return Err(ActionError::Full(Container::Queue));
        }
        self.slots[self.tail] = Some(item);
        self.tail = (self.tail + 1) % N;
        self.count += 1;
        Ok(())
    }

    /// Remove from the front
    pub fn dequeue(&mut self) -> Result<T, ActionError> {
        if self.count == 0 {
            return Err(ActionError::Empty(Container::Queue));
        }
        let item = self.slots[self.head]
            .take()
            .ok_or(ActionError::Empty(Container::Queue))?;
        self.head = (self.head + 1) % N;
        self.count -= 1;
        Ok(item)
    }

    /// Look at the front element without removing it
    pub fn peek_front(&self) -> Result<&T, ActionError> {
        self.get(0).ok_or(ActionError::Empty(Container::Queue))
    }

    /// The `i`-th element counting from the front
    pub fn get(&self, i: usize) -> Option<&T> {
        if i >= self.count {
            return None;
        }
        self.slots[self.slot_index(i)].as_ref()
    }

    /// Mutable access to the `i`-th element counting from the front
    pub(crate) fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i >= self.count {
            return None;
        }
        let idx = self.slot_index(i);
        self.slots[idx].as_mut()
    }

    /// Physical slot of the `i`-th logical element
    fn slot_index(&self, i: usize) -> usize {
        (self.head + i) % N
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == N
    }

    pub fn capacity(&self) -> usize {
        N
    }

    /// Physical index of the front slot
    pub fn head(&self) -> usize {
        self.head
    }

    /// Physical index one past the back slot
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Iterate front to back. Borrowing, so it can be restarted at will.
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            queue: self,
            pos: 0,
        }
    }

    /// Copy the live elements out in logical order
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// Front-to-back iterator over a [`BoundedQueue`]
pub struct Iter<'a, T, const N: usize> {
    queue: &'a BoundedQueue<T, N>,
    pos: usize,
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.queue.get(self.pos)?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len().saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedQueue<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut queue: BoundedQueue<u32, 5> = BoundedQueue::new();
        queue.enqueue(9).unwrap();
        assert_eq!(queue.dequeue(), Ok(9));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_fifo_order() {
        let mut queue: BoundedQueue<u32, 5> = BoundedQueue::new();
        for id in 0..3 {
            queue.enqueue(id).unwrap();
        }
        assert_eq!(queue.dequeue(), Ok(0));
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
    }

    #[test]
    fn test_full_and_empty_errors() {
        let mut queue: BoundedQueue<u32, 2> = BoundedQueue::new();
        assert_eq!(queue.dequeue(), Err(ActionError::Empty(Container::Queue)));
        assert_eq!(queue.peek_front(), Err(ActionError::Empty(Container::Queue)));
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        assert!(queue.is_full());
        assert_eq!(queue.enqueue(3), Err(ActionError::Full(Container::Queue)));
        // Rejected insert left the queue alone
        assert_eq!(queue.snapshot(), vec![1, 2]);
        assert_eq!(queue.tail(), queue.head());
    }

    #[test]
    fn test_wraparound_keeps_logical_order() {
        let mut queue: BoundedQueue<u32, 5> = BoundedQueue::new();
        for id in 0..5 {
            queue.enqueue(id).unwrap();
        }
        assert_eq!(queue.dequeue(), Ok(0));
        assert_eq!(queue.dequeue(), Ok(1));
        queue.enqueue(5).unwrap();
        queue.enqueue(6).unwrap();

        // Seven enqueues in total: tail went past index 4 and came back
        assert_eq!(queue.head(), 2);
        assert_eq!(queue.tail(), 2);
        assert_eq!(queue.snapshot(), vec![2, 3, 4, 5, 6]);
        assert_eq!(queue.peek_front(), Ok(&2));
        assert_eq!(queue.get(4), Some(&6));
        assert_eq!(queue.get(5), None);
    }

    #[test]
    fn test_iter_restartable() {
        let mut queue: BoundedQueue<u32, 3> = BoundedQueue::new();
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        let first: Vec<_> = queue.iter().collect();
        let second: Vec<_> = queue.iter().collect();
        assert_eq!(first, second);
        assert_eq!(queue.iter().len(), 2);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_long_run_stays_bounded() {
        let mut queue: BoundedQueue<u32, 5> = BoundedQueue::new();
        for id in 0..5 {
            queue.enqueue(id).unwrap();
        }
        for id in 5..100 {
            let front = queue.dequeue().unwrap();
            assert_eq!(front, id - 5);
            queue.enqueue(id).unwrap();
            assert_eq!(queue.len(), 5);
            assert!(queue.head() < 5 && queue.tail() < 5);
        }
    }
}
