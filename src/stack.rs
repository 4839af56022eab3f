//! Fixed-capacity LIFO stack

use crate::error::{ActionError, Container};

/// Bounded stack of reserved pieces. Live elements sit in `slots[..len]`,
/// the top being `slots[len - 1]`.
#[derive(Debug, Clone)]
pub struct BoundedStack<T, const M: usize> {
    slots: [Option<T>; M],
    len: usize,
}

impl<T, const M: usize> Default for BoundedStack<T, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const M: usize> BoundedStack<T, M> {
    /// Create an empty stack
    pub fn new() -> Self {
        const { assert!(M > 0, "stack capacity must be positive") };
        Self {
            slots: std::array::from_fn(|_| None),
            len: 0,
        }
    }

    pub fn push(&mut self, item: T) -> Result<(), ActionError> {
        if self.len == M {
            return Err(ActionError::Full(Container::Stack));
        }
        self.slots[self.len] = Some(item);
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, ActionError> {
        if self.len == 0 {
            return Err(ActionError::Empty(Container::Stack));
        }
        let item = self.slots[self.len - 1]
            .take()
            .ok_or(ActionError::Empty(Container::Stack))?;
        self.len -= 1;
        Ok(item)
    }

    pub fn peek_top(&self) -> Result<&T, ActionError> {
        self.get(0).ok_or(ActionError::Empty(Container::Stack))
    }

    /// The `i`-th element counting down from the top
    pub fn get(&self, i: usize) -> Option<&T> {
        if i >= self.len {
            return None;
        }
        self.slots[self.len - 1 - i].as_ref()
    }

    pub(crate) fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i >= self.len {
            return None;
        }
        self.slots[self.len - 1 - i].as_mut()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == M
    }

    pub fn capacity(&self) -> usize {
        M
    }

    /// Index of the top slot, `None` when empty
    pub fn top(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    /// Iterate top to bottom
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.len].iter().rev().filter_map(Option::as_ref)
    }

    /// Copy the live elements out, top first
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}
