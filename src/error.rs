//! Error types for queue, stack and action failures

use std::fmt;
use thiserror::Error;

/// Which container an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Queue,
    Stack,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Queue => write!(f, "queue"),
            Container::Stack => write!(f, "reserve stack"),
        }
    }
}

/// Recoverable failures. A failed call never leaves partial changes behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Removal, peek or swap source on an empty container
    #[error("the {0} is empty")]
    Empty(Container),

    /// Insertion into a full container
    #[error("the {0} is full")]
    Full(Container),

    /// Block swap with too few pieces on either side
    #[error("need {required} pieces on each side, queue has {queue_len} and stack has {stack_len}")]
    InsufficientElements {
        required: usize,
        queue_len: usize,
        stack_len: usize,
    },
}
