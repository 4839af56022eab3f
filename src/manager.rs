//! Queue and reserve actions
//!
//! The manager owns the upcoming-piece queue, the reserve stack and the
//! piece factory. The queue is kept full: every action that takes a piece
//! out of it produces exactly one replacement.

use crate::error::{ActionError, Container};
use crate::factory::PieceFactory;
use crate::piece::Piece;
use crate::queue::BoundedQueue;
use crate::stack::BoundedStack;
use rand::RngCore;
use rand_chacha::ChaCha8Rng;
use std::fmt::Write as _;
use tracing::{debug, info, warn};

/// Number of upcoming pieces kept in the queue
pub const QUEUE_CAPACITY: usize = 5;
/// Number of pieces the reserve can hold
pub const STACK_CAPACITY: usize = 3;
/// Pieces exchanged by a block swap
pub const SWAP_BLOCK: usize = 3;

pub type PieceQueue = BoundedQueue<Piece, QUEUE_CAPACITY>;
pub type ReserveStack = BoundedStack<Piece, STACK_CAPACITY>;

/// Commands the menu can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Play,
    Reserve,
    UseReserved,
    SwapOne,
    SwapMany,
    Quit,
}

impl Action {
    /// Menu label for this action
    pub fn label(&self) -> &'static str {
        match self {
            Action::Play => "Play piece",
            Action::Reserve => "Reserve piece",
            Action::UseReserved => "Use reserved piece",
            Action::SwapOne => "Swap front with reserve top",
            Action::SwapMany => "Swap front 3 with reserve top 3",
            Action::Quit => "Quit",
        }
    }

    /// Menu order
    pub fn all() -> &'static [Action] {
        &[
            Action::Play,
            Action::Reserve,
            Action::UseReserved,
            Action::SwapOne,
            Action::SwapMany,
            Action::Quit,
        ]
    }
}

/// What a successful action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Front piece was played and discarded
    Played { piece: Piece, refill: Option<Piece> },
    /// Front piece moved onto the reserve
    Reserved { piece: Piece, refill: Option<Piece> },
    /// Top reserve piece was used
    UsedReserved { piece: Piece, refill: Option<Piece> },
    /// Queue front and reserve top traded places
    SwappedOne { to_stack: Piece, to_queue: Piece },
    /// The first `count` queue pieces traded places with the top `count` reserve pieces
    SwappedMany { count: usize },
    Nothing,
}

impl Outcome {
    /// One-line status message for display
    pub fn describe(&self) -> String {
        let mut text = match self {
            Outcome::Played { piece, .. } => format!("Played {}", piece),
            Outcome::Reserved { piece, .. } => format!("Reserved {}", piece),
            Outcome::UsedReserved { piece, .. } => format!("Used reserved {}", piece),
            Outcome::SwappedOne { to_stack, to_queue } => {
                format!("Swapped {} into the reserve and {} to the front", to_stack, to_queue)
            }
            Outcome::SwappedMany { count } => format!("Swapped {} pieces", count),
            Outcome::Nothing => String::new(),
        };
        if let Some(refill) = self.refill() {
            let _ = write!(text, ", new piece {}", refill);
        }
        text
    }

    /// Piece produced to top the queue back up, if any
    pub fn refill(&self) -> Option<Piece> {
        match self {
            Outcome::Played { refill, .. }
            | Outcome::Reserved { refill, .. }
            | Outcome::UsedReserved { refill, .. } => *refill,
            _ => None,
        }
    }
}

/// Owner of the queue, the reserve and the id counter for one session
#[derive(Debug, Clone)]
pub struct ActionManager<R = ChaCha8Rng> {
    queue: PieceQueue,
    stack: ReserveStack,
    factory: PieceFactory<R>,
}

impl ActionManager<ChaCha8Rng> {
    /// Create a session with a deterministic piece sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::new(PieceFactory::with_seed(seed))
    }

    /// Create a session with a random piece sequence
    pub fn from_entropy() -> Self {
        Self::new(PieceFactory::from_entropy())
    }
}

impl<R: RngCore> ActionManager<R> {
    /// Create a session and fill the queue to capacity
    pub fn new(factory: PieceFactory<R>) -> Self {
        let mut manager = Self {
            queue: BoundedQueue::new(),
            stack: BoundedStack::new(),
            factory,
        };
        while manager.refill().is_some() {}
        info!("Queue filled with {} pieces", manager.queue.len());
        manager
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    /// Id the next generated piece will get
    pub fn next_id(&self) -> u64 {
        self.factory.next_id()
    }

    /// Run one menu command
    pub fn execute(&mut self, action: Action) -> Result<Outcome, ActionError> {
        let result = match action {
            Action::Play => self.play(),
            Action::Reserve => self.reserve(),
            Action::UseReserved => self.use_reserved(),
            Action::SwapOne => self.swap_one(),
            Action::SwapMany => self.swap_many(),
            Action::Quit => Ok(Outcome::Nothing),
        };
        match &result {
            Ok(outcome) => info!("{:?}: {}", action, outcome.describe()),
            Err(e) => warn!("{:?} rejected: {}", action, e),
        }
        result
    }

    /// Discard the front piece and refill
    pub fn play(&mut self) -> Result<Outcome, ActionError> {
        let piece = self.queue.dequeue()?;
        debug!("Dequeued {} to play", piece);
        let refill = self.refill();
        Ok(Outcome::Played { piece, refill })
    }

    /// Move the front piece onto the reserve and refill.
    ///
    /// A full reserve is reported before anything is dequeued, so the front
    /// piece is never lost.
    pub fn reserve(&mut self) -> Result<Outcome, ActionError> {
        if self.queue.is_empty() {
            return Err(ActionError::Empty(Container::Queue));
        }
        if self.stack.is_full() {
            return Err(ActionError::Full(Container::Stack));
        }
        let piece = self.queue.dequeue()?;
        self.stack.push(piece)?;
        debug!("Moved {} from queue to reserve", piece);
        let refill = self.refill();
        Ok(Outcome::Reserved { piece, refill })
    }

    /// Pop the top reserve piece. The queue is topped up if it has room.
    pub fn use_reserved(&mut self) -> Result<Outcome, ActionError> {
        let piece = self.stack.pop()?;
        debug!("Popped {} from reserve", piece);
        let refill = self.refill();
        Ok(Outcome::UsedReserved { piece, refill })
    }

    /// Exchange the queue front with the reserve top in place
    pub fn swap_one(&mut self) -> Result<Outcome, ActionError> {
        let Some(front) = self.queue.get_mut(0) else {
            return Err(ActionError::Empty(Container::Queue));
        };
        let Some(top) = self.stack.get_mut(0) else {
            return Err(ActionError::Empty(Container::Stack));
        };
        std::mem::swap(front, top);
        let (to_queue, to_stack) = (*front, *top);
        debug!("Swapped queue front {} with reserve top {}", to_stack, to_queue);
        Ok(Outcome::SwappedOne { to_stack, to_queue })
    }

    /// Block swap of [`SWAP_BLOCK`] pieces
    pub fn swap_many(&mut self) -> Result<Outcome, ActionError> {
        self.swap_block(SWAP_BLOCK)
    }

    /// Exchange the first `k` queue pieces with the top `k` reserve pieces,
    /// pairing the i-th from the front with the i-th from the top.
    pub fn swap_block(&mut self, k: usize) -> Result<Outcome, ActionError> {
        // Every pair must be present before the first exchange
        let complete = (0..k).all(|i| self.queue.get(i).is_some() && self.stack.get(i).is_some());
        if !complete {
            return Err(ActionError::InsufficientElements {
                required: k,
                queue_len: self.queue.len(),
                stack_len: self.stack.len(),
            });
        }
        for i in 0..k {
            if let (Some(a), Some(b)) = (self.queue.get_mut(i), self.stack.get_mut(i)) {
                std::mem::swap(a, b);
                debug!("Block swap {}: queue gets {}, reserve gets {}", i, a, b);
            }
        }
        Ok(Outcome::SwappedMany { count: k })
    }

    /// Produce and enqueue one piece if the queue has room
    fn refill(&mut self) -> Option<Piece> {
        if self.queue.is_full() {
            return None;
        }
        let piece = self.factory.produce();
        self.queue.enqueue(piece).ok()?;
        debug!("New piece {} added to queue", piece);
        Some(piece)
    }

    /// Plain-text state, one line per container
    pub fn summary(&self) -> String {
        format!(
            "Queue (front -> back) [{}/{}]: {}\nReserve (top -> base) [{}/{}]: {}",
            self.queue.len(),
            self.queue.capacity(),
            join_pieces(self.queue.iter()),
            self.stack.len(),
            self.stack.capacity(),
            join_pieces(self.stack.iter()),
        )
    }
}

fn join_pieces<'a>(pieces: impl Iterator<Item = &'a Piece>) -> String {
    let parts: Vec<String> = pieces.map(|p| p.to_string()).collect();
    if parts.is_empty() {
        "empty".to_string()
    } else {
        parts.join(" ")
    }
}
