//! Piece generation
//!
//! Every piece gets a uniformly random label and the next id from a counter
//! owned by the factory. The random source is injected so sessions can be
//! replayed from a seed.

use crate::piece::Piece;
use crate::tetromino::TetrominoType;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Produces pieces with monotonically increasing ids
#[derive(Debug, Clone)]
pub struct PieceFactory<R = ChaCha8Rng> {
    /// Source of randomness for label selection
    rng: R,
    /// Id handed to the next produced piece
    next_id: u64,
}

impl PieceFactory<ChaCha8Rng> {
    /// Create a deterministic factory from a seed
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Create a factory seeded from the OS entropy source
    pub fn from_entropy() -> Self {
        Self::with_seed(rand::random())
    }
}

impl<R: RngCore> PieceFactory<R> {
    /// Create a factory around any random source, starting ids at 0
    pub fn from_rng(rng: R) -> Self {
        Self { rng, next_id: 0 }
    }

    /// Produce the next piece. The id counter advances by exactly one.
    pub fn produce(&mut self) -> Piece {
        let kinds = TetrominoType::all();
        let kind = kinds[self.rng.gen_range(0..kinds.len())];
        let piece = Piece::new(kind, self.next_id);
        // u64 ids; wraparound is not a realistic concern for a session
        self.next_id = self.next_id.wrapping_add(1);
        piece
    }

    /// Id the next produced piece will carry
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
