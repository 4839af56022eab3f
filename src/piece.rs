//! Queued piece value

use crate::tetromino::TetrominoType;
use std::fmt;

/// A labelled piece with a session-unique id.
///
/// Pieces are plain values: they are copied out of one container and written
/// into another, never shared between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: TetrominoType,
    id: u64,
}

impl Piece {
    /// Only the factory (and tests) mint pieces
    pub(crate) fn new(kind: TetrominoType, id: u64) -> Self {
        Self { kind, id }
    }

    /// The tetromino label of this piece
    pub fn kind(&self) -> TetrominoType {
        self.kind
    }

    /// Unique id, assigned in production order
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.symbol(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let piece = Piece::new(TetrominoType::T, 12);
        assert_eq!(piece.to_string(), "[T 12]");
    }

    #[test]
    fn test_accessors() {
        let piece = Piece::new(TetrominoType::L, 3);
        assert_eq!(piece.kind(), TetrominoType::L);
        assert_eq!(piece.id(), 3);
    }
}
