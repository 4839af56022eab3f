//! Tetromino labels used by the piece queue
//!
//! Only four shapes take part in the queue/reserve game. Geometry and
//! rotation live elsewhere; here a tetromino is just a label.

use ratatui::style::Color;

/// The 4 tetromino labels a piece can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I, // Cyan - long bar
    O, // Yellow - square
    T, // Purple - T-shape
    L, // Orange - L-shape
}

impl TetrominoType {
    /// Get the color for this tetromino
    pub fn color(&self) -> Color {
        match self {
            TetrominoType::I => Color::Cyan,
            TetrominoType::O => Color::Yellow,
            TetrominoType::T => Color::Magenta,
            TetrominoType::L => Color::Rgb(255, 165, 0), // Orange
        }
    }

    /// Get all tetromino labels, in a fixed order
    pub fn all() -> [TetrominoType; 4] {
        [
            TetrominoType::I,
            TetrominoType::O,
            TetrominoType::T,
            TetrominoType::L,
        ]
    }

    /// Single character used when printing a piece
    pub fn symbol(&self) -> char {
        match self {
            TetrominoType::I => 'I',
            TetrominoType::O => 'O',
            TetrominoType::T => 'T',
            TetrominoType::L => 'L',
        }
    }
}
