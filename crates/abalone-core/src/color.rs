//! Marble colours and the pieces that occupy board cells.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Both colours, Black first
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// The other side
    pub fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Single-letter symbol for text rendering
    pub fn symbol(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("Black"),
            Color::White => f.write_str("White"),
        }
    }
}

/// A marble on the board.
///
/// Marbles have no identity beyond their colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
}

impl Piece {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}
