//! Move descriptors.
//!
//! A `Move` is a selection of one to three of the mover's marbles plus the
//! direction to push them. Construction validates the shape of the
//! selection: size, a shared hex axis and no gaps. Whether the move is legal
//! on a particular board is a separate question answered by
//! [`Board::check`](crate::board::Board::check).

use crate::hex::{Direction, HexCoord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Most marbles a player may move at once
pub const MAX_MARBLES: usize = 3;

/// Reasons a selection cannot form a move
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoveError {
    #[error("A move must select at least one marble")]
    NoMarbles,

    #[error("A move can select at most 3 marbles, got {0}")]
    TooManyMarbles(usize),

    #[error("Marble {0} is selected twice")]
    DuplicateMarble(HexCoord),

    #[error("Selected marbles are not on one line")]
    NotInLine,

    #[error("Selected marbles are not adjacent")]
    NotContiguous,

    #[error("Direction index must be 0-5, got {0}")]
    InvalidDirection(usize),
}

/// A validated selection of marbles and a push direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMove", into = "RawMove")]
pub struct Move {
    /// Selected cells, sorted by (q, r)
    marbles: Vec<HexCoord>,
    direction: Direction,
}

impl Move {
    /// Build a move, rejecting malformed selections
    pub fn new<I>(marbles: I, direction: Direction) -> Result<Self, MoveError>
    where
        I: IntoIterator<Item = HexCoord>,
    {
        let mut marbles: Vec<HexCoord> = marbles.into_iter().collect();

        if marbles.is_empty() {
            return Err(MoveError::NoMarbles);
        }
        if marbles.len() > MAX_MARBLES {
            return Err(MoveError::TooManyMarbles(marbles.len()));
        }

        marbles.sort();

        if let Some(pair) = marbles.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(MoveError::DuplicateMarble(pair[0]));
        }
        if !shares_axis(&marbles) {
            return Err(MoveError::NotInLine);
        }
        if !is_contiguous(&marbles) {
            return Err(MoveError::NotContiguous);
        }

        Ok(Self { marbles, direction })
    }

    /// Build a move from a direction index in `0..6`
    pub fn from_index<I>(marbles: I, direction_index: usize) -> Result<Self, MoveError>
    where
        I: IntoIterator<Item = HexCoord>,
    {
        let direction = Direction::from_index(direction_index)
            .ok_or(MoveError::InvalidDirection(direction_index))?;
        Self::new(marbles, direction)
    }

    /// Selected cells in canonical (q, r) order
    pub fn marbles(&self) -> &[HexCoord] {
        &self.marbles
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of selected marbles
    pub fn len(&self) -> usize {
        self.marbles.len()
    }

    /// Always false for a constructed move
    pub fn is_empty(&self) -> bool {
        self.marbles.is_empty()
    }

    /// Whether the selection is a contiguous line along one hex axis
    pub fn is_linear(&self) -> bool {
        shares_axis(&self.marbles) && is_contiguous(&self.marbles)
    }

    /// Selected cells ordered along the move direction; the last one leads
    pub(crate) fn sorted_along_direction(&self) -> Vec<HexCoord> {
        let mut sorted = self.marbles.clone();
        sorted.sort_by_key(|c| (c.projection(self.direction), c.q, c.r));
        sorted
    }
}

fn shares_axis(marbles: &[HexCoord]) -> bool {
    let Some(first) = marbles.first() else {
        return false;
    };
    marbles.iter().all(|m| m.q == first.q)
        || marbles.iter().all(|m| m.r == first.r)
        || marbles.iter().all(|m| m.s() == first.s())
}

fn is_contiguous(marbles: &[HexCoord]) -> bool {
    marbles
        .windows(2)
        .all(|pair| pair[0].distance_to(&pair[1]) == 1)
}

/// Unvalidated wire shape of a move
#[derive(Serialize, Deserialize)]
struct RawMove {
    marbles: Vec<HexCoord>,
    direction: Direction,
}

impl TryFrom<RawMove> for Move {
    type Error = MoveError;

    fn try_from(raw: RawMove) -> Result<Self, Self::Error> {
        Move::new(raw.marbles, raw.direction)
    }
}

impl From<Move> for RawMove {
    fn from(mv: Move) -> Self {
        RawMove {
            marbles: mv.marbles,
            direction: mv.direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(q: i32, r: i32) -> HexCoord {
        HexCoord::new(q, r)
    }

    #[test]
    fn test_single_marble_move() {
        let mv = Move::new([h(0, 4)], Direction::TopLeft).unwrap();
        assert_eq!(mv.len(), 1);
        assert!(mv.is_linear());
        assert_eq!(mv.direction(), Direction::TopLeft);
    }

    #[test]
    fn test_selection_is_sorted() {
        let mv = Move::new([h(2, 0), h(0, 0), h(1, 0)], Direction::Right).unwrap();
        assert_eq!(mv.marbles(), &[h(0, 0), h(1, 0), h(2, 0)]);
    }

    #[test]
    fn test_all_three_axes_accepted() {
        // r constant
        assert!(Move::new([h(0, 0), h(1, 0), h(2, 0)], Direction::Right).is_ok());
        // q constant
        assert!(Move::new([h(0, 0), h(0, 1), h(0, 2)], Direction::Right).is_ok());
        // s constant
        assert!(Move::new([h(0, 0), h(1, -1), h(2, -2)], Direction::Right).is_ok());
    }

    #[test]
    fn test_empty_selection_rejected() {
        let result = Move::new(Vec::new(), Direction::Right);
        assert_eq!(result, Err(MoveError::NoMarbles));
    }

    #[test]
    fn test_four_marbles_rejected() {
        let result = Move::new([h(0, 0), h(1, 0), h(2, 0), h(3, 0)], Direction::Right);
        assert_eq!(result, Err(MoveError::TooManyMarbles(4)));
    }

    #[test]
    fn test_duplicate_marble_rejected() {
        let result = Move::new([h(1, 0), h(1, 0)], Direction::Right);
        assert_eq!(result, Err(MoveError::DuplicateMarble(h(1, 0))));
    }

    #[test]
    fn test_non_linear_rejected() {
        // Bent triple: no shared q, r or s
        let result = Move::new([h(0, 0), h(1, 0), h(1, 1)], Direction::Right);
        assert_eq!(result, Err(MoveError::NotInLine));

        // Two cells that are not on any axis
        let result = Move::new([h(0, 0), h(1, 1)], Direction::Right);
        assert_eq!(result, Err(MoveError::NotInLine));
    }

    #[test]
    fn test_gap_rejected() {
        let result = Move::new([h(0, 0), h(2, 0)], Direction::Right);
        assert_eq!(result, Err(MoveError::NotContiguous));

        let result = Move::new([h(0, 0), h(0, 1), h(0, 3)], Direction::Right);
        assert_eq!(result, Err(MoveError::NotContiguous));
    }

    #[test]
    fn test_direction_index() {
        let mv = Move::from_index([h(0, 0)], 2).unwrap();
        assert_eq!(mv.direction(), Direction::Right);

        let result = Move::from_index([h(0, 0)], 6);
        assert_eq!(result, Err(MoveError::InvalidDirection(6)));
    }

    #[test]
    fn test_sorted_along_direction() {
        let mv = Move::new([h(0, 0), h(1, 0), h(2, 0)], Direction::Left).unwrap();
        assert_eq!(mv.sorted_along_direction(), vec![h(2, 0), h(1, 0), h(0, 0)]);

        let mv = Move::new([h(0, 2), h(0, 3), h(0, 4)], Direction::TopLeft).unwrap();
        assert_eq!(mv.sorted_along_direction().last(), Some(&h(0, 2)));
    }

    #[test]
    fn test_json_is_validated() {
        let mv: Move = serde_json::from_str(
            r#"{"marbles":[{"q":1,"r":0},{"q":0,"r":0}],"direction":"Right"}"#,
        )
        .unwrap();
        assert_eq!(mv.marbles(), &[h(0, 0), h(1, 0)]);

        let bad = serde_json::from_str::<Move>(
            r#"{"marbles":[{"q":0,"r":0},{"q":2,"r":0}],"direction":"Right"}"#,
        );
        assert!(bad.is_err());
    }
}
