//! Hex coordinate system using axial coordinates (q, r).
//!
//! This module provides the geometry the rules are built on:
//! - `HexCoord`: identifies a single cell of the hexagonal board
//! - `Direction`: the six unit steps between neighbouring cells
//!
//! Every operation here is total over integers. Coordinates that fall off the
//! board are perfectly valid values; the rules use them to detect ejection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Board radius (distance from the centre cell to an edge cell)
pub const BOARD_RADIUS: i32 = 4;

/// One of the six neighbour directions of a hex cell.
///
/// The discriminant order is the direction index used by text front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Up and to the left, (0, -1)
    TopLeft,
    /// Up and to the right, (1, -1)
    TopRight,
    /// Right, (1, 0)
    Right,
    /// Down and to the right, (0, 1)
    BottomRight,
    /// Down and to the left, (-1, 1)
    BottomLeft,
    /// Left, (-1, 0)
    Left,
}

impl Direction {
    /// All directions in index order
    pub const ALL: [Direction; 6] = [
        Direction::TopLeft,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::BottomLeft,
        Direction::Left,
    ];

    /// Index of this direction in `Direction::ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction for an index in `0..6`
    pub fn from_index(index: usize) -> Option<Direction> {
        Self::ALL.get(index).copied()
    }

    /// Axial unit delta (dq, dr)
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::TopLeft => (0, -1),
            Direction::TopRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::BottomRight => (0, 1),
            Direction::BottomLeft => (-1, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Direction whose unit delta is exactly (dq, dr)
    pub fn from_delta(dq: i32, dr: i32) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| d.delta() == (dq, dr))
    }

    /// The direction pointing the other way
    pub fn opposite(self) -> Direction {
        Self::ALL[(self.index() + 3) % 6]
    }

    /// Short name used by the console front end
    pub fn short_name(self) -> &'static str {
        match self {
            Direction::TopLeft => "TL",
            Direction::TopRight => "TR",
            Direction::Right => "R",
            Direction::BottomRight => "BR",
            Direction::BottomLeft => "BL",
            Direction::Left => "L",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Axial coordinate for the hex grid.
///
/// In axial coordinates:
/// - `q` increases going right
/// - `r` increases going down-right
/// - The third coordinate `s` (not stored) satisfies: q + r + s = 0
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct HexCoord {
    /// Column
    pub q: i32,
    /// Row
    pub r: i32,
}

impl HexCoord {
    /// Create a new hex coordinate
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third coordinate (s = -q - r)
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Componentwise sum with a delta. May leave the board.
    pub const fn add(&self, dq: i32, dr: i32) -> HexCoord {
        HexCoord::new(self.q + dq, self.r + dr)
    }

    /// One step in a direction
    pub const fn step(&self, direction: Direction) -> HexCoord {
        let (dq, dr) = direction.delta();
        self.add(dq, dr)
    }

    /// Neighbour by direction index, taken modulo 6
    pub fn neighbor(&self, index: usize) -> HexCoord {
        self.step(Direction::ALL[index % 6])
    }

    /// Delta from `self` to `other`
    pub const fn line_delta(&self, other: &HexCoord) -> (i32, i32) {
        (other.q - self.q, other.r - self.r)
    }

    /// Distance to another hex (in hex steps)
    pub fn distance_to(&self, other: &HexCoord) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        ((dq + dr + ds) / 2) as u32
    }

    /// Whether this cell lies within `BOARD_RADIUS` of the centre
    pub fn is_on_board(&self) -> bool {
        (self.q.abs() + self.r.abs() + self.s().abs()) / 2 <= BOARD_RADIUS
    }

    /// Dot product in cube space, used to order cells along a direction
    pub(crate) fn projection(&self, direction: Direction) -> i32 {
        let (dq, dr) = direction.delta();
        self.q * dq + self.r * dr + self.s() * (-dq - dr)
    }

    /// Every on-board cell, row by row from the top
    pub fn all_on_board() -> Vec<HexCoord> {
        let mut cells = Vec::with_capacity(61);
        for r in -BOARD_RADIUS..=BOARD_RADIUS {
            let min_q = (-BOARD_RADIUS).max(-BOARD_RADIUS - r);
            let max_q = BOARD_RADIUS.min(BOARD_RADIUS - r);
            for q in min_q..=max_q {
                cells.push(HexCoord::new(q, r));
            }
        }
        cells
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_board_has_61_cells() {
        let cells = HexCoord::all_on_board();
        assert_eq!(cells.len(), 61);
        assert!(cells.iter().all(HexCoord::is_on_board));

        let unique: HashSet<_> = cells.iter().collect();
        assert_eq!(unique.len(), 61);
    }

    #[test]
    fn test_on_board_predicate() {
        assert!(HexCoord::new(0, 0).is_on_board());
        assert!(HexCoord::new(4, -4).is_on_board());
        assert!(HexCoord::new(-4, 0).is_on_board());
        assert!(!HexCoord::new(5, 0).is_on_board());
        assert!(!HexCoord::new(3, 3).is_on_board()); // s = -6
        assert!(!HexCoord::new(0, -5).is_on_board());
    }

    #[test]
    fn test_hex_neighbors() {
        let center = HexCoord::new(0, 0);
        let neighbors: HashSet<_> = (0..6).map(|i| center.neighbor(i)).collect();

        assert_eq!(neighbors.len(), 6);
        for neighbor in &neighbors {
            assert_eq!(center.distance_to(neighbor), 1);
        }
    }

    #[test]
    fn test_neighbor_index_wraps() {
        let h = HexCoord::new(1, 1);
        assert_eq!(h.neighbor(6), h.neighbor(0));
        assert_eq!(h.neighbor(11), h.neighbor(5));
    }

    #[test]
    fn test_add_can_leave_board() {
        let edge = HexCoord::new(0, -4);
        let off = edge.step(Direction::TopLeft);
        assert_eq!(off, HexCoord::new(0, -5));
        assert!(!off.is_on_board());
    }

    #[test]
    fn test_hex_distance() {
        let a = HexCoord::new(0, 0);
        assert_eq!(a.distance_to(&HexCoord::new(2, -1)), 2);
        assert_eq!(a.distance_to(&HexCoord::new(-3, 3)), 3);
        assert_eq!(HexCoord::new(-4, 4).distance_to(&HexCoord::new(4, -4)), 8);
    }

    #[test]
    fn test_line_delta() {
        let a = HexCoord::new(1, -2);
        let b = HexCoord::new(3, -4);
        assert_eq!(a.line_delta(&b), (2, -2));
    }

    #[test]
    fn test_direction_round_trip() {
        for (i, dir) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(dir.index(), i);
            assert_eq!(Direction::from_index(i), Some(dir));
            let (dq, dr) = dir.delta();
            assert_eq!(Direction::from_delta(dq, dr), Some(dir));
        }
        assert_eq!(Direction::from_index(6), None);
        assert_eq!(Direction::from_delta(1, 1), None);
    }

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::TopLeft.opposite(), Direction::BottomRight);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dq, dr) = dir.delta();
            assert_eq!(dir.opposite().delta(), (-dq, -dr));
        }
    }

    #[test]
    fn test_projection_orders_cells_along_direction() {
        let dir = Direction::Right;
        let a = HexCoord::new(-1, 0);
        let b = HexCoord::new(0, 0);
        let c = HexCoord::new(1, 0);
        assert!(a.projection(dir) < b.projection(dir));
        assert!(b.projection(dir) < c.projection(dir));
    }
}
