//! Board state and the move rules.
//!
//! This module contains:
//! - The `Board`: which colour occupies each cell, plus ejected-marble counters
//! - The standard starting layout (14 marbles per side)
//! - Move classification (inline vs. broadside)
//! - Legality checking, including sumito push resolution
//! - Move execution and ejection accounting
//!
//! The board is only ever mutated through [`Board::execute`], which re-checks
//! legality first and either applies the whole move or leaves the board
//! untouched.

use crate::color::{Color, Piece};
use crate::hex::{Direction, HexCoord};
use crate::moves::{Move, MAX_MARBLES};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Marbles each side starts with
pub const MARBLES_PER_SIDE: u32 = 14;

/// Whether a move slides along its own line or sideways
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// Direction parallel to the selected line (always the case for one marble)
    Inline,
    /// Direction across the selected line
    Broadside,
}

/// Why a move is not legal for the acting side
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum IllegalMove {
    #[error("No marbles selected")]
    EmptySelection,

    #[error("No marble at {0}")]
    EmptyCell(HexCoord),

    #[error("Marble at {0} belongs to the opponent")]
    NotOwned(HexCoord),

    #[error("Selected marbles are not a contiguous line")]
    NotInLine,

    #[error("Destination {0} is off the board")]
    DestinationOffBoard(HexCoord),

    #[error("Destination {0} is occupied")]
    DestinationOccupied(HexCoord),

    #[error("Cannot push your own marbles off the board")]
    SelfEjection,

    #[error("Cannot push your own marble")]
    PushOwnPiece,

    #[error("Push is blocked by your own marble at {0}")]
    Blocked(HexCoord),

    #[error("{movers} marble(s) cannot push {opponents}")]
    Outnumbered { movers: usize, opponents: usize },
}

/// Errors raised by board construction and move execution
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum BoardError {
    #[error("No marble at {0} to move")]
    NoPieceAtStart(HexCoord),

    #[error("Illegal move: {0}")]
    Illegal(#[from] IllegalMove),

    #[error("Cell {0} is off the board")]
    OffBoard(HexCoord),

    #[error("Cell {0} is listed twice")]
    DuplicateCell(HexCoord),

    #[error("{color} accounts for more than {} marbles", MARBLES_PER_SIDE)]
    TooManyMarbles { color: Color },
}

/// What a legal move does once executed
#[derive(Debug, Clone, PartialEq, Eq)]
enum Resolution {
    Broadside,
    Slide,
    /// Opponent run directly ahead of the leading marble, nearest first
    Sumito { opponents: Vec<HexCoord> },
}

/// Report of an executed move. Positions are those before the move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub kind: MoveKind,
    /// The mover's marbles
    pub moved: Vec<HexCoord>,
    /// Opponent marbles that were pushed, nearest first
    pub pushed: Vec<HexCoord>,
    /// Opponent marbles that left the board
    pub ejected: Vec<HexCoord>,
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BoardJson", try_from = "BoardJson")]
pub struct Board {
    /// Occupied cells; missing keys are empty
    pieces: HashMap<HexCoord, Piece>,
    black_ejected: u32,
    white_ejected: u32,
}

impl Board {
    /// Create a board with no marbles
    pub fn empty() -> Self {
        Self {
            pieces: HashMap::new(),
            black_ejected: 0,
            white_ejected: 0,
        }
    }

    /// Create the standard starting layout: White along the top edge, Black
    /// along the bottom edge, three staggered rows each
    pub fn standard() -> Self {
        let mut board = Self::empty();

        for q in 0..=4 {
            board.place(HexCoord::new(q, -4), Color::White);
        }
        for q in -1..=4 {
            board.place(HexCoord::new(q, -3), Color::White);
        }
        for q in 0..=2 {
            board.place(HexCoord::new(q, -2), Color::White);
        }

        for q in -4..=0 {
            board.place(HexCoord::new(q, 4), Color::Black);
        }
        for q in -4..=1 {
            board.place(HexCoord::new(q, 3), Color::Black);
        }
        for q in -2..=0 {
            board.place(HexCoord::new(q, 2), Color::Black);
        }

        board
    }

    /// Create a board from an arbitrary layout
    pub fn with_pieces<I>(pieces: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (HexCoord, Color)>,
    {
        let mut board = Self::empty();
        for (coord, color) in pieces {
            if !coord.is_on_board() {
                return Err(BoardError::OffBoard(coord));
            }
            if board.pieces.contains_key(&coord) {
                return Err(BoardError::DuplicateCell(coord));
            }
            board.place(coord, color);
        }
        Ok(board)
    }

    fn place(&mut self, coord: HexCoord, color: Color) {
        if coord.is_on_board() {
            self.pieces.insert(coord, Piece::new(color));
        }
    }

    // ==================== Queries ====================

    /// Whether a cell is part of the board
    pub fn is_on_board(&self, coord: HexCoord) -> bool {
        coord.is_on_board()
    }

    /// Colour of the marble at a cell, if any
    pub fn occupant_at(&self, coord: HexCoord) -> Option<Color> {
        self.pieces.get(&coord).map(|p| p.color)
    }

    /// Snapshot of every occupied cell
    pub fn all_occupants(&self) -> HashMap<HexCoord, Color> {
        self.pieces
            .iter()
            .map(|(&coord, piece)| (coord, piece.color))
            .collect()
    }

    /// Marbles of a colour still on the board
    pub fn piece_count(&self, color: Color) -> u32 {
        self.pieces.values().filter(|p| p.color == color).count() as u32
    }

    /// Marbles of a colour pushed off the board so far
    pub fn ejected_count(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black_ejected,
            Color::White => self.white_ejected,
        }
    }

    fn ejected_mut(&mut self, color: Color) -> &mut u32 {
        match color {
            Color::Black => &mut self.black_ejected,
            Color::White => &mut self.white_ejected,
        }
    }

    // ==================== Rules ====================

    /// Classify a move against its own direction.
    ///
    /// The line vector runs between the two extreme marbles once they are
    /// ordered along the direction; the move is broadside when the direction
    /// is not parallel to it.
    pub fn classify(mv: &Move) -> MoveKind {
        if mv.len() < 2 {
            return MoveKind::Inline;
        }

        let sorted = mv.sorted_along_direction();
        let (lq, lr) = sorted[0].line_delta(&sorted[sorted.len() - 1]);
        let (dq, dr) = mv.direction().delta();

        if lq * dr != lr * dq {
            MoveKind::Broadside
        } else {
            MoveKind::Inline
        }
    }

    /// Check a move for the acting colour, reporting why it is illegal
    pub fn check(&self, mv: &Move, color: Color) -> Result<(), IllegalMove> {
        self.resolve(mv, color).map(|_| ())
    }

    /// Whether a move is legal for the acting colour
    pub fn validate(&self, mv: &Move, color: Color) -> bool {
        self.check(mv, color).is_ok()
    }

    fn resolve(&self, mv: &Move, color: Color) -> Result<Resolution, IllegalMove> {
        if mv.is_empty() {
            return Err(IllegalMove::EmptySelection);
        }

        for &cell in mv.marbles() {
            match self.occupant_at(cell) {
                None => return Err(IllegalMove::EmptyCell(cell)),
                Some(owner) if owner != color => return Err(IllegalMove::NotOwned(cell)),
                Some(_) => {}
            }
        }

        if !mv.is_linear() {
            return Err(IllegalMove::NotInLine);
        }

        let direction = mv.direction();

        match Self::classify(mv) {
            MoveKind::Broadside => {
                // All-or-nothing: every destination must be free
                for &cell in mv.marbles() {
                    let dest = cell.step(direction);
                    if !dest.is_on_board() {
                        return Err(IllegalMove::DestinationOffBoard(dest));
                    }
                    if self.pieces.contains_key(&dest) {
                        return Err(IllegalMove::DestinationOccupied(dest));
                    }
                }
                Ok(Resolution::Broadside)
            }
            MoveKind::Inline => self.resolve_inline(mv, color, direction),
        }
    }

    fn resolve_inline(
        &self,
        mv: &Move,
        color: Color,
        direction: Direction,
    ) -> Result<Resolution, IllegalMove> {
        let sorted = mv.sorted_along_direction();
        let head = sorted[sorted.len() - 1];
        let target = head.step(direction);

        if !target.is_on_board() {
            return Err(IllegalMove::SelfEjection);
        }

        match self.occupant_at(target) {
            None => Ok(Resolution::Slide),
            Some(owner) if owner == color => Err(IllegalMove::PushOwnPiece),
            Some(_) => {
                let opponents = self.opponent_run(target, color, direction)?;
                if mv.len() > opponents.len() {
                    Ok(Resolution::Sumito { opponents })
                } else {
                    Err(IllegalMove::Outnumbered {
                        movers: mv.len(),
                        opponents: opponents.len(),
                    })
                }
            }
        }
    }

    /// Walk forward from `start` collecting consecutive opponent marbles.
    ///
    /// Stops at an empty cell or the board edge. Running into one of the
    /// mover's own marbles blocks the push.
    fn opponent_run(
        &self,
        start: HexCoord,
        color: Color,
        direction: Direction,
    ) -> Result<Vec<HexCoord>, IllegalMove> {
        let mut run = Vec::new();
        let mut current = start;

        while current.is_on_board() {
            match self.occupant_at(current) {
                None => break,
                Some(owner) if owner == color => return Err(IllegalMove::Blocked(current)),
                Some(_) => {
                    run.push(current);
                    current = current.step(direction);
                }
            }
        }

        Ok(run)
    }

    /// Execute a move for the colour of its first selected marble.
    ///
    /// Legality is re-checked before anything changes; on error the board is
    /// left exactly as it was.
    pub fn execute(&mut self, mv: &Move) -> Result<MoveOutcome, BoardError> {
        let first = *mv
            .marbles()
            .first()
            .ok_or(BoardError::Illegal(IllegalMove::EmptySelection))?;
        let color = self
            .occupant_at(first)
            .ok_or(BoardError::NoPieceAtStart(first))?;

        let resolution = self.resolve(mv, color)?;
        let direction = mv.direction();

        let mut outcome = MoveOutcome {
            kind: Self::classify(mv),
            moved: mv.marbles().to_vec(),
            pushed: Vec::new(),
            ejected: Vec::new(),
        };

        match resolution {
            Resolution::Broadside | Resolution::Slide => {}
            Resolution::Sumito { opponents } => {
                // Furthest first so every destination is already vacated
                for &cell in opponents.iter().rev() {
                    let Some(piece) = self.pieces.remove(&cell) else {
                        continue;
                    };
                    let dest = cell.step(direction);
                    if dest.is_on_board() {
                        self.pieces.insert(dest, piece);
                    } else {
                        *self.ejected_mut(piece.color) += 1;
                        outcome.ejected.push(cell);
                    }
                }
                outcome.pushed = opponents;
            }
        }

        self.shift(mv.marbles(), direction);

        Ok(outcome)
    }

    /// Lift every marble in `cells`, then set each one down a step further
    fn shift(&mut self, cells: &[HexCoord], direction: Direction) {
        let lifted: Vec<(HexCoord, Piece)> = cells
            .iter()
            .filter_map(|cell| self.pieces.remove(cell).map(|piece| (*cell, piece)))
            .collect();

        for (cell, piece) in lifted {
            self.pieces.insert(cell.step(direction), piece);
        }
    }

    /// Every legal move for a colour, in a stable order
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        // One direction per axis is enough to enumerate each line once
        const AXES: [Direction; 3] = [
            Direction::Right,
            Direction::BottomRight,
            Direction::TopRight,
        ];

        let mut own: Vec<HexCoord> = self
            .pieces
            .iter()
            .filter(|(_, piece)| piece.color == color)
            .map(|(&coord, _)| coord)
            .collect();
        own.sort();

        let mut moves = Vec::new();

        for &start in &own {
            let mut selections = vec![vec![start]];
            for axis in AXES {
                let mut line = vec![start];
                let mut next = start.step(axis);
                while line.len() < MAX_MARBLES && self.occupant_at(next) == Some(color) {
                    line.push(next);
                    selections.push(line.clone());
                    next = next.step(axis);
                }
            }

            for selection in selections {
                for direction in Direction::ALL {
                    if let Ok(mv) = Move::new(selection.iter().copied(), direction) {
                        if self.validate(&mv, color) {
                            moves.push(mv);
                        }
                    }
                }
            }
        }

        moves
    }

    /// Convert to a JSON-friendly representation with arrays instead of HashMaps
    pub fn to_json_friendly(&self) -> BoardJson {
        let mut pieces: Vec<PieceJson> = self
            .pieces
            .iter()
            .map(|(coord, piece)| PieceJson {
                q: coord.q,
                r: coord.r,
                color: piece.color,
            })
            .collect();
        pieces.sort_by_key(|p| (p.r, p.q));

        BoardJson {
            pieces,
            black_ejected: self.black_ejected,
            white_ejected: self.white_ejected,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// JSON-friendly board representation with arrays instead of HashMaps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardJson {
    pub pieces: Vec<PieceJson>,
    pub black_ejected: u32,
    pub white_ejected: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceJson {
    pub q: i32,
    pub r: i32,
    pub color: Color,
}

impl From<Board> for BoardJson {
    fn from(board: Board) -> Self {
        board.to_json_friendly()
    }
}

impl TryFrom<BoardJson> for Board {
    type Error = BoardError;

    fn try_from(json: BoardJson) -> Result<Self, Self::Error> {
        let mut board = Board::with_pieces(
            json.pieces
                .into_iter()
                .map(|p| (HexCoord::new(p.q, p.r), p.color)),
        )?;
        board.black_ejected = json.black_ejected;
        board.white_ejected = json.white_ejected;

        // Marbles on the board plus those ejected never exceed a full side
        for color in Color::ALL {
            let total = board.piece_count(color).checked_add(board.ejected_count(color));
            if total.map_or(true, |total| total > MARBLES_PER_SIDE) {
                return Err(BoardError::TooManyMarbles { color });
            }
        }
        Ok(board)
    }
}
