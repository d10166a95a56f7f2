//! Game state: turn order, events and the win condition.
//!
//! `Board` knows nothing about whose turn it is or when the game ends. This
//! module wraps it with the state every front end needs: the side to move,
//! a turn counter and the ejection threshold that decides the winner.

use crate::board::{Board, BoardError, MoveKind};
use crate::color::Color;
use crate::hex::{Direction, HexCoord};
use crate::moves::Move;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opponent marbles a side must eject to win
pub const DEFAULT_MARBLES_TO_WIN: u32 = 6;

/// Rules that vary between games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Ejections needed to win
    pub marbles_to_win: u32,
    /// Side that moves first
    pub first_player: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            marbles_to_win: DEFAULT_MARBLES_TO_WIN,
            first_player: Color::Black,
        }
    }
}

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Finished { winner: Color },
}

/// Errors that can occur when applying moves
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Not your turn")]
    NotYourTurn,

    #[error("Game is over")]
    GameOver,

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Events that occur as a result of a move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The mover's marbles advanced one step
    MarblesMoved {
        player: Color,
        kind: MoveKind,
        from: Vec<HexCoord>,
        direction: Direction,
    },

    /// Opponent marbles were pushed by a sumito
    MarblesPushed {
        player: Color,
        victim: Color,
        from: Vec<HexCoord>,
    },

    /// A marble left the board
    MarbleEjected {
        color: Color,
        from: HexCoord,
        total_ejected: u32,
    },

    /// Turn passed to the other side
    TurnEnded { player: Color, next_player: Color },

    /// A player won the game
    GameWon { player: Color, ejected: u32 },
}

/// The complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The game board
    pub board: Board,
    /// Side to move
    pub current_player: Color,
    /// Current game phase
    pub phase: GamePhase,
    /// Turn number (starts at 1)
    pub turn_number: u32,
    pub config: GameConfig,
}

impl GameState {
    /// Create a game on the standard layout with default rules
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Create a game on the standard layout
    pub fn with_config(config: GameConfig) -> Self {
        Self::with_board(Board::standard(), config)
    }

    /// Create a game from an arbitrary position
    pub fn with_board(board: Board, config: GameConfig) -> Self {
        Self {
            board,
            current_player: config.first_player,
            phase: GamePhase::Playing,
            turn_number: 1,
            config,
        }
    }

    /// Check if the game is finished
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::Finished { .. })
    }

    /// Get the winner if the game is finished
    pub fn winner(&self) -> Option<Color> {
        match self.phase {
            GamePhase::Finished { winner } => Some(winner),
            GamePhase::Playing => None,
        }
    }

    /// Legal moves for the side to move
    pub fn valid_moves(&self) -> Vec<Move> {
        if self.is_finished() {
            return Vec::new();
        }
        self.board.legal_moves(self.current_player)
    }

    /// Apply a move for `player`.
    ///
    /// On error nothing changes, including whose turn it is.
    pub fn apply_move(&mut self, player: Color, mv: &Move) -> Result<Vec<GameEvent>, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if player != self.current_player {
            return Err(GameError::NotYourTurn);
        }

        // Execution acts for the owner of the first marble, so ownership is
        // checked against the player here
        self.board.check(mv, player).map_err(BoardError::from)?;
        let outcome = self.board.execute(mv)?;

        let opponent = player.opposite();
        let mut events = vec![GameEvent::MarblesMoved {
            player,
            kind: outcome.kind,
            from: outcome.moved,
            direction: mv.direction(),
        }];

        if !outcome.pushed.is_empty() {
            events.push(GameEvent::MarblesPushed {
                player,
                victim: opponent,
                from: outcome.pushed,
            });
        }

        let total_ejected = self.board.ejected_count(opponent);
        for from in outcome.ejected {
            events.push(GameEvent::MarbleEjected {
                color: opponent,
                from,
                total_ejected,
            });
        }

        if total_ejected >= self.config.marbles_to_win {
            self.phase = GamePhase::Finished { winner: player };
            events.push(GameEvent::GameWon {
                player,
                ejected: total_ejected,
            });
        } else {
            self.current_player = opponent;
            self.turn_number += 1;
            events.push(GameEvent::TurnEnded {
                player,
                next_player: opponent,
            });
        }

        Ok(events)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
