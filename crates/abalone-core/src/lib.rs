//! Abalone - board model and move rules for the two-player marble game
//!
//! This crate provides the core game logic, including:
//! - Hex coordinate system for the radius-4 board
//! - Move descriptors validated at construction
//! - Board state with legality checking and move execution
//! - Game state with turn order and the win condition
//!
//! # Architecture
//!
//! The engine is platform-agnostic and performs no I/O. It can be compiled to:
//! - Native Rust for the console driver
//! - WebAssembly for browser front ends
//!
//! # Modules
//!
//! - [`hex`]: Axial coordinates and the six directions
//! - [`color`]: The two sides and their marbles
//! - [`moves`]: Move descriptors
//! - [`board`]: Board state, legality and execution
//! - [`game`]: Turn order, events and winning
//! - [`layout`]: Pixel/hex conversion for graphical front ends

pub mod board;
pub mod color;
pub mod game;
pub mod hex;
pub mod layout;
pub mod moves;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use board::{
    Board, BoardError, BoardJson, IllegalMove, MoveKind, MoveOutcome, PieceJson, MARBLES_PER_SIDE,
};
pub use color::{Color, Piece};
pub use game::{GameConfig, GameError, GameEvent, GamePhase, GameState, DEFAULT_MARBLES_TO_WIN};
pub use hex::{Direction, HexCoord, BOARD_RADIUS};
pub use layout::HexLayout;
pub use moves::{Move, MoveError, MAX_MARBLES};
