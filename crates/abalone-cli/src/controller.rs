//! Console turn loop.
//!
//! Reads one command per line, applies moves to the game and reports the
//! result. Generic over its input and output so tests can script a session.

use crate::input::{parse_command, Command, HELP};
use crate::render::render_board;
use abalone_core::{Color, GameEvent, GameState, Move};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Won(Color),
    /// The side to move had no legal move
    Stuck(Color),
    Quit,
    EndOfInput,
}

/// Snapshot printed by the `json` command
#[derive(Serialize)]
struct Snapshot<'a> {
    current_player: Color,
    turn_number: u32,
    board: &'a abalone_core::Board,
}

pub struct Controller<R, W> {
    game: GameState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    pub fn new(game: GameState, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Run until someone wins, a side is stuck, the player quits or input runs out
    pub fn run(&mut self) -> anyhow::Result<SessionEnd> {
        writeln!(self.output, "{}", HELP)?;
        self.show_board()?;

        loop {
            if let Some(winner) = self.game.winner() {
                writeln!(self.output, "{} wins!", winner)?;
                info!(%winner, turns = self.game.turn_number, "Game finished");
                return Ok(SessionEnd::Won(winner));
            }

            let player = self.game.current_player;
            if self.game.valid_moves().is_empty() {
                writeln!(self.output, "Player {} has no legal moves", player)?;
                info!(%player, turns = self.game.turn_number, "No legal moves left");
                return Ok(SessionEnd::Stuck(player));
            }

            write!(self.output, "Player {}, enter move: ", player)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                info!("Input closed");
                return Ok(SessionEnd::EndOfInput);
            }

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    warn!(input = line.trim(), error = %e, "Rejected input");
                    writeln!(self.output, "Invalid input: {}", e)?;
                    continue;
                }
            };

            match command {
                Command::Move(mv) => self.play(&mv)?,
                Command::Help => writeln!(self.output, "{}", HELP)?,
                Command::Board => self.show_board()?,
                Command::Json => {
                    let snapshot = Snapshot {
                        current_player: self.game.current_player,
                        turn_number: self.game.turn_number,
                        board: &self.game.board,
                    };
                    writeln!(self.output, "{}", serde_json::to_string_pretty(&snapshot)?)?;
                }
                Command::Quit => {
                    info!("Player quit");
                    return Ok(SessionEnd::Quit);
                }
            }
        }
    }

    fn play(&mut self, mv: &Move) -> anyhow::Result<()> {
        let player = self.game.current_player;

        match self.game.apply_move(player, mv) {
            Ok(events) => {
                for event in &events {
                    debug!(?event, "Move applied");
                    self.describe(event)?;
                }
                self.show_board()
            }
            Err(e) => {
                warn!(%player, error = %e, "Move rejected");
                writeln!(self.output, "Error: {}", e)?;
                Ok(())
            }
        }
    }

    fn describe(&mut self, event: &GameEvent) -> anyhow::Result<()> {
        match event {
            GameEvent::MarblesPushed { victim, from, .. } => {
                writeln!(self.output, "Pushed {} {} marble(s)", from.len(), victim)?;
            }
            GameEvent::MarbleEjected {
                color,
                total_ejected,
                ..
            } => {
                writeln!(
                    self.output,
                    "A {} marble was pushed off the board ({} lost)",
                    color, total_ejected
                )?;
            }
            GameEvent::MarblesMoved { .. }
            | GameEvent::TurnEnded { .. }
            | GameEvent::GameWon { .. } => {}
        }
        Ok(())
    }

    fn show_board(&mut self) -> anyhow::Result<()> {
        write!(self.output, "{}", render_board(&self.game.board))?;
        Ok(())
    }
}
