//! Text commands typed at the console.
//!
//! A move is written as the coordinates of one to three marbles followed by
//! a direction: `q1 r1 [q2 r2 [q3 r3]] dir`. The direction is an index 0-5
//! or one of `tl`, `tr`, `r`, `br`, `bl`, `l`.

use abalone_core::{Direction, HexCoord, Move, MoveError, MAX_MARBLES};
use thiserror::Error;

/// Something the player asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    Help,
    Board,
    Json,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Empty input")]
    Empty,

    #[error("Not a number: {0:?}")]
    NotANumber(String),

    #[error("Expected 1 to 3 coordinate pairs and a direction, got {0} values")]
    WrongArity(usize),

    #[error("Unknown direction {0:?} (use 0-5 or tl, tr, r, br, bl, l)")]
    BadDirection(String),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Parse one line of input
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [] => return Err(InputError::Empty),
        [word] => match word.to_ascii_lowercase().as_str() {
            "help" | "h" | "?" => return Ok(Command::Help),
            "board" => return Ok(Command::Board),
            "json" => return Ok(Command::Json),
            "quit" | "exit" | "q" => return Ok(Command::Quit),
            _ => {}
        },
        _ => {}
    }

    parse_move(&tokens).map(Command::Move)
}

fn parse_move(tokens: &[&str]) -> Result<Move, InputError> {
    let pairs = tokens.len() / 2;
    if tokens.len() % 2 == 0 || pairs == 0 || pairs > MAX_MARBLES {
        return Err(InputError::WrongArity(tokens.len()));
    }

    let (coords, dir) = tokens.split_at(tokens.len() - 1);
    let mut marbles = Vec::with_capacity(pairs);
    for pair in coords.chunks(2) {
        marbles.push(HexCoord::new(parse_int(pair[0])?, parse_int(pair[1])?));
    }

    let direction = parse_direction(dir[0])?;
    Ok(Move::new(marbles, direction)?)
}

fn parse_int(token: &str) -> Result<i32, InputError> {
    token
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_string()))
}

/// Parse a direction index or short name
pub fn parse_direction(token: &str) -> Result<Direction, InputError> {
    if let Ok(index) = token.parse::<usize>() {
        return Direction::from_index(index)
            .ok_or_else(|| InputError::BadDirection(token.to_string()));
    }

    Direction::ALL
        .into_iter()
        .find(|d| d.short_name().eq_ignore_ascii_case(token))
        .ok_or_else(|| InputError::BadDirection(token.to_string()))
}

/// Usage text shown by `help`
pub const HELP: &str = "\
Enter a move as: q1 r1 [q2 r2 [q3 r3]] direction
  direction: 0=TL 1=TR 2=R 3=BR 4=BL 5=L (number or name)
  example:   0 2 tl    moves the marble at (0, 2) up-left
Other commands: board, json, help, quit";
