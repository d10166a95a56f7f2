//! Driver configuration read from the environment.

use abalone_core::{Color, GameConfig};
use anyhow::{bail, Context};

/// Environment variable for the number of ejections needed to win
pub const MARBLES_TO_WIN_VAR: &str = "ABALONE_MARBLES_TO_WIN";

/// Environment variable for the side that moves first
pub const FIRST_PLAYER_VAR: &str = "ABALONE_FIRST_PLAYER";

/// Build the game rules from the process environment
pub fn from_env() -> anyhow::Result<GameConfig> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Build the game rules from any key lookup, falling back to the defaults
pub fn from_lookup<F>(lookup: F) -> anyhow::Result<GameConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = GameConfig::default();

    if let Some(raw) = lookup(MARBLES_TO_WIN_VAR) {
        let marbles: u32 = raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got {:?}", MARBLES_TO_WIN_VAR, raw))?;
        if marbles == 0 || marbles > abalone_core::MARBLES_PER_SIDE {
            bail!(
                "{} must be between 1 and {}, got {}",
                MARBLES_TO_WIN_VAR,
                abalone_core::MARBLES_PER_SIDE,
                marbles
            );
        }
        config.marbles_to_win = marbles;
    }

    if let Some(raw) = lookup(FIRST_PLAYER_VAR) {
        config.first_player = match raw.trim().to_ascii_lowercase().as_str() {
            "black" | "b" => Color::Black,
            "white" | "w" => Color::White,
            other => bail!("{} must be black or white, got {:?}", FIRST_PLAYER_VAR, other),
        };
    }

    Ok(config)
}
