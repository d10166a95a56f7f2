//! Abalone console game.

use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod controller;
mod input;
mod render;

use abalone_core::GameState;
use controller::Controller;

fn main() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so the board stays readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = config::from_env()?;
    info!(
        marbles_to_win = config.marbles_to_win,
        first_player = %config.first_player,
        "Starting Abalone"
    );

    let stdin = io::stdin();
    let mut controller =
        Controller::new(GameState::with_config(config), stdin.lock(), io::stdout());

    let end = controller.run()?;
    info!(?end, turns = controller.game().turn_number, "Session over");

    Ok(())
}
