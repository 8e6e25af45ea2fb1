//! Minimax Tic-Tac-Toe - console game
//!
//! Play against the minimax computer, or ask it to solve a position.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use minimax_tictactoe::{
    Board, ComputerPlayer, GameConfig, HumanPlayer, Mark, Orchestrator, write_solution,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            seed,
            computer_first,
        } => run_play(config, seed, computer_first),
        Command::Solve { board } => {
            init_tracing(None)?;
            run_solve(&board)
        }
    }
}

/// Installs the tracing subscriber, logging to `log_file` when given so log
/// lines never interleave with the board.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .try_init();
        }
    }
    Ok(())
}

/// Play an interactive game on stdin/stdout
fn run_play(config: Option<PathBuf>, seed: Option<u64>, computer_first: bool) -> Result<()> {
    let config = match config {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    }
    .with_overrides(computer_first, seed);

    init_tracing(config.log_file().as_deref())?;
    info!(config = ?config, "Starting minimax tic-tac-toe");

    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let first = if config.computer_first() {
        Mark::Computer
    } else {
        Mark::Human
    };

    let mut orchestrator = Orchestrator::new(
        Box::new(HumanPlayer::new("Human", io::stdin().lock())),
        Box::new(ComputerPlayer::new("Computer", rng)),
        first,
        io::stdout(),
    );
    orchestrator.run()?;
    Ok(())
}

/// Print the score of each computer move and the move it would pick
#[instrument]
fn run_solve(text: &str) -> Result<()> {
    let board: Board = text
        .parse()
        .with_context(|| format!("Failed to parse board {text:?}"))?;
    write_solution(&board, &mut StdRng::from_os_rng(), &mut io::stdout().lock())
}
