//! Command-line interface for minimax_tictactoe.

use clap::{Parser, Subcommand};

/// Tic-tac-toe against an exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "minimax_tictactoe")]
#[command(about = "Play tic-tac-toe against a minimax computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the console
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Seed for the computer's random opening move
        #[arg(long)]
        seed: Option<u64>,

        /// Let the computer move first
        #[arg(long)]
        computer_first: bool,
    },

    /// Score every computer move on a board and print the best one
    Solve {
        /// Board as nine cells, e.g. "XO_/X__/_O_" (X human, O computer, _ empty)
        board: String,
    },
}
