//! Minimax tic-tac-toe library.
//!
//! A console tic-tac-toe where the computer picks moves by exhaustive
//! minimax search.
//!
//! # Architecture
//!
//! - **Games**: board model, evaluator, minimax search and move selector
//! - **Console**: line-based human player, computer player and the turn loop
//! - **Config**: TOML settings for a console session
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{Board, Position, best_move};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! // Computer (O) completes its top row.
//! let board: Board = "OO_/XX_/___".parse().unwrap();
//! let mut rng = StdRng::seed_from_u64(0);
//! assert_eq!(best_move(&board, &mut rng), Ok(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console front end
pub use console::{ComputerPlayer, HumanPlayer, Orchestrator, Player, write_solution};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, DRAW_SCORE, Game, GameError, GameStatus, LOSS_SCORE, Mark, Position,
    Score, SearchOutcome, SelectError, Square, WIN_SCORE, available_moves,
    best_move, check_winner, evaluate, has_won, is_full, score_moves, search, search_with_stats,
};
