//! Tic-tac-toe rules and the minimax opponent.

pub mod evaluate;
mod game;
pub mod minimax;
mod position;
pub mod rules;
pub mod selector;
mod types;

pub use evaluate::{DRAW_SCORE, LOSS_SCORE, Score, WIN_SCORE, evaluate};
pub use game::{Game, GameError, GameStatus};
pub use minimax::{SearchOutcome, search, search_with_stats};
pub use position::Position;
pub use rules::{available_moves, check_winner, has_won, is_full};
pub use selector::{SelectError, best_move, score_moves};
pub use types::{Board, BoardParseError, Mark, Square};
