//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search and the game loop share one definition.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::is_full;
pub use moves::available_moves;
pub use win::{check_winner, has_won};
