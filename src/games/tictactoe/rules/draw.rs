//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::moves::available_moves;

/// Checks if the board is full (no empty squares left).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    available_moves(board).is_empty()
}
