//! Move generation.

use super::super::{Board, Position};

/// Returns every empty square in row-major order.
///
/// The order is fixed: the move selector breaks ties by it and the random
/// opener draws from it.
pub fn available_moves(board: &Board) -> Vec<Position> {
    Position::valid_moves(board)
}
