//! Move selection for the computer player.

use super::evaluate::Score;
use super::minimax::minimax;
use super::rules::available_moves;
use super::{Board, Mark, Position};
use derive_more::{Display, Error};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument, warn};

/// Errors from [`best_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SelectError {
    /// Selection was asked for on a full board.
    #[display("No moves available on a full board")]
    NoMovesAvailable,
}

/// Scores every legal computer move on `board`, in row-major order.
///
/// Each score is the minimax value after the computer plays that square
/// with the human to reply.
#[instrument(skip(board))]
pub fn score_moves(board: &Board) -> Vec<(Position, Score)> {
    let mut scratch = board.clone();
    let mut nodes = 0;

    let scores: Vec<_> = available_moves(&scratch)
        .into_iter()
        .map(|pos| {
            scratch.place(pos, Mark::Computer);
            let score = minimax(&mut scratch, false, &mut nodes);
            scratch.clear(pos);
            (pos, score)
        })
        .collect();

    debug!(candidates = scores.len(), nodes, "Scored root moves");
    scores
}

/// Picks the computer's move on `board`.
///
/// On an empty board the opening square is drawn uniformly from `rng`
/// instead of searched, so games do not all open the same way. Otherwise
/// the move with the strictly highest minimax score wins, the first one in
/// row-major order on ties, and `rng` is not touched.
///
/// # Errors
///
/// Returns [`SelectError::NoMovesAvailable`] if the board is full.
#[instrument(skip(board, rng))]
pub fn best_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Position, SelectError> {
    let moves = available_moves(board);

    if moves.len() == Position::ALL.len() {
        let opening = random_pick(&moves, rng)?;
        debug!(position = ?opening, "Random opening move");
        return Ok(opening);
    }

    let mut best: Option<(Position, Score)> = None;
    for (pos, score) in score_moves(board) {
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    match best {
        Some((pos, score)) => {
            debug!(position = ?pos, score, "Selected move");
            Ok(pos)
        }
        None => {
            warn!(remaining = moves.len(), "No best move found, picking at random");
            random_pick(&moves, rng)
        }
    }
}

fn random_pick<R: Rng + ?Sized>(moves: &[Position], rng: &mut R) -> Result<Position, SelectError> {
    moves
        .choose(rng)
        .copied()
        .ok_or(SelectError::NoMovesAvailable)
}
