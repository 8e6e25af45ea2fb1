//! Static evaluation of a board from the computer's point of view.

use super::rules::has_won;
use super::{Board, Mark};

/// Game-theoretic value of a position. Positive favours the computer.
pub type Score = i32;

/// Score of a board the computer has won.
pub const WIN_SCORE: Score = 10;

/// Score of a board the human has won.
pub const LOSS_SCORE: Score = -10;

/// Score of a draw or an undecided position.
pub const DRAW_SCORE: Score = 0;

/// Scores `board`: [`WIN_SCORE`] if the computer holds a line,
/// [`LOSS_SCORE`] if the human does, [`DRAW_SCORE`] otherwise.
///
/// Both sides holding a line cannot arise from alternating play. Debug
/// builds assert it; release builds let the computer's line take
/// precedence.
pub fn evaluate(board: &Board) -> Score {
    let computer_won = has_won(board, Mark::Computer);
    let human_won = has_won(board, Mark::Human);
    debug_assert!(
        !(computer_won && human_won),
        "both sides hold a line:\n{board}"
    );

    if computer_won {
        WIN_SCORE
    } else if human_won {
        LOSS_SCORE
    } else {
        DRAW_SCORE
    }
}

/// True for ±[`WIN_SCORE`], the only scores that end a search branch early.
pub fn is_decisive(score: Score) -> bool {
    score == WIN_SCORE || score == LOSS_SCORE
}
