//! Position report for the `solve` command.

use crate::games::tictactoe::{Board, Square, best_move, check_winner, is_full, score_moves};
use anyhow::Result;
use rand::Rng;
use std::io::Write;
use tracing::instrument;

/// Writes `board`, the score of every computer move and the move the
/// computer would play.
///
/// `rng` only matters on an empty board, where the opening is random.
#[instrument(skip_all)]
pub fn write_solution<W: Write, R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
    out: &mut W,
) -> Result<()> {
    write!(out, "{board}")?;

    if let Some(winner) = check_winner(board) {
        writeln!(out, "Game already won by {winner}")?;
        return Ok(());
    }
    if is_full(board) {
        writeln!(out, "Board is full: draw")?;
        return Ok(());
    }

    if board.squares().iter().all(|s| *s == Square::Empty) {
        writeln!(out, "Empty board: the computer opens on a random cell")?;
    } else {
        for (pos, score) in score_moves(board) {
            writeln!(out, "cell {} ({}): {:+}", pos.cell_number(), pos, score)?;
        }
    }

    let chosen = best_move(board, rng)?;
    writeln!(out, "Computer plays cell {} ({})", chosen.cell_number(), chosen)?;
    Ok(())
}
