//! Exhaustive minimax search.
//!
//! The search is full-width and depth-first with no pruning and no
//! transposition table. Scores are not discounted by depth, so a win found
//! deep in the tree is worth exactly as much as an immediate one.

use super::evaluate::{Score, evaluate, is_decisive};
use super::rules::{available_moves, is_full};
use super::{Board, Mark};

/// Result of a search together with the number of positions visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Minimax value of the searched position.
    pub score: Score,
    /// Nodes visited, the root included.
    pub nodes: u64,
}

/// Returns the minimax value of `board`.
///
/// `maximizing` is true when the computer is to move. The caller's board
/// is never modified; the search backtracks on a private copy.
pub fn search(board: &Board, maximizing: bool) -> Score {
    search_with_stats(board, maximizing).score
}

/// Like [`search`], also reporting how many positions were visited.
pub fn search_with_stats(board: &Board, maximizing: bool) -> SearchOutcome {
    let mut scratch = board.clone();
    let mut nodes = 0;
    let score = minimax(&mut scratch, maximizing, &mut nodes);
    debug_assert_eq!(&scratch, board, "search must restore every square");
    SearchOutcome { score, nodes }
}

/// Searches `board` in place. Every mark placed is cleared before the
/// function returns, so siblings see the same board.
pub(super) fn minimax(board: &mut Board, maximizing: bool, nodes: &mut u64) -> Score {
    *nodes += 1;

    let score = evaluate(board);
    if is_decisive(score) || is_full(board) {
        return score;
    }

    let mark = if maximizing { Mark::Computer } else { Mark::Human };
    let mut best = if maximizing { Score::MIN } else { Score::MAX };

    for pos in available_moves(board) {
        board.place(pos, mark);
        let child = minimax(board, !maximizing, nodes);
        board.clear(pos);

        if (maximizing && child > best) || (!maximizing && child < best) {
            best = child;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::evaluate::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE};

    #[test]
    fn test_terminal_board_returns_evaluation() {
        let won: Board = "OOO/XX_/X__".parse().unwrap();
        let outcome = search_with_stats(&won, false);
        assert_eq!(outcome.score, WIN_SCORE);
        assert_eq!(outcome.nodes, 1);

        let drawn: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(search(&drawn, true), DRAW_SCORE);
    }

    #[test]
    fn test_human_to_move_takes_immediate_win() {
        let board: Board = "XX_/OO_/___".parse().unwrap();
        assert_eq!(search(&board, false), LOSS_SCORE);
    }

    #[test]
    fn test_computer_to_move_takes_immediate_win() {
        let board: Board = "XX_/OO_/X__".parse().unwrap();
        assert_eq!(search(&board, true), WIN_SCORE);
    }

    #[test]
    fn test_forced_loss_is_not_discounted() {
        // X threatens both diagonals; any O reply loses a move later.
        let board: Board = "XOX/OXO/___".parse().unwrap();
        assert_eq!(search(&board, true), LOSS_SCORE);
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board: Board = "X__/_O_/__X".parse().unwrap();
        let before = board.clone();
        search(&board, true);
        assert_eq!(board, before);
    }

    #[test]
    fn test_in_place_search_restores_board() {
        let mut board: Board = "X__/___/___".parse().unwrap();
        let before = board.clone();
        let mut nodes = 0;
        minimax(&mut board, true, &mut nodes);
        assert_eq!(board, before);
        assert!(nodes > 1);
    }
}
