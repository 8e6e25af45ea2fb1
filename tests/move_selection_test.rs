//! Tests for the computer's move selection.

use minimax_tictactoe::{
    Board, LOSS_SCORE, Mark, Position, SelectError, WIN_SCORE, best_move, has_won, score_moves,
    search,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn board(text: &str) -> Board {
    text.parse().expect("valid board")
}

#[test]
fn test_completes_own_row() {
    let board = board("OO_/XX_/___");
    let mut rng = StdRng::seed_from_u64(0);
    let chosen = best_move(&board, &mut rng).unwrap();
    assert_eq!((chosen.row(), chosen.col()), (0, 2));
}

#[test]
fn test_blocks_column_threat() {
    let board = board("X__/X__/_O_");
    let mut rng = StdRng::seed_from_u64(0);
    let chosen = best_move(&board, &mut rng).unwrap();
    assert_eq!((chosen.row(), chosen.col()), (2, 0));
}

#[test]
fn test_double_threat_blocks_one_diagonal() {
    // X holds both diagonals' corners and the center: no reply saves the game,
    // so the first square in scan order is taken, which blocks 3-5-7.
    let board = board("XOX/OXO/___");
    let mut rng = StdRng::seed_from_u64(0);
    let chosen = best_move(&board, &mut rng).unwrap();
    assert_eq!(chosen, Position::BottomLeft);

    for (_, score) in score_moves(&board) {
        assert_eq!(score, LOSS_SCORE);
    }
}

#[test]
fn test_chosen_move_never_allows_immediate_loss_when_avoidable() {
    for text in ["X__/X__/_O_", "XX_/_O_/___", "X_X/_O_/___", "_X_/_O_/_X_"] {
        let mut board = board(text);
        let chosen = best_move(&board, &mut StdRng::seed_from_u64(9)).unwrap();
        board.place(chosen, Mark::Computer);

        for reply in minimax_tictactoe::available_moves(&board) {
            let mut after = board.clone();
            after.place(reply, Mark::Human);
            assert!(!has_won(&after, Mark::Human), "{text}: {chosen} loses to {reply}");
        }
    }
}

#[test]
fn test_prefers_win_over_block() {
    // Both sides threaten; winning now beats blocking.
    let board = board("XX_/OO_/X__");
    let chosen = best_move(&board, &mut StdRng::seed_from_u64(0)).unwrap();
    assert_eq!(chosen, Position::MiddleRight);
    assert_eq!(search(&board, true), WIN_SCORE);
}

#[test]
fn test_deterministic_on_non_empty_board() {
    let board = board("X__/_O_/__X");
    let expected = best_move(&board, &mut StdRng::seed_from_u64(1)).unwrap();
    for seed in 2..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(best_move(&board, &mut rng), Ok(expected));
    }
}

#[test]
fn test_full_board_has_no_move() {
    let board = board("XOX/XOO/OXX");
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(best_move(&board, &mut rng), Err(SelectError::NoMovesAvailable));
}

#[test]
fn test_opening_move_is_uniform() {
    const TRIALS: usize = 9_000;
    let board = Board::new();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut counts = [0usize; 9];

    for _ in 0..TRIALS {
        let pos = best_move(&board, &mut rng).unwrap();
        counts[pos.to_index()] += 1;
    }

    // Expected 1000 per cell, standard deviation about 30.
    for (index, count) in counts.iter().enumerate() {
        assert!(
            (850..=1150).contains(count),
            "cell {} drawn {count} times",
            index + 1
        );
    }
}
