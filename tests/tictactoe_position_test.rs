//! Tests for tic-tac-toe positions and board parsing.

use minimax_tictactoe::{Board, Game, GameError, GameStatus, Mark, Position, Square};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Mark::Human));
    board.set(Position::Center, Square::Occupied(Mark::Computer));

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_parsed_board_matches_played_game() {
    let mut game = Game::new();
    for pos in [Position::TopLeft, Position::BottomCenter, Position::MiddleLeft] {
        assert_eq!(game.make_move(pos), Ok(GameStatus::InProgress));
    }
    let parsed: Board = "X__/X__/_O_".parse().unwrap();
    assert_eq!(game.board(), &parsed);
    assert_eq!(
        game.make_move(Position::TopLeft),
        Err(GameError::SquareOccupied(Position::TopLeft))
    );
}
