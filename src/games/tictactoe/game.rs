//! Turn sequencing and end-of-game detection.

use super::rules::{check_winner, is_full};
use super::{Board, Mark, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

/// Errors that can occur when making a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The game already ended.
    #[display("Game is already over")]
    GameOver,
    /// Square is already occupied.
    #[display("{_0} is already occupied")]
    SquareOccupied(#[error(not(source))] Position),
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game with the human moving first.
    pub fn new() -> Self {
        Self::with_first(Mark::Human)
    }

    /// Creates a new game where `first` makes the opening move.
    #[instrument]
    pub fn with_first(first: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Mark> {
        if self.is_over() { None } else { Some(self.to_move) }
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    /// Returns the positions played so far, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Places the mark of the side to move at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] after a win or draw and
    /// [`GameError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<GameStatus, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(GameError::SquareOccupied(pos));
        }

        let mark = self.to_move;
        self.board.place(pos, mark);
        self.history.push(pos);
        self.to_move = mark.opponent();
        self.update_status();

        debug!(status = ?self.status, moves = self.history.len(), "Move applied");
        Ok(self.status)
    }

    fn update_status(&mut self) {
        if let Some(winner) = check_winner(&self.board) {
            info!(winner = ?winner, "Game won");
            self.status = GameStatus::Won(winner);
        } else if is_full(&self.board) {
            info!("Game drawn");
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
