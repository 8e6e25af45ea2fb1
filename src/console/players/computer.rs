//! Minimax computer player.

use super::Player;
use crate::games::tictactoe::{Game, Position, best_move};
use anyhow::{Context, Result};
use rand::Rng;
use std::io::Write;
use tracing::{debug, instrument};

/// Computer player that picks moves with [`best_move`].
pub struct ComputerPlayer<R> {
    name: String,
    rng: R,
}

impl<R: Rng> ComputerPlayer<R> {
    /// Creates a computer player drawing its opening move from `rng`.
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl<R: Rng> Player for ComputerPlayer<R> {
    #[instrument(skip_all, fields(ai = %self.name))]
    fn get_move(&mut self, game: &Game, _out: &mut dyn Write) -> Result<Position> {
        debug!("AI making move");
        let position = best_move(game.board(), &mut self.rng)
            .context("Computer couldn't determine a move")?;
        debug!(position = ?position, "AI chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
