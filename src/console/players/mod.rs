//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::games::tictactoe::{Game, Position};
use anyhow::Result;
use std::io::Write;

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// `out` is the console the player may prompt on. The returned position
    /// must be empty on the game's board.
    fn get_move(&mut self, game: &Game, out: &mut dyn Write) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
