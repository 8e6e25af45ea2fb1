//! Human player reading cell numbers or names from a line-based console.

use super::Player;
use crate::games::tictactoe::{Game, Position};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Human player typing a cell number (1-9) or a cell name such as
/// `center` per line.
pub struct HumanPlayer<I> {
    name: String,
    input: I,
}

impl<I: BufRead> HumanPlayer<I> {
    /// Creates a new human player reading from `input`.
    pub fn new(name: impl Into<String>, input: I) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

impl<I: BufRead> Player for HumanPlayer<I> {
    fn get_move(&mut self, game: &Game, out: &mut dyn Write) -> Result<Position> {
        let mut line = String::new();
        loop {
            write!(out, "Enter your move (number 1-9): ")?;
            out.flush()?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed before {} moved", self.name);
            }

            let Some(position) = Position::from_label_or_number(&line) else {
                warn!(input = %line.trim(), "Rejected move input");
                writeln!(
                    out,
                    "Invalid input. Please enter a number between 1 and 9 or a cell name."
                )?;
                continue;
            };

            if !game.board().is_empty(position) {
                writeln!(out, "Cell already taken. Choose an empty cell.")?;
                continue;
            }

            debug!(position = ?position, "Human chose position");
            return Ok(position);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
