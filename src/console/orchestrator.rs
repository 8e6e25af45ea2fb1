//! Game orchestration between the human and the computer.

use super::players::Player;
use crate::games::tictactoe::{Game, GameStatus, Mark};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info, instrument};

/// Orchestrates one console game between two players.
pub struct Orchestrator<W> {
    game: Game,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator. `first` makes the opening move.
    pub fn new(human: Box<dyn Player>, computer: Box<dyn Player>, first: Mark, out: W) -> Self {
        Self {
            game: Game::with_first(first),
            human,
            computer,
            out,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the orchestrator, returning the console writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the game loop until a win or draw.
    #[instrument(skip(self), fields(human = %self.human.name(), computer = %self.computer.name()))]
    pub fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game orchestration");
        self.print_intro()?;

        while let Some(mark) = self.game.to_move() {
            self.print_board()?;

            let player = match mark {
                Mark::Human => &mut self.human,
                Mark::Computer => {
                    writeln!(self.out, "Computer's turn ({})...", mark)?;
                    &mut self.computer
                }
            };

            debug!(player = %player.name(), "Waiting for move");
            let position = player.get_move(&self.game, &mut self.out)?;
            self.game
                .make_move(position)
                .with_context(|| format!("{} made an illegal move", player.name()))?;

            if mark == Mark::Computer {
                writeln!(self.out, "Computer chose cell {}", position.cell_number())?;
            }
        }

        self.print_board()?;
        let status = self.game.status();
        match status {
            GameStatus::Won(Mark::Human) => writeln!(self.out, "Congratulations! You (X) win!")?,
            GameStatus::Won(Mark::Computer) => writeln!(self.out, "Computer (O) wins!")?,
            GameStatus::Draw => writeln!(self.out, "It's a draw!")?,
            GameStatus::InProgress => {}
        }
        writeln!(self.out, "Game Over.")?;
        self.out.flush()?;

        info!(status = ?status, moves = self.game.history().len(), "Game finished");
        Ok(status)
    }

    fn print_intro(&mut self) -> Result<()> {
        writeln!(self.out, "Welcome to Tic Tac Toe!")?;
        writeln!(self.out, "You are Player X, Computer is Player O.")?;
        writeln!(self.out, "Enter a number (1-9) corresponding to the cell:")?;
        write!(self.out, "{}", Game::new().board())?;
        Ok(())
    }

    fn print_board(&mut self) -> Result<()> {
        writeln!(self.out)?;
        write!(self.out, "{}", self.game.board())?;
        writeln!(self.out)?;
        Ok(())
    }
}
