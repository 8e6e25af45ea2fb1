//! Console front end: players, the turn loop and the solve report.

mod orchestrator;
mod players;
mod solve;

pub use orchestrator::Orchestrator;
pub use players::{ComputerPlayer, HumanPlayer, Player};
pub use solve::write_solution;
