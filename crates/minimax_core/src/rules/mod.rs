//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here stores state: the outcome
//! is recomputed from the cells every time it is asked for.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::board::Board;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Outcome {
    /// No line is complete and at least one cell is empty.
    #[display("in progress")]
    InProgress,
    /// A mark owns a complete line.
    #[display("{_0} wins")]
    Win(Mark),
    /// The board is full and nobody won.
    #[display("draw")]
    Draw,
}

impl Outcome {
    /// True for a win or a draw.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// The winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

/// Evaluates a board.
///
/// Lines are checked rows first, then columns, then the two diagonals. A
/// complete line wins even on a full board; a full board without one is a
/// draw.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
