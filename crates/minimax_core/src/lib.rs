//! Minimax Core - pure tic-tac-toe logic and exhaustive game-tree search.
//!
//! The crate has no I/O. A front end owns the game loop and calls into two
//! entry points:
//!
//! - [`evaluate`] after every applied move, to learn whether the game ended
//! - [`select_computer_move`] once per computer turn
//!
//! The human plays [`Mark::X`] and minimises; the computer plays [`Mark::O`]
//! and maximises. Utilities are always scored from the computer's side.
//!
//! # Example
//!
//! ```
//! use minimax_core::{evaluate, select_computer_move, Board, Mark, Outcome, Position};
//!
//! let board: Board = "XX./OO./X..".parse().unwrap();
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//!
//! // The computer completes its own row instead of blocking.
//! assert_eq!(select_computer_move(&board), Some(Position::MiddleRight));
//! let board = board.with_move(Position::MiddleRight, Mark::O);
//! assert_eq!(evaluate(&board), Outcome::Win(Mark::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod position;
mod rules;
mod search;
mod types;

pub use board::{Board, ParseBoardError};
pub use position::Position;
pub use rules::{Outcome, check_winner, evaluate, is_full};
pub use search::{
    Analysis, DRAW, LOSS, ScoredMove, WIN, analyze_moves, minimax_utility, select_computer_move,
    successors,
};
pub use types::{Cell, Mark};
