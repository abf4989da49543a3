//! Minimax Game - terminal front end for tic-tac-toe against the minimax engine.
//!
//! # Architecture
//!
//! - **Game**: immutable session state; every move returns the next state
//! - **Players**: the human (fed by the UI over a channel) and the computer
//! - **Orchestrator**: alternates turns and reports [`GameEvent`]s to the UI
//! - **TUI**: ratatui rendering and keyboard input
//! - **Report**: one-shot `evaluate` and `suggest` output
//!
//! # Example
//!
//! ```
//! use minimax_game::{Game, MoveRequest};
//! use minimax_core::{Mark, Outcome};
//!
//! let game = Game::new(Mark::X).play(MoveRequest::new(1, 1)).unwrap();
//! assert_eq!(game.to_move(), Mark::O);
//!
//! let reply = game.computer_move().unwrap();
//! let game = game.play(reply).unwrap();
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod game;
mod orchestrator;
mod players;
mod report;
pub mod tui;

pub use config::{ConfigError, DEFAULT_CONFIG_PATH, FirstPlayer, GameConfig};
pub use game::{Game, MoveError, MoveRequest};
pub use orchestrator::{GameEvent, GameHandle, Orchestrator};
pub use players::{ComputerPlayer, HumanPlayer, Player};
pub use report::{compact, evaluate_report, suggest_report, utility_label};
