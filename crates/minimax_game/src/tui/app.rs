//! Application state and logic.

use super::input::{digit_coordinate, move_cursor};
use crate::game::{Game, MoveRequest};
use crate::orchestrator::GameEvent;
use crossterm::event::KeyCode;
use minimax_core::{Mark, Outcome, Position};
use tracing::debug;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Send a move request to the orchestrator.
    Submit(MoveRequest),
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
    pending_row: Option<usize>,
    awaiting_reply: bool,
    computer_thinking: bool,
    status_message: String,
}

impl App {
    /// Creates a new application for a game opened by `first`.
    pub fn new(first: Mark) -> Self {
        let mut app = Self {
            game: Game::new(first),
            cursor: Position::Center,
            pending_row: None,
            awaiting_reply: false,
            computer_thinking: false,
            status_message: String::new(),
        };
        app.status_message = app.prompt();
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True while the human may enter a move.
    pub fn is_human_turn(&self) -> bool {
        self.game.is_in_progress()
            && self.game.to_move() == Mark::X
            && !self.awaiting_reply
            && !self.computer_thinking
    }

    fn prompt(&self) -> String {
        match self.pending_row {
            Some(row) => format!("Row {}. Column? (1-3)", row + 1),
            None if self.is_human_turn() => {
                "Your turn. Row? (1-3), or arrows + Enter".to_string()
            }
            None => "Waiting for the computer...".to_string(),
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Action> {
        match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('r') if !self.game.is_in_progress() => Some(Action::Restart),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
                None
            }
            KeyCode::Esc => {
                self.pending_row = None;
                self.status_message = self.prompt();
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') if self.is_human_turn() => {
                self.pending_row = None;
                Some(self.submit(MoveRequest::from(self.cursor)))
            }
            KeyCode::Char(c) if self.is_human_turn() => {
                let value = digit_coordinate(c)?;
                match self.pending_row.take() {
                    None => {
                        self.pending_row = Some(value);
                        self.status_message = self.prompt();
                        None
                    }
                    Some(row) => Some(self.submit(MoveRequest::new(row, value))),
                }
            }
            _ => None,
        }
    }

    fn submit(&mut self, request: MoveRequest) -> Action {
        debug!(%request, "Submitting human move");
        self.awaiting_reply = true;
        self.status_message = format!("Playing {}...", request);
        Action::Submit(request)
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::ComputerThinking => {
                self.computer_thinking = true;
                self.status_message = "Computer is thinking...".to_string();
            }
            GameEvent::MoveMade { mark, game } => {
                self.game = game;
                self.computer_thinking = false;
                if mark == Mark::X {
                    self.awaiting_reply = false;
                }
                if let Some(pos) = game.last_move() {
                    if mark == Mark::O {
                        self.cursor = pos;
                    }
                    debug!(%mark, position = %pos, "Move applied to UI state");
                }
                self.status_message = self.prompt();
            }
            GameEvent::IllegalMove(err) => {
                self.awaiting_reply = false;
                self.status_message = format!("Invalid move! {}. Try again.", err);
            }
            GameEvent::GameOver(outcome) => {
                self.computer_thinking = false;
                self.awaiting_reply = false;
                self.status_message = format!(
                    "{} Press 'r' to restart or 'q' to quit.",
                    result_message(outcome)
                );
            }
        }
    }
}

/// The closing line for a finished game.
pub fn result_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win(Mark::X) => "You win :-)",
        Outcome::Win(Mark::O) => "Computer wins!",
        Outcome::Draw => "It's a draw!",
        Outcome::InProgress => "Game in progress.",
    }
}
