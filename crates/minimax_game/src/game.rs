//! Game session state threaded by value between turns.

use derive_more::{Display, Error};
use minimax_core::{Board, Mark, Outcome, Position, evaluate, select_computer_move};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A request to mark `(row, col)`, zero-based.
///
/// Requests come straight from the player and may be off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("row {}, column {}", row.saturating_add(1), col.saturating_add(1))]
pub struct MoveRequest {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl MoveRequest {
    /// Creates a new request.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<Position> for MoveRequest {
    fn from(pos: Position) -> Self {
        Self::new(pos.row(), pos.col())
    }
}

/// Why a move request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The coordinates are not on the board.
    #[display("Row {} column {} is off the board", row.saturating_add(1), col.saturating_add(1))]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("{} is already taken", _0)]
    Occupied(#[error(not(source))] Position),

    /// The game has finished.
    #[display("Game is already over")]
    GameOver,
}

/// Complete game state: board, side to move and cached outcome.
///
/// `Game` is a `Copy` value. [`Game::play`] consumes one state and returns
/// the next, so nothing is mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Mark,
    outcome: Outcome,
    last_move: Option<Position>,
}

impl Game {
    /// Creates a new game on an empty board.
    pub fn new(first: Mark) -> Self {
        Self::from_board(Board::new(), first)
    }

    /// Resumes a game from an arbitrary board.
    pub fn from_board(board: Board, to_move: Mark) -> Self {
        Self {
            board,
            to_move,
            outcome: evaluate(&board),
            last_move: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the cell marked by the previous move.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// True while moves can still be made.
    pub fn is_in_progress(&self) -> bool {
        !self.outcome.is_terminal()
    }

    /// Plays `request` for the side to move and returns the next state.
    ///
    /// # Errors
    ///
    /// Refuses moves after the game ended, moves off the board and moves onto
    /// an occupied cell.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play(self, request: MoveRequest) -> Result<Game, MoveError> {
        if !self.is_in_progress() {
            return Err(MoveError::GameOver);
        }

        let MoveRequest { row, col } = request;
        if !self.board.is_legal_move(row, col) {
            return Err(match Position::from_coords(row, col) {
                Some(pos) => MoveError::Occupied(pos),
                None => MoveError::OutOfRange { row, col },
            });
        }

        let board = self.board.apply_move(row, col, self.to_move);
        let outcome = evaluate(&board);
        debug!(%outcome, "Move applied");

        Ok(Game {
            board,
            to_move: self.to_move.opponent(),
            outcome,
            last_move: Position::from_coords(row, col),
        })
    }

    /// The computer's choice, when it is the computer's turn in a live game.
    pub fn computer_move(&self) -> Option<MoveRequest> {
        if self.to_move != Mark::O {
            return None;
        }
        select_computer_move(&self.board).map(MoveRequest::from)
    }
}
