//! The 3x3 board value.

use crate::position::Position;
use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values. Every transition returns a new board, so
/// search nodes never share or mutate one another's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Gets the cell at a named position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// True iff `row` and `col` are on the board and the cell there is empty.
    ///
    /// Out-of-range coordinates are an ordinary `false`.
    pub fn is_legal_move(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Returns a copy of this board with `mark` placed at `(row, col)`.
    ///
    /// Legality is the caller's job: an occupied target is overwritten, and
    /// out-of-range coordinates leave the copy unchanged.
    pub fn apply_move(&self, row: usize, col: usize, mark: Mark) -> Board {
        let mut next = *self;
        if let Some(cell) = next.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = Cell::Marked(mark);
        }
        next
    }

    /// Same as [`Board::apply_move`] for a named position.
    pub fn with_move(&self, pos: Position, mark: Mark) -> Board {
        self.apply_move(pos.row(), pos.col(), mark)
    }

    /// Every empty cell, in row-major order.
    pub fn legal_moves(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.cell(*pos).is_empty())
            .collect()
    }

    /// Number of non-empty cells.
    pub fn marked_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Relabels every `X` as `O` and vice versa.
    pub fn swap_marks(&self) -> Board {
        let mut next = *self;
        for cell in next.cells.iter_mut().flatten() {
            if let Cell::Marked(mark) = *cell {
                *cell = Cell::Marked(mark.opponent());
            }
        }
        next
    }
}

/// Three lines of three cells, `.` for empty.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The string did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),

    /// A character is neither a mark nor an empty-cell marker.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCell(#[error(not(source))] char),
}

/// Parses nine cells in row-major order.
///
/// `X`/`O` (any case) are marks; `.`, `_`, `-` and space are empty cells.
/// `/`, `|` and line breaks may separate rows and are ignored.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !matches!(c, '/' | '|' | '\n' | '\r'))
            .map(|c| match c {
                '.' | '_' | '-' | ' ' => Ok(Cell::Empty),
                other => Mark::from_symbol(other)
                    .map(Cell::Marked)
                    .ok_or(ParseBoardError::InvalidCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != 9 {
            return Err(ParseBoardError::WrongCellCount(cells.len()));
        }

        let mut board = Board::new();
        for (pos, cell) in Position::ALL.iter().zip(cells) {
            board.cells[pos.row()][pos.col()] = cell;
        }
        Ok(board)
    }
}
