//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::position::Position;
use crate::types::{Cell, Mark};

/// Winning lines in evaluation order: rows, columns, then diagonals.
pub(crate) const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line (in [`LINES`] order) holding three
/// identical marks, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| match board.cell(a) {
        Cell::Marked(mark) if board.cell(b) == board.cell(a) && board.cell(c) == board.cell(a) => {
            Some(mark)
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let board = line
                    .iter()
                    .fold(Board::new(), |b, &pos| b.with_move(pos, mark));
                assert_eq!(check_winner(&board), Some(mark), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "..O/.O./O..".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX/.../...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
