//! Keyboard helpers for the game screen.

use crossterm::event::KeyCode;
use minimax_core::Position;

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = cursor.coords();
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_coords(row, col).unwrap_or(cursor)
}

/// Converts a typed 1-based digit to a zero-based coordinate.
///
/// Any digit from `1` to `9` is accepted so that out-of-range entries reach
/// the legality check and get reported, as a typo should be.
pub fn digit_coordinate(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(d @ 1..=9) => Some(d as usize - 1),
        _ => None,
    }
}
