//! Named board coordinates.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the nine cells of the board.
///
/// Variants are declared in row-major order, so iterating them (via
/// [`strum::IntoEnumIterator`] or [`Position::ALL`]) visits row 0 left to
/// right, then row 1, then row 2. The search relies on that order for
/// tie-breaking.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Row-major index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from its row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Zero-based `(row, col)` pair.
    pub fn coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Creates a position from zero-based coordinates.
    ///
    /// Returns `None` when either coordinate is outside `0..3`.
    #[instrument]
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= 3 || col >= 3 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_iteration_is_row_major() {
        let coords: Vec<_> = Position::iter().map(Position::coords).collect();
        let expected: Vec<_> = (0..3)
            .flat_map(|row| (0..3).map(move |col| (row, col)))
            .collect();
        assert_eq!(coords, expected);
        assert!(Position::iter().eq(Position::ALL));
    }

    #[test]
    fn test_coords_roundtrip() {
        for pos in Position::ALL {
            let (row, col) = pos.coords();
            assert_eq!(Position::from_coords(row, col), Some(pos));
        }
    }

    #[test]
    fn test_from_coords_out_of_range() {
        assert_eq!(Position::from_coords(3, 0), None);
        assert_eq!(Position::from_coords(0, 3), None);
        assert_eq!(Position::from_coords(usize::MAX, usize::MAX), None);
    }
}
