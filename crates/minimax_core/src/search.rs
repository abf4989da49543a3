//! Exhaustive minimax search.
//!
//! The game tree is never materialised. Each node is a call frame holding
//! its own [`Board`] copy, and the whole tree is gone once the top-level call
//! returns. There is no pruning, no depth limit and no caching between calls:
//! every reachable leaf is visited once per search.

use crate::board::Board;
use crate::position::Position;
use crate::rules::{Outcome, evaluate};
use crate::types::Mark;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

/// Utility of a finished game the computer ([`Mark::O`]) won.
pub const WIN: i32 = 1;
/// Utility of a drawn game.
pub const DRAW: i32 = 0;
/// Utility of a finished game the human ([`Mark::X`]) won.
pub const LOSS: i32 = -1;

/// A candidate move for the computer and its minimax utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ScoredMove {
    /// Where the computer would play.
    pub position: Position,
    /// Utility of the resulting board with the human to move.
    pub utility: i32,
}

/// Every root move the computer considered, with search statistics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Analysis {
    /// Candidates in row-major order.
    pub moves: Vec<ScoredMove>,
    /// Boards visited across all candidate searches.
    pub nodes: u64,
}

impl Analysis {
    /// The move the computer plays.
    ///
    /// Candidates are scanned in row-major order and only a strictly better
    /// utility replaces the current best, so ties go to the earliest cell.
    pub fn best(&self) -> Option<ScoredMove> {
        let mut best_score = LOSS - 1;
        let mut best = None;
        for candidate in &self.moves {
            if candidate.utility > best_score {
                best_score = candidate.utility;
                best = Some(*candidate);
            }
        }
        best
    }
}

/// Generates one successor board per legal move of `mark`, in row-major order.
pub fn successors(board: &Board, mark: Mark) -> Vec<(Position, Board)> {
    board
        .legal_moves()
        .into_iter()
        .map(|pos| (pos, board.with_move(pos, mark)))
        .collect()
}

/// Minimax value of `board` with `side_to_move` about to play.
///
/// Returns [`WIN`], [`DRAW`] or [`LOSS`] from the computer's point of view.
/// The computer ([`Mark::O`]) maximises, the human ([`Mark::X`]) minimises.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn minimax_utility(board: &Board, side_to_move: Mark) -> i32 {
    let mut nodes = 0;
    utility(board, side_to_move, &mut nodes)
}

fn utility(board: &Board, side_to_move: Mark, nodes: &mut u64) -> i32 {
    *nodes += 1;

    match evaluate(board) {
        Outcome::Win(Mark::X) => return LOSS,
        Outcome::Win(Mark::O) => return WIN,
        Outcome::Draw => return DRAW,
        Outcome::InProgress => {}
    }

    let next = side_to_move.opponent();
    let scores = successors(board, side_to_move)
        .into_iter()
        .map(|(_, child)| utility(&child, next, nodes));

    // An in-progress board always has at least one empty cell.
    let best = match side_to_move {
        Mark::O => scores.max(),
        Mark::X => scores.min(),
    };
    best.unwrap_or(DRAW)
}

/// Scores every legal computer move on `board`.
///
/// A board that is already won, drawn or full yields an empty analysis.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze_moves(board: &Board) -> Analysis {
    let outcome = evaluate(board);
    if outcome.is_terminal() {
        debug!(%outcome, "Board is terminal, nothing to search");
        return Analysis::default();
    }

    let mut nodes = 0;
    let moves = successors(board, Mark::O)
        .into_iter()
        .map(|(position, child)| {
            let scored = ScoredMove::new(position, utility(&child, Mark::X, &mut nodes));
            trace!(position = %scored.position, utility = scored.utility, "Scored candidate");
            scored
        })
        .collect();

    Analysis { moves, nodes }
}

/// Chooses the computer's move on `board`.
///
/// Returns `None` if the game is already over, since there is nothing to
/// decide. Otherwise every legal move is searched to the end of the game and
/// the row-major-earliest move with the best utility wins.
#[instrument(skip(board), fields(board = %board))]
pub fn select_computer_move(board: &Board) -> Option<Position> {
    let analysis = analyze_moves(board);
    let best = analysis.best()?;
    info!(
        position = %best.position,
        utility = best.utility,
        nodes = analysis.nodes,
        "Computer selected move"
    );
    Some(best.position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_utilities() {
        assert_eq!(minimax_utility(&board("XXX/OO./..."), Mark::O), LOSS);
        assert_eq!(minimax_utility(&board("OOO/XX./..X"), Mark::X), WIN);
        assert_eq!(minimax_utility(&board("OXO/XXO/XOX"), Mark::O), DRAW);
    }

    #[test]
    fn test_one_ply_lookahead() {
        // O to move completes the middle row.
        assert_eq!(minimax_utility(&board("X.X/OO./X.."), Mark::O), WIN);
        // X to move completes the top row.
        assert_eq!(minimax_utility(&board("XX./OO./..."), Mark::X), LOSS);
    }

    #[test]
    fn test_successors_in_row_major_order() {
        let start = board("X../.O./...");
        let children = successors(&start, Mark::X);
        let positions: Vec<_> = children.iter().map(|(pos, _)| *pos).collect();
        assert_eq!(positions, start.legal_moves());
        for (pos, child) in children {
            assert_eq!(child.marked_count(), start.marked_count() + 1);
            assert_eq!(child.cell(pos), crate::Cell::Marked(Mark::X));
        }
    }

    #[test]
    fn test_best_prefers_earliest_on_ties() {
        let analysis = Analysis {
            moves: vec![
                ScoredMove::new(Position::TopLeft, DRAW),
                ScoredMove::new(Position::TopCenter, WIN),
                ScoredMove::new(Position::Center, WIN),
            ],
            nodes: 3,
        };
        assert_eq!(
            analysis.best(),
            Some(ScoredMove::new(Position::TopCenter, WIN))
        );
    }

    #[test]
    fn test_best_accepts_all_losing_moves() {
        let analysis = Analysis {
            moves: vec![
                ScoredMove::new(Position::BottomLeft, LOSS),
                ScoredMove::new(Position::BottomRight, LOSS),
            ],
            nodes: 2,
        };
        assert_eq!(analysis.best().map(|m| m.position), Some(Position::BottomLeft));
    }

    #[test]
    fn test_no_move_on_finished_board() {
        assert_eq!(select_computer_move(&board("XXX/OO./...")), None);
        assert_eq!(select_computer_move(&board("OXO/XXO/XOX")), None);
        assert!(analyze_moves(&board("OXO/XXO/XOX")).moves.is_empty());
    }

    #[test]
    fn test_last_cell_is_played() {
        assert_eq!(
            select_computer_move(&board("XOX/XOO/OX.")),
            Some(Position::BottomRight)
        );
    }
}
