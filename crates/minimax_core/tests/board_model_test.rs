//! Tests for the board model and rules.

use minimax_core::{Board, Cell, Mark, Outcome, Position, evaluate};

/// Every assignment of {empty, X, O} to the nine cells.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut board = Board::new();
        for pos in Position::ALL {
            match code % 3 {
                1 => board = board.with_move(pos, Mark::X),
                2 => board = board.with_move(pos, Mark::O),
                _ => {}
            }
            code /= 3;
        }
        board
    })
}

/// True if `mark` owns a line passing through `pos`.
fn completes_line(board: &Board, pos: Position, mark: Mark) -> bool {
    let (row, col) = pos.coords();
    let owns = |r: usize, c: usize| board.get(r, c) == Some(Cell::Marked(mark));
    let row_line = (0..3).all(|c| owns(row, c));
    let col_line = (0..3).all(|r| owns(r, col));
    let diag = row == col && (0..3).all(|i| owns(i, i));
    let anti = row + col == 2 && (0..3).all(|i| owns(i, 2 - i));
    row_line || col_line || diag || anti
}

#[test]
fn test_legal_moves_are_the_empty_cells_in_row_major_order() {
    for board in all_boards() {
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 9 - board.marked_count());
        assert!(moves.windows(2).all(|w| w[0] < w[1]), "{board}");
        for pos in &moves {
            assert_eq!(board.cell(*pos), Cell::Empty);
            assert!(board.is_legal_move(pos.row(), pos.col()));
        }
    }
}

#[test]
fn test_filling_the_last_cell_finishes_the_game() {
    for board in all_boards().filter(|b| b.marked_count() == 8) {
        if evaluate(&board) != Outcome::InProgress {
            continue;
        }
        let moves = board.legal_moves();
        let &[last] = moves.as_slice() else {
            panic!("expected exactly one empty cell:\n{board}");
        };
        for mark in [Mark::X, Mark::O] {
            let filled = board.with_move(last, mark);
            let expected = if completes_line(&filled, last, mark) {
                Outcome::Win(mark)
            } else {
                Outcome::Draw
            };
            assert_eq!(evaluate(&filled), expected, "\n{filled}");
        }
    }
}

#[test]
fn test_out_of_range_moves_are_rejected() {
    let board = Board::new();
    for (row, col) in [(3, 0), (0, 3), (3, 3), (10, 1), (usize::MAX, 0)] {
        assert!(!board.is_legal_move(row, col));
    }
}

#[test]
fn test_scenario_full_board_draw() {
    // B A B / A A B / A B A with A = X, B = O
    let board: Board = "OXO/XXO/XOX".parse().unwrap();
    assert_eq!(evaluate(&board), Outcome::Draw);
}

#[test]
fn test_scenario_top_row_computer_win() {
    // B B B / A A _ / _ _ A
    let board: Board = "OOO/XX./..X".parse().unwrap();
    assert_eq!(evaluate(&board), Outcome::Win(Mark::O));
}

#[test]
fn test_lines_checked_in_fixed_order() {
    // Only impossible boards can hold two complete lines, but the order of
    // the checks still decides which one is reported.
    let rows: Board = "OOO/.../XXX".parse().unwrap();
    assert_eq!(evaluate(&rows), Outcome::Win(Mark::O));

    let rows: Board = "XXX/.../OOO".parse().unwrap();
    assert_eq!(evaluate(&rows), Outcome::Win(Mark::X));

    let columns: Board = "O.X/O.X/O.X".parse().unwrap();
    assert_eq!(evaluate(&columns), Outcome::Win(Mark::O));
}
