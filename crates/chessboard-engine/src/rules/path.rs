//! Path clearance for sliding moves.

use crate::{Board, SquareSet};
use chessboard_core::Square;

/// Returns the squares strictly between `from` and `to`.
///
/// Only straight lines (same row, same column, or a true diagonal) have a
/// path; every other shape, including knight jumps and `from == to`, yields
/// the empty set.
pub fn squares_between(from: Square, to: Square) -> SquareSet {
    let d_row = to.row() as i32 - from.row() as i32;
    let d_col = to.col() as i32 - from.col() as i32;

    let straight = (d_row == 0) != (d_col == 0);
    let diagonal = d_row != 0 && d_row.abs() == d_col.abs();
    if !straight && !diagonal {
        return SquareSet::EMPTY;
    }

    let step = (d_row.signum(), d_col.signum());
    let steps = d_row.abs().max(d_col.abs());
    (1..steps)
        .filter_map(|i| from.offset(step.0 * i, step.1 * i))
        .collect()
}

/// Returns true if no piece stands strictly between `from` and `to`.
pub fn is_path_clear(from: Square, to: Square, board: &Board) -> bool {
    squares_between(from, to)
        .iter()
        .all(|sq| board.is_empty(sq))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn vertical_path() {
        let between = squares_between(sq("a1"), sq("a4"));
        let mut names = between.to_notations();
        names.sort();
        assert_eq!(names, vec!["a2", "a3"]);
    }

    #[test]
    fn horizontal_path_either_direction() {
        assert_eq!(squares_between(sq("h1"), sq("e1")).len(), 2);
        assert_eq!(squares_between(sq("e1"), sq("h1")).len(), 2);
    }

    #[test]
    fn diagonal_path() {
        let mut names = squares_between(sq("c1"), sq("f4")).to_notations();
        names.sort();
        assert_eq!(names, vec!["d2", "e3"]);
    }

    #[test]
    fn adjacent_and_degenerate_paths_are_empty() {
        assert!(squares_between(sq("e2"), sq("e3")).is_empty());
        assert!(squares_between(sq("e2"), sq("e2")).is_empty());
    }

    #[test]
    fn irregular_shapes_have_no_path() {
        assert!(squares_between(sq("b1"), sq("c3")).is_empty());
        assert!(squares_between(sq("a1"), sq("c4")).is_empty());
    }

    #[test]
    fn blocked_path() {
        let board = Board::initial();
        assert!(!is_path_clear(sq("a1"), sq("a3"), &board));
        assert!(is_path_clear(sq("a2"), sq("a6"), &board));
        assert!(is_path_clear(sq("b1"), sq("c3"), &board));
    }
}
