//! Move legality.
//!
//! This module provides the [`RuleSet`] trait, the seam between the
//! interactive layer and the piece-movement rules, along with the geometric
//! helpers the rules share. [`StandardRules`] is the only implementation.
//!
//! Legality here is purely geometric: piece movement, path clearance, no
//! self-capture, and castling eligibility. Whose turn it is, and whether a
//! move leaves the mover's king attacked, are not considered. Check and
//! checkmate would need an attack map of the whole opposing side and are
//! deliberately left out of this contract.

mod path;
mod standard;

pub use path::{is_path_clear, squares_between};
pub use standard::StandardRules;

use crate::{Board, SquareSet};
use chessboard_core::{Move, Piece, Square};

/// Returns true if any move in `history` started from `sq`.
///
/// This is how "has this piece moved" is answered: pieces have no identity,
/// so a square that was ever vacated by a committed move counts as moved.
pub fn has_moved_from(history: &[Move], sq: Square) -> bool {
    history.iter().any(|m| m.from == sq)
}

/// Trait for implementing movement rules.
///
/// # Example
///
/// ```
/// use chessboard_core::{Color, Piece, PieceKind, Square};
/// use chessboard_engine::rules::{RuleSet, StandardRules};
///
/// let board = StandardRules.initial_board();
/// let knight = Piece::new(PieceKind::Knight, Color::White);
/// let targets = StandardRules.legal_moves(knight, Square::B1, &board, &[]);
/// assert_eq!(targets.len(), 2);
/// ```
pub trait RuleSet {
    /// Returns the board a new game starts from.
    fn initial_board(&self) -> Board;

    /// Returns true if `piece` may move from `from` to `to` on `board`,
    /// given the moves already committed in `history`.
    ///
    /// `from == to` is always legal (a no-op). An illegal move is a normal
    /// outcome, not an error.
    fn is_legal(&self, piece: Piece, from: Square, to: Square, board: &Board, history: &[Move])
        -> bool;

    /// Returns every destination `piece` on `from` may legally move to.
    ///
    /// Scans all 64 squares through [`is_legal`](RuleSet::is_legal). The
    /// origin itself is not reported as a destination.
    fn legal_moves(&self, piece: Piece, from: Square, board: &Board, history: &[Move]) -> SquareSet {
        Square::all()
            .filter(|&to| to != from && self.is_legal(piece, from, to, board, history))
            .collect()
    }
}
