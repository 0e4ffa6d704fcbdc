//! Move legality and history replay for an interactive chessboard.
//!
//! This crate provides:
//! - [`Board`] - immutable snapshots of all 64 squares
//! - [`SquareSet`] - compact sets of squares for legal-move queries
//! - [`RuleSet`] and [`StandardRules`] - per-piece movement legality
//! - [`GameHistory`] - the committed move log with a replay cursor
//! - [`current_turn`] - side-to-move derivation
//! - [`Session`] - interactive state for a UI: selection, highlights, and
//!   a change counter
//! - basic algebraic formatting of committed moves
//!
//! # Example
//!
//! ```
//! use chessboard_core::{Color, Square};
//! use chessboard_engine::{DropOutcome, Session};
//!
//! let mut session = Session::new();
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//!
//! session.select(e2).unwrap();
//! assert!(matches!(session.drop_on(e4), DropOutcome::Moved(_)));
//! assert_eq!(session.turn(), Color::Black);
//!
//! // Scrub back to the starting position.
//! session.goto_index(-1);
//! assert_eq!(session.turn(), Color::White);
//! ```

mod board;
pub mod history;
pub mod notation;
pub mod rules;
mod session;
mod square_set;
mod turn;

pub use board::{Board, PlacementError, START_PLACEMENT};
pub use history::{replay, GameHistory};
pub use notation::{format_history, format_move, MoveEntry};
pub use rules::{RuleSet, StandardRules};
pub use session::{DropOutcome, SelectError, Selection, Session};
pub use square_set::{SquareSet, SquareSetIter};
pub use turn::current_turn;

use chessboard_core::{Move, Piece, Square};

/// Returns true if `piece` may move from `from` to `to` under the standard
/// rules. See [`RuleSet::is_legal`].
pub fn is_legal(piece: Piece, from: Square, to: Square, board: &Board, history: &[Move]) -> bool {
    StandardRules.is_legal(piece, from, to, board, history)
}

/// Returns every legal destination of `piece` on `from` under the standard
/// rules. See [`RuleSet::legal_moves`].
pub fn legal_moves(piece: Piece, from: Square, board: &Board, history: &[Move]) -> SquareSet {
    StandardRules.legal_moves(piece, from, board, history)
}
