//! Side-to-move derivation.

use chessboard_core::{Color, Move};

/// Returns the color to move after the move at `cursor`.
///
/// White moves first: with no cursor (the initial position), an empty
/// history, or a cursor past the end, the turn follows the last move that
/// exists, falling back to White. Otherwise it is the opposite of the color
/// that made the move at `cursor`.
///
/// The turn is not checked by the legality rules; callers reject moves by
/// the inactive color before asking whether a move is legal.
pub fn current_turn(history: &[Move], cursor: Option<usize>) -> Color {
    cursor
        .and_then(|i| history.get(i).or_else(|| history.last()))
        .map_or(Color::White, |m| m.color().opposite())
}
