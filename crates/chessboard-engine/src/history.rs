//! Move history with a replay cursor.
//!
//! [`GameHistory`] keeps the ordered log of committed moves and a cursor
//! pointing at the move whose resulting position is on display. Boards are
//! never stored per move; any position is rebuilt by replaying the log from
//! the starting board, so the board is always a pure function of the
//! history prefix.

use crate::turn::current_turn;
use crate::Board;
use chessboard_core::{Color, Move};

/// Replays `moves` in order on top of `start`.
///
/// Each step relocates whatever stands on the move's origin to its
/// destination. Moves are assumed to have been legal when committed and are
/// not validated again.
pub fn replay(start: &Board, moves: &[Move]) -> Board {
    moves
        .iter()
        .fold(*start, |board, m| board.with_move(m.from, m.to))
}

/// An ordered log of committed moves plus a cursor into it.
///
/// The cursor is `None` for the starting position, or `Some(i)` for the
/// position immediately after move `i`. Collaborators that speak in signed
/// indices use `-1` for the starting position; see
/// [`goto_index`](GameHistory::goto_index) and
/// [`cursor_index`](GameHistory::cursor_index).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    /// Board the log is replayed from.
    start: Board,
    /// Committed moves, oldest first.
    moves: Vec<Move>,
    /// Index of the move whose position is on display.
    cursor: Option<usize>,
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl GameHistory {
    /// Creates an empty history starting from the standard position.
    pub fn new() -> Self {
        Self::with_start(Board::initial())
    }

    /// Creates an empty history starting from a custom board.
    pub fn with_start(start: Board) -> Self {
        GameHistory {
            start,
            moves: Vec::new(),
            cursor: None,
        }
    }

    /// Resumes a persisted game from the standard position.
    ///
    /// The cursor lands on the latest move (or the starting position if
    /// `moves` is empty).
    pub fn from_moves(moves: Vec<Move>) -> Self {
        let cursor = moves.len().checked_sub(1);
        tracing::debug!(moves = moves.len(), "resuming history");
        GameHistory {
            start: Board::initial(),
            moves,
            cursor,
        }
    }

    /// Returns the starting board.
    pub fn start(&self) -> &Board {
        &self.start
    }

    /// Returns every committed move, including any beyond the cursor.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the moves up to and including the cursor.
    pub fn applied(&self) -> &[Move] {
        match self.cursor {
            Some(i) => &self.moves[..=i],
            None => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the cursor (`None` = starting position).
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Returns the cursor as a signed index, `-1` for the starting position.
    pub fn cursor_index(&self) -> isize {
        self.cursor.map_or(-1, |i| i as isize)
    }

    /// Returns true if the cursor is on the last committed move (or the
    /// history is empty).
    pub fn is_at_latest(&self) -> bool {
        self.cursor == self.moves.len().checked_sub(1)
    }

    /// Returns the move at the cursor.
    pub fn current_move(&self) -> Option<&Move> {
        self.cursor.and_then(|i| self.moves.get(i))
    }

    /// Returns the side to move at the cursor.
    pub fn turn(&self) -> Color {
        current_turn(&self.moves, self.cursor)
    }

    /// Appends a move and moves the cursor onto it.
    ///
    /// If the cursor is behind the end of the log, the moves after it are
    /// discarded first (branch-and-overwrite). Returns how many moves were
    /// discarded.
    pub fn commit(&mut self, m: Move) -> usize {
        let keep = self.cursor.map_or(0, |i| i + 1);
        let discarded = self.moves.len().saturating_sub(keep);
        if discarded > 0 {
            tracing::debug!(keep, discarded, "branching history");
            self.moves.truncate(keep);
        }

        if let Some(prev) = self.moves.last() {
            if m.timestamp < prev.timestamp {
                tracing::warn!(
                    previous = %prev.timestamp,
                    committed = %m.timestamp,
                    "move timestamp precedes the previous move"
                );
            }
        }

        tracing::debug!(piece = %m.piece, from = %m.from, to = %m.to, "commit");
        self.moves.push(m);
        self.cursor = Some(self.moves.len() - 1);
        discarded
    }

    /// Resolves a signed index to a cursor.
    ///
    /// `-1` is the starting position and `0..len` address moves. Anything
    /// else is clamped to the latest move (or the starting position when the
    /// log is empty) rather than rejected, so UI navigation can't fail.
    pub fn resolve_index(&self, index: isize) -> Option<usize> {
        match usize::try_from(index) {
            Ok(i) if i < self.moves.len() => Some(i),
            _ if index == -1 => None,
            _ => self.moves.len().checked_sub(1),
        }
    }

    /// Moves the cursor to `index` and returns the board at that point.
    ///
    /// Out-of-range indices are clamped as described in
    /// [`resolve_index`](GameHistory::resolve_index).
    pub fn goto_index(&mut self, index: isize) -> Board {
        self.cursor = self.resolve_index(index);
        tracing::trace!(requested = index, cursor = ?self.cursor, "goto");
        self.board()
    }

    /// Returns the board at the cursor.
    pub fn board(&self) -> Board {
        replay(&self.start, self.applied())
    }

    /// Returns the board at `index` without moving the cursor.
    pub fn board_at(&self, index: isize) -> Board {
        let end = self.resolve_index(index).map_or(0, |i| i + 1);
        replay(&self.start, &self.moves[..end])
    }

    /// Drops every move and returns to the starting position.
    pub fn clear(&mut self) {
        self.moves.clear();
        self.cursor = None;
    }
}
