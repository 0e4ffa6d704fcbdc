//! Move records.

use crate::{Color, CoordError, Piece, PieceKind, Square};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A committed move.
///
/// Records the piece as it was before moving, the origin and destination
/// squares, and when the move was made. Moves are never changed once
/// created; the board after a move is derived by replaying history.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "MoveRecord", try_from = "MoveRecord")]
pub struct Move {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub timestamp: DateTime<Utc>,
}

impl Move {
    /// Creates a move stamped with the current time.
    pub fn new(piece: Piece, from: Square, to: Square) -> Self {
        Self::at(piece, from, to, Utc::now())
    }

    /// Creates a move with an explicit timestamp.
    #[inline]
    pub const fn at(piece: Piece, from: Square, to: Square, timestamp: DateTime<Utc>) -> Self {
        Move {
            piece,
            from,
            to,
            timestamp,
        }
    }

    /// Returns the color of the side that made this move.
    #[inline]
    pub const fn color(&self) -> Color {
        self.piece.color
    }

    /// Returns `(row delta, col delta)` from origin to destination.
    pub fn delta(&self) -> (i32, i32) {
        (
            self.to.row() as i32 - self.from.row() as i32,
            self.to.col() as i32 - self.from.col() as i32,
        )
    }

    /// Returns true if this is a king moving two files along its row.
    pub fn is_castling(&self) -> bool {
        let (d_row, d_col) = self.delta();
        self.piece.kind == PieceKind::King && d_row == 0 && d_col.abs() == 2
    }

    /// Returns true if the king moved toward the h-file while castling.
    pub fn is_kingside_castle(&self) -> bool {
        self.is_castling() && self.to.col() > self.from.col()
    }

    /// For a castling king move, returns the rook's `(from, to)` squares:
    /// h→f kingside, a→d queenside, on the king's row.
    pub fn castling_rook_squares(&self) -> Option<(Square, Square)> {
        if !self.is_castling() {
            return None;
        }
        let row = self.from.row();
        let (rook_from, rook_to) = if self.is_kingside_castle() {
            (7, 5)
        } else {
            (0, 3)
        };
        Some((Square::at(row, rook_from)?, Square::at(row, rook_to)?))
    }

    /// Returns coordinate notation for this move (e.g., "e2e4").
    pub fn to_uci(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {})", self.piece.to_fen_char(), self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

/// The persisted form of a [`Move`].
///
/// Serialized as
/// `{"pieceType":"pawn","pieceColor":"white","fromSquare":"e2","toSquare":"e4","timestamp":1700000000000}`
/// with the timestamp in milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    pub piece_type: PieceKind,
    pub piece_color: Color,
    pub from_square: String,
    pub to_square: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl From<Move> for MoveRecord {
    fn from(m: Move) -> Self {
        MoveRecord {
            piece_type: m.piece.kind,
            piece_color: m.piece.color,
            from_square: m.from.to_notation(),
            to_square: m.to.to_notation(),
            timestamp: m.timestamp,
        }
    }
}

impl TryFrom<MoveRecord> for Move {
    type Error = CoordError;

    fn try_from(record: MoveRecord) -> Result<Self, Self::Error> {
        Ok(Move {
            piece: Piece::new(record.piece_type, record.piece_color),
            from: Square::from_notation(&record.from_square)?,
            to: Square::from_notation(&record.to_square)?,
            timestamp: record.timestamp,
        })
    }
}
