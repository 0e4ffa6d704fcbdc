//! Errors for malformed square references.

use thiserror::Error;

/// Errors raised when converting between grid coordinates and notation.
///
/// These indicate a caller bug (a position outside the board or a
/// malformed square name) and are never clamped or recovered from.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordError {
    #[error("invalid coordinate: row {row}, col {col} (expected 0-7)")]
    InvalidCoordinate { row: i32, col: i32 },

    #[error("invalid square notation: '{0}'")]
    InvalidNotation(String),
}
