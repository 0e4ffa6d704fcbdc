//! Board square representation and the coordinate codec.
//!
//! Squares are addressed internally by a (row, column) pair where row 0 is
//! rank 8 and column 0 is file `a`, matching the way a board is drawn top to
//! bottom. The external form is two-character algebraic notation.

use crate::CoordError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A square on the chess board, indexed 0-63 as `row * 8 + col`.
///
/// - a8 = 0, b8 = 1, ..., h8 = 7
/// - a1 = 56, ..., h1 = 63
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square(u8);

impl Square {
    /// Creates a square from signed grid coordinates.
    ///
    /// Fails with [`CoordError::InvalidCoordinate`] if either value is
    /// outside 0-7.
    pub fn new(row: i32, col: i32) -> Result<Self, CoordError> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square((row * 8 + col) as u8))
        } else {
            Err(CoordError::InvalidCoordinate { row, col })
        }
    }

    /// Creates a square from in-range coordinates, or `None`.
    #[inline]
    pub const fn at(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub fn from_notation(s: &str) -> Result<Self, CoordError> {
        let invalid = || CoordError::InvalidNotation(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        let col = file - b'a';
        let row = b'8' - rank;
        Ok(Square(row * 8 + col))
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0 = rank 8, 7 = rank 1).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the column (0 = file a, 7 = file h).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the `(row, col)` pair.
    #[inline]
    pub const fn coordinates(self) -> (u8, u8) {
        (self.row(), self.col())
    }

    /// Returns the file letter ('a'-'h').
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col()) as char
    }

    /// Returns the rank digit ('1'-'8').
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row()) as char
    }

    /// Returns the algebraic notation for this square.
    pub fn to_notation(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }

    /// Returns the square displaced by the given row and column deltas,
    /// or `None` if that falls off the board.
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Square::new(self.row() as i32 + d_row, self.col() as i32 + d_col).ok()
    }

    /// Returns true for light squares (a8 and h1 are light).
    #[inline]
    pub const fn is_light(self) -> bool {
        (self.row() + self.col()) % 2 == 0
    }

    /// Iterates over all 64 squares, a8 first, h1 last.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    // Back-rank squares
    pub const A8: Square = Square(0);
    pub const B8: Square = Square(1);
    pub const C8: Square = Square(2);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const F8: Square = Square(5);
    pub const G8: Square = Square(6);
    pub const H8: Square = Square(7);
    pub const A1: Square = Square(56);
    pub const B1: Square = Square(57);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);
}

/// Converts grid coordinates to algebraic notation.
pub fn to_notation(row: i32, col: i32) -> Result<String, CoordError> {
    Square::new(row, col).map(Square::to_notation)
}

/// Converts algebraic notation to grid coordinates.
pub fn to_coordinate(notation: &str) -> Result<(u8, u8), CoordError> {
    Square::from_notation(notation).map(Square::coordinates)
}

impl FromStr for Square {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_notation(s)
    }
}

impl TryFrom<String> for Square {
    type Error = CoordError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Square::from_notation(&s)
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> Self {
        sq.to_notation()
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_notation())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
