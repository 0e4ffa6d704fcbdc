//! Board snapshots.

use chessboard_core::{Color, Occupant, Piece, PieceKind, Square};
use std::fmt;
use thiserror::Error;

use crate::SquareSet;

/// Errors that can occur when parsing a board placement string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 ranks, got {0}")]
    RankCount(usize),

    #[error("invalid character '{ch}' in rank {rank}")]
    InvalidCharacter { ch: char, rank: u8 },

    #[error("rank {rank} has {count} squares, expected 8")]
    SquareCount { rank: u8, count: u32 },
}

/// The standard starting arrangement in placement notation.
pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An immutable snapshot of every square's occupant.
///
/// All 64 squares are always present. Boards are never edited in place:
/// [`Board::with_move`] and friends return a new value, so a snapshot handed
/// to a renderer or kept for history scrubbing can't change underneath it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Occupant; 64],
}

impl Board {
    /// Creates the standard starting position.
    pub fn initial() -> Self {
        let mut squares = [Occupant::Empty; 64];
        for color in [Color::White, Color::Black] {
            let back = color.back_row() as usize;
            let pawns = color.pawn_row() as usize;
            for (col, kind) in BACK_ROW.iter().enumerate() {
                squares[back * 8 + col] = Occupant::Occupied(Piece::new(*kind, color));
                squares[pawns * 8 + col] = Occupant::Occupied(Piece::new(PieceKind::Pawn, color));
            }
        }
        Board { squares }
    }

    /// Parses the piece-placement field of a FEN string.
    ///
    /// Ranks are listed from 8 down to 1, separated by `/`; digits count
    /// empty squares.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::RankCount(ranks.len()));
        }

        let mut squares = [Occupant::Empty; 64];
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 8 - row as u8;
            let mut col = 0u32;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += digit;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if col < 8 {
                        squares[row * 8 + col as usize] = Occupant::Occupied(piece);
                    }
                    col += 1;
                } else {
                    return Err(PlacementError::InvalidCharacter { ch: c, rank });
                }
            }
            if col != 8 {
                return Err(PlacementError::SquareCount { rank, count: col });
            }
        }

        Ok(Board { squares })
    }

    /// Returns the piece-placement field of a FEN string for this board.
    pub fn to_placement(&self) -> String {
        let mut out = String::new();
        for row in 0..8 {
            let mut empty_count = 0;
            for col in 0..8 {
                match self.squares[row * 8 + col] {
                    Occupant::Occupied(piece) => {
                        if empty_count > 0 {
                            out.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        out.push(piece.to_fen_char());
                    }
                    Occupant::Empty => empty_count += 1,
                }
            }
            if empty_count > 0 {
                out.push_str(&empty_count.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }

    /// Returns what stands on the given square.
    #[inline]
    pub fn occupant(&self, sq: Square) -> Occupant {
        self.squares[sq.index() as usize]
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.occupant(sq).piece()
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.occupant(sq).is_empty()
    }

    /// Returns a copy of this board with one square replaced.
    #[must_use]
    pub fn with(&self, sq: Square, occupant: impl Into<Occupant>) -> Self {
        let mut next = *self;
        next.squares[sq.index() as usize] = occupant.into();
        next
    }

    /// Returns a copy of this board with the occupant of `from` relocated to
    /// `to`, replacing whatever stood there.
    ///
    /// Moving from an empty square yields an identical board. No legality
    /// checks are made.
    #[must_use]
    pub fn with_move(&self, from: Square, to: Square) -> Self {
        match self.occupant(from) {
            Occupant::Empty => *self,
            occupied if from == to => self.with(to, occupied),
            occupied => self.with(to, occupied).with(from, Occupant::Empty),
        }
    }

    /// Iterates over every square with its occupant, a8 first.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Occupant)> + '_ {
        Square::all().map(move |sq| (sq, self.occupant(sq)))
    }

    /// Iterates over occupied squares and their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter()
            .filter_map(|(sq, occupant)| occupant.piece().map(|p| (sq, p)))
    }

    /// Returns the set of occupied squares.
    pub fn occupied(&self) -> SquareSet {
        self.pieces().map(|(sq, _)| sq).collect()
    }

    /// Renders the board as text, rank 8 at the top.
    ///
    /// With `unicode` pieces are drawn as chess glyphs, otherwise as FEN
    /// letters. With `coordinates` rank digits and file letters frame the
    /// grid.
    pub fn render(&self, unicode: bool, coordinates: bool) -> String {
        let mut out = String::new();
        for row in 0..8u8 {
            if coordinates {
                out.push((b'8' - row) as char);
                out.push(' ');
            }
            for col in 0..8u8 {
                let idx = (row * 8 + col) as usize;
                let c = match self.squares[idx] {
                    Occupant::Occupied(p) if unicode => p.symbol(),
                    Occupant::Occupied(p) => p.to_fen_char(),
                    Occupant::Empty => '.',
                };
                out.push(c);
                if col < 7 {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        if coordinates {
            out.push_str("  a b c d e f g h\n");
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(false, true))
    }
}
