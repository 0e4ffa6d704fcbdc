//! Square occupancy.

use crate::{Color, Piece};

/// What stands on a square: nothing, or exactly one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupant {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Occupant {
    /// Returns the piece on the square, if any.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Occupant::Empty => None,
            Occupant::Occupied(p) => Some(p),
        }
    }

    /// Returns true if no piece stands on the square.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    /// Returns the color of the occupying piece, if any.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Occupant::Empty => None,
            Occupant::Occupied(p) => Some(p.color),
        }
    }

    /// Returns true if the square holds a piece of the given color.
    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }
}

impl From<Option<Piece>> for Occupant {
    fn from(piece: Option<Piece>) -> Self {
        match piece {
            Some(p) => Occupant::Occupied(p),
            None => Occupant::Empty,
        }
    }
}

impl From<Piece> for Occupant {
    fn from(piece: Piece) -> Self {
        Occupant::Occupied(piece)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PieceKind;

    #[test]
    fn empty_occupant() {
        let o = Occupant::default();
        assert!(o.is_empty());
        assert_eq!(o.piece(), None);
        assert_eq!(o.color(), None);
    }

    #[test]
    fn occupied_occupant() {
        let rook = Piece::new(PieceKind::Rook, Color::Black);
        let o = Occupant::from(rook);
        assert!(!o.is_empty());
        assert_eq!(o.piece(), Some(rook));
        assert!(o.is_color(Color::Black));
        assert!(!o.is_color(Color::White));
    }
}
