//! Sets of squares.
//!
//! A [`SquareSet`] packs up to 64 squares into one `u64`, one bit per square
//! index. It is the result type of legal-move queries and the highlight set
//! held by a session.

use chessboard_core::Square;
use std::fmt;

/// An unordered set of squares.
///
/// Bit `n` is set when the square with index `n` (a8 = 0, h1 = 63) is a
/// member.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u64);

impl SquareSet {
    /// The empty set.
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of squares in the set.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1u64 << sq.index())) != 0
    }

    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    #[inline]
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Removes and returns the member with the lowest index.
    #[inline]
    pub fn pop_first(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Square::from_index(idx)
    }

    /// Iterates over members in index order (a8 first).
    #[inline]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self)
    }

    /// Returns the members as algebraic notation strings.
    pub fn to_notations(self) -> Vec<String> {
        self.iter().map(Square::to_notation).collect()
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        set.extend(iter);
        set
    }
}

impl Extend<Square> for SquareSet {
    fn extend<I: IntoIterator<Item = Square>>(&mut self, iter: I) {
        for sq in iter {
            self.insert(sq);
        }
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for SquareSet {
    /// Draws the set as a grid, rank 8 at the top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let marked = Square::at(row, col).is_some_and(|sq| self.contains(sq));
                write!(f, "{} ", if marked { 'X' } else { '.' })?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

/// Iterator over the squares in a [`SquareSet`].
pub struct SquareSetIter(SquareSet);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.len();
        (count, Some(count))
    }
}

impl ExactSizeIterator for SquareSetIter {}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SquareSetIter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn insert_and_contains() {
        let mut set = SquareSet::EMPTY;
        assert!(set.is_empty());
        set.insert(sq("a3"));
        set.insert(sq("c3"));
        set.insert(sq("a3"));
        assert_eq!(set.len(), 2);
        assert!(set.contains(sq("a3")));
        assert!(!set.contains(sq("b3")));
        set.clear();
        assert_eq!(set, SquareSet::EMPTY);
    }

    #[test]
    fn iterator_reports_exact_len() {
        let set: SquareSet = Square::all().collect();
        assert_eq!(set.len(), 64);
        assert_eq!(set.iter().len(), 64);
    }

    #[test]
    fn iterates_in_index_order() {
        let set: SquareSet = [sq("h1"), sq("a8"), sq("e4")].into_iter().collect();
        let squares: Vec<String> = set.to_notations();
        assert_eq!(squares, vec!["a8", "e4", "h1"]);
    }

    #[test]
    fn grid_display() {
        let set: SquareSet = [Square::A8].into_iter().collect();
        let text = set.to_string();
        assert!(text.starts_with("8 X . . . . . . . "));
        assert!(text.ends_with("  a b c d e f g h"));
    }
}
