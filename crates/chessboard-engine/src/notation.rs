//! Basic algebraic notation for committed moves.
//!
//! Examples: "e4", "exd5", "Nf3", "Bxc6", "O-O", "O-O-O".
//! There is no disambiguation and no check suffix.

use crate::history::GameHistory;
use crate::Board;
use chessboard_core::{Color, Move};

/// Formats a move against the board as it stood before the move.
pub fn format_move(m: &Move, before: &Board) -> String {
    if m.is_castling() {
        return if m.is_kingside_castle() {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        };
    }

    let is_capture = before.occupant(m.to).is_color(m.color().opposite());
    let mut san = String::new();

    match m.piece.kind.san_char() {
        Some(letter) => {
            san.push(letter);
            if is_capture {
                san.push('x');
            }
        }
        None => {
            if is_capture {
                san.push(m.from.file_char());
                san.push('x');
            }
        }
    }

    san.push_str(&m.to.to_notation());
    san
}

/// One line of a formatted move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// Position of the move in the history.
    pub index: usize,
    /// Side that made the move.
    pub color: Color,
    /// The move in basic algebraic notation.
    pub notation: String,
    /// True for the rook relocation committed right after a castling king
    /// move; list views usually fold it into the "O-O" entry.
    pub companion: bool,
}

/// Formats every committed move, each against the board replayed up to it.
pub fn format_history(history: &GameHistory) -> Vec<MoveEntry> {
    let mut board = *history.start();
    let mut entries = Vec::with_capacity(history.len());
    let mut previous: Option<&Move> = None;

    for (index, m) in history.moves().iter().enumerate() {
        let companion = previous
            .filter(|p| p.color() == m.color())
            .and_then(|p| p.castling_rook_squares())
            == Some((m.from, m.to));

        entries.push(MoveEntry {
            index,
            color: m.color(),
            notation: format_move(m, &board),
            companion,
        });

        board = board.with_move(m.from, m.to);
        previous = Some(m);
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chessboard_core::{Piece, PieceKind, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn mv(kind: PieceKind, color: Color, from: &str, to: &str) -> Move {
        Move::new(Piece::new(kind, color), sq(from), sq(to))
    }

    #[test]
    fn pawn_push() {
        let m = mv(PieceKind::Pawn, Color::White, "e2", "e4");
        assert_eq!(format_move(&m, &Board::initial()), "e4");
    }

    #[test]
    fn pawn_capture_names_origin_file() {
        let board = Board::from_placement("8/8/8/3p4/4P3/8/8/8").unwrap();
        let m = mv(PieceKind::Pawn, Color::White, "e4", "d5");
        assert_eq!(format_move(&m, &board), "exd5");
    }

    #[test]
    fn piece_moves() {
        let m = mv(PieceKind::Knight, Color::White, "g1", "f3");
        assert_eq!(format_move(&m, &Board::initial()), "Nf3");

        let board = Board::from_placement("8/8/2n5/8/8/8/8/5B2").unwrap();
        let capture = mv(PieceKind::Bishop, Color::White, "f1", "c6");
        assert_eq!(format_move(&capture, &board), "Bxc6");
    }

    #[test]
    fn castling() {
        let board = Board::from_placement("8/8/8/8/8/8/8/R3K2R").unwrap();
        let short = mv(PieceKind::King, Color::White, "e1", "g1");
        let long = mv(PieceKind::King, Color::White, "e1", "c1");
        assert_eq!(format_move(&short, &board), "O-O");
        assert_eq!(format_move(&long, &board), "O-O-O");
    }

    #[test]
    fn history_list() {
        let mut h = GameHistory::new();
        h.commit(mv(PieceKind::Pawn, Color::White, "e2", "e4"));
        h.commit(mv(PieceKind::Pawn, Color::Black, "d7", "d5"));
        h.commit(mv(PieceKind::Pawn, Color::White, "e4", "d5"));
        h.commit(mv(PieceKind::Queen, Color::Black, "d8", "d5"));

        let notations: Vec<String> = format_history(&h).into_iter().map(|e| e.notation).collect();
        assert_eq!(notations, vec!["e4", "d5", "exd5", "Qxd5"]);
    }

    #[test]
    fn history_marks_castling_companion() {
        let start = Board::from_placement("r3k3/8/8/8/8/8/8/4K2R").unwrap();
        let mut h = GameHistory::with_start(start);
        h.commit(mv(PieceKind::King, Color::White, "e1", "g1"));
        h.commit(mv(PieceKind::Rook, Color::White, "h1", "f1"));
        h.commit(mv(PieceKind::Rook, Color::Black, "a8", "d8"));

        let entries = format_history(&h);
        assert_eq!(entries[0].notation, "O-O");
        assert!(!entries[0].companion);
        assert_eq!(entries[1].notation, "Rf1");
        assert!(entries[1].companion);
        assert_eq!(entries[2].notation, "Rd8");
        assert!(!entries[2].companion);
        assert_eq!(entries[2].color, Color::Black);
    }
}
