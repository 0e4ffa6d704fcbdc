//! Standard piece-movement rules.

use super::{has_moved_from, is_path_clear, RuleSet};
use crate::Board;
use chessboard_core::{Move, Piece, PieceKind, Square};

/// Standard chess movement rules.
///
/// - Knight jumps, sliding rook/bishop/queen moves with path clearance
/// - Pawn pushes (double step from the home row if never moved) and
///   diagonal captures
/// - King steps and castling when king and rook have never moved
///
/// Promotion, en passant, and check are not modeled.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl RuleSet for StandardRules {
    fn initial_board(&self) -> Board {
        Board::initial()
    }

    fn is_legal(
        &self,
        piece: Piece,
        from: Square,
        to: Square,
        board: &Board,
        history: &[Move],
    ) -> bool {
        if from == to {
            return true;
        }

        if board.occupant(to).is_color(piece.color) {
            return false;
        }

        let d_row = to.row() as i32 - from.row() as i32;
        let d_col = to.col() as i32 - from.col() as i32;

        match piece.kind {
            PieceKind::Knight => is_knight_move(d_row, d_col),
            PieceKind::Rook => is_rook_move(from, to, board),
            PieceKind::Bishop => is_bishop_move(from, to, board),
            PieceKind::Queen => is_rook_move(from, to, board) || is_bishop_move(from, to, board),
            PieceKind::Pawn => is_pawn_move(piece, from, to, board, history),
            PieceKind::King => {
                (d_row.abs() <= 1 && d_col.abs() <= 1)
                    || is_castling_move(piece, from, to, board, history)
            }
        }
    }
}

fn is_knight_move(d_row: i32, d_col: i32) -> bool {
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
}

fn is_rook_move(from: Square, to: Square, board: &Board) -> bool {
    let straight = (from.row() == to.row()) != (from.col() == to.col());
    straight && is_path_clear(from, to, board)
}

fn is_bishop_move(from: Square, to: Square, board: &Board) -> bool {
    let d_row = (to.row() as i32 - from.row() as i32).abs();
    let d_col = (to.col() as i32 - from.col() as i32).abs();
    d_row == d_col && d_row > 0 && is_path_clear(from, to, board)
}

fn is_pawn_move(piece: Piece, from: Square, to: Square, board: &Board, history: &[Move]) -> bool {
    let dir = piece.color.pawn_direction();
    let forward = (to.row() as i32 - from.row() as i32) * dir;
    let sideways = (to.col() as i32 - from.col() as i32).abs();
    let target = board.occupant(to);

    match (forward, sideways) {
        (1, 0) => target.is_empty(),
        (2, 0) => {
            from.row() == piece.color.pawn_row()
                && !has_moved_from(history, from)
                && target.is_empty()
                && is_path_clear(from, to, board)
        }
        (1, 1) => target.is_color(piece.color.opposite()),
        _ => false,
    }
}

fn is_castling_move(piece: Piece, from: Square, to: Square, board: &Board, history: &[Move]) -> bool {
    let d_row = to.row() as i32 - from.row() as i32;
    let d_col = to.col() as i32 - from.col() as i32;
    if d_row != 0 || d_col.abs() != 2 {
        return false;
    }

    let rook_col = if d_col > 0 { 7 } else { 0 };
    let Some(rook_square) = Square::at(from.row(), rook_col) else {
        return false;
    };

    if has_moved_from(history, from) || has_moved_from(history, rook_square) {
        return false;
    }

    let rook = Piece::new(PieceKind::Rook, piece.color);
    board.piece_at(rook_square) == Some(rook) && is_path_clear(from, to, board)
}
