//! Interactive board state.
//!
//! A [`Session`] is the single owner of everything an interactive board
//! needs between input events: the move history and its cursor, the board
//! at the cursor, the piece currently picked up, and the squares it may be
//! dropped on. The UI layer holds one session and passes it by `&mut` into
//! its event handlers; every operation runs to completion before returning.
//!
//! Observers poll [`Session::version`], which increases on every change a
//! renderer could see.

use crate::history::GameHistory;
use crate::rules::{RuleSet, StandardRules};
use crate::{Board, SquareSet};
use chessboard_core::{Color, Move, Piece, Square};
use thiserror::Error;

/// The piece picked up for a move and the square it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub piece: Piece,
    pub from: Square,
}

/// Reasons a square can't be picked up.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectError {
    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("the {color} piece on {square} can't move: it is {turn} to move")]
    WrongTurn {
        square: Square,
        color: Color,
        turn: Color,
    },
}

/// What happened when a picked-up piece was put down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing was picked up.
    NoSelection,
    /// The piece was put back on its own square.
    Cancelled,
    /// The destination is not a legal move; nothing was committed.
    Rejected { from: Square, to: Square },
    /// A normal move was committed.
    Moved(Move),
    /// A castling king move and the companion rook move were committed.
    Castled { king: Move, rook: Move },
}

impl DropOutcome {
    /// Returns true if at least one move was committed.
    pub fn is_committed(&self) -> bool {
        matches!(self, DropOutcome::Moved(_) | DropOutcome::Castled { .. })
    }
}

/// Interactive board state: history, cursor, board, and selection.
#[derive(Debug, Clone)]
pub struct Session<R = StandardRules> {
    rules: R,
    history: GameHistory,
    /// Board at the history cursor.
    board: Board,
    selection: Option<Selection>,
    /// Legal destinations of the current selection.
    highlights: SquareSet,
    version: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session at the standard starting position.
    pub fn new() -> Self {
        Self::with_rules(StandardRules)
    }

    /// Resumes a persisted game with the cursor on the latest move.
    pub fn resume(moves: Vec<Move>) -> Self {
        let history = GameHistory::from_moves(moves);
        Self::from_history(StandardRules, history)
    }
}

impl<R: RuleSet> Session<R> {
    /// Creates a session at the rule set's starting position.
    pub fn with_rules(rules: R) -> Self {
        let history = GameHistory::with_start(rules.initial_board());
        Self::from_history(rules, history)
    }

    /// Creates a session over an existing history, displaying its cursor.
    pub fn from_history(rules: R, history: GameHistory) -> Self {
        let board = history.board();
        Session {
            rules,
            history,
            board,
            selection: None,
            highlights: SquareSet::EMPTY,
            version: 0,
        }
    }

    /// Returns the board at the cursor.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Returns the move at the cursor, the one a UI marks as last played.
    pub fn last_move(&self) -> Option<&Move> {
        self.history.current_move()
    }

    /// Returns the side to move at the cursor.
    pub fn turn(&self) -> Color {
        self.history.turn()
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Returns the legal destinations of the picked-up piece.
    pub fn highlights(&self) -> SquareSet {
        self.highlights
    }

    /// Returns a counter that increases on every visible change.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns true if the piece on `from` may move to `to`.
    ///
    /// Checks geometry against the board and history at the cursor; it does
    /// not consider whose turn it is.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.board.piece_at(from).is_some_and(|piece| {
            self.rules
                .is_legal(piece, from, to, &self.board, self.history.applied())
        })
    }

    /// Returns the legal destinations of the piece on `from`, or the empty
    /// set if the square is empty.
    pub fn legal_moves(&self, from: Square) -> SquareSet {
        match self.board.piece_at(from) {
            Some(piece) => {
                self.rules
                    .legal_moves(piece, from, &self.board, self.history.applied())
            }
            None => SquareSet::EMPTY,
        }
    }

    /// Picks up the piece on `square` and highlights where it may go.
    ///
    /// Only the side to move may pick up a piece. On failure the previous
    /// selection is kept.
    pub fn select(&mut self, square: Square) -> Result<SquareSet, SelectError> {
        let piece = self
            .board
            .piece_at(square)
            .ok_or(SelectError::EmptySquare(square))?;
        let turn = self.turn();
        if piece.color != turn {
            return Err(SelectError::WrongTurn {
                square,
                color: piece.color,
                turn,
            });
        }

        self.selection = Some(Selection {
            piece,
            from: square,
        });
        self.highlights = self.legal_moves(square);
        self.bump();
        tracing::trace!(%square, %piece, targets = self.highlights.len(), "selected");
        Ok(self.highlights)
    }

    /// Puts the picked-up piece down on `to`.
    ///
    /// The selection is always cleared. A legal destination commits the
    /// move; a castling king move also commits the rook's relocation as a
    /// second move so that replay reproduces it.
    pub fn drop_on(&mut self, to: Square) -> DropOutcome {
        let Some(Selection { piece, from }) = self.selection.take() else {
            return DropOutcome::NoSelection;
        };
        self.highlights.clear();
        self.bump();

        if from == to {
            return DropOutcome::Cancelled;
        }
        if self.board.piece_at(from) != Some(piece) {
            tracing::debug!(%from, %piece, "selected piece is no longer on its square");
            return DropOutcome::Rejected { from, to };
        }
        if !self
            .rules
            .is_legal(piece, from, to, &self.board, self.history.applied())
        {
            tracing::debug!(%from, %to, %piece, "rejected illegal move");
            return DropOutcome::Rejected { from, to };
        }

        let m = Move::new(piece, from, to);
        self.commit(m);

        let rook_squares = m.castling_rook_squares();
        let rook_piece = rook_squares.and_then(|(rook_from, _)| self.board.piece_at(rook_from));
        match (rook_squares, rook_piece) {
            (Some((rook_from, rook_to)), Some(rook_piece)) => {
                let rook = Move::at(rook_piece, rook_from, rook_to, m.timestamp);
                self.commit(rook);
                DropOutcome::Castled { king: m, rook }
            }
            _ => DropOutcome::Moved(m),
        }
    }

    /// Selects `from` and drops on `to` in one step.
    pub fn play(&mut self, from: Square, to: Square) -> Result<DropOutcome, SelectError> {
        self.select(from)?;
        Ok(self.drop_on(to))
    }

    /// Puts the picked-up piece back without moving it.
    pub fn cancel(&mut self) {
        if self.selection.take().is_some() {
            self.highlights.clear();
            self.bump();
        }
    }

    /// Commits a move without checking legality.
    ///
    /// Branches the history if the cursor is behind the end and drops any
    /// selection. Used by [`drop_on`](Session::drop_on) and by collaborators
    /// that replay moves they validated themselves.
    pub fn commit(&mut self, m: Move) {
        self.selection = None;
        self.highlights.clear();
        self.history.commit(m);
        self.board = self.board.with_move(m.from, m.to);
        self.bump();
    }

    /// Moves the history cursor and rebuilds the board at that point.
    ///
    /// `-1` is the starting position; out-of-range indices go to the latest
    /// move. Any selection is dropped.
    pub fn goto_index(&mut self, index: isize) -> &Board {
        self.selection = None;
        self.highlights.clear();
        self.board = self.history.goto_index(index);
        self.bump();
        &self.board
    }

    /// Replaces the history with persisted moves and shows the latest one.
    pub fn load(&mut self, moves: Vec<Move>) {
        let mut history = GameHistory::with_start(*self.history.start());
        for m in moves {
            history.commit(m);
        }
        self.history = history;
        self.goto_index(isize::MAX);
    }

    /// Returns to the starting position with an empty history.
    pub fn reset(&mut self) {
        self.history.clear();
        self.goto_index(-1);
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chessboard_core::{Occupant, PieceKind};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn session_from(placement: &str) -> Session {
        let history = GameHistory::with_start(Board::from_placement(placement).unwrap());
        Session::from_history(StandardRules, history)
    }

    #[test]
    fn select_highlights_targets() {
        let mut s = Session::new();
        let targets = s.select(sq("b1")).unwrap();
        let mut names = targets.to_notations();
        names.sort();
        assert_eq!(names, vec!["a3", "c3"]);
        assert_eq!(s.highlights(), targets);
        assert_eq!(
            s.selection(),
            Some(Selection {
                piece: Piece::new(PieceKind::Knight, Color::White),
                from: sq("b1"),
            })
        );
    }

    #[test]
    fn select_rejects_empty_and_wrong_color() {
        let mut s = Session::new();
        assert_eq!(s.select(sq("e4")), Err(SelectError::EmptySquare(sq("e4"))));
        assert_eq!(
            s.select(sq("e7")),
            Err(SelectError::WrongTurn {
                square: sq("e7"),
                color: Color::Black,
                turn: Color::White,
            })
        );
        assert_eq!(s.selection(), None);
    }

    #[test]
    fn drop_commits_legal_move() {
        let mut s = Session::new();
        s.select(sq("e2")).unwrap();
        let outcome = s.drop_on(sq("e4"));
        assert!(outcome.is_committed());
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.turn(), Color::Black);
        assert!(s.board().is_empty(sq("e2")));
        assert_eq!(s.selection(), None);
        assert!(s.highlights().is_empty());
        assert_eq!(s.last_move().map(|m| m.to), Some(sq("e4")));
    }

    #[test]
    fn drop_rejects_illegal_move() {
        let mut s = Session::new();
        s.select(sq("e2")).unwrap();
        let before = *s.board();
        assert_eq!(
            s.drop_on(sq("e5")),
            DropOutcome::Rejected {
                from: sq("e2"),
                to: sq("e5"),
            }
        );
        assert_eq!(*s.board(), before);
        assert!(s.history().is_empty());
        assert_eq!(s.selection(), None);
    }

    #[test]
    fn drop_on_origin_cancels() {
        let mut s = Session::new();
        s.select(sq("g1")).unwrap();
        assert_eq!(s.drop_on(sq("g1")), DropOutcome::Cancelled);
        assert!(s.history().is_empty());
        assert_eq!(s.drop_on(sq("f3")), DropOutcome::NoSelection);
    }

    #[test]
    fn castling_commits_rook_move() {
        let mut s = session_from("r3k2r/8/8/8/8/8/8/R3K2R");
        let outcome = s.play(Square::E1, Square::G1).unwrap();
        let DropOutcome::Castled { king, rook } = outcome else {
            panic!("expected castling, got {outcome:?}");
        };
        assert_eq!((king.from, king.to), (Square::E1, Square::G1));
        assert_eq!((rook.from, rook.to), (Square::H1, Square::F1));
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.board().to_placement(), "r3k2r/8/8/8/8/8/8/R4RK1");
        assert_eq!(s.turn(), Color::Black);

        s.play(Square::E8, Square::C8).unwrap();
        assert_eq!(s.board().to_placement(), "2kr3r/8/8/8/8/8/8/R4RK1");
        assert_eq!(s.turn(), Color::White);

        // Replaying from scratch reproduces both castles.
        let replayed = *s.goto_index(3);
        assert_eq!(replayed, s.history().board());
        assert_eq!(s.board().to_placement(), "2kr3r/8/8/8/8/8/8/R4RK1");
    }

    #[test]
    fn legality_uses_history_up_to_cursor() {
        let mut s = session_from("4k3/8/8/8/8/8/8/4K2R");
        s.play(Square::H1, sq("h2")).unwrap();
        s.play(Square::E8, sq("e7")).unwrap();
        s.play(sq("h2"), Square::H1).unwrap();
        s.play(sq("e7"), Square::E8).unwrap();
        assert!(!s.is_legal(Square::E1, Square::G1));

        s.goto_index(-1);
        assert!(s.is_legal(Square::E1, Square::G1));
    }

    #[test]
    fn goto_and_branch() {
        let mut s = Session::new();
        s.play(sq("e2"), sq("e4")).unwrap();
        s.play(sq("e7"), sq("e5")).unwrap();
        s.play(sq("g1"), sq("f3")).unwrap();

        s.goto_index(0);
        assert_eq!(s.turn(), Color::Black);
        assert!(s.board().is_empty(sq("e5")));

        s.play(sq("c7"), sq("c5")).unwrap();
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.history().cursor(), Some(1));
        assert_eq!(s.turn(), Color::White);
    }

    #[test]
    fn goto_clears_selection() {
        let mut s = Session::new();
        s.play(sq("e2"), sq("e4")).unwrap();
        s.select(sq("e7")).unwrap();
        s.goto_index(-1);
        assert_eq!(s.selection(), None);
        assert!(s.highlights().is_empty());
        assert_eq!(s.turn(), Color::White);
    }

    #[test]
    fn commit_clears_selection() {
        let mut s = Session::new();
        s.select(sq("e2")).unwrap();
        s.commit(Move::new(
            Piece::new(PieceKind::Pawn, Color::White),
            sq("d2"),
            sq("d4"),
        ));
        assert_eq!(s.selection(), None);
        assert!(s.highlights().is_empty());
        assert_eq!(s.turn(), Color::Black);

        assert_eq!(s.drop_on(sq("e4")), DropOutcome::NoSelection);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.turn(), Color::Black);
    }

    #[test]
    fn drop_rejects_piece_that_left_its_square() {
        let mut s = Session::new();
        s.select(sq("e2")).unwrap();
        // Swap the board underneath the selection without going through
        // commit.
        s.board = s.board.with(sq("e2"), Occupant::Empty);
        assert_eq!(
            s.drop_on(sq("e4")),
            DropOutcome::Rejected {
                from: sq("e2"),
                to: sq("e4"),
            }
        );
        assert!(s.history().is_empty());
    }

    #[test]
    fn version_tracks_changes() {
        let mut s = Session::new();
        let v0 = s.version();
        s.select(sq("e2")).unwrap();
        let v1 = s.version();
        assert!(v1 > v0);
        s.drop_on(sq("e4"));
        assert!(s.version() > v1);

        let v2 = s.version();
        s.cancel();
        assert_eq!(s.version(), v2);
    }

    #[test]
    fn resume_and_reset() {
        let mut first = Session::new();
        first.play(sq("d2"), sq("d4")).unwrap();
        first.play(sq("d7"), sq("d5")).unwrap();

        let mut s = Session::resume(first.history().moves().to_vec());
        assert_eq!(s.board(), first.board());
        assert_eq!(s.history().cursor(), Some(1));

        s.reset();
        assert!(s.history().is_empty());
        assert_eq!(*s.board(), Board::initial());

        s.load(first.history().moves().to_vec());
        assert_eq!(s.board(), first.board());
        assert_eq!(s.turn(), Color::White);
    }
}
