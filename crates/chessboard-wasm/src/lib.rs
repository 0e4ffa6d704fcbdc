//! WebAssembly bindings for the interactive chessboard.
//!
//! Squares cross the boundary as algebraic strings ("e4") and the move
//! history as an array of plain records.
//!
//! # Usage
//!
//! ```javascript
//! import init, { Chessboard } from 'chessboard-wasm';
//!
//! await init();
//!
//! const saved = JSON.parse(localStorage.getItem('chess-game-history') ?? '[]');
//! const board = Chessboard.fromHistory(saved);
//!
//! const targets = board.dragStart("e2");   // ["e3", "e4"]
//! board.drop("e4");                        // "moved"
//! localStorage.setItem('chess-game-history', JSON.stringify(board.history()));
//!
//! board.gotoIndex(-1);
//! console.log(board.currentTurn());        // "white"
//! ```

use chessboard_core::{Move, Square};
use chessboard_engine::{DropOutcome, Session};
use wasm_bindgen::prelude::*;

fn square(s: &str) -> Result<Square, JsError> {
    Ok(s.parse::<Square>()?)
}

/// An interactive board that can be driven from JavaScript.
///
/// Renderers should redraw whenever [`version`](Chessboard::version)
/// changes.
#[wasm_bindgen]
pub struct Chessboard {
    session: Session,
}

#[wasm_bindgen]
impl Chessboard {
    /// Creates a board at the standard starting position.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Chessboard {
            session: Session::new(),
        }
    }

    /// Resumes a saved game from an array of move records, showing the
    /// latest move.
    ///
    /// Returns an error if a record is malformed.
    #[wasm_bindgen(js_name = fromHistory)]
    pub fn from_history(records: JsValue) -> Result<Chessboard, JsError> {
        let moves: Vec<Move> = serde_wasm_bindgen::from_value(records)?;
        Ok(Chessboard {
            session: Session::resume(moves),
        })
    }

    /// Returns every committed move as an array of records, ready to be
    /// saved.
    pub fn history(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(self.session.history().moves())?)
    }

    /// Returns true if the piece on `from` may move to `to`.
    #[wasm_bindgen(js_name = isLegal)]
    pub fn is_legal(&self, from: &str, to: &str) -> Result<bool, JsError> {
        Ok(self.session.is_legal(square(from)?, square(to)?))
    }

    /// Returns the squares the piece on `from` may move to.
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self, from: &str) -> Result<Vec<String>, JsError> {
        Ok(self.session.legal_moves(square(from)?).to_notations())
    }

    /// Picks up the piece on `from` and returns its legal destinations.
    ///
    /// Fails for an empty square or a piece of the side not to move.
    #[wasm_bindgen(js_name = dragStart)]
    pub fn drag_start(&mut self, from: &str) -> Result<Vec<String>, JsError> {
        let targets = self.session.select(square(from)?)?;
        Ok(targets.to_notations())
    }

    /// Drops the picked-up piece on `to`.
    ///
    /// Returns "moved", "castled", "rejected", "cancelled", or "none" when
    /// nothing was picked up.
    #[wasm_bindgen(js_name = drop)]
    pub fn drop_on(&mut self, to: &str) -> Result<String, JsError> {
        let outcome = match self.session.drop_on(square(to)?) {
            DropOutcome::Moved(_) => "moved",
            DropOutcome::Castled { .. } => "castled",
            DropOutcome::Rejected { .. } => "rejected",
            DropOutcome::Cancelled => "cancelled",
            DropOutcome::NoSelection => "none",
        };
        Ok(outcome.to_string())
    }

    /// Puts the picked-up piece back.
    #[wasm_bindgen(js_name = dragEnd)]
    pub fn drag_end(&mut self) {
        self.session.cancel();
    }

    /// Returns the legal destinations of the picked-up piece.
    pub fn highlights(&self) -> Vec<String> {
        self.session.highlights().to_notations()
    }

    /// Returns `[from, to]` of the move at the cursor, or null at the
    /// starting position.
    #[wasm_bindgen(js_name = lastMove)]
    pub fn last_move(&self) -> Option<Vec<String>> {
        self.session
            .last_move()
            .map(|m| vec![m.from.to_notation(), m.to.to_notation()])
    }

    /// Shows the position after move `index`; -1 is the starting position
    /// and out-of-range indices show the latest move.
    #[wasm_bindgen(js_name = gotoIndex)]
    pub fn goto_index(&mut self, index: i32) {
        self.session.goto_index(index as isize);
    }

    /// Returns the cursor, -1 for the starting position.
    pub fn cursor(&self) -> i32 {
        self.session.history().cursor_index() as i32
    }

    /// Returns the side to move at the cursor ("white" or "black").
    #[wasm_bindgen(js_name = currentTurn)]
    pub fn current_turn(&self) -> String {
        self.session.turn().as_str().to_string()
    }

    /// Returns the piece on `square` as a letter ("P" white pawn, "k" black
    /// king), or null if the square is empty or not a square.
    #[wasm_bindgen(js_name = pieceAt)]
    pub fn piece_at(&self, square: &str) -> Option<String> {
        let sq = square.parse::<Square>().ok()?;
        let piece = self.session.board().piece_at(sq)?;
        Some(piece.to_fen_char().to_string())
    }

    /// Returns the board at the cursor as a FEN piece-placement field.
    pub fn placement(&self) -> String {
        self.session.board().to_placement()
    }

    pub fn version(&self) -> u64 {
        self.session.version()
    }

    /// Clears the history and returns to the starting position.
    pub fn reset(&mut self) {
        self.session.reset();
    }
}

impl Default for Chessboard {
    fn default() -> Self {
        Self::new()
    }
}
