//! Browser-side tests for the paths that construct `JsError`/`JsValue`,
//! which only work on a wasm32 target.
//!
//! Run with `wasm-pack test --headless --firefox crates/chessboard-wasm`.

#![cfg(target_arch = "wasm32")]

use chessboard_wasm::Chessboard;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn history_round_trips_through_js() {
    let mut board = Chessboard::new();
    board.drag_start("e2").unwrap();
    board.drop_on("e4").unwrap();
    board.drag_start("e7").unwrap();
    board.drop_on("e5").unwrap();

    let records = board.history().unwrap();
    let resumed = Chessboard::from_history(records).unwrap();
    assert_eq!(resumed.cursor(), 1);
    assert_eq!(resumed.placement(), board.placement());
}

#[wasm_bindgen_test]
fn from_history_rejects_malformed_records() {
    assert!(Chessboard::from_history(JsValue::from_str("e2e4")).is_err());
    assert!(Chessboard::from_history(JsValue::NULL).is_err());
}

#[wasm_bindgen_test]
fn drag_start_rejects_wrong_color_and_empty_square() {
    let mut board = Chessboard::new();
    assert!(board.drag_start("e7").is_err());
    assert!(board.drag_start("e4").is_err());
    assert!(board.highlights().is_empty());
}

#[wasm_bindgen_test]
fn bad_square_names_are_errors() {
    let mut board = Chessboard::new();
    assert!(board.is_legal("z9", "e4").is_err());
    assert!(board.legal_moves("e").is_err());
    assert!(board.drop_on("i1").is_err());
}
