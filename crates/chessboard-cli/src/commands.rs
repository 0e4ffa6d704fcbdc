//! Subcommand bodies, kept free of I/O so they can be tested directly.

use crate::config::ChessboardConfig;
use anyhow::bail;
use chessboard_core::{Move, Square};
use chessboard_engine::{format_history, format_move, DropOutcome, Session};

/// Opens a session on the persisted moves, cursor on the latest.
pub fn open(moves: Vec<Move>) -> Session {
    Session::resume(moves)
}

fn seek(session: &mut Session, at: Option<isize>) {
    if let Some(index) = at {
        session.goto_index(index);
    }
}

/// Renders the board, the side to move, and the last move.
pub fn show(session: &mut Session, at: Option<isize>, config: &ChessboardConfig) -> String {
    seek(session, at);
    let mut out = session.board().render(config.unicode, config.coordinates);
    let history = session.history();
    out.push_str(&format!(
        "\nMove {}/{}, {} to move",
        history.cursor_index() + 1,
        history.len(),
        session.turn()
    ));
    if let Some(last) = session.last_move() {
        out.push_str(&format!(" (last: {last})"));
    }
    out.push('\n');
    out
}

/// Lists the legal destinations of the piece on `square`.
pub fn moves(session: &mut Session, square: Square, at: Option<isize>) -> anyhow::Result<String> {
    seek(session, at);
    let Some(piece) = session.board().piece_at(square) else {
        bail!("no piece on {square}");
    };
    let targets = session.legal_moves(square);
    if targets.is_empty() {
        return Ok(format!("{piece} on {square} has no moves"));
    }
    Ok(format!(
        "{piece} on {square}: {}",
        targets.to_notations().join(" ")
    ))
}

/// Plays `from`-`to` at the cursor and describes what was committed.
pub fn play(
    session: &mut Session,
    from: Square,
    to: Square,
    at: Option<isize>,
) -> anyhow::Result<String> {
    seek(session, at);
    let before = *session.board();
    let discarded = session.history().len() - session.history().applied().len();

    match session.play(from, to)? {
        DropOutcome::Moved(m) | DropOutcome::Castled { king: m, .. } => {
            let mut line = format!("{} played {}", m.color(), format_move(&m, &before));
            if discarded > 0 {
                line.push_str(&format!(" ({discarded} later moves discarded)"));
            }
            Ok(line)
        }
        DropOutcome::Rejected { from, to } => bail!("{from}{to} is not a legal move"),
        DropOutcome::Cancelled => bail!("origin and destination are the same square"),
        DropOutcome::NoSelection => bail!("nothing selected on {from}"),
    }
}

/// Formats the move list, one numbered line per move. A castling rook
/// relocation is folded into the king's "O-O" line.
pub fn log(session: &Session) -> Vec<String> {
    format_history(session.history())
        .into_iter()
        .filter(|entry| !entry.companion)
        .map(|entry| format!("{:>3}. {:<5} {}", entry.index + 1, entry.color, entry.notation))
        .collect()
}
