//! JSON file persistence for the move history.
//!
//! The file holds a JSON array of move records in commit order. Only the
//! moves are stored; a resumed game always shows its latest move.

use chessboard_core::Move;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access history file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode history: {0}")]
    Json(#[from] serde_json::Error),
}

/// A move history kept in a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted moves.
    ///
    /// A missing file is an empty history.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but can't be read, or
    /// [`StoreError::Json`] if its contents aren't a list of valid records
    /// (including records naming squares outside the board).
    pub fn load(&self) -> Result<Vec<Move>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        let moves: Vec<Move> = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), moves = moves.len(), "loaded history");
        Ok(moves)
    }

    /// Reads the persisted moves, treating an undecodable file as empty.
    ///
    /// Read failures are still reported.
    pub fn load_or_empty(&self) -> Result<Vec<Move>, StoreError> {
        match self.load() {
            Err(StoreError::Json(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable history");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Overwrites the file with `moves`, creating its directory if needed.
    pub fn save(&self, moves: &[Move]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::File::create(&self.path)?;
        serde_json::to_writer_pretty(file, moves)?;
        tracing::debug!(path = %self.path.display(), moves = moves.len(), "saved history");
        Ok(())
    }

    /// Removes the file. Clearing an absent history is not an error.
    pub fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chessboard_core::{Color, Piece, PieceKind, Square};
    use chrono::{TimeZone, Utc};

    fn sample() -> Vec<Move> {
        let ts = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        vec![
            Move::at(
                Piece::new(PieceKind::Pawn, Color::White),
                "e2".parse().unwrap(),
                "e4".parse().unwrap(),
                ts,
            ),
            Move::at(
                Piece::new(PieceKind::Knight, Color::Black),
                "g8".parse().unwrap(),
                "f6".parse().unwrap(),
                ts,
            ),
        ]
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("history.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/data/history.json"));
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn test_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("history.json"));
        store.save(&sample()[..1]).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!([{
                "pieceType": "pawn",
                "pieceColor": "white",
                "fromSquare": "e2",
                "toSquare": "e4",
                "timestamp": 1_700_000_000_000_i64,
            }])
        );
    }

    #[test]
    fn test_bad_square_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(
            &path,
            r#"[{"pieceType":"pawn","pieceColor":"white","fromSquare":"e9","toSquare":"e4","timestamp":0}]"#,
        )
        .unwrap();
        let store = JsonFileStore::new(&path);

        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
        assert!(err.to_string().contains("e9"));
        assert!(store.load_or_empty().unwrap().is_empty());
    }

    #[test]
    fn test_garbage_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(JsonFileStore::new(&path).load_or_empty().unwrap().is_empty());
    }

    #[test]
    fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("history.json"));
        store.clear().unwrap();
        store.save(&sample()).unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
    }
}
