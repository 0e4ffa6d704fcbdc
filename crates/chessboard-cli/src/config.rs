//! Configuration file loading for the terminal board.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings read from `chessboard.toml`.
///
/// Every field is optional; a missing file yields the defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ChessboardConfig {
    /// Where the move history is persisted.
    #[serde(default = "default_history_path")]
    pub history_path: PathBuf,
    /// Draw pieces as Unicode glyphs instead of letters.
    #[serde(default = "default_true")]
    pub unicode: bool,
    /// Print rank and file labels around the board.
    #[serde(default = "default_true")]
    pub coordinates: bool,
}

fn default_history_path() -> PathBuf {
    PathBuf::from("data/history.json")
}

fn default_true() -> bool {
    true
}

impl Default for ChessboardConfig {
    fn default() -> Self {
        ChessboardConfig {
            history_path: default_history_path(),
            unicode: true,
            coordinates: true,
        }
    }
}

impl ChessboardConfig {
    /// Loads the configuration from `path`, or from
    /// [`Self::default_path()`] when no path is given.
    ///
    /// A file that does not exist yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = path.map_or_else(Self::default_path, Path::to_path_buf);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns `chessboard.toml` in the current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chessboard.toml")
    }
}
