use std::path::PathBuf;

use super::player::Player;

/// Rejected move. Every variant is an invalid move: the board, turn and
/// undo snapshot are left untouched and no observer is notified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("pit index {pit} is outside the board")]
    OutOfRange { pit: usize },

    #[error("pit {pit} is a store and cannot be sown from")]
    StorePit { pit: usize },

    #[error("pit {pit} does not belong to {player}")]
    OpponentPit { pit: usize, player: Player },

    #[error("pit {pit} is empty")]
    EmptyPit { pit: usize },

    #[error("the game is over")]
    GameOver,
}

impl MoveError {
    /// All move errors are recoverable invalid-move conditions.
    #[must_use]
    pub const fn is_invalid_move(&self) -> bool {
        true
    }
}

/// Rejected undo. Nothing is mutated and no observer is notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UndoError {
    #[error("no move to undo")]
    NothingToUndo,

    #[error("{0} has no undos left")]
    BudgetExhausted(Player),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("starting seeds must be 0, 3 or 4 (got {0})")]
    InvalidStartingSeeds(u32),

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Errors that can occur when saving or restoring engine state.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to encode engine state: {0}")]
    Encode(bincode::Error),

    #[error("failed to decode engine state: {0}")]
    Decode(bincode::Error),

    #[error("inconsistent engine state: {0}")]
    Inconsistent(String),
}
