//! Core engine types: players, the board, configuration, errors.
//!
//! These are plain data types with no game-flow logic. The rules live in
//! `rules`, the stateful entry points in `engine`.

pub mod board;
pub mod config;
pub mod error;
pub mod player;

pub use board::{
    is_store, opposite, owner, play_pits, store_index, Board, PitDiff, PitLabel, MANCALA_A,
    MANCALA_B, MAX_SEEDS, PITS_PER_SIDE, PIT_COUNT,
};
pub use config::{EngineConfig, StartingSeeds, DEFAULT_UNDO_BUDGET};
pub use error::{ConfigError, MoveError, SnapshotError, UndoError};
pub use player::{Player, PlayerMap};
