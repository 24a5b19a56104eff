//! # kalah-engine
//!
//! Rules engine for two-player Kalah-style Mancala.
//!
//! ## Design Principles
//!
//! 1. **One owner**: `BoardEngine` holds the only mutable copy of the board.
//!    Callers read through shared references or copies.
//!
//! 2. **Three entry points**: `initialize`, `apply_move` and `undo` are the
//!    only ways the game advances. Rejected calls change nothing.
//!
//! 3. **Pure rules**: sowing, capture and scoring are plain functions over a
//!    `Board`, tested independently of turn and undo bookkeeping.
//!
//! ## Board
//!
//! Fourteen positions: index 0 is Mancala B, 1..=6 are A1..A6, 7 is
//! Mancala A, 8..=13 are B1..B6. Seeds travel through increasing indices.
//!
//! ## Modules
//!
//! - `core`: players, board, configuration, errors
//! - `rules`: sowing, capture, end-of-game sweep and scoring
//! - `events`: change notifications and the observer registry
//! - `engine`: `BoardEngine`, `EngineState`, single-level undo

pub mod core;
pub mod engine;
pub mod events;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, ConfigError, EngineConfig, MoveError, PitLabel, Player, PlayerMap, SnapshotError,
    StartingSeeds, UndoError, MANCALA_A, MANCALA_B, PIT_COUNT,
};

pub use crate::engine::{BoardEngine, EngineState, LastMove, UndoOutcome};

pub use crate::events::{BoardEvent, ObserverId};

pub use crate::rules::{Capture, MoveOutcome, Outcome};
