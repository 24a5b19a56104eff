//! Kalah rules as pure functions over a `Board`.
//!
//! - `sowing`: move legality, sowing, capture, extra turn
//! - `endgame`: game-over detection, sweep, scoring
//! - `outcome`: result types shared with the engine and observers
//!
//! Nothing here tracks whose turn it is or keeps history; that is the job
//! of `engine::BoardEngine`.

pub mod endgame;
pub mod outcome;
pub mod sowing;

pub use endgame::{is_game_over, score, settle, sweep};
pub use outcome::{Capture, MoveOutcome, Outcome};
pub use sowing::{check_pit, legal_pits, sow, Sowing};
