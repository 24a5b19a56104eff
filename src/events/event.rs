//! Change notifications published by the engine.
//!
//! One event is published per accepted mutation. Rejected moves and undos
//! publish nothing.

use serde::{Deserialize, Serialize};

use crate::core::config::StartingSeeds;
use crate::engine::undo::UndoOutcome;
use crate::rules::outcome::MoveOutcome;

/// An accepted change to the engine state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// The board was reset with this many seeds per play pit.
    Initialized(StartingSeeds),
    MoveApplied(MoveOutcome),
    Undone(UndoOutcome),
    /// The whole state was replaced from a saved snapshot.
    Restored,
}

impl BoardEvent {
    /// Check if this event ended the game.
    #[must_use]
    pub fn ends_game(&self) -> bool {
        matches!(self, BoardEvent::MoveApplied(m) if m.outcome.is_terminal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;
    use crate::rules::Outcome;

    fn applied(outcome: Outcome) -> BoardEvent {
        BoardEvent::MoveApplied(MoveOutcome {
            mover: Player::A,
            pit: 6,
            landing: 7,
            extra_turn: true,
            capture: None,
            outcome,
        })
    }

    #[test]
    fn test_ends_game() {
        assert!(!applied(Outcome::InProgress).ends_game());
        assert!(applied(Outcome::Won(Player::A)).ends_game());
        assert!(applied(Outcome::Tie).ends_game());
        assert!(!BoardEvent::Initialized(StartingSeeds::Four).ends_game());
        assert!(!BoardEvent::Restored.ends_game());
    }

    #[test]
    fn test_event_serialization() {
        let event = applied(Outcome::InProgress);
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: BoardEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
