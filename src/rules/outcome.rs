//! Results reported by the rules: game outcome and per-move summaries.

use serde::{Deserialize, Serialize};

use crate::core::player::Player;

/// State of the game as a whole.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Both sides still hold seeds.
    #[default]
    InProgress,
    /// Game over, this player's store holds more seeds.
    Won(Player),
    /// Game over, stores are level.
    Tie,
}

impl Outcome {
    /// Check if the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winner, if there is one.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self.winner() == Some(player)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Won(player) => write!(f, "{} won", player),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

/// A capture made by the final seed of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// The mover's pit the last seed landed in.
    pub pit: usize,
    /// The opponent's pit across from it.
    pub opposite: usize,
    /// Seeds moved into the mover's store.
    pub seeds: u32,
}

/// Summary of an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Who moved.
    pub mover: Player,
    /// The pit that was sown.
    pub pit: usize,
    /// Where the last seed landed.
    pub landing: usize,
    /// The last seed landed in the mover's store.
    pub extra_turn: bool,
    pub capture: Option<Capture>,
    /// Game outcome after the move (and sweep, if it ended the game).
    pub outcome: Outcome,
}
