//! Engine state: everything `BoardEngine` owns apart from its observers.
//!
//! ## Read access
//!
//! `EngineState` exposes accessors only. Observers and callers receive
//! `&EngineState`; the fields change solely through `BoardEngine`'s entry
//! points.
//!
//! ## Persistence
//!
//! States serialize with serde. `to_bytes` / `from_bytes` use bincode, and
//! `from_bytes` rejects states that no sequence of moves could produce.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::board::{Board, PitDiff, MAX_SEEDS, PIT_COUNT};
use crate::core::config::EngineConfig;
use crate::core::error::SnapshotError;
use crate::core::player::Player;
use crate::rules::endgame::{is_game_over, score};
use crate::rules::outcome::Outcome;
use crate::rules::sowing::legal_pits;

use super::undo::UndoLedger;

/// Pits the current player may sow from.
pub type LegalPits = SmallVec<[usize; 6]>;

/// Complete engine state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    pub(crate) config: EngineConfig,
    pub(crate) board: Board,
    pub(crate) turn: Player,
    pub(crate) outcome: Outcome,
    pub(crate) ledger: UndoLedger,
}

impl EngineState {
    /// Empty board, Player A to move, full undo budgets.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let board = Board::empty();
        Self {
            config,
            board,
            turn: Player::A,
            outcome: Outcome::InProgress,
            ledger: UndoLedger::new(board, config.undo_budget),
        }
    }

    /// A game in progress at an arbitrary position, with nothing to undo.
    ///
    /// Fails if the position has an empty side while seeds remain.
    pub fn with_position(
        config: EngineConfig,
        board: Board,
        turn: Player,
    ) -> Result<Self, SnapshotError> {
        let state = Self {
            config,
            board,
            turn,
            outcome: Outcome::InProgress,
            ledger: UndoLedger::new(board, config.undo_budget),
        };
        state.validate()?;
        Ok(state)
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copy of the current counts.
    #[must_use]
    pub fn pits(&self) -> [u32; PIT_COUNT] {
        self.board.to_array()
    }

    /// Board before the last accepted move.
    #[must_use]
    pub fn previous_board(&self) -> &Board {
        self.ledger.previous()
    }

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.turn
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Undos a player has left.
    #[must_use]
    pub fn undo_budget(&self, player: Player) -> u8 {
        self.ledger.budget(player)
    }

    #[must_use]
    pub fn undo_ledger(&self) -> &UndoLedger {
        &self.ledger
    }

    /// Check if `undo` would succeed right now.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.ledger.check().is_ok()
    }

    /// Seeds in a player's store.
    #[must_use]
    pub fn store(&self, player: Player) -> u32 {
        self.board.store(player)
    }

    /// Pits the current player may sow from. Empty once the game is over.
    #[must_use]
    pub fn legal_pits(&self) -> LegalPits {
        if self.is_terminal() {
            return LegalPits::new();
        }
        legal_pits(&self.board, self.turn).collect()
    }

    /// Positions whose counts changed with the last accepted move.
    #[must_use]
    pub fn changed_pits(&self) -> PitDiff {
        self.ledger.previous().diff(&self.board)
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode with bincode and check consistency.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let state: Self = bincode::deserialize(bytes).map_err(SnapshotError::Decode)?;
        state.validate()?;
        Ok(state)
    }

    /// Check the invariants that every reachable state satisfies.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let previous = self.ledger.previous();

        let total = seed_total(&self.board)?;
        let previous_total = seed_total(previous)?;
        if previous_total != total {
            return Err(SnapshotError::Inconsistent(format!(
                "board holds {} seeds but the previous board holds {}",
                total, previous_total
            )));
        }

        match (self.ledger.last_move(), previous == &self.board) {
            (None, false) => {
                return Err(SnapshotError::Inconsistent(
                    "previous board differs but no move is recorded".into(),
                ));
            }
            (Some(_), true) => {
                return Err(SnapshotError::Inconsistent(
                    "a move is recorded but the board is unchanged".into(),
                ));
            }
            (Some(last), false) => {
                let expected = if last.extra_turn {
                    last.mover
                } else {
                    last.mover.opponent()
                };
                if self.turn != expected {
                    return Err(SnapshotError::Inconsistent(format!(
                        "{} is to move but the last move leaves {} to move",
                        self.turn, expected
                    )));
                }
            }
            (None, true) => {}
        }

        for (player, &budget) in self.ledger.budgets().iter() {
            if budget > self.config.undo_budget {
                return Err(SnapshotError::Inconsistent(format!(
                    "{} has {} undos, more than the configured {}",
                    player, budget, self.config.undo_budget
                )));
            }
        }

        match self.outcome {
            Outcome::InProgress => {
                if is_game_over(&self.board) && total > 0 {
                    return Err(SnapshotError::Inconsistent(
                        "a side is empty but the game is still in progress".into(),
                    ));
                }
            }
            finished => {
                let swept = Player::all().all(|p| self.board.is_side_empty(p));
                if !swept {
                    return Err(SnapshotError::Inconsistent(
                        "game is over but play pits still hold seeds".into(),
                    ));
                }
                if score(&self.board) != finished {
                    return Err(SnapshotError::Inconsistent(format!(
                        "recorded outcome '{}' does not match the stores",
                        finished
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Seeds on `board`, rejecting more than any game can hold.
fn seed_total(board: &Board) -> Result<u32, SnapshotError> {
    match board.checked_total() {
        Some(total) if total <= MAX_SEEDS => Ok(total),
        _ => Err(SnapshotError::Inconsistent(format!(
            "board holds more than {} seeds",
            MAX_SEEDS
        ))),
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::undo::LastMove;

    fn started(seeds: u32) -> EngineState {
        let mut state = EngineState::new(EngineConfig::default());
        state.board = Board::filled(seeds);
        state.ledger = UndoLedger::new(state.board, 3);
        state
    }

    #[test]
    fn test_new_state() {
        let state = EngineState::new(EngineConfig::default());
        assert_eq!(state.pits(), [0; PIT_COUNT]);
        assert_eq!(state.current_player(), Player::A);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.undo_budget(Player::A), 3);
        assert_eq!(state.undo_budget(Player::B), 3);
        assert!(!state.can_undo());
        assert!(state.legal_pits().is_empty());
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_legal_pits_follow_turn() {
        let mut state = started(3);
        assert_eq!(state.legal_pits().as_slice(), &[1, 2, 3, 4, 5, 6]);

        state.turn = Player::B;
        assert_eq!(state.legal_pits().as_slice(), &[8, 9, 10, 11, 12, 13]);
    }

    #[test]
    fn test_bytes_roundtrip() {
        let state = started(4);
        let bytes = state.to_bytes().unwrap();
        let decoded = EngineState::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(matches!(
            EngineState::from_bytes(&[1, 2, 3]),
            Err(SnapshotError::Decode(_))
        ));
    }

    #[test]
    fn test_validate_rejects_seed_mismatch() {
        let mut state = started(3);
        state.board = Board::filled(4);
        assert!(matches!(
            state.validate(),
            Err(SnapshotError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unrecorded_change() {
        let mut state = started(3);
        state.board = Board::from_pits([0, 0, 4, 4, 4, 3, 3, 0, 3, 3, 3, 3, 3, 3]);
        assert!(state.validate().is_err());

        state.ledger.record(
            Board::filled(3),
            LastMove {
                mover: Player::A,
                extra_turn: false,
            },
        );
        state.turn = Player::B;
        assert!(state.validate().is_ok());
        assert_eq!(state.changed_pits().as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_validate_checks_turn_after_move() {
        let mut state = started(3);
        state.board = Board::from_pits([0, 0, 4, 4, 4, 3, 3, 0, 3, 3, 3, 3, 3, 3]);
        state.ledger.record(
            Board::filled(3),
            LastMove {
                mover: Player::A,
                extra_turn: false,
            },
        );
        // A1 passed the turn, so A cannot be to move
        assert!(matches!(
            state.validate(),
            Err(SnapshotError::Inconsistent(_))
        ));

        // A4 earned an extra turn, so only A can be to move
        state.board = Board::from_pits([0, 3, 3, 3, 0, 4, 4, 1, 3, 3, 3, 3, 3, 3]);
        state.ledger.record(
            Board::filled(3),
            LastMove {
                mover: Player::A,
                extra_turn: true,
            },
        );
        assert!(state.validate().is_ok());
        state.turn = Player::B;
        assert!(state.validate().is_err());
    }

    #[test]
    fn test_from_bytes_rejects_overflowing_counts() {
        let state = started(3);
        let mut bytes = state.to_bytes().unwrap();

        // Mancala B and A1 both decode as u32::MAX
        let offset = bincode::serialized_size(state.config()).unwrap() as usize;
        for byte in &mut bytes[offset..offset + 8] {
            *byte = 0xff;
        }
        assert!(matches!(
            EngineState::from_bytes(&bytes),
            Err(SnapshotError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_with_position_bounds_seed_count() {
        let mut pits = [0; PIT_COUNT];
        pits[1] = 1;
        pits[8] = 1;
        pits[7] = u32::MAX;
        assert!(matches!(
            EngineState::with_position(EngineConfig::default(), Board::from_pits(pits), Player::A),
            Err(SnapshotError::Inconsistent(_))
        ));

        pits[7] = MAX_SEEDS - 1;
        assert!(matches!(
            EngineState::with_position(EngineConfig::default(), Board::from_pits(pits), Player::A),
            Err(SnapshotError::Inconsistent(_))
        ));

        pits[7] = MAX_SEEDS - 2;
        assert!(
            EngineState::with_position(EngineConfig::default(), Board::from_pits(pits), Player::A)
                .is_ok()
        );
    }

    #[test]
    fn test_validate_rejects_excess_budget() {
        let mut state = started(3);
        state.ledger = UndoLedger::new(state.board, 5);
        assert!(state.validate().is_err());
    }

    #[test]
    fn test_validate_checks_outcome() {
        let mut state = started(3);
        state.outcome = Outcome::Tie;
        assert!(state.validate().is_err());

        let mut state = EngineState::new(EngineConfig::default());
        state.board = Board::from_pits([20, 0, 0, 0, 0, 0, 0, 16, 0, 0, 0, 0, 0, 0]);
        state.ledger = UndoLedger::new(state.board, 3);
        state.outcome = Outcome::Won(Player::A);
        assert!(state.validate().is_err());

        state.outcome = Outcome::Won(Player::B);
        assert!(state.validate().is_ok());

        state.outcome = Outcome::InProgress;
        assert!(state.validate().is_err());
    }
}
