//! The board engine: the only stateful component.
//!
//! `BoardEngine` has three mutating entry points, `initialize`,
//! `apply_move` and `undo` (plus `restore` for saved games). Everything else
//! is a read through `EngineState`. Each accepted mutation publishes one
//! `BoardEvent` to every observer before returning.
//!
//! ## Example
//!
//! ```
//! use kalah_engine::{BoardEngine, Player, StartingSeeds};
//!
//! let mut engine = BoardEngine::new();
//! engine.initialize(StartingSeeds::Three);
//!
//! // A1 sows into A2, A3, A4
//! let result = engine.apply_move(1).unwrap();
//! assert_eq!(result.landing, 4);
//! assert!(!result.extra_turn);
//! assert_eq!(engine.current_player(), Player::B);
//!
//! // Undoing a turn-passing move is charged to the player now to move
//! engine.undo().unwrap();
//! assert_eq!(engine.current_player(), Player::A);
//! assert_eq!(engine.undo_budget(Player::B), 2);
//! ```

mod state;
pub mod undo;

pub use state::{EngineState, LegalPits};
pub use undo::{LastMove, UndoLedger, UndoOutcome};

use std::sync::mpsc;

use log::debug;

use crate::core::board::{Board, PitDiff, PIT_COUNT};
use crate::core::config::{EngineConfig, StartingSeeds};
use crate::core::error::{MoveError, SnapshotError, UndoError};
use crate::core::player::Player;
use crate::events::{BoardEvent, ObserverId, ObserverRegistry};
use crate::rules::outcome::{MoveOutcome, Outcome};
use crate::rules::{endgame, sowing};

/// Authoritative Kalah game state with undo and change notification.
///
/// Not thread-safe; hosts that share it across threads wrap it in a mutex.
#[derive(Debug, Default)]
pub struct BoardEngine {
    state: EngineState,
    observers: ObserverRegistry,
}

impl BoardEngine {
    /// Engine with default configuration and an all-zero board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with the given configuration and an all-zero board.
    ///
    /// Call [`BoardEngine::start`] or [`BoardEngine::initialize`] to place
    /// seeds.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: EngineState::new(config),
            observers: ObserverRegistry::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        self.state.config()
    }

    // === Observers ===

    /// Register a callback for every accepted change.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&BoardEvent, &EngineState) + 'static,
    ) -> ObserverId {
        self.observers.subscribe(observer)
    }

    /// Register a channel that receives every accepted change.
    pub fn subscribe_channel(&mut self) -> mpsc::Receiver<BoardEvent> {
        self.observers.subscribe_channel().1
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self, event: BoardEvent) {
        self.observers.notify(&event, &self.state);
    }

    // === Entry points ===

    /// Start a new game with the configured starting seeds.
    pub fn start(&mut self) {
        self.initialize(self.state.config.starting_seeds);
    }

    /// Reset the board with `seeds` in every play pit.
    ///
    /// Player A moves first, both undo budgets are refilled and there is
    /// nothing to undo.
    pub fn initialize(&mut self, seeds: StartingSeeds) {
        let board = Board::filled(seeds.count());
        self.state.board = board;
        self.state.turn = Player::A;
        self.state.outcome = Outcome::InProgress;
        self.state.ledger = UndoLedger::new(board, self.state.config.undo_budget);

        debug!(
            "initialized with {} seeds per pit, {} undos each",
            seeds, self.state.config.undo_budget
        );
        self.notify(BoardEvent::Initialized(seeds));
    }

    fn check_move(&self, pit: usize) -> Result<(), MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        sowing::check_pit(&self.state.board, self.state.turn, pit)
    }

    /// Sow from `pit` for the player to move.
    ///
    /// On error the state is unchanged and no observer is notified.
    pub fn apply_move(&mut self, pit: usize) -> Result<MoveOutcome, MoveError> {
        let mover = self.state.turn;
        if let Err(err) = self.check_move(pit) {
            debug!("rejected move from pit {} by {}: {}", pit, mover, err);
            return Err(err);
        }

        let before = self.state.board;
        let sown = sowing::sow(&mut self.state.board, mover, pit);
        let outcome = endgame::settle(&mut self.state.board);

        if !sown.extra_turn {
            self.state.turn = mover.opponent();
        }
        self.state.outcome = outcome;
        self.state.ledger.record(
            before,
            LastMove {
                mover,
                extra_turn: sown.extra_turn,
            },
        );

        let result = MoveOutcome {
            mover,
            pit,
            landing: sown.landing,
            extra_turn: sown.extra_turn,
            capture: sown.capture,
            outcome,
        };
        debug!(
            "{} sowed pit {}, landed in {}{}{}",
            mover,
            pit,
            sown.landing,
            if sown.extra_turn { ", extra turn" } else { "" },
            if sown.capture.is_some() { ", capture" } else { "" }
        );

        self.notify(BoardEvent::MoveApplied(result));
        Ok(result)
    }

    /// Reverse the last accepted move.
    ///
    /// On error the state is unchanged and no observer is notified.
    pub fn undo(&mut self) -> Result<UndoOutcome, UndoError> {
        let (previous, result) = match self.state.ledger.take() {
            Ok(taken) => taken,
            Err(err) => {
                debug!("rejected undo: {}", err);
                return Err(err);
            }
        };

        self.state.board = previous;
        self.state.turn = result.restored_turn();
        self.state.outcome = Outcome::InProgress;

        debug!(
            "undid move by {}, charged {} ({} left)",
            result.undone.mover, result.charged, result.remaining
        );
        self.notify(BoardEvent::Undone(result));
        Ok(result)
    }

    /// Replace the whole state, typically with one loaded from disk.
    pub fn restore(&mut self, state: EngineState) -> Result<(), SnapshotError> {
        state.validate()?;
        self.state = state;
        debug!("restored state, {} to move", self.state.turn);
        self.notify(BoardEvent::Restored);
        Ok(())
    }

    /// Load a bincode-encoded state.
    pub fn restore_bytes(&mut self, bytes: &[u8]) -> Result<(), SnapshotError> {
        let state = EngineState::from_bytes(bytes)?;
        self.restore(state)
    }

    // === Accessors ===

    /// Read-only view of the full state.
    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[must_use]
    pub fn pits(&self) -> [u32; PIT_COUNT] {
        self.state.pits()
    }

    #[must_use]
    pub fn previous_board(&self) -> &Board {
        self.state.previous_board()
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    #[must_use]
    pub fn undo_budget(&self, player: Player) -> u8 {
        self.state.undo_budget(player)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    #[must_use]
    pub fn store(&self, player: Player) -> u32 {
        self.state.store(player)
    }

    #[must_use]
    pub fn legal_pits(&self) -> LegalPits {
        self.state.legal_pits()
    }

    #[must_use]
    pub fn changed_pits(&self) -> PitDiff {
        self.state.changed_pits()
    }
}
