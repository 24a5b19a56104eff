//! Single-level undo with per-player budgets.
//!
//! ## Charge rule
//!
//! Undo reverses the most recent move only. Which budget pays depends on
//! that move:
//!
//! - the move passed the turn: the opponent of the mover pays (they are the
//!   player now to move)
//! - the move earned an extra turn: the mover pays
//!
//! Either way the turn goes back to the player who made the undone move.

use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::error::UndoError;
use crate::core::player::{Player, PlayerMap};

/// The move an undo would reverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMove {
    pub mover: Player,
    pub extra_turn: bool,
}

impl LastMove {
    /// The player whose budget pays for undoing this move.
    #[must_use]
    pub const fn charged_player(self) -> Player {
        if self.extra_turn {
            self.mover
        } else {
            self.mover.opponent()
        }
    }
}

/// Summary of an accepted undo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoOutcome {
    pub undone: LastMove,
    /// Whose budget was decremented.
    pub charged: Player,
    /// Undos the charged player has left.
    pub remaining: u8,
}

impl UndoOutcome {
    /// The player to move after the undo.
    #[must_use]
    pub const fn restored_turn(&self) -> Player {
        self.undone.mover
    }
}

/// Previous-board snapshot, last move record and undo budgets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoLedger {
    previous: Board,
    last_move: Option<LastMove>,
    budgets: PlayerMap<u8>,
}

impl UndoLedger {
    /// Fresh ledger: snapshot equals `board`, full budgets, nothing to undo.
    #[must_use]
    pub fn new(board: Board, budget: u8) -> Self {
        Self {
            previous: board,
            last_move: None,
            budgets: PlayerMap::with_value(budget),
        }
    }

    /// Board as it stood before the last accepted move.
    #[must_use]
    pub fn previous(&self) -> &Board {
        &self.previous
    }

    /// The move an undo would reverse, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Undos a player has left.
    #[must_use]
    pub fn budget(&self, player: Player) -> u8 {
        self.budgets[player]
    }

    #[must_use]
    pub fn budgets(&self) -> &PlayerMap<u8> {
        &self.budgets
    }

    /// Check whether [`UndoLedger::take`] would succeed.
    #[must_use]
    pub fn check(&self) -> Result<LastMove, UndoError> {
        let last = self.last_move.ok_or(UndoError::NothingToUndo)?;
        let charged = last.charged_player();
        if self.budgets[charged] == 0 {
            return Err(UndoError::BudgetExhausted(charged));
        }
        Ok(last)
    }

    /// Remember the board before an accepted move.
    pub(crate) fn record(&mut self, before: Board, last: LastMove) {
        self.previous = before;
        self.last_move = Some(last);
    }

    /// Charge an undo and hand back the board to restore.
    ///
    /// On error nothing changes.
    pub(crate) fn take(&mut self) -> Result<(Board, UndoOutcome), UndoError> {
        let last = self.check()?;
        let charged = last.charged_player();
        self.budgets[charged] -= 1;
        self.last_move = None;

        Ok((
            self.previous,
            UndoOutcome {
                undone: last,
                charged,
                remaining: self.budgets[charged],
            },
        ))
    }
}
