//! Sowing, capture and the extra-turn rule.
//!
//! These functions operate on a bare `Board` and know nothing about turns,
//! snapshots or observers. `BoardEngine` wraps them with that bookkeeping.

use log::trace;

use crate::core::board::{is_store, opposite, owner, play_pits, store_index, Board, PIT_COUNT};
use crate::core::error::MoveError;
use crate::core::player::Player;

use super::outcome::Capture;

/// What a single sowing did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sowing {
    /// Index that received the last seed.
    pub landing: usize,
    /// The last seed landed in the mover's own store.
    pub extra_turn: bool,
    pub capture: Option<Capture>,
}

/// Check that `mover` may sow from `pit` on `board`.
///
/// Does not consider whether the game is over.
pub fn check_pit(board: &Board, mover: Player, pit: usize) -> Result<(), MoveError> {
    if pit >= PIT_COUNT {
        return Err(MoveError::OutOfRange { pit });
    }
    if is_store(pit) {
        return Err(MoveError::StorePit { pit });
    }
    if owner(pit) != Some(mover) {
        return Err(MoveError::OpponentPit { pit, player: mover });
    }
    if board[pit] == 0 {
        return Err(MoveError::EmptyPit { pit });
    }
    Ok(())
}

/// Pits `mover` may currently sow from.
pub fn legal_pits(board: &Board, mover: Player) -> impl Iterator<Item = usize> + '_ {
    play_pits(mover).filter(move |&pit| board[pit] > 0)
}

/// Next index on the sowing path, skipping the position `skip`.
fn next_index(index: usize, skip: usize) -> usize {
    let next = (index + 1) % PIT_COUNT;
    if next == skip {
        (next + 1) % PIT_COUNT
    } else {
        next
    }
}

/// Sow the seeds in `pit` for `mover`, applying any capture.
///
/// The caller must have validated the move with [`check_pit`].
pub fn sow(board: &mut Board, mover: Player, pit: usize) -> Sowing {
    let seeds = board.take(pit);
    let own_store = store_index(mover);
    let skip = store_index(mover.opponent());

    // Emptiness of the landing pit is judged against the board as it stood
    // once the sown pit was lifted, before any deposit.
    let lifted = *board;

    let mut landing = pit;
    for _ in 0..seeds {
        landing = next_index(landing, skip);
        board.add(landing, 1);
        trace!("{} deposits into {} (now {})", mover, landing, board[landing]);
    }

    let capture = if lifted[landing] == 0 && play_pits(mover).contains(&landing) {
        opposite(landing).map(|across| {
            let captured = board.take(landing) + board.take(across);
            board.add(own_store, captured);
            trace!(
                "{} captures {} seeds from pits {} and {}",
                mover,
                captured,
                landing,
                across
            );
            Capture {
                pit: landing,
                opposite: across,
                seeds: captured,
            }
        })
    } else {
        None
    };

    Sowing {
        landing,
        extra_turn: landing == own_store,
        capture,
    }
}
