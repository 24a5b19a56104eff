//! End-of-game detection, sweep and scoring.

use log::info;

use crate::core::board::{play_pits, store_index, Board};
use crate::core::player::{Player, PlayerMap};

use super::outcome::Outcome;

/// The game ends as soon as either side's six play pits are all empty.
#[must_use]
pub fn is_game_over(board: &Board) -> bool {
    Player::all().any(|player| board.is_side_empty(player))
}

/// Move every play pit's seeds into its owner's store.
///
/// Returns how many seeds each player's store received.
pub fn sweep(board: &mut Board) -> PlayerMap<u32> {
    let mut swept = PlayerMap::with_value(0);
    for player in Player::all() {
        let store = store_index(player);
        for pit in play_pits(player) {
            let seeds = board.take(pit);
            board.add(store, seeds);
            swept[player] += seeds;
        }
    }
    swept
}

/// Compare the two stores.
#[must_use]
pub fn score(board: &Board) -> Outcome {
    let a = board.store(Player::A);
    let b = board.store(Player::B);
    match a.cmp(&b) {
        std::cmp::Ordering::Greater => Outcome::Won(Player::A),
        std::cmp::Ordering::Less => Outcome::Won(Player::B),
        std::cmp::Ordering::Equal => Outcome::Tie,
    }
}

/// If one side is empty, sweep and score the board.
///
/// Returns `Outcome::InProgress` and leaves the board alone otherwise.
pub fn settle(board: &mut Board) -> Outcome {
    if !is_game_over(board) {
        return Outcome::InProgress;
    }

    let swept = sweep(board);
    let outcome = score(board);
    info!(
        "game over: {} (swept A {}, B {}; stores A {}, B {})",
        outcome,
        swept[Player::A],
        swept[Player::B],
        board.store(Player::A),
        board.store(Player::B)
    );
    outcome
}
