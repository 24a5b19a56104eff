//! The 14-position Kalah board.
//!
//! ## Layout
//!
//! ```text
//!          B6  B5  B4  B3  B2  B1
//!          13  12  11  10   9   8
//!  MB  0                           7  MA
//!           1   2   3   4   5   6
//!          A1  A2  A3  A4  A5  A6
//! ```
//!
//! - index 0: Mancala B (Player B's store)
//! - indices 1..=6: A1..A6
//! - index 7: Mancala A (Player A's store)
//! - indices 8..=13: B1..B6
//!
//! Sowing runs counter-clockwise through increasing indices, so each side's
//! pits are numbered from opposite ends of the physical board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, RangeInclusive};

use super::player::Player;

/// Number of positions on the board, stores included.
pub const PIT_COUNT: usize = 14;

/// Number of play pits per side.
pub const PITS_PER_SIDE: usize = 6;

/// Most seeds a game can hold: four in each of the twelve play pits.
pub const MAX_SEEDS: u32 = 4 * 2 * PITS_PER_SIDE as u32;

/// Index of Player B's store.
pub const MANCALA_B: usize = 0;

/// Index of Player A's store.
pub const MANCALA_A: usize = 7;

/// Indices whose counts differ between two boards.
pub type PitDiff = SmallVec<[usize; PIT_COUNT]>;

/// Index of a player's store.
#[must_use]
pub const fn store_index(player: Player) -> usize {
    match player {
        Player::A => MANCALA_A,
        Player::B => MANCALA_B,
    }
}

/// The play-pit index range owned by a player.
#[must_use]
pub fn play_pits(player: Player) -> RangeInclusive<usize> {
    match player {
        Player::A => 1..=6,
        Player::B => 8..=13,
    }
}

/// Check if an index is one of the two stores.
#[must_use]
pub const fn is_store(index: usize) -> bool {
    index == MANCALA_A || index == MANCALA_B
}

/// Owner of a board position (store or play pit).
///
/// Returns `None` for indices outside the board.
#[must_use]
pub fn owner(index: usize) -> Option<Player> {
    match index {
        0 | 8..=13 => Some(Player::B),
        1..=7 => Some(Player::A),
        _ => None,
    }
}

/// The play pit directly across the board.
///
/// A1 faces B6, A6 faces B1. Because the two halves are numbered from
/// opposite ends, `p + opposite(p) == 14` for every play pit. Stores and
/// out-of-range indices have no opposite.
#[must_use]
pub fn opposite(index: usize) -> Option<usize> {
    match index {
        1..=6 | 8..=13 => Some(PIT_COUNT - index),
        _ => None,
    }
}

/// Human-readable name of a board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitLabel {
    /// A play pit, numbered 1..=6 from the owner's left.
    Pit(Player, u8),
    /// A player's store.
    Mancala(Player),
}

impl PitLabel {
    /// Label for a board index, `None` when out of range.
    ///
    /// ```
    /// use kalah_engine::core::{PitLabel, Player};
    ///
    /// assert_eq!(PitLabel::of(3), Some(PitLabel::Pit(Player::A, 3)));
    /// assert_eq!(PitLabel::of(8).unwrap().to_string(), "B1");
    /// assert_eq!(PitLabel::of(0).unwrap().to_string(), "Mancala B");
    /// ```
    #[must_use]
    pub fn of(index: usize) -> Option<Self> {
        match index {
            MANCALA_B => Some(PitLabel::Mancala(Player::B)),
            MANCALA_A => Some(PitLabel::Mancala(Player::A)),
            1..=6 => Some(PitLabel::Pit(Player::A, index as u8)),
            8..=13 => Some(PitLabel::Pit(Player::B, (index - MANCALA_A) as u8)),
            _ => None,
        }
    }

    /// Board index for this label.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            PitLabel::Mancala(player) => store_index(player),
            PitLabel::Pit(Player::A, n) => n as usize,
            PitLabel::Pit(Player::B, n) => MANCALA_A + n as usize,
        }
    }
}

impl std::fmt::Display for PitLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PitLabel::Pit(Player::A, n) => write!(f, "A{n}"),
            PitLabel::Pit(Player::B, n) => write!(f, "B{n}"),
            PitLabel::Mancala(Player::A) => write!(f, "Mancala A"),
            PitLabel::Mancala(Player::B) => write!(f, "Mancala B"),
        }
    }
}

/// Seed counts for all 14 positions.
///
/// Outside the crate a `Board` is a value: callers can build one for
/// comparison or restore, but the engine's own board is only reachable
/// through shared references.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pits: [u32; PIT_COUNT],
}

impl Board {
    /// All positions empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            pits: [0; PIT_COUNT],
        }
    }

    /// Every play pit holds `seeds`, both stores are empty.
    #[must_use]
    pub fn filled(seeds: u32) -> Self {
        let mut pits = [seeds; PIT_COUNT];
        pits[MANCALA_A] = 0;
        pits[MANCALA_B] = 0;
        Self { pits }
    }

    /// Build a board from raw counts.
    #[must_use]
    pub const fn from_pits(pits: [u32; PIT_COUNT]) -> Self {
        Self { pits }
    }

    /// Count at an index, `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.pits.get(index).copied()
    }

    /// Borrow the raw counts.
    #[must_use]
    pub const fn as_array(&self) -> &[u32; PIT_COUNT] {
        &self.pits
    }

    /// Copy of the raw counts.
    #[must_use]
    pub const fn to_array(&self) -> [u32; PIT_COUNT] {
        self.pits
    }

    /// Total seeds on the board, saturating at `u32::MAX`.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.pits.iter().fold(0, |sum, &n| sum.saturating_add(n))
    }

    /// Total seeds on the board, `None` on overflow.
    #[must_use]
    pub fn checked_total(&self) -> Option<u32> {
        self.pits.iter().try_fold(0u32, |sum, &n| sum.checked_add(n))
    }

    /// Seeds in a player's store.
    #[must_use]
    pub fn store(&self, player: Player) -> u32 {
        self.pits[store_index(player)]
    }

    /// Seeds across a player's six play pits.
    #[must_use]
    pub fn side_total(&self, player: Player) -> u32 {
        self.pits[play_pits(player)]
            .iter()
            .fold(0, |sum, &n| sum.saturating_add(n))
    }

    /// Check if all six of a player's play pits are empty.
    #[must_use]
    pub fn is_side_empty(&self, player: Player) -> bool {
        self.side_total(player) == 0
    }

    /// Indices whose counts differ from `other`.
    #[must_use]
    pub fn diff(&self, other: &Board) -> PitDiff {
        (0..PIT_COUNT)
            .filter(|&i| self.pits[i] != other.pits[i])
            .collect()
    }

    pub(crate) fn add(&mut self, index: usize, seeds: u32) {
        self.pits[index] = self.pits[index].saturating_add(seeds);
    }

    /// Empty a position, returning what it held.
    pub(crate) fn take(&mut self, index: usize) -> u32 {
        std::mem::take(&mut self.pits[index])
    }
}

impl Index<usize> for Board {
    type Output = u32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.pits[index]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let b_side: Vec<String> = play_pits(Player::B)
            .rev()
            .map(|i| format!("{:>2}", self.pits[i]))
            .collect();
        let a_side: Vec<String> = play_pits(Player::A)
            .map(|i| format!("{:>2}", self.pits[i]))
            .collect();

        writeln!(f, "     {}", b_side.join(" "))?;
        writeln!(
            f,
            "{:>2}{:>20}",
            self.pits[MANCALA_B], self.pits[MANCALA_A]
        )?;
        write!(f, "     {}", a_side.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_board() {
        let board = Board::filled(3);
        assert_eq!(
            board.to_array(),
            [0, 3, 3, 3, 3, 3, 3, 0, 3, 3, 3, 3, 3, 3]
        );
        assert_eq!(board.total(), 36);
        assert_eq!(board.side_total(Player::A), 18);
        assert_eq!(board.side_total(Player::B), 18);
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.total(), 0);
        assert!(board.is_side_empty(Player::A));
        assert!(board.is_side_empty(Player::B));
        assert_eq!(board, Board::filled(0));
    }

    #[test]
    fn test_total_overflow() {
        let mut pits = [0; PIT_COUNT];
        pits[MANCALA_A] = u32::MAX;
        pits[1] = 1;
        let board = Board::from_pits(pits);

        assert_eq!(board.checked_total(), None);
        assert_eq!(board.total(), u32::MAX);
        assert_eq!(Board::filled(4).checked_total(), Some(MAX_SEEDS));
    }

    #[test]
    fn test_store_indices() {
        assert_eq!(store_index(Player::A), 7);
        assert_eq!(store_index(Player::B), 0);
        assert!(is_store(0));
        assert!(is_store(7));
        assert!(!is_store(1));
        assert!(!is_store(13));
    }

    #[test]
    fn test_owner() {
        for i in 1..=7 {
            assert_eq!(owner(i), Some(Player::A));
        }
        assert_eq!(owner(0), Some(Player::B));
        for i in 8..=13 {
            assert_eq!(owner(i), Some(Player::B));
        }
        assert_eq!(owner(14), None);
    }

    #[test]
    fn test_opposite_from_a_side() {
        let expected = [(1, 13), (2, 12), (3, 11), (4, 10), (5, 9), (6, 8)];
        for (a, b) in expected {
            assert_eq!(opposite(a), Some(b), "A{} should face index {}", a, b);
        }
    }

    #[test]
    fn test_opposite_from_b_side() {
        // B1 faces A6, B6 faces A1
        let expected = [(8, 6), (9, 5), (10, 4), (11, 3), (12, 2), (13, 1)];
        for (b, a) in expected {
            assert_eq!(opposite(b), Some(a), "index {} should face A{}", b, a);
        }
    }

    #[test]
    fn test_opposite_is_involution() {
        for player in Player::all() {
            for pit in play_pits(player) {
                let across = opposite(pit).unwrap();
                assert_eq!(owner(across), Some(player.opponent()));
                assert_eq!(opposite(across), Some(pit));
            }
        }
        assert_eq!(opposite(MANCALA_A), None);
        assert_eq!(opposite(MANCALA_B), None);
        assert_eq!(opposite(14), None);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<String> = (0..PIT_COUNT)
            .map(|i| PitLabel::of(i).unwrap().to_string())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Mancala B", "A1", "A2", "A3", "A4", "A5", "A6", "Mancala A", "B1", "B2", "B3",
                "B4", "B5", "B6"
            ]
        );
        assert_eq!(PitLabel::of(14), None);
    }

    #[test]
    fn test_label_index_roundtrip() {
        for i in 0..PIT_COUNT {
            assert_eq!(PitLabel::of(i).unwrap().index(), i);
        }
    }

    #[test]
    fn test_diff() {
        let before = Board::filled(3);
        let mut after = before;
        after.take(1);
        after.add(2, 1);
        after.add(3, 1);
        after.add(4, 1);

        let changed = before.diff(&after);
        assert_eq!(changed.as_slice(), &[1, 2, 3, 4]);
        assert!(before.diff(&before).is_empty());
    }

    #[test]
    fn test_take() {
        let mut board = Board::filled(4);
        assert_eq!(board.take(5), 4);
        assert_eq!(board[5], 0);
        assert_eq!(board.get(14), None);
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::filled(4);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
