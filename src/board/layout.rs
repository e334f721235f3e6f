//! Fixed 14-slot Kalah board layout.
//!
//! Positions are numbered 1..=14 counter-clockwise. Player one owns pits
//! 1-6 and the store at 7; player two owns pits 8-13 and the store at 14.
//! Sowing always proceeds in increasing position order, wrapping from 14
//! back to 1.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Total number of positions on the board (12 pits + 2 stores).
pub const SLOT_COUNT: usize = 14;

/// Number of ordinary pits on each side.
pub const PITS_PER_SIDE: usize = 6;

/// Position of player one's store.
pub const STORE_ONE: usize = 7;

/// Position of player two's store.
pub const STORE_TWO: usize = 14;

/// Stones placed in every pit at the start of a standard game.
pub const DEFAULT_STONES_PER_PIT: u32 = 6;

/// Largest starting stone count a game may be configured with.
pub const MAX_STONES_PER_PIT: u32 = 64;

/// Most stones a board may hold: a full game at the largest setup.
pub const MAX_TOTAL_STONES: u32 = MAX_STONES_PER_PIT * (2 * PITS_PER_SIDE) as u32;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

/// Both players in turn order.
pub const ALL_PLAYERS: [Player; 2] = [Player::One, Player::Two];

impl Player {
    /// Returns the protocol player number (1 or 2).
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Parses a player from its protocol number.
    pub fn from_number(n: u8) -> Option<Player> {
        match n {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Returns the other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the position of this player's store.
    pub const fn store(self) -> usize {
        match self {
            Player::One => STORE_ONE,
            Player::Two => STORE_TWO,
        }
    }

    /// Returns the positions of this player's ordinary pits.
    pub const fn pits(self) -> RangeInclusive<usize> {
        match self {
            Player::One => 1..=PITS_PER_SIDE,
            Player::Two => STORE_ONE + 1..=STORE_ONE + PITS_PER_SIDE,
        }
    }
}

/// Returns true if `position` is one of the 14 board positions.
pub const fn in_range(position: usize) -> bool {
    position >= 1 && position <= SLOT_COUNT
}

/// Returns true if `position` is a store.
pub const fn is_store(position: usize) -> bool {
    position == STORE_ONE || position == STORE_TWO
}

/// Returns true if `position` is an ordinary pit.
pub const fn is_pit(position: usize) -> bool {
    in_range(position) && !is_store(position)
}

/// Returns the player owning `position`, stores included.
///
/// Returns `None` for positions outside 1..=14.
pub const fn owner_of(position: usize) -> Option<Player> {
    if !in_range(position) {
        None
    } else if position <= STORE_ONE {
        Some(Player::One)
    } else {
        Some(Player::Two)
    }
}

/// Returns the pit directly across the board from `pit`.
///
/// Numbering the twelve pits alone as 1..=12, the opposite pit is `13 - n`.
/// In the 14-slot layout that becomes `14 - pit`, so pit 1 faces 13 and
/// pit 6 faces 8. Stores have no complement.
pub const fn complement(pit: usize) -> Option<usize> {
    if is_pit(pit) {
        Some(SLOT_COUNT - pit)
    } else {
        None
    }
}

/// Position that follows `position` when walking the board circularly.
pub(crate) const fn next_position(position: usize) -> usize {
    position % SLOT_COUNT + 1
}
