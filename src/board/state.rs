//! Board state representation.
//!
//! Holds the stone count of all 14 positions. The board knows nothing about
//! sowing or capturing; it only exposes the primitive reads and writes the
//! move resolver is built from.

use super::cursor::Cursor;
use super::layout::{is_store, Player, DEFAULT_STONES_PER_PIT, SLOT_COUNT};
use super::slot::{Countable, Pit, Slot, Store};
use crate::config::RulesConfig;

/// Complete board state at a point in time.
///
/// Positions are 1-based. Passing a position outside 1..=14 to any
/// accessor is a programming error and panics; user input is validated by
/// the resolver before it reaches the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    slots: [Slot; SLOT_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Standard opening position: six stones per pit, empty stores.
    pub fn new() -> Self {
        Board::with_stones(DEFAULT_STONES_PER_PIT)
    }

    /// Opening position for the given rules.
    pub fn with_config(config: &RulesConfig) -> Self {
        Board::with_stones(config.stones_per_pit)
    }

    /// A board with nothing on it.
    pub fn empty() -> Self {
        Board::with_stones(0)
    }

    fn with_stones(per_pit: u32) -> Self {
        let mut counts = [per_pit; SLOT_COUNT];
        counts[Player::One.store() - 1] = 0;
        counts[Player::Two.store() - 1] = 0;
        Board::from_counts(counts)
    }

    /// Builds a board from raw counts for positions 1..=14, in order.
    pub fn from_counts(counts: [u32; SLOT_COUNT]) -> Self {
        let slots = std::array::from_fn(|i| {
            if is_store(i + 1) {
                Slot::Store(Store::new(counts[i]))
            } else {
                Slot::Pit(Pit::new(counts[i]))
            }
        });
        Board { slots }
    }

    /// Raw counts for positions 1..=14, in order.
    pub fn counts(&self) -> [u32; SLOT_COUNT] {
        std::array::from_fn(|i| self.slots[i].count())
    }

    /// Total stones on the board. Constant across every move.
    pub fn total_stones(&self) -> u32 {
        self.slots.iter().map(Countable::count).sum()
    }

    fn slot(&self, position: usize) -> &Slot {
        &self.slots[position - 1]
    }

    fn slot_mut(&mut self, position: usize) -> &mut Slot {
        &mut self.slots[position - 1]
    }

    /// Read-only peek at a position.
    pub fn num_stones(&self, position: usize) -> u32 {
        self.slot(position).count()
    }

    /// Reads and zeroes a position, returning the prior count.
    pub fn remove_stones(&mut self, position: usize) -> u32 {
        self.slot_mut(position).take_all()
    }

    /// Drops one stone at `position` and returns the new count.
    ///
    /// A return of 1 means the slot just went from empty to occupied.
    pub fn add_stone(&mut self, position: usize) -> u32 {
        let slot = self.slot_mut(position);
        slot.add_stone();
        slot.count()
    }

    /// Stones in a player's store.
    pub fn store_count(&self, player: Player) -> u32 {
        self.num_stones(player.store())
    }

    /// Credits `amount` stones to a player's store.
    pub fn add_to_store(&mut self, player: Player, amount: u32) {
        match self.slot_mut(player.store()) {
            Slot::Store(store) => store.add(amount),
            Slot::Pit(_) => unreachable!("store position holds a pit"),
        }
    }

    /// Stones remaining in a player's ordinary pits.
    pub fn side_count(&self, player: Player) -> u32 {
        player.pits().map(|p| self.num_stones(p)).sum()
    }

    /// Starts a sowing walk after `start` on behalf of `mover`.
    pub fn cursor(&self, start: usize, mover: Player) -> Cursor {
        Cursor::new(start, mover)
    }
}
