//! Stone-holding slots.
//!
//! Every board position is either an ordinary pit or a store. Both expose
//! the same small capability set through [`Countable`]; the [`Slot`] enum
//! lets the board hold them side by side in one array.

/// Anything that holds a count of stones and accepts them one at a time.
pub trait Countable {
    /// Number of stones currently held.
    fn count(&self) -> u32;

    /// Drops a single stone in.
    fn add_stone(&mut self);
}

/// An ordinary pit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pit {
    stones: u32,
}

impl Pit {
    pub const fn new(stones: u32) -> Self {
        Pit { stones }
    }

    /// Empties the pit, returning what it held.
    pub fn take_all(&mut self) -> u32 {
        std::mem::take(&mut self.stones)
    }
}

impl Countable for Pit {
    fn count(&self) -> u32 {
        self.stones
    }

    fn add_stone(&mut self) {
        self.stones += 1;
    }
}

/// A player's scoring bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Store {
    stones: u32,
}

impl Store {
    pub const fn new(stones: u32) -> Self {
        Store { stones }
    }

    /// Credits `amount` stones at once (captures).
    pub fn add(&mut self, amount: u32) {
        self.stones += amount;
    }

    /// Empties the store, returning what it held.
    pub fn take_all(&mut self) -> u32 {
        std::mem::take(&mut self.stones)
    }
}

impl Countable for Store {
    fn count(&self) -> u32 {
        self.stones
    }

    fn add_stone(&mut self) {
        self.stones += 1;
    }
}

/// A board position: pit or store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Pit(Pit),
    Store(Store),
}

impl Slot {
    /// Returns true for the store variant.
    pub const fn is_store(&self) -> bool {
        matches!(self, Slot::Store(_))
    }

    /// Reads and zeroes the slot.
    pub fn take_all(&mut self) -> u32 {
        match self {
            Slot::Pit(p) => p.take_all(),
            Slot::Store(s) => s.take_all(),
        }
    }
}

impl Countable for Slot {
    fn count(&self) -> u32 {
        match self {
            Slot::Pit(p) => p.count(),
            Slot::Store(s) => s.count(),
        }
    }

    fn add_stone(&mut self) {
        match self {
            Slot::Pit(p) => p.add_stone(),
            Slot::Store(s) => s.add_stone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pit_take_all_zeroes() {
        let mut pit = Pit::new(4);
        assert_eq!(pit.take_all(), 4);
        assert_eq!(pit.count(), 0);
        assert_eq!(pit.take_all(), 0);
    }

    #[test]
    fn store_accepts_bulk_credit() {
        let mut store = Store::default();
        store.add_stone();
        store.add(5);
        assert_eq!(store.count(), 6);
    }

    #[test]
    fn slot_dispatches_to_variant() {
        let mut slot = Slot::Pit(Pit::new(2));
        slot.add_stone();
        assert_eq!(slot.count(), 3);
        assert!(!slot.is_store());

        let mut store = Slot::Store(Store::new(1));
        store.add_stone();
        assert!(store.is_store());
        assert_eq!(store.take_all(), 2);
        assert_eq!(store.count(), 0);
    }
}
