//! Sowing cursor.
//!
//! Walks the board circularly starting just after a chosen pit and never
//! stops on the opponent's store. Each step reports either the next pit or
//! the mover's own store, so callers can tell a store landing apart from a
//! pit landing without inspecting positions themselves.

use super::layout::{next_position, Player};

/// One step of a sowing walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The next depositable ordinary pit (either side).
    Pit(usize),
    /// The mover's own store.
    OwnStore,
}

impl Step {
    /// Board position this step refers to, given the mover.
    pub const fn position(self, mover: Player) -> usize {
        match self {
            Step::Pit(p) => p,
            Step::OwnStore => mover.store(),
        }
    }
}

/// Circular walk that skips the opponent's store.
#[derive(Debug, Clone)]
pub struct Cursor {
    position: usize,
    mover: Player,
}

impl Cursor {
    /// Creates a cursor positioned at `start`; the first `next()` yields
    /// the slot after it.
    pub fn new(start: usize, mover: Player) -> Self {
        Cursor {
            position: start,
            mover,
        }
    }

    /// The player whose stones are being sown.
    pub fn mover(&self) -> Player {
        self.mover
    }

    /// Advances one depositable slot.
    pub fn step(&mut self) -> Step {
        let skip = self.mover.opponent().store();
        let mut pos = next_position(self.position);
        if pos == skip {
            pos = next_position(pos);
        }
        self.position = pos;

        if pos == self.mover.store() {
            Step::OwnStore
        } else {
            Step::Pit(pos)
        }
    }
}

impl Iterator for Cursor {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        Some(self.step())
    }
}
