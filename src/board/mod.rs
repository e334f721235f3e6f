//! Board representation.
//!
//! Contains the fixed 14-slot layout, the pit/store slot types, the board
//! state itself, and the sowing cursor that walks it.

pub mod cursor;
pub mod layout;
pub mod slot;
pub mod state;

pub use cursor::{Cursor, Step};
pub use layout::{
    complement, is_pit, is_store, owner_of, Player, ALL_PLAYERS, DEFAULT_STONES_PER_PIT,
    MAX_STONES_PER_PIT, MAX_TOTAL_STONES, PITS_PER_SIDE, SLOT_COUNT, STORE_ONE, STORE_TWO,
};
pub use slot::{Countable, Pit, Slot, Store};
pub use state::Board;
