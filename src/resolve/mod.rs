//! Move resolution.
//!
//! Applies a single Kalah move to a board: sowing, store credits, captures,
//! and bonus-turn detection.

pub mod kalah;

pub use kalah::{
    apply_move, capture_stones, distribute_stones, InvalidMove, Landing, MoveOutcome,
    MoveResolver, OutcomeKind,
};
