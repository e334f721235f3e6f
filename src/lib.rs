//! Kalah engine library.
//!
//! Exposes the board representation, move resolver, rule configuration,
//! and protocol modules for use by integration tests and the binary entry
//! point.

pub mod board;
pub mod config;
pub mod engine;
pub mod protocol;
pub mod resolve;
