//! Engine protocol handling.
//!
//! Position notation for boards and the command parser for the engine's
//! stdin/stdout line protocol.

pub mod notation;
pub mod parser;

pub use notation::{encode_position, parse_position, NotationError, START_POSITION};
pub use parser::{parse_command, Command};
