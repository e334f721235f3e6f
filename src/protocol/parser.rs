//! Command parser for the engine line protocol.
//!
//! Parses incoming text commands into structured `Command` variants that
//! the main loop can dispatch on.

use tracing::warn;

use crate::board::Player;

/// A parsed driver-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Protocol handshake; engine replies with its id and `kalahok`.
    Kalah,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Reset to the opening position.
    NewGame,

    /// Set the board from position notation, or `startpos`.
    Position { notation: Option<String> },

    /// Play a pit for a player: `move <pit> <player>`.
    Move { pit: usize, player: Player },

    /// Print the current position.
    Display,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&head, _) = tokens.split_first()?;

    match head {
        "kalah" => Some(Command::Kalah),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "d" => Some(Command::Display),

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(&tokens),
        "move" => parse_move(&tokens),

        other => {
            warn!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let (name, value) = match tokens.iter().position(|&t| t == "value") {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            if name_parts.is_empty() {
                warn!("malformed setoption: empty name");
                return None;
            }
            let value_parts = &tokens[vi + 1..];
            let value = (!value_parts.is_empty()).then(|| value_parts.join(" "));
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `position startpos` or `position <notation>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    match tokens.get(1) {
        None => {
            warn!("malformed position: expected 'position <notation>|startpos'");
            None
        }
        Some(&"startpos") => Some(Command::Position { notation: None }),
        Some(notation) => Some(Command::Position {
            notation: Some(notation.to_string()),
        }),
    }
}

/// Parses `move <pit> <player>`.
fn parse_move(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 3 {
        warn!("malformed move: expected 'move <pit> <player>'");
        return None;
    }
    let Ok(pit) = tokens[1].parse::<usize>() else {
        warn!("invalid pit: '{}'", tokens[1]);
        return None;
    };
    let Some(player) = tokens[2].parse::<u8>().ok().and_then(Player::from_number) else {
        warn!("invalid player: '{}'", tokens[2]);
        return None;
    };
    Some(Command::Move { pit, player })
}
