//! Engine state management.
//!
//! Holds the current board, the move resolver, and the rule configuration
//! between protocol commands, and writes the responses for each command.

use std::io::{self, Write};

use tracing::{info, warn};

use crate::board::{Board, Player, MAX_STONES_PER_PIT};
use crate::config::RulesConfig;
use crate::protocol::notation::{encode_position, parse_position};
use crate::resolve::MoveResolver;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub board: Board,
    pub config: RulesConfig,
    resolver: MoveResolver,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(RulesConfig::default())
    }
}

impl Engine {
    /// Creates an engine at the opening position for `config`.
    pub fn new(config: RulesConfig) -> Self {
        Engine {
            board: Board::with_config(&config),
            config,
            resolver: MoveResolver::new(),
        }
    }

    /// Resets the board to the opening position.
    pub fn new_game(&mut self) {
        self.board = Board::with_config(&self.config);
        self.resolver = MoveResolver::new();
    }

    /// Sets the board from position notation, or the opening position
    /// when `notation` is `None`.
    pub fn set_position(&mut self, notation: Option<&str>) -> Result<(), String> {
        match notation {
            None => {
                self.new_game();
                Ok(())
            }
            Some(s) => match parse_position(s) {
                Ok(board) => {
                    self.board = board;
                    self.resolver = MoveResolver::new();
                    Ok(())
                }
                Err(e) => Err(format!("failed to parse position: {}", e)),
            },
        }
    }

    /// Sets an engine option. Unknown names and bad values are ignored
    /// with a warning, leaving the current config in place.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) {
        match name {
            "StonesPerPit" => {
                let Some(n) = value.and_then(|v| v.parse::<u32>().ok()) else {
                    warn!("invalid StonesPerPit value: {:?}", value);
                    return;
                };
                let mut candidate = self.config;
                candidate.stones_per_pit = n;
                match candidate.validate() {
                    Ok(()) => {
                        self.config = candidate;
                        info!(stones_per_pit = n, "rules updated");
                    }
                    Err(e) => warn!("rejected StonesPerPit: {}", e),
                }
            }
            other => warn!("unknown option: {}", other),
        }
    }

    /// Whether the last applied move earned a bonus turn.
    pub fn is_bonus_turn_pending(&self) -> bool {
        self.resolver.is_bonus_turn_pending()
    }

    /// Handles the handshake: writes id, options, and `kalahok`.
    pub fn handle_kalah<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name kalah")?;
        writeln!(out, "id author polite-betrayal")?;
        writeln!(
            out,
            "option name StonesPerPit type spin default {} min 1 max {}",
            self.config.stones_per_pit, MAX_STONES_PER_PIT
        )?;
        writeln!(out, "kalahok")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles the `d` command.
    pub fn handle_display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "position {}", encode_position(&self.board))?;
        out.flush()
    }

    /// Handles `move <pit> <player>`.
    ///
    /// Writes `outcome ...` and the resulting position, or `illegal
    /// <reason>` with the board left as it was.
    pub fn handle_move<W: Write>(&mut self, pit: usize, player: Player, out: &mut W) -> io::Result<()> {
        match self.resolver.apply_move(&mut self.board, pit, player) {
            Ok(outcome) => {
                writeln!(
                    out,
                    "outcome gained {} captured {} bonus {}",
                    outcome.stones_gained, outcome.captured, outcome.bonus_turn
                )?;
                writeln!(out, "position {}", encode_position(&self.board))?;
            }
            Err(e) => {
                warn!(pit, player = player.number(), "rejected move: {}", e);
                writeln!(out, "illegal {}", e)?;
            }
        }
        out.flush()
    }
}
