//! Kalah engine binary.
//!
//! Reads commands from stdin and writes responses to stdout. Logs go to
//! stderr, filtered by `RUST_LOG` (default `warn`).
//!
//! Usage:
//!   kalah [--config FILE]

use std::env;
use std::io::{self, BufRead};
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use kalah::config::RulesConfig;
use kalah::engine::Engine;
use kalah::protocol::parser::{parse_command, Command};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Reads `--config FILE` from the command line, if given.
fn load_config() -> Result<RulesConfig, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok(RulesConfig::default()),
        [flag, path] if flag == "--config" => RulesConfig::load(path).map_err(|e| e.to_string()),
        _ => Err("usage: kalah [--config FILE]".to_string()),
    }
}

/// Runs the protocol loop until `quit` or end of input.
fn run(engine: &mut Engine) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = line?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };

        match cmd {
            Command::Kalah => engine.handle_kalah(&mut out)?,
            Command::IsReady => engine.handle_isready(&mut out)?,
            Command::SetOption { name, value } => engine.set_option(&name, value.as_deref()),
            Command::NewGame => engine.new_game(),
            Command::Position { notation } => {
                if let Err(e) = engine.set_position(notation.as_deref()) {
                    error!("{}", e);
                }
            }
            Command::Move { pit, player } => engine.handle_move(pit, player, &mut out)?,
            Command::Display => engine.handle_display(&mut out)?,
            Command::Quit => break,
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut engine = Engine::new(config);
    if let Err(e) = run(&mut engine) {
        error!("i/o error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
