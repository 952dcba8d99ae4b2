//! REPL Module
//!
//! Reads commands line by line and dispatches them against a [`Session`].
//!
//! # Commands
//! - `help`, `exit`
//! - `map`, `mapb` - Page forward/back through location areas
//! - `explore <area>` - List pokemon found in an area
//! - `catch <pokemon>`, `inspect <pokemon>`, `pokedex`

mod commands;
mod session;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::error::Result;

pub use commands::{find_command, Command, CommandKind, Flow, COMMANDS};
pub use session::{CaughtPokemon, Session};

/// Prompt printed before every line of input
pub const PROMPT: &str = "Pokedex > ";

/// Lowercases `text` and splits it into whitespace-separated words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}

/// Runs a single input line.
///
/// Unknown commands and command failures are reported on `out`; only an
/// I/O failure on `out` itself is returned as an error.
pub async fn handle_line<W: Write>(session: &mut Session, out: &mut W, line: &str) -> Result<Flow> {
    let words = clean_input(line);
    let Some((name, args)) = words.split_first() else {
        return Ok(Flow::Continue);
    };

    let Some(command) = find_command(name) else {
        writeln!(out, "Unknown command")?;
        return Ok(Flow::Continue);
    };

    match command.kind.execute(session, out, args).await {
        Ok(flow) => Ok(flow),
        Err(err) => {
            debug!(command = command.name, error = %err, "Command failed");
            writeln!(out, "{}", err)?;
            Ok(Flow::Continue)
        }
    }
}

/// Drives the prompt/read/dispatch loop until `exit` or end of input.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            debug!("Input closed");
            return Ok(());
        };

        if handle_line(session, out, &line).await? == Flow::Exit {
            return Ok(());
        }
    }
}
