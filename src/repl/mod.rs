//! REPL Module
//!
//! Prompt loop, command registry and session state.

pub mod commands;
pub mod pokedex;
pub mod session;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::Result;

pub use commands::{Command, CommandSpec, COMMANDS};
pub use pokedex::{CaughtPokemon, Pokedex};
pub use session::{Flow, Session};

/// Prompt printed before each line of input.
pub const PROMPT: &str = "Pokedex > ";

/// Reads commands from `input` until `exit` or end of input.
///
/// Lines that are not valid UTF-8 are decoded lossily and dispatched like
/// any other line.
pub async fn run<R, W>(session: &mut Session, mut input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if session.dispatch(line, out).await? == Flow::Exit {
            return Ok(());
        }
    }
}
