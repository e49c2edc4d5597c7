//! Interactive session for the assistant bot.
//!
//! Reads commands line by line, dispatches them through [`AssistantBot`] and
//! writes one reply per command. Generic over the reader and writer so tests
//! can drive a whole conversation from memory.

pub mod commands;
pub mod handlers;
pub mod render;

pub use commands::Command;
pub use handlers::AssistantBot;
pub use render::{Reply, ReplyLevel};

use crate::repositories::ContactRepository;
use std::io::{self, BufRead, Write};
use tracing::info;

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Run the assistant until an exit command or end of input.
///
/// # Errors
///
/// Only I/O failures on `input` or `output` end the session with an error;
/// command failures and lines that are not UTF-8 are reported as replies.
pub fn run_session<R, I, W>(
    bot: &mut AssistantBot<R>,
    mut input: I,
    output: &mut W,
) -> io::Result<()>
where
    R: ContactRepository,
    I: BufRead,
    W: Write,
{
    writeln!(output, "{}", GREETING)?;
    info!("Session started");

    let mut line = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            writeln!(output)?;
            writeln!(output, "{}", Reply::farewell().painted())?;
            info!("Input closed, session ended");
            break;
        }

        if let Some(reply) = bot.handle_bytes(&line) {
            writeln!(output, "{}", reply.painted())?;
            if reply.exit {
                info!("Session ended by user");
                break;
            }
        }
    }

    output.flush()
}
