//! The interactive read-eval-print loop.

use super::commands::{parse_line, CommandError};
use super::handlers::{handle, Reply};
use super::{ARGUMENT_ERROR_MESSAGE, INVALID_COMMAND_MESSAGE};
use crate::book::AddressBook;
use crate::clock::Clock;
use crate::config::Config;
use std::io::{self, BufRead, Write};

/// Printed once when the session starts.
pub const GREETING: &str = "Welcome to the assistant bot!";

/// One run of the assistant: the address book plus the settings and clock
/// the commands need.
pub struct Session<C: Clock> {
    book: AddressBook,
    clock: C,
    prompt: String,
    window_days: u32,
}

impl<C: Clock> Session<C> {
    /// Create a session over `book`.
    pub fn new(book: AddressBook, clock: C, config: &Config) -> Self {
        Self {
            book,
            clock,
            prompt: config.prompt.clone(),
            window_days: config.birthday_window_days,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Give the address book back, ending the session.
    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Answer one line of input.
    ///
    /// Never fails: every error is turned into a user-facing message. Blank
    /// lines produce `None`.
    pub fn respond(&mut self, line: &str) -> Option<Reply> {
        let result = parse_line(line).and_then(|command| match command {
            Some(command) => {
                tracing::info!(command = ?command, "Running command");
                handle(&mut self.book, command, self.clock.today(), self.window_days).map(Some)
            }
            None => Ok(None),
        });

        match result {
            Ok(reply) => reply,
            Err(CommandError::Unknown(word)) => {
                tracing::warn!(command = %word, "Unknown command");
                Some(Reply::Message(INVALID_COMMAND_MESSAGE.to_string()))
            }
            Err(CommandError::Help(text)) => Some(Reply::Message(text.trim_end().to_string())),
            Err(err) => {
                tracing::warn!(error = %err, "Command failed");
                Some(Reply::Message(ARGUMENT_ERROR_MESSAGE.to_string()))
            }
        }
    }

    /// Read commands from `input` until `close`/`exit` or end of input,
    /// writing prompts and replies to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", GREETING)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                tracing::info!("End of input");
                writeln!(output)?;
                break;
            }

            let reply = match decode_line(&buf) {
                Some(line) => self.respond(line),
                None => {
                    tracing::warn!(bytes = buf.len(), "Input line is not valid UTF-8");
                    Some(Reply::Message(ARGUMENT_ERROR_MESSAGE.to_string()))
                }
            };

            match reply {
                Some(Reply::Message(text)) => writeln!(output, "{}", text)?,
                Some(Reply::Exit(text)) => {
                    writeln!(output, "{}", text)?;
                    break;
                }
                None => {}
            }
        }

        Ok(())
    }
}

/// Strip the line terminator and decode. `None` if the bytes are not UTF-8.
fn decode_line(buf: &[u8]) -> Option<&str> {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    std::str::from_utf8(line).ok()
}
