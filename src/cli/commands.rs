//! Command parsing.
//!
//! Each input line is split on whitespace and handed to clap as if it were
//! an argument vector without the binary name. The first word is matched
//! case-insensitively.

use crate::error::BookError;
use clap::{CommandFactory, Parser, Subcommand};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(
    name = "assistant",
    no_binary_name = true,
    disable_version_flag = true,
    about = "Keeps track of your contacts' phone numbers and birthdays"
)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

/// A single assistant command.
///
/// Arguments may start with `-`; a name like `-Bob` is a value, not a flag.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Say hello
    Hello,

    /// Add a contact, or another phone number to an existing contact
    Add {
        #[arg(allow_hyphen_values = true)]
        name: String,
        #[arg(allow_hyphen_values = true)]
        phone: String,
    },

    /// Replace one of a contact's phone numbers
    Change {
        #[arg(allow_hyphen_values = true)]
        name: String,
        #[arg(allow_hyphen_values = true)]
        old_phone: String,
        #[arg(allow_hyphen_values = true)]
        new_phone: String,
    },

    /// Show a contact's phone numbers
    Phone {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },

    /// Remove one of a contact's phone numbers
    RemovePhone {
        #[arg(allow_hyphen_values = true)]
        name: String,
        #[arg(allow_hyphen_values = true)]
        phone: String,
    },

    /// Show every contact
    All,

    /// Set a contact's birthday (DD.MM.YYYY)
    AddBirthday {
        #[arg(allow_hyphen_values = true)]
        name: String,
        #[arg(allow_hyphen_values = true)]
        date: String,
    },

    /// Show a contact's birthday
    ShowBirthday {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },

    /// List birthdays coming up this week
    Birthdays,

    /// Delete a contact
    Delete {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },

    /// Print all contacts as JSON
    Export,

    /// Leave the assistant
    #[command(alias = "exit")]
    Close,
}

/// Errors surfaced by command parsing and execution.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The first word is not a command
    #[error("Unknown command: {0}")]
    Unknown(String),

    /// The command exists but its arguments are wrong
    #[error("Bad arguments: {0}")]
    BadArguments(String),

    /// Help was requested; carries the rendered text
    #[error("{0}")]
    Help(String),

    /// The address book rejected the operation
    #[error(transparent)]
    Book(#[from] BookError),

    /// Failed to render JSON output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse one line of input.
///
/// Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(None);
    };
    let name = first.to_lowercase();

    if name != "help" && CommandLine::command().find_subcommand(&name).is_none() {
        return Err(CommandError::Unknown(first.to_string()));
    }

    let args = std::iter::once(name.as_str()).chain(words);
    match CommandLine::try_parse_from(args) {
        Ok(parsed) => Ok(Some(parsed.command)),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp
            | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                Err(CommandError::Help(err.render().to_string()))
            }
            _ => Err(CommandError::BadArguments(err.to_string().trim().to_string())),
        },
    }
}
