//! Interactive command-line front end.
//!
//! - **commands**: parsing one input line into a [`Command`]
//! - **handlers**: running a command against the address book
//! - **session**: the read-eval-print loop

pub mod commands;
pub mod handlers;
pub mod session;

pub use commands::{parse_line, Command, CommandError};
pub use handlers::{handle, Reply};
pub use session::Session;

/// Printed whenever a command fails, whatever the reason.
pub const ARGUMENT_ERROR_MESSAGE: &str = "Enter the argument for the command.";

/// Printed for input that does not start with a known command.
pub const INVALID_COMMAND_MESSAGE: &str = "Invalid command.";
