//! Contact Assistant - an interactive command-line address book.
//!
//! Stores names, phone numbers and birthdays in memory and reports whose
//! birthday comes up in the next week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact [`Record`]
//! - **book**: The [`AddressBook`] and the upcoming-birthdays query
//! - **cli**: Command parsing, handlers and the interactive session
//! - **clock**: Where "today" comes from
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod cli;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, UpcomingBirthday};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{BookError, BookResult, ConfigError, ErrorKind};
pub use models::Record;
