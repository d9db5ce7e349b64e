//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// The broad category of a [`BookError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed phone, date or name input.
    Validation,
    /// The referenced contact, phone or birthday does not exist.
    Lookup,
    /// The operation conflicts with the record's current state.
    State,
}

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Input failed value object validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact with the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The contact has no such phone number
    #[error("Phone {phone} not found in {name} contact")]
    PhoneNotFound { name: String, phone: String },

    /// The contact has no birthday on record
    #[error("No birthday set for {0}")]
    BirthdayNotSet(String),

    /// Birthdays can only be set once
    #[error("Birthday already set for {0}")]
    BirthdayAlreadySet(String),
}

impl BookError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::ContactNotFound(_) | Self::PhoneNotFound { .. } | Self::BirthdayNotSet(_) => {
                ErrorKind::Lookup
            }
            Self::BirthdayAlreadySet(_) => ErrorKind::State,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
