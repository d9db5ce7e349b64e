//! ContactName value object.

use super::errors::ValidationError;
use super::field::{impl_field_traits, Field};
use std::fmt;

/// The name a contact is filed under.
///
/// Any non-empty string is accepted; surrounding whitespace is trimmed.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::{ContactName, Field};
///
/// let name = ContactName::parse("John").unwrap();
/// assert_eq!(name.as_str(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactName(String);

impl ContactName {
    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for ContactName {
    fn parse(raw: &str) -> Result<Self, ValidationError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name.to_string()))
    }
}

impl_field_traits!(ContactName);

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
