//! Birthday value object.

use super::errors::ValidationError;
use super::field::{impl_field_traits, Field};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Input and display format of a birthday.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A contact's date of birth, entered as `DD.MM.YYYY`.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::{Birthday, Field};
///
/// let birthday = Birthday::parse("12.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "12.06.1990");
/// assert!(Birthday::parse("31.02.2024").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday falls on in `year`.
    ///
    /// A 29 February birthday falls on 28 February in common years.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }
}

impl Field for Birthday {
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the input is not shaped like
    /// `DD.MM.YYYY` or is not a real calendar date from year 1 on.
    fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_REGEX.is_match(raw) {
            return Err(ValidationError::InvalidDate(raw.to_string()));
        }

        match NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT) {
            // Year 0 parses in chrono but is not a calendar year
            Ok(date) if date.year() >= 1 => Ok(Self(date)),
            _ => Err(ValidationError::InvalidDate(raw.to_string())),
        }
    }
}

impl_field_traits!(Birthday);

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
