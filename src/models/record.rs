//! Record model: one contact in the address book.

use crate::domain::{Birthday, ContactName, Field, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, any number of phone numbers and an optional birthday.
///
/// The name is fixed at creation. Phones keep their insertion order and may
/// repeat; edits and removals act on the first match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::parse(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::parse(phone)?);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// Returns `false` if the record has no such phone.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.position_of(phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first occurrence of `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if `old` is not on the record
    /// - `BookError::Validation` if `new` is not a valid phone number
    ///
    /// The record is unchanged on error.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self
            .position_of(old)
            .ok_or_else(|| BookError::PhoneNotFound {
                name: self.name.to_string(),
                phone: old.to_string(),
            })?;

        self.phones[index] = PhoneNumber::parse(new)?;
        Ok(())
    }

    /// Look up a phone by its digits.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| *p == phone)
    }

    /// Validate and store the birthday. A birthday can only be set once.
    ///
    /// # Errors
    ///
    /// - `BookError::BirthdayAlreadySet` if the record already has one
    /// - `BookError::Validation` if `birthday` is not a real `DD.MM.YYYY` date
    pub fn add_birthday(&mut self, birthday: &str) -> BookResult<()> {
        if self.birthday.is_some() {
            return Err(BookError::BirthdayAlreadySet(self.name.to_string()));
        }

        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    /// Phones joined with `"; "`.
    pub fn phone_list(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: ",
            self.name,
            self.phone_list()
        )?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "not set"),
        }
    }
}
