//! Command handlers.
//!
//! Each handler runs one [`Command`] against the address book and produces
//! the text to show the user. Handlers either succeed completely or leave the
//! book untouched.

use super::commands::{Command, CommandError};
use crate::book::AddressBook;
use crate::error::BookError;
use crate::models::Record;
use chrono::NaiveDate;

/// What the session should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading commands.
    Message(String),
    /// Print the message and stop.
    Exit(String),
}

impl Reply {
    fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }
}

/// Run `command` against `book`.
///
/// `today` and `window_days` feed the `birthdays` command.
pub fn handle(
    book: &mut AddressBook,
    command: Command,
    today: NaiveDate,
    window_days: u32,
) -> Result<Reply, CommandError> {
    tracing::debug!(?command, "Handling command");

    let reply = match command {
        Command::Hello => Reply::message("How can I help you?"),
        Command::Add { name, phone } => add_contact(book, &name, &phone)?,
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => {
            record_mut(book, &name)?.edit_phone(&old_phone, &new_phone)?;
            tracing::info!(name = %name, "Phone number changed");
            Reply::Message(format!(
                "Phone number {} was changed to {}.",
                old_phone, new_phone
            ))
        }
        Command::Phone { name } => {
            let record = record(book, &name)?;
            if record.phones().is_empty() {
                Reply::Message(format!("{} has no phone numbers.", record.name()))
            } else {
                Reply::Message(format!("{}: {}", record.name(), record.phone_list()))
            }
        }
        Command::RemovePhone { name, phone } => {
            let record = record_mut(book, &name)?;
            if record.remove_phone(&phone) {
                tracing::info!(name = %name, "Phone number removed");
                Reply::Message(format!("Phone {} removed from {}.", phone, record.name()))
            } else {
                Reply::Message(format!(
                    "Phone {} not found in {} contact.",
                    phone,
                    record.name()
                ))
            }
        }
        Command::All => {
            if book.is_empty() {
                Reply::message("No contacts saved.")
            } else {
                let lines: Vec<String> = book.iter().map(Record::to_string).collect();
                Reply::Message(lines.join("\n"))
            }
        }
        Command::AddBirthday { name, date } => {
            let record = record_mut(book, &name)?;
            record.add_birthday(&date)?;
            tracing::info!(name = %name, "Birthday added");
            Reply::Message(format!("Birthday for contact {} added.", record.name()))
        }
        Command::ShowBirthday { name } => {
            let record = record(book, &name)?;
            let birthday = record
                .birthday()
                .ok_or_else(|| BookError::BirthdayNotSet(name.clone()))?;
            Reply::Message(format!("{} birthday at {}", record.name(), birthday))
        }
        Command::Birthdays => {
            let upcoming = book.upcoming_birthdays_within(today, window_days);
            tracing::debug!(%today, count = upcoming.len(), "Computed upcoming birthdays");
            if upcoming.is_empty() {
                Reply::Message(format!("No birthdays in the next {} days.", window_days))
            } else {
                let lines: Vec<String> = upcoming.iter().map(ToString::to_string).collect();
                Reply::Message(lines.join("\n"))
            }
        }
        Command::Delete { name } => match book.delete(&name) {
            Some(_) => {
                tracing::info!(name = %name, "Contact deleted");
                Reply::Message(format!("Contact {} deleted.", name))
            }
            None => Reply::Message(format!("No contact named {}.", name)),
        },
        Command::Export => Reply::Message(serde_json::to_string_pretty(&*book)?),
        Command::Close => Reply::Exit("Good bye!".to_string()),
    };

    Ok(reply)
}

/// Add a phone to `name`, creating the contact if needed.
fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> Result<Reply, CommandError> {
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone).map_err(BookError::from)?;
        tracing::info!(name = %name, "Phone added to existing contact");
        return Ok(Reply::message("Contact updated."));
    }

    let mut record = Record::new(name).map_err(BookError::from)?;
    record.add_phone(phone).map_err(BookError::from)?;
    book.add_record(record);
    tracing::info!(name = %name, "Contact added");
    Ok(Reply::message("Contact added."))
}

fn record<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record, BookError> {
    book.find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

fn record_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record, BookError> {
    book.find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse_line;
    use crate::error::ErrorKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn run(book: &mut AddressBook, line: &str) -> Result<Reply, CommandError> {
        let command = parse_line(line)?.expect("command");
        handle(book, command, today(), 7)
    }

    fn message(book: &mut AddressBook, line: &str) -> String {
        match run(book, line).unwrap() {
            Reply::Message(text) | Reply::Exit(text) => text,
        }
    }

    fn book_error_kind(result: Result<Reply, CommandError>) -> ErrorKind {
        match result {
            Err(CommandError::Book(err)) => err.kind(),
            other => panic!("Expected book error, got: {:?}", other),
        }
    }

    #[test]
    fn test_add_creates_then_augments() {
        let mut book = AddressBook::new();
        assert_eq!(message(&mut book, "add John 1234567890"), "Contact added.");
        assert_eq!(message(&mut book, "add John 5555555555"), "Contact updated.");
        assert_eq!(
            message(&mut book, "phone John"),
            "John: 1234567890; 5555555555"
        );
    }

    #[test]
    fn test_add_invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        let kind = book_error_kind(run(&mut book, "add John 123"));
        assert_eq!(kind, ErrorKind::Validation);
        assert!(book.is_empty());
    }

    #[test]
    fn test_change_phone() {
        let mut book = AddressBook::new();
        message(&mut book, "add John 1234567890");
        assert_eq!(
            message(&mut book, "change John 1234567890 1112223333"),
            "Phone number 1234567890 was changed to 1112223333."
        );
        assert_eq!(message(&mut book, "phone John"), "John: 1112223333");
    }

    #[test]
    fn test_change_unknown_contact() {
        let mut book = AddressBook::new();
        let kind = book_error_kind(run(&mut book, "change Ghost 1234567890 1112223333"));
        assert_eq!(kind, ErrorKind::Lookup);
    }

    #[test]
    fn test_remove_phone() {
        let mut book = AddressBook::new();
        message(&mut book, "add John 1234567890");
        assert_eq!(
            message(&mut book, "remove-phone John 1234567890"),
            "Phone 1234567890 removed from John."
        );
        assert_eq!(
            message(&mut book, "remove-phone John 1234567890"),
            "Phone 1234567890 not found in John contact."
        );
        assert_eq!(message(&mut book, "phone John"), "John has no phone numbers.");
    }

    #[test]
    fn test_all() {
        let mut book = AddressBook::new();
        assert_eq!(message(&mut book, "all"), "No contacts saved.");

        message(&mut book, "add John 1234567890");
        message(&mut book, "add Jane 9876543210");
        assert_eq!(
            message(&mut book, "all"),
            "Contact name: Jane, phones: 9876543210, birthday: not set\n\
             Contact name: John, phones: 1234567890, birthday: not set"
        );
    }

    #[test]
    fn test_birthday_commands() {
        let mut book = AddressBook::new();
        message(&mut book, "add John 1234567890");

        let kind = book_error_kind(run(&mut book, "show-birthday John"));
        assert_eq!(kind, ErrorKind::Lookup);

        assert_eq!(
            message(&mut book, "add-birthday John 12.06.1990"),
            "Birthday for contact John added."
        );
        assert_eq!(
            message(&mut book, "show-birthday John"),
            "John birthday at 12.06.1990"
        );

        let kind = book_error_kind(run(&mut book, "add-birthday John 13.06.1990"));
        assert_eq!(kind, ErrorKind::State);
    }

    #[test]
    fn test_birthdays() {
        let mut book = AddressBook::new();
        assert_eq!(
            message(&mut book, "birthdays"),
            "No birthdays in the next 7 days."
        );

        message(&mut book, "add John 1234567890");
        message(&mut book, "add-birthday John 12.06.1990");
        message(&mut book, "add Jane 9876543210");
        message(&mut book, "add-birthday Jane 15.06.1985");
        assert_eq!(
            message(&mut book, "birthdays"),
            "Jane: 2024.06.17\nJohn: 2024.06.12"
        );
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        message(&mut book, "add Jane 9876543210");
        assert_eq!(message(&mut book, "delete Jane"), "Contact Jane deleted.");
        assert_eq!(message(&mut book, "delete Jane"), "No contact named Jane.");
        assert!(book.is_empty());
    }

    #[test]
    fn test_export() {
        let mut book = AddressBook::new();
        message(&mut book, "add John 1234567890");
        let json: serde_json::Value =
            serde_json::from_str(&message(&mut book, "export")).unwrap();
        assert_eq!(json[0]["name"], "John");
    }

    #[test]
    fn test_close_exits() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(&mut book, "exit").unwrap(),
            Reply::Exit("Good bye!".to_string())
        );
    }
}
