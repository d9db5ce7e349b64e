//! Scripted sessions through the interactive loop.

mod fixtures;

use contact_assistant::cli::Session;
use contact_assistant::{AddressBook, Config, FixedClock};
use fixtures::*;
use std::io::Cursor;

/// Run `script` in a fresh session pinned to 2024-06-10 and return the
/// replies, without the greeting or prompts.
fn replies(script: &str) -> Vec<String> {
    let config = Config {
        prompt: String::new(),
        ..Config::default()
    };
    let mut session = Session::new(
        AddressBook::new(),
        FixedClock(date(2024, 6, 10)),
        &config,
    );

    let mut output = Vec::new();
    session.run(Cursor::new(script), &mut output).unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .skip(1)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn test_full_session() {
    let script = "\
hello
add John 1234567890
add John 5555555555
add Jane 9876543210
change John 1234567890 1112223333
phone John
add-birthday John 12.06.1990
add-birthday Jane 15.06.1985
show-birthday John
birthdays
all
close
";

    assert_eq!(
        replies(script),
        vec![
            "How can I help you?",
            "Contact added.",
            "Contact updated.",
            "Contact added.",
            "Phone number 1234567890 was changed to 1112223333.",
            "John: 1112223333; 5555555555",
            "Birthday for contact John added.",
            "Birthday for contact Jane added.",
            "John birthday at 12.06.1990",
            "Jane: 2024.06.17",
            "John: 2024.06.12",
            "Contact name: Jane, phones: 9876543210, birthday: 15.06.1985",
            "Contact name: John, phones: 1112223333; 5555555555, birthday: 12.06.1990",
            "Good bye!",
        ]
    );
}

#[test]
fn test_errors_never_end_the_session() {
    let script = "\
add John
add John 12345
change Ghost 1234567890 1112223333
add-birthday Ghost 12.06.1990
add John 1234567890
add-birthday John 31.02.1990
add-birthday John 12.06.1990
add-birthday John 13.06.1990
fly
EXIT
";

    assert_eq!(
        replies(script),
        vec![
            "Enter the argument for the command.",
            "Enter the argument for the command.",
            "Enter the argument for the command.",
            "Enter the argument for the command.",
            "Contact added.",
            "Enter the argument for the command.",
            "Birthday for contact John added.",
            "Enter the argument for the command.",
            "Invalid command.",
            "Good bye!",
        ]
    );
}

#[test]
fn test_no_upcoming_birthdays() {
    let script = "add Jane 9876543210\nadd-birthday Jane 08.06.1990\nbirthdays\nexit\n";
    assert_eq!(
        replies(script),
        vec![
            "Contact added.",
            "Birthday for contact Jane added.",
            "No birthdays in the next 7 days.",
            "Good bye!",
        ]
    );
}

#[test]
fn test_greeting_comes_first() {
    let mut session = Session::new(
        AddressBook::new(),
        FixedClock(date(2024, 6, 10)),
        &Config::default(),
    );
    let mut output = Vec::new();
    session.run(Cursor::new(""), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output, "Welcome to the assistant bot!\nEnter a command: \n");
}

#[test]
fn test_hyphenated_name() {
    let script = "add -Bob 1234567890\nphone -Bob\nexit\n";
    assert_eq!(
        replies(script),
        vec!["Contact added.", "-Bob: 1234567890", "Good bye!"]
    );
}
