//! Shared test data.

#![allow(dead_code)]

use chrono::NaiveDate;
use contact_assistant::{AddressBook, Record};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A record with a single phone number.
pub fn record_with_phone(name: &str, phone: &str) -> Record {
    let mut record = Record::new(name).unwrap();
    record.add_phone(phone).unwrap();
    record
}

/// A book with one record per `(name, birthday)` pair.
pub fn book_with_birthdays(entries: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (index, (name, birthday)) in entries.iter().enumerate() {
        let mut record = record_with_phone(name, &format!("{:010}", index));
        record.add_birthday(birthday).unwrap();
        book.add_record(record);
    }
    book
}
