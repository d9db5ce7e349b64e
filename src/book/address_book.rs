use crate::book::birthdays::{self, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
use crate::models::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All known contacts, keyed by name.
///
/// Every key equals the name of the record stored under it. Iteration is
/// ordered by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its own name, replacing any record already
    /// filed there. Returns the replaced record.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let name = record.name().to_string();
        tracing::debug!(name = %name, "Adding record");
        self.records.insert(name, record)
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record filed under `name`. Missing names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name);
        if removed.is_some() {
            tracing::debug!(name = %name, "Deleted record");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contacts to congratulate in the week starting at `today`.
    ///
    /// See [`upcoming_birthdays_within`](Self::upcoming_birthdays_within).
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, DEFAULT_WINDOW_DAYS)
    }

    /// Contacts whose next birthday is at most `days` days after `today`,
    /// with weekend birthdays moved to the following Monday.
    ///
    /// Results follow the book's name order. Neither the book nor any record
    /// is modified.
    pub fn upcoming_birthdays_within(&self, today: NaiveDate, days: u32) -> Vec<UpcomingBirthday> {
        self.iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = birthdays::congratulation_date(birthday, today, days)?;
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: date,
                })
            })
            .collect()
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records.into_values().collect()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::collections::btree_map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
