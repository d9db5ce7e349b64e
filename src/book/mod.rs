//! The address book and the queries it answers.

mod address_book;
pub mod birthdays;

pub use address_book::AddressBook;
pub use birthdays::{UpcomingBirthday, DEFAULT_WINDOW_DAYS};
