//! Domain value objects.
//!
//! Every scalar a contact holds is wrapped in a type that is validated at
//! construction time: a [`ContactName`], a [`PhoneNumber`] and a
//! [`Birthday`]. Invalid input never makes it into a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::ContactName;
pub use phone::PhoneNumber;
