//! The capability shared by all validated scalars.

use super::errors::ValidationError;
use std::fmt;

/// A single validated scalar value held by a contact record.
///
/// Implementors are constructed only through [`Field::parse`] and render
/// back to text through `Display`. The text form is also the serialized
/// form, see `impl_field_traits!`.
pub trait Field: fmt::Display + Sized {
    /// Parse and validate raw user input.
    fn parse(raw: &str) -> Result<Self, ValidationError>;
}

/// Implements `FromStr`, `Serialize` and `Deserialize` for a [`Field`] type
/// in terms of its text form.
macro_rules! impl_field_traits {
    ($ty:ty) => {
        impl ::std::str::FromStr for $ty {
            type Err = $crate::domain::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as $crate::domain::Field>::parse(s)
            }
        }

        // Serde support - serialize as string
        impl ::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        // Serde support - deserialize from string with validation
        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::domain::Field>::parse(&s).map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_field_traits;
