//! Upcoming-birthday computation.
//!
//! A birthday is "upcoming" when its next occurrence, counted from a given
//! reference date, is at most a few days away. Occurrences that land on a
//! weekend are congratulated on the following Monday.

use crate::domain::Birthday;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

/// Length of the look-ahead window used by the `birthdays` command.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Output format for congratulation dates.
pub const CONGRATULATION_FORMAT: &str = "%Y.%m.%d";

/// A contact to congratulate and the day to do it on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    #[serde(serialize_with = "serialize_congratulation_date")]
    pub congratulation_date: NaiveDate,
}

fn serialize_congratulation_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&date.format(CONGRATULATION_FORMAT))
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format(CONGRATULATION_FORMAT)
        )
    }
}

/// The next occurrence of `birthday` on or after `today`.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.in_year(today.year())?;
    if this_year < today {
        birthday.in_year(today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Saturdays and Sundays move to the following Monday.
pub fn roll_to_weekday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// The congratulation date for `birthday`, if its next occurrence is within
/// `window_days` of `today` (inclusive).
///
/// The window is checked against the actual birthday, before the weekend
/// roll-forward.
pub fn congratulation_date(
    birthday: &Birthday,
    today: NaiveDate,
    window_days: u32,
) -> Option<NaiveDate> {
    let occurrence = next_occurrence(birthday, today)?;
    let days_until = (occurrence - today).num_days();
    if !(0..=i64::from(window_days)).contains(&days_until) {
        return None;
    }
    Some(roll_to_weekday(occurrence))
}
