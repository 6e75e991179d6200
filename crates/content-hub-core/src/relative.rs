//! Relative day labels for date buckets ("Today", "Yesterday", ...).
//!
//! The reference day is always passed in by the caller; nothing here reads
//! the system clock.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Human-facing label for a bucket date relative to a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayLabel {
    /// Dated after the reference day.
    Upcoming,
    Today,
    Yesterday,
    /// Between two days and the `older_after_days` threshold, inclusive.
    DaysAgo(i64),
    Older,
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayLabel::Upcoming => f.write_str("Upcoming"),
            DayLabel::Today => f.write_str("Today"),
            DayLabel::Yesterday => f.write_str("Yesterday"),
            DayLabel::DaysAgo(n) => write!(f, "{} days ago", n),
            DayLabel::Older => f.write_str("Older"),
        }
    }
}

/// Label `date` relative to `today`.
///
/// Dates more than `older_after_days` days in the past are [`DayLabel::Older`].
pub fn relative_label(date: NaiveDate, today: NaiveDate, older_after_days: i64) -> DayLabel {
    let age = (today - date).num_days();
    match age {
        n if n < 0 => DayLabel::Upcoming,
        0 => DayLabel::Today,
        1 => DayLabel::Yesterday,
        n if n <= older_after_days => DayLabel::DaysAgo(n),
        _ => DayLabel::Older,
    }
}
