//! Weekend Date Generator
//!
//! The clinic only sees patients on Saturdays and Sundays. The booking form
//! offers the next few weekend days as selectable options.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::Serialize;

/// Number of weekend dates offered by the booking form (four weekends)
pub const WEEKEND_DATE_COUNT: usize = 8;

/// Most dates one request may ask for (a year of weekends)
pub const MAX_WEEKEND_DATES: usize = 52;

/// A selectable consultation date
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WeekendDate {
    /// ISO date (YYYY-MM-DD), submitted with the form
    pub value: String,
    /// Display label (e.g., "Sat, Oct 17, 2026")
    pub label: String,
}

impl WeekendDate {
    fn from_date(date: NaiveDate) -> Self {
        Self {
            value: date.format("%Y-%m-%d").to_string(),
            label: display_label(date),
        }
    }
}

/// Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// en-US short label: weekday, month, day, year
pub fn display_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// Collect the next `count` weekend days starting from `today` (inclusive)
pub fn upcoming_weekends(today: NaiveDate, count: usize) -> Vec<WeekendDate> {
    today
        .iter_days()
        .filter(|d| is_weekend(*d))
        .take(count)
        .map(WeekendDate::from_date)
        .collect()
}

/// The default list the booking form shows, relative to the local date
pub fn upcoming_weekends_from_now() -> Vec<WeekendDate> {
    upcoming_weekends(Local::now().date_naive(), WEEKEND_DATE_COUNT)
}

/// Parse an ISO date submitted by a form
pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
