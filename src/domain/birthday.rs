//! Birthday value object and the birthday-proximity helper.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display and input format for birthdays.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$").expect("Failed to compile date regex")
});

/// A validated birth date.
///
/// Parsed from `day.month.year` text and always a real calendar date.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::parse("15.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.03.1990");
/// assert!(Birthday::parse("29.02.2023").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` string.
    ///
    /// One-digit day and month are accepted (`1.3.1990`); the year must have
    /// four digits. Day and month must name a real date, leap years included.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` on any shape or calendar failure.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if !DATE_REGEX.is_match(value) {
            return Err(ValidationError::InvalidDate(value.to_string()));
        }

        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(value.to_string()))
    }

    /// Wrap an already valid date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday's month/day in `year`.
    ///
    /// Feb 29 falls on Feb 28 when `year` is not a leap year. Returns `None`
    /// only outside chrono's representable range.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    /// The first anniversary on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.anniversary_in(today.year())?;
        if this_year >= today {
            return Some(this_year);
        }
        self.anniversary_in(today.year() + 1)
    }

    /// Whole days from `today` to the next anniversary; 0 when it is today.
    ///
    /// Always within `0..=365`.
    pub fn days_until(&self, today: NaiveDate) -> Option<u32> {
        self.next_occurrence(today)
            .map(|next| (next - today).num_days() as u32)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
