//! Validated proleptic Gregorian dates.
//!
//! A [`GregorianDate`] can only be built from a real calendar date, so the
//! conversion functions downstream never see month 13 or February 30.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::julian::{from_julian_day_number, to_julian_day_number};
use crate::error::ValidationError;

/// Weekday names indexed 0 = Sunday ... 6 = Saturday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// `DDDD-DD-DD` with ASCII digits. chrono alone accepts signs and
/// unpadded fields.
fn is_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// A calendar date in the proleptic Gregorian calendar.
///
/// Serialized as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GregorianDate {
    year: i32,
    month: u32,
    day: u32,
}

impl GregorianDate {
    /// Build a date, rejecting anything that is not a real calendar day.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        if day == 0 || day > days_in_month(year, month) {
            return Err(ValidationError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Caller guarantees the parts form a valid date.
    pub(crate) fn from_parts_unchecked(year: i32, month: u32, day: u32) -> Self {
        debug_assert!(day >= 1 && day <= days_in_month(year, month));
        Self { year, month, day }
    }

    /// Parse an ISO `YYYY-MM-DD` string: four-digit year, two-digit month
    /// and day, nothing else.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if !is_iso_date_shape(s) {
            return Err(ValidationError::MalformedDate(s.to_string()));
        }
        let naive = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| ValidationError::MalformedDate(s.to_string()))?;
        Ok(Self::from(naive))
    }

    /// Today's date in the local timezone.
    pub fn today() -> Self {
        Self::from(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Day of week, 0 = Sunday ... 6 = Saturday.
    pub fn weekday(&self) -> u8 {
        // JDN 0 fell on a Monday.
        (to_julian_day_number(*self) + 1).rem_euclid(7) as u8
    }

    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.weekday() as usize]
    }

    /// The date `days` days later (or earlier, when negative).
    pub fn add_days(&self, days: i64) -> Self {
        from_julian_day_number(to_julian_day_number(*self) + days)
    }

    /// The following day.
    pub fn succ(&self) -> Self {
        self.add_days(1)
    }

    /// First day of this date's month.
    pub fn first_of_month(&self) -> Self {
        Self::from_parts_unchecked(self.year, self.month, 1)
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_parts_unchecked(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for GregorianDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GregorianDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<GregorianDate> for String {
    fn from(date: GregorianDate) -> Self {
        date.to_string()
    }
}
