use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// Time of day at minute granularity, stored as minutes since midnight.
///
/// Parsed once from 24-hour `HH:MM` strings; serialized back to that form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Caller guarantees `hour < 24` and `minute < 60`.
    pub(crate) const fn from_hm_unchecked(hour: u8, minute: u8) -> Self {
        Self(hour as u16 * 60 + minute as u16)
    }

    pub fn new(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        if hour > 23 || minute > 59 {
            return Err(ValidationError::MalformedTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self(u16::from(hour) * 60 + u16::from(minute)))
    }

    pub fn from_minutes(minutes: u16) -> Result<Self, ValidationError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ValidationError::MalformedTime(format!("{minutes} minutes")));
        }
        Ok(Self(minutes))
    }

    /// Parse a 24-hour `HH:MM` string. The hour may be one digit; the
    /// minutes must be two.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let malformed = || ValidationError::MalformedTime(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(malformed)?;

        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(hour) || hour.len() > 2 || !all_digits(minute) || minute.len() != 2 {
            return Err(malformed());
        }

        let hour: u8 = hour.parse().map_err(|_| malformed())?;
        let minute: u8 = minute.parse().map_err(|_| malformed())?;
        Self::new(hour, minute).map_err(|_| malformed())
    }

    pub fn minutes_since_midnight(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.0 % 60) as u8
    }
}

/// Minutes since midnight for a 24-hour `HH:MM` string.
pub fn parse_hhmm(s: &str) -> Result<u16, ValidationError> {
    TimeOfDay::parse(s).map(|t| t.minutes_since_midnight())
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}
