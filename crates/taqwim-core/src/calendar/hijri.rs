//! Arithmetic Hijri calendar.
//!
//! This is the tabular approximation used for calendar display: a 30-year
//! cycle of 10631 days, a mean year of 354.36667 days and a mean month of
//! 29.5 days. Real Hijri month starts depend on crescent sighting and can
//! differ from these results by one or two days. Known artifacts of the
//! approximation, kept as-is:
//!
//! - day 1 of some months is never produced (the previous day reads 30 and
//!   the next reads 2);
//! - the 355th/356th day of a cycle year comes out as "month 13" and is
//!   folded into Muharram of the following year, which can repeat a day.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::gregorian::GregorianDate;
use super::julian::to_julian_day_number;

/// Julian Day Number offset of the Islamic epoch used by the formula.
const ISLAMIC_EPOCH_OFFSET: i64 = 1_948_439;
/// Shift of 30 Hijri years that keeps the cycle arithmetic positive.
const CYCLE_SHIFT_DAYS: i64 = 10_632;
/// Days in one 30-year Hijri cycle.
const DAYS_PER_CYCLE: i64 = 10_631;
const MEAN_YEAR_DAYS: f64 = 354.366_67;
const MEAN_MONTH_DAYS: f64 = 29.5;
/// `CYCLE_SHIFT_DAYS` adds 30 years and the in-cycle year index is zero-based.
const YEAR_CORRECTION: i64 = 29;

/// Year shown by the original demo calendar regardless of the date.
pub const DEMO_PINNED_HIJRI_YEAR: i32 = 1447;

/// Hijri month names (index 0 = Muharram).
pub const HIJRI_MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Ula",
    "Jumada al-Akhirah",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

/// Name of Hijri `month` (1-12), or `"Unknown"`.
pub fn hijri_month_name(month: u32) -> &'static str {
    match month {
        1..=12 => HIJRI_MONTH_NAMES[(month - 1) as usize],
        _ => "Unknown",
    }
}

/// A date in the arithmetic Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HijriDate {
    pub year: i32,
    /// 1 (Muharram) ..= 12 (Dhu al-Hijjah)
    pub month: u32,
    /// 1 ..= 30
    pub day: u32,
}

impl HijriDate {
    pub fn month_name(&self) -> &'static str {
        hijri_month_name(self.month)
    }

    /// Same month and day, regardless of year.
    pub fn is_month_day(&self, month: u32, day: u32) -> bool {
        self.month == month && self.day == day
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} AH", self.day, self.month_name(), self.year)
    }
}

/// How the year component of a converted date is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "year")]
pub enum HijriYearMode {
    /// Year computed from the cycle arithmetic.
    #[default]
    Derived,
    /// Every date reports this year (demo display mode). Month and day are
    /// still derived.
    Pinned(i32),
}

/// Gregorian to Hijri converter with a configurable year mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct HijriConverter {
    year_mode: HijriYearMode,
}

impl HijriConverter {
    pub fn new(year_mode: HijriYearMode) -> Self {
        Self { year_mode }
    }

    /// Converter that reproduces the demo calendar's fixed year.
    pub fn demo() -> Self {
        Self::new(HijriYearMode::Pinned(DEMO_PINNED_HIJRI_YEAR))
    }

    pub fn year_mode(&self) -> HijriYearMode {
        self.year_mode
    }

    pub fn convert(&self, date: GregorianDate) -> HijriDate {
        let derived = to_hijri_date(date);
        match self.year_mode {
            HijriYearMode::Derived => derived,
            HijriYearMode::Pinned(year) => HijriDate { year, ..derived },
        }
    }
}

/// Convert a Gregorian date to the arithmetic Hijri calendar.
pub fn to_hijri_date(date: GregorianDate) -> HijriDate {
    let jdn = to_julian_day_number(date);
    let islamic_days = jdn - ISLAMIC_EPOCH_OFFSET + CYCLE_SHIFT_DAYS;

    let n = (islamic_days - 1).div_euclid(DAYS_PER_CYCLE);
    let r = islamic_days - DAYS_PER_CYCLE * n;
    let j = ((r - 1) as f64 / MEAN_YEAR_DAYS).floor() as i64;
    let k = r - (MEAN_YEAR_DAYS * j as f64).floor() as i64;

    let mut year = 30 * n + j - YEAR_CORRECTION;
    let mut month = ((k - 1) as f64 / MEAN_MONTH_DAYS).floor() as i64 + 1;
    let day = k - (MEAN_MONTH_DAYS * (month - 1) as f64).floor() as i64;

    if month > 12 {
        tracing::debug!(%date, day, "folding month 13 into Muharram of the next year");
        year += 1;
        month = 1;
    }

    HijriDate {
        year: year as i32,
        month: month as u32,
        day: day as u32,
    }
}
