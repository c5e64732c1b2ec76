//! Julian Day Number conversion.
//!
//! Integer-day granularity only: the astronomical half-day offset is ignored,
//! so every Gregorian day maps to exactly one integer and consecutive days
//! differ by exactly 1.

use super::gregorian::GregorianDate;

/// Days elapsed since the start of the Julian Period (integer form).
pub type JulianDayNumber = i64;

/// Convert a Gregorian date to its Julian Day Number.
///
/// Standard Fliegel/Van Flandern formula. All divisions floor, including for
/// proleptic dates before year 1.
pub fn to_julian_day_number(date: GregorianDate) -> JulianDayNumber {
    let year = i64::from(date.year());
    let month = i64::from(date.month());
    let day = i64::from(date.day());

    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    let leap_days = y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400);
    day + (153 * m + 2).div_euclid(5) + 365 * y + leap_days - 32045
}

/// Inverse of [`to_julian_day_number`].
pub fn from_julian_day_number(jdn: JulianDayNumber) -> GregorianDate {
    let a = jdn + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);

    GregorianDate::from_parts_unchecked(year as i32, month as u32, day as u32)
}
