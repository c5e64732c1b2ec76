//! Calendar arithmetic: validated Gregorian dates, Julian Day Numbers and
//! the arithmetic (tabular) Hijri approximation.

mod gregorian;
mod hijri;
mod julian;

pub use gregorian::{days_in_month, is_leap_year, GregorianDate, WEEKDAY_NAMES};
pub use hijri::{
    hijri_month_name, to_hijri_date, HijriConverter, HijriDate, HijriYearMode,
    DEMO_PINNED_HIJRI_YEAR, HIJRI_MONTH_NAMES,
};
pub use julian::{from_julian_day_number, to_julian_day_number, JulianDayNumber};
