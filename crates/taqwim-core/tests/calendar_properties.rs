//! Property tests for the calendar math and conflict predicates.

use proptest::prelude::*;
use taqwim_core::{
    from_julian_day_number, is_recognized_holiday, is_within_window, to_hijri_date,
    to_julian_day_number, FixedGregorianRule, GregorianDate, LunarHijriRule, TimeOfDay, TimeWindow,
};

/// 1900-01-01 ..= 2100-12-31 as Julian Day Numbers.
const RANGE_START: i64 = 2_415_021;
const RANGE_END: i64 = 2_488_434;

fn any_date() -> impl Strategy<Value = GregorianDate> {
    (RANGE_START..=RANGE_END).prop_map(from_julian_day_number)
}

fn any_time() -> impl Strategy<Value = TimeOfDay> {
    (0u16..1440).prop_map(|m| TimeOfDay::from_minutes(m).unwrap())
}

proptest! {
    /// Invariant: consecutive days differ by exactly one Julian day.
    #[test]
    fn julian_day_advances_by_one(date in any_date()) {
        prop_assert_eq!(to_julian_day_number(date.succ()), to_julian_day_number(date) + 1);
    }

    /// Invariant: the inverse recovers the date.
    #[test]
    fn julian_day_inverse(date in any_date()) {
        prop_assert_eq!(from_julian_day_number(to_julian_day_number(date)), date);
    }

    /// Invariant: Hijri month and day stay in range.
    #[test]
    fn hijri_fields_in_range(date in any_date()) {
        let hijri = to_hijri_date(date);
        prop_assert!((1..=12).contains(&hijri.month), "{} -> {:?}", date, hijri);
        prop_assert!((1..=30).contains(&hijri.day), "{} -> {:?}", date, hijri);
    }

    /// Invariant: the Hijri year never goes backwards as dates advance.
    #[test]
    fn hijri_year_is_monotonic(date in any_date()) {
        prop_assert!(to_hijri_date(date.succ()).year >= to_hijri_date(date).year);
    }

    /// Invariant: fixed rules ignore the year.
    #[test]
    fn fixed_rule_matches_every_year(year in 1900i32..=2100) {
        let date = GregorianDate::new(year, 2, 22).unwrap();
        let rules = vec![FixedGregorianRule::new(2, 22, "Founding Day")];
        prop_assert!(is_recognized_holiday(date, &rules, &[]));
    }

    /// Invariant: a lunar rule built from a date's own Hijri month/day matches it,
    /// and a rule for the neighbouring Hijri day does not.
    #[test]
    fn lunar_rule_matches_own_hijri_day(date in any_date()) {
        let hijri = to_hijri_date(date);
        let exact = vec![LunarHijriRule::new(hijri.month, [hijri.day], "Exact")];
        prop_assert!(is_recognized_holiday(date, &[], &exact));

        let other_day = if hijri.day == 30 { 29 } else { hijri.day + 1 };
        let outside = vec![LunarHijriRule::new(hijri.month, [other_day], "Outside")];
        prop_assert!(!is_recognized_holiday(date, &[], &outside));
    }

    /// Invariant: only the configured weekday can conflict.
    #[test]
    fn weekday_gates_window(date in any_date(), time in any_time()) {
        let window = TimeWindow::friday_prayer();
        if date.weekday() != window.weekday {
            prop_assert!(!is_within_window(date, Some(time), &window));
        }
    }

    /// Invariant: an event without a time never conflicts.
    #[test]
    fn no_time_never_conflicts(date in any_date()) {
        prop_assert!(!is_within_window(date, None, &TimeWindow::friday_prayer()));
    }

    /// Invariant: on the right weekday, conflict == start <= t <= end.
    #[test]
    fn window_is_closed_interval(offset in 0i64..1000, time in any_time()) {
        // 2025-08-01 is a Friday.
        let friday = GregorianDate::new(2025, 8, 1).unwrap().add_days(offset * 7);
        let window = TimeWindow::friday_prayer();
        let m = time.minutes_since_midnight();
        let expected = (720..=810).contains(&m);
        prop_assert_eq!(is_within_window(friday, Some(time), &window), expected);
    }
}

#[test]
fn hijri_bounds_hold_for_every_day_1900_to_2100() {
    let mut date = GregorianDate::new(1900, 1, 1).unwrap();
    let end = GregorianDate::new(2100, 12, 31).unwrap();
    while date <= end {
        let hijri = to_hijri_date(date);
        assert!((1..=12).contains(&hijri.month), "{date} -> {hijri:?}");
        assert!((1..=30).contains(&hijri.day), "{date} -> {hijri:?}");
        date = date.succ();
    }
}
