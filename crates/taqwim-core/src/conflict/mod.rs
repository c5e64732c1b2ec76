//! Recurring time-window conflicts (Friday congregational prayer and the like).
//!
//! A window is a weekday plus a closed `[start, end]` range of minutes. An
//! event conflicts when it is dated on that weekday and its time falls inside
//! the range, edges included. Events without a time never conflict.

mod time;

pub use time::{parse_hhmm, TimeOfDay};

use serde::{Deserialize, Serialize};

use crate::calendar::{GregorianDate, WEEKDAY_NAMES};
use crate::error::ValidationError;

/// Weekday index of Friday (0 = Sunday).
pub const FRIDAY: u8 = 5;

/// A recurring weekly time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// 0 = Sunday ... 6 = Saturday
    pub weekday: u8,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    #[serde(default)]
    pub label: String,
}

impl TimeWindow {
    pub fn new(
        weekday: u8,
        start: TimeOfDay,
        end: TimeOfDay,
        label: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let window = Self {
            weekday,
            start,
            end,
            label: label.into(),
        };
        window.validate()?;
        Ok(window)
    }

    /// The demo Friday prayer window, 12:00-13:30.
    pub fn friday_prayer() -> Self {
        Self {
            weekday: FRIDAY,
            start: TimeOfDay::from_hm_unchecked(12, 0),
            end: TimeOfDay::from_hm_unchecked(13, 30),
            label: "Friday prayer".to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.weekday > 6 {
            return Err(ValidationError::InvalidWeekday(self.weekday));
        }
        if self.end < self.start {
            return Err(ValidationError::InvertedWindow {
                start: self.start.to_string(),
                end: self.end.to_string(),
            });
        }
        Ok(())
    }

    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES.get(self.weekday as usize).copied().unwrap_or("Unknown")
    }

    /// Whether `time` lies in `[start, end]`, ignoring the weekday.
    pub fn contains_time(&self, time: TimeOfDay) -> bool {
        self.start <= time && time <= self.end
    }
}

/// Whether an event at `date`/`time` falls inside `window`.
pub fn is_within_window(date: GregorianDate, time: Option<TimeOfDay>, window: &TimeWindow) -> bool {
    let Some(time) = time else {
        return false;
    };
    date.weekday() == window.weekday && window.contains_time(time)
}

/// Checks events against a configured set of windows.
///
/// Only built through [`ConflictDetector::new`], so every window is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictDetector {
    windows: Vec<TimeWindow>,
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self {
            windows: vec![TimeWindow::friday_prayer()],
        }
    }
}

impl ConflictDetector {
    /// Build a detector, validating every window.
    pub fn new(windows: Vec<TimeWindow>) -> Result<Self, ValidationError> {
        for window in &windows {
            window.validate()?;
        }
        Ok(Self { windows })
    }

    pub fn windows(&self) -> &[TimeWindow] {
        &self.windows
    }

    /// Every window the event falls in, in configuration order.
    pub fn conflicts(&self, date: GregorianDate, time: Option<TimeOfDay>) -> Vec<&TimeWindow> {
        self.windows
            .iter()
            .filter(|window| is_within_window(date, time, window))
            .collect()
    }

    pub fn first_conflict(
        &self,
        date: GregorianDate,
        time: Option<TimeOfDay>,
    ) -> Option<&TimeWindow> {
        self.windows
            .iter()
            .find(|window| is_within_window(date, time, window))
    }

    pub fn has_conflict(&self, date: GregorianDate, time: Option<TimeOfDay>) -> bool {
        self.first_conflict(date, time).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> GregorianDate {
        GregorianDate::new(y, m, d).unwrap()
    }

    fn at(s: &str) -> Option<TimeOfDay> {
        Some(TimeOfDay::parse(s).unwrap())
    }

    #[test]
    fn window_edges_are_inclusive() {
        let friday = date(2025, 8, 1);
        let window = TimeWindow::friday_prayer();
        assert!(is_within_window(friday, at("12:00"), &window));
        assert!(is_within_window(friday, at("13:30"), &window));
        assert!(!is_within_window(friday, at("13:31"), &window));
        assert!(!is_within_window(friday, at("11:59"), &window));
    }

    #[test]
    fn other_weekdays_never_conflict() {
        let thursday = date(2025, 7, 31);
        let window = TimeWindow::friday_prayer();
        assert!(!is_within_window(thursday, at("12:30"), &window));
        assert!(!is_within_window(date(2025, 8, 5), at("10:00"), &window));
    }

    #[test]
    fn missing_time_never_conflicts() {
        let window = TimeWindow::friday_prayer();
        assert!(!is_within_window(date(2025, 8, 1), None, &window));
    }

    #[test]
    fn friday_lecture_conflicts() {
        let detector = ConflictDetector::default();
        let hit = detector.first_conflict(date(2025, 8, 1), at("12:15")).unwrap();
        assert_eq!(hit.label, "Friday prayer");
        assert_eq!(hit.weekday_name(), "Friday");
        assert!(!detector.has_conflict(date(2025, 8, 5), at("10:00")));
    }

    #[test]
    fn window_validation() {
        let noon = TimeOfDay::parse("12:00").unwrap();
        let one = TimeOfDay::parse("13:00").unwrap();
        assert!(TimeWindow::new(FRIDAY, one, noon, "Backwards").is_err());
        assert!(TimeWindow::new(7, noon, one, "No such day").is_err());
        assert!(TimeWindow::new(FRIDAY, noon, noon, "Instant").is_ok());
    }

    #[test]
    fn detector_reports_all_overlapping_windows() {
        let lunch = TimeWindow::new(
            FRIDAY,
            TimeOfDay::parse("12:00").unwrap(),
            TimeOfDay::parse("12:45").unwrap(),
            "Lunch",
        )
        .unwrap();
        let detector = ConflictDetector::new(vec![TimeWindow::friday_prayer(), lunch]).unwrap();
        let hits = detector.conflicts(date(2025, 8, 1), at("12:30"));
        assert_eq!(hits.len(), 2);
        assert_eq!(detector.conflicts(date(2025, 8, 1), at("13:00")).len(), 1);
        assert!(detector.conflicts(date(2025, 8, 1), None).is_empty());
    }

    #[test]
    fn detector_new_validates_every_window() {
        let backwards = TimeWindow {
            weekday: FRIDAY,
            start: TimeOfDay::parse("14:00").unwrap(),
            end: TimeOfDay::parse("13:00").unwrap(),
            label: "Backwards".into(),
        };
        let result = ConflictDetector::new(vec![TimeWindow::friday_prayer(), backwards]);
        assert!(matches!(result, Err(ValidationError::InvertedWindow { .. })));
    }

    #[test]
    fn window_deserializes_from_strings() {
        let window: TimeWindow = serde_json::from_str(
            r#"{"weekday":5,"start":"12:00","end":"13:30","label":"Friday prayer"}"#,
        )
        .unwrap();
        assert_eq!(window, TimeWindow::friday_prayer());
    }
}
