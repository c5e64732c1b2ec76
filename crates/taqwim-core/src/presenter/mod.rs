//! Presentation layer for the schedule calendar.
//!
//! Combines the Hijri converter, the holiday calendar and the conflict
//! detector into view models a front-end can render directly: annotated
//! month grids and the live warning on the add/edit event form. Conflicts are
//! advisory only; nothing here refuses to save an event because of one.

mod form;

pub use form::{EventDraft, EventForm, FormMode, SavedEvent};

use serde::{Deserialize, Serialize};

use crate::calendar::{days_in_month, GregorianDate, HijriConverter, HijriDate};
use crate::conflict::{ConflictDetector, TimeOfDay, TimeWindow};
use crate::error::ValidationError;
use crate::holiday::{Holiday, HolidayCalendar};
use crate::schedule::{ScheduleBook, ScheduleEvent};
use crate::storage::Config;

/// Advisory warning for an event that falls inside a conflict window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictWarning {
    pub window_label: String,
    pub weekday: u8,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub message: String,
}

impl From<&TimeWindow> for ConflictWarning {
    fn from(window: &TimeWindow) -> Self {
        let label = if window.label.is_empty() {
            "Reserved time"
        } else {
            window.label.as_str()
        };
        Self {
            window_label: label.to_string(),
            weekday: window.weekday,
            start: window.start,
            end: window.end,
            message: format!(
                "Overlaps {label} ({} {}-{})",
                window.weekday_name(),
                window.start,
                window.end
            ),
        }
    }
}

/// An event as rendered in a day cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedEvent {
    pub event: ScheduleEvent,
    pub conflict: Option<ConflictWarning>,
}

/// One day of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: GregorianDate,
    /// Present when dual-calendar display is on.
    pub hijri: Option<HijriDate>,
    pub holiday: Option<Holiday>,
    pub is_today: bool,
    pub events: Vec<AnnotatedEvent>,
}

impl DayCell {
    pub fn has_conflict(&self) -> bool {
        self.events.iter().any(|e| e.conflict.is_some())
    }
}

/// A month laid out as weeks of seven optional cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    /// Weekday index (0 = Sunday) of the first column.
    pub week_starts_on: u8,
    pub weeks: Vec<[Option<DayCell>; 7]>,
}

impl MonthView {
    /// Every non-blank cell in date order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.iter().flatten())
    }

    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.days().find(|cell| cell.date.day() == day)
    }

    pub fn conflict_count(&self) -> usize {
        self.days()
            .flat_map(|cell| cell.events.iter())
            .filter(|e| e.conflict.is_some())
            .count()
    }
}

/// Renders calendar views and form warnings from one configuration.
#[derive(Debug, Clone)]
pub struct ScheduleConflictPresenter {
    converter: HijriConverter,
    holidays: HolidayCalendar,
    detector: ConflictDetector,
    show_hijri: bool,
    week_starts_on: u8,
    today: Option<GregorianDate>,
}

impl Default for ScheduleConflictPresenter {
    fn default() -> Self {
        Self::new(
            HijriConverter::default(),
            HolidayCalendar::default(),
            ConflictDetector::default(),
        )
    }
}

impl ScheduleConflictPresenter {
    pub fn new(
        converter: HijriConverter,
        holidays: HolidayCalendar,
        detector: ConflictDetector,
    ) -> Self {
        Self {
            converter,
            holidays,
            detector,
            show_hijri: true,
            week_starts_on: 0,
            today: None,
        }
    }

    /// Presenter configured from the user's settings.
    pub fn from_config(config: &Config) -> Result<Self, ValidationError> {
        let holidays = HolidayCalendar::new(
            config.fixed_holidays.clone(),
            config.lunar_holidays.clone(),
        )?;
        let detector = ConflictDetector::new(config.conflict_windows.clone())?;
        Ok(Self::new(HijriConverter::new(config.hijri_year_mode()), holidays, detector)
            .with_dual_calendar(config.hijri.show_dual_calendar)
            .with_week_start(config.calendar.week_starts_on)?)
    }

    pub fn with_dual_calendar(mut self, show_hijri: bool) -> Self {
        self.show_hijri = show_hijri;
        self
    }

    pub fn with_week_start(mut self, weekday: u8) -> Result<Self, ValidationError> {
        if weekday > 6 {
            return Err(ValidationError::InvalidWeekday(weekday));
        }
        self.week_starts_on = weekday;
        Ok(self)
    }

    /// Mark `date` as today in rendered cells.
    pub fn with_today(mut self, date: GregorianDate) -> Self {
        self.today = Some(date);
        self
    }

    pub fn converter(&self) -> &HijriConverter {
        &self.converter
    }

    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    pub fn detector(&self) -> &ConflictDetector {
        &self.detector
    }

    /// Warning for an event at `date`/`time`, if it hits a window.
    pub fn conflict_for(
        &self,
        date: GregorianDate,
        time: Option<TimeOfDay>,
    ) -> Option<ConflictWarning> {
        self.detector
            .first_conflict(date, time)
            .map(ConflictWarning::from)
    }

    /// Warnings for every window the event falls in.
    pub fn conflicts_for(
        &self,
        date: GregorianDate,
        time: Option<TimeOfDay>,
    ) -> Vec<ConflictWarning> {
        self.detector
            .conflicts(date, time)
            .into_iter()
            .map(ConflictWarning::from)
            .collect()
    }

    pub fn annotate(&self, event: &ScheduleEvent) -> AnnotatedEvent {
        AnnotatedEvent {
            event: event.clone(),
            conflict: self.conflict_for(event.date, event.time),
        }
    }

    pub fn day_cell(&self, date: GregorianDate, book: &ScheduleBook) -> DayCell {
        // Holiday matching always uses the derived calendar; the year mode only
        // affects what is displayed.
        let hijri = self.converter.convert(date);
        DayCell {
            date,
            hijri: self.show_hijri.then_some(hijri),
            holiday: self
                .holidays
                .matches_with_hijri(date, &hijri)
                .into_iter()
                .next(),
            is_today: self.today == Some(date),
            events: book.on_date(date).map(|e| self.annotate(e)).collect(),
        }
    }

    /// Annotated grid for a Gregorian month.
    pub fn month_view(
        &self,
        year: i32,
        month: u32,
        book: &ScheduleBook,
    ) -> Result<MonthView, ValidationError> {
        let first = GregorianDate::new(year, month, 1)?;
        let lead = ((first.weekday() + 7 - self.week_starts_on) % 7) as usize;

        let mut weeks = Vec::new();
        let mut week: [Option<DayCell>; 7] = Default::default();
        let mut column = lead;
        let mut date = first;
        for _ in 0..days_in_month(year, month) {
            week[column] = Some(self.day_cell(date, book));
            column += 1;
            if column == 7 {
                weeks.push(std::mem::take(&mut week));
                column = 0;
            }
            date = date.succ();
        }
        if column > 0 {
            weeks.push(week);
        }

        Ok(MonthView {
            year,
            month,
            week_starts_on: self.week_starts_on,
            weeks,
        })
    }

    /// Live warning for the form; `None` while the date or time is incomplete.
    pub fn draft_warning(&self, draft: &EventDraft) -> Option<ConflictWarning> {
        let date = draft.parsed_date()?;
        let time = draft.parsed_time()?;
        self.conflict_for(date, Some(time))
    }

    /// Validate and store a draft. A conflict is reported, never enforced.
    pub fn save_draft(
        &self,
        book: &mut ScheduleBook,
        draft: &EventDraft,
        editing: Option<&str>,
    ) -> crate::error::Result<SavedEvent> {
        let new = draft.to_new_event()?;
        let event = match editing {
            Some(id) => book.update(id, new)?,
            None => book.add(new),
        };
        let warning = self.conflict_for(event.date, event.time);
        if let Some(w) = &warning {
            tracing::info!(
                id = %event.id,
                window = %w.window_label,
                "saved event overlaps a conflict window"
            );
        }
        Ok(SavedEvent { event, warning })
    }
}
