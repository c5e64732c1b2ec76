//! In-memory schedule of calendar events.
//!
//! The book owns the event list for one calendar page. Nothing here is
//! persisted; a front-end may seed a book from JSON and discard it on exit.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::calendar::GregorianDate;
use crate::conflict::TimeOfDay;
use crate::error::{CoreError, Result, ValidationError};
use crate::events::ScheduleChange;

/// Kind of calendar entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Lecture,
    Exam,
    OfficeHours,
    Meeting,
    Deadline,
    #[default]
    Other,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Lecture => "lecture",
            EventType::Exam => "exam",
            EventType::OfficeHours => "office_hours",
            EventType::Meeting => "meeting",
            EventType::Deadline => "deadline",
            EventType::Other => "other",
        }
    }
}

impl std::str::FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "lecture" => Ok(EventType::Lecture),
            "exam" => Ok(EventType::Exam),
            "office_hours" => Ok(EventType::OfficeHours),
            "meeting" => Ok(EventType::Meeting),
            "deadline" => Ok(EventType::Deadline),
            "other" => Ok(EventType::Other),
            other => Err(format!("unknown event type: {other}")),
        }
    }
}

fn new_event_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// A scheduled calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    #[serde(default = "new_event_id")]
    pub id: String,
    pub date: GregorianDate,
    /// All-day events have no time.
    #[serde(default)]
    pub time: Option<TimeOfDay>,
    pub title: String,
    #[serde(default, rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub description: String,
}

/// Field values for creating or replacing an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub date: GregorianDate,
    #[serde(default)]
    pub time: Option<TimeOfDay>,
    pub title: String,
    #[serde(default, rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub description: String,
}

impl NewEvent {
    pub fn new(date: GregorianDate, title: impl Into<String>) -> Self {
        Self {
            date,
            time: None,
            title: title.into(),
            event_type: EventType::default(),
            description: String::new(),
        }
    }

    pub fn at(mut self, time: TimeOfDay) -> Self {
        self.time = Some(time);
        self
    }

    pub fn of_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    fn into_event(self, id: String) -> ScheduleEvent {
        ScheduleEvent {
            id,
            date: self.date,
            time: self.time,
            title: self.title,
            event_type: self.event_type,
            description: self.description,
        }
    }
}

/// Ordered, in-memory event list with a change log.
///
/// Events are kept sorted by date, then time (all-day first), then title.
#[derive(Debug, Clone, Default)]
pub struct ScheduleBook {
    events: Vec<ScheduleEvent>,
    changes: Vec<ScheduleChange>,
}

impl ScheduleBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a book from existing events. Seeding does not log changes.
    ///
    /// # Errors
    /// Returns an error if two events share an id.
    pub fn from_events(
        events: impl IntoIterator<Item = ScheduleEvent>,
    ) -> Result<Self, ValidationError> {
        let events: Vec<ScheduleEvent> = events.into_iter().collect();
        {
            let mut seen = HashSet::new();
            if let Some(dup) = events.iter().find(|e| !seen.insert(e.id.as_str())) {
                return Err(ValidationError::DuplicateEventId(dup.id.clone()));
            }
        }
        let mut book = Self {
            events,
            changes: Vec::new(),
        };
        book.sort();
        Ok(book)
    }

    /// Seed a book from a JSON array of events. Missing ids are generated;
    /// repeated ids are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let events: Vec<ScheduleEvent> = serde_json::from_str(json)?;
        tracing::debug!(count = events.len(), "loaded schedule events from JSON");
        Ok(Self::from_events(events)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.events)?)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduleEvent> {
        self.events.iter()
    }

    pub fn get(&self, id: &str) -> Option<&ScheduleEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Events on `date`, in display order.
    pub fn on_date(&self, date: GregorianDate) -> impl Iterator<Item = &ScheduleEvent> {
        self.events.iter().filter(move |e| e.date == date)
    }

    /// Events in a Gregorian month, in display order.
    pub fn in_month(&self, year: i32, month: u32) -> impl Iterator<Item = &ScheduleEvent> {
        self.events
            .iter()
            .filter(move |e| e.date.year() == year && e.date.month() == month)
    }

    pub fn add(&mut self, new: NewEvent) -> ScheduleEvent {
        let event = new.into_event(new_event_id());
        tracing::debug!(id = %event.id, date = %event.date, "event added");
        self.events.push(event.clone());
        self.sort();
        self.changes.push(ScheduleChange::EventAdded {
            event: event.clone(),
            at: chrono::Utc::now(),
        });
        event
    }

    /// Replace every field of an existing event, keeping its id.
    pub fn update(&mut self, id: &str, new: NewEvent) -> Result<ScheduleEvent> {
        let slot = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CoreError::EventNotFound { id: id.to_string() })?;
        let after = new.into_event(id.to_string());
        let before = std::mem::replace(slot, after.clone());
        tracing::debug!(id, date = %after.date, "event updated");
        self.sort();
        self.changes.push(ScheduleChange::EventUpdated {
            before,
            after: after.clone(),
            at: chrono::Utc::now(),
        });
        Ok(after)
    }

    pub fn remove(&mut self, id: &str) -> Result<ScheduleEvent> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CoreError::EventNotFound { id: id.to_string() })?;
        let event = self.events.remove(index);
        tracing::debug!(id, "event removed");
        self.changes.push(ScheduleChange::EventRemoved {
            event: event.clone(),
            at: chrono::Utc::now(),
        });
        Ok(event)
    }

    /// Drain the change log accumulated since the last call.
    pub fn take_changes(&mut self) -> Vec<ScheduleChange> {
        std::mem::take(&mut self.changes)
    }

    fn sort(&mut self) {
        self.events.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.time.cmp(&b.time))
                .then_with(|| a.title.cmp(&b.title))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> GregorianDate {
        GregorianDate::new(y, m, d).unwrap()
    }

    fn time(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    #[test]
    fn add_keeps_display_order() {
        let mut book = ScheduleBook::new();
        book.add(NewEvent::new(date(2025, 8, 2), "Saturday seminar"));
        book.add(NewEvent::new(date(2025, 8, 1), "Afternoon lab").at(time("15:00")));
        book.add(NewEvent::new(date(2025, 8, 1), "Morning lecture").at(time("09:00")));
        book.add(NewEvent::new(date(2025, 8, 1), "Reading week"));

        let titles: Vec<_> = book.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Reading week", "Morning lecture", "Afternoon lab", "Saturday seminar"]
        );
    }

    #[test]
    fn update_keeps_id_and_logs_change() {
        let mut book = ScheduleBook::new();
        let event =
            book.add(NewEvent::new(date(2025, 8, 1), "Lecture").of_type(EventType::Lecture));
        book.take_changes();

        let updated = book
            .update(&event.id, NewEvent::new(date(2025, 8, 4), "Moved lecture").at(time("10:00")))
            .unwrap();
        assert_eq!(updated.id, event.id);
        assert_eq!(book.get(&event.id).unwrap().title, "Moved lecture");

        let changes = book.take_changes();
        assert_eq!(changes.len(), 1);
        match &changes[0] {
            ScheduleChange::EventUpdated { before, after, .. } => {
                assert_eq!(before.title, "Lecture");
                assert_eq!(after.date, date(2025, 8, 4));
            }
            other => panic!("unexpected change {other:?}"),
        }
        assert!(book.take_changes().is_empty());
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut book = ScheduleBook::new();
        assert!(matches!(
            book.remove("missing"),
            Err(CoreError::EventNotFound { .. })
        ));
        assert!(book
            .update("missing", NewEvent::new(date(2025, 1, 1), "x"))
            .is_err());
    }

    #[test]
    fn remove_deletes_event() {
        let mut book = ScheduleBook::new();
        let event = book.add(NewEvent::new(date(2025, 8, 1), "Exam").of_type(EventType::Exam));
        let removed = book.remove(&event.id).unwrap();
        assert_eq!(removed.title, "Exam");
        assert!(book.is_empty());
        assert_eq!(book.take_changes().last().unwrap().event_id(), event.id);
    }

    #[test]
    fn filters_by_date_and_month() {
        let mut book = ScheduleBook::new();
        book.add(NewEvent::new(date(2025, 8, 1), "A"));
        book.add(NewEvent::new(date(2025, 8, 1), "B"));
        book.add(NewEvent::new(date(2025, 8, 31), "C"));
        book.add(NewEvent::new(date(2025, 9, 1), "D"));
        assert_eq!(book.on_date(date(2025, 8, 1)).count(), 2);
        assert_eq!(book.in_month(2025, 8).count(), 3);
        assert_eq!(book.in_month(2025, 9).count(), 1);
    }

    #[test]
    fn from_json_generates_missing_ids() {
        let json = r#"[
            {"date": "2025-08-05", "time": "10:00", "title": "Tutorial", "type": "lecture"},
            {"id": "exam-1", "date": "2025-08-01", "title": "Midterm", "type": "exam"}
        ]"#;
        let book = ScheduleBook::from_json(json).unwrap();
        assert_eq!(book.len(), 2);
        let first = book.iter().next().unwrap();
        assert_eq!(first.id, "exam-1");
        assert!(first.time.is_none());
        let second = book.iter().nth(1).unwrap();
        assert!(!second.id.is_empty());
        assert_eq!(second.event_type, EventType::Lecture);
    }

    #[test]
    fn from_json_rejects_duplicate_ids() {
        let json = r#"[
            {"id": "lec", "date": "2025-08-01", "title": "Lecture"},
            {"id": "lec", "date": "2025-08-02", "title": "Same id"}
        ]"#;
        match ScheduleBook::from_json(json) {
            Err(CoreError::Validation(ValidationError::DuplicateEventId(id))) => {
                assert_eq!(id, "lec")
            }
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn from_json_rejects_bad_time() {
        let json = r#"[{"date": "2025-08-05", "time": "25:00", "title": "Late"}]"#;
        assert!(ScheduleBook::from_json(json).is_err());
    }

    #[test]
    fn event_type_parsing() {
        assert_eq!("office-hours".parse::<EventType>().unwrap(), EventType::OfficeHours);
        assert_eq!("Exam".parse::<EventType>().unwrap(), EventType::Exam);
        assert!("party".parse::<EventType>().is_err());
        assert_eq!(EventType::OfficeHours.as_str(), "office_hours");
    }
}
