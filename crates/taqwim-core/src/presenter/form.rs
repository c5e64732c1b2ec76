//! Add/edit event form state.
//!
//! ```text
//! Closed -> Adding | Editing(id) -> Closed
//! ```
//!
//! Field values are kept as raw strings while the user types. The conflict
//! warning is recomputed from whatever parses; saving validates everything.

use serde::{Deserialize, Serialize};

use super::{ConflictWarning, ScheduleConflictPresenter};
use crate::calendar::GregorianDate;
use crate::conflict::TimeOfDay;
use crate::error::{CoreError, Result, ValidationError};
use crate::schedule::{EventType, NewEvent, ScheduleBook, ScheduleEvent};

/// Raw form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    /// `YYYY-MM-DD`, possibly empty or half-typed.
    pub date: String,
    /// `HH:MM`, possibly empty or half-typed.
    pub time: String,
    pub title: String,
    pub event_type: EventType,
    pub description: String,
}

impl EventDraft {
    pub fn from_event(event: &ScheduleEvent) -> Self {
        Self {
            date: event.date.to_string(),
            time: event.time.map(|t| t.to_string()).unwrap_or_default(),
            title: event.title.clone(),
            event_type: event.event_type,
            description: event.description.clone(),
        }
    }

    /// The date, if the field currently holds a valid one.
    pub fn parsed_date(&self) -> Option<GregorianDate> {
        let date = self.date.trim();
        if date.is_empty() {
            return None;
        }
        GregorianDate::parse(date).ok()
    }

    /// The time, if the field currently holds a valid one.
    pub fn parsed_time(&self) -> Option<TimeOfDay> {
        if self.time.trim().is_empty() {
            return None;
        }
        TimeOfDay::parse(&self.time).ok()
    }

    /// Fully validated event fields. An empty time means an all-day event.
    pub fn to_new_event(&self) -> Result<NewEvent, ValidationError> {
        if self.date.trim().is_empty() {
            return Err(ValidationError::MissingField("date".into()));
        }
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingField("title".into()));
        }
        let date = GregorianDate::parse(self.date.trim())?;
        let time = if self.time.trim().is_empty() {
            None
        } else {
            Some(TimeOfDay::parse(&self.time)?)
        };
        Ok(NewEvent {
            date,
            time,
            title: title.to_string(),
            event_type: self.event_type,
            description: self.description.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "id", rename_all = "snake_case")]
pub enum FormMode {
    #[default]
    Closed,
    Adding,
    Editing(String),
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedEvent {
    pub event: ScheduleEvent,
    pub warning: Option<ConflictWarning>,
}

/// The add/edit event dialog.
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    mode: FormMode,
    draft: EventDraft,
}

impl EventForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    /// Open an empty form, optionally prefilled with the clicked day.
    pub fn open_add(&mut self, date: Option<GregorianDate>) {
        self.mode = FormMode::Adding;
        self.draft = EventDraft {
            date: date.map(|d| d.to_string()).unwrap_or_default(),
            ..EventDraft::default()
        };
    }

    pub fn open_edit(&mut self, event: &ScheduleEvent) {
        self.mode = FormMode::Editing(event.id.clone());
        self.draft = EventDraft::from_event(event);
    }

    pub fn set_date(&mut self, value: impl Into<String>) {
        self.draft.date = value.into();
    }

    pub fn set_time(&mut self, value: impl Into<String>) {
        self.draft.time = value.into();
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.draft.title = value.into();
    }

    pub fn set_event_type(&mut self, value: EventType) {
        self.draft.event_type = value;
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.draft.description = value.into();
    }

    /// Live conflict banner for the current field values.
    pub fn warning(&self, presenter: &ScheduleConflictPresenter) -> Option<ConflictWarning> {
        if !self.is_open() {
            return None;
        }
        presenter.draft_warning(&self.draft)
    }

    /// Save the draft and close the form. On error the form stays open.
    pub fn submit(
        &mut self,
        presenter: &ScheduleConflictPresenter,
        book: &mut ScheduleBook,
    ) -> Result<SavedEvent> {
        let saved = match &self.mode {
            FormMode::Closed => {
                return Err(CoreError::Validation(ValidationError::MissingField(
                    "open form".into(),
                )))
            }
            FormMode::Adding => presenter.save_draft(book, &self.draft, None)?,
            FormMode::Editing(id) => presenter.save_draft(book, &self.draft, Some(id))?,
        };
        self.close();
        Ok(saved)
    }

    /// Delete the event being edited and close the form.
    pub fn delete(&mut self, book: &mut ScheduleBook) -> Result<ScheduleEvent> {
        let FormMode::Editing(id) = &self.mode else {
            return Err(CoreError::Validation(ValidationError::MissingField(
                "event being edited".into(),
            )));
        };
        let removed = book.remove(id)?;
        self.close();
        Ok(removed)
    }

    pub fn cancel(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.mode = FormMode::Closed;
        self.draft = EventDraft::default();
    }
}
