//! # Taqwim Core Library
//!
//! Calendar math and scheduling-conflict checks behind a university
//! schedule calendar. The library is pure and synchronous; the CLI and any
//! GUI are thin layers over the same functions.
//!
//! ## Architecture
//!
//! - **Calendar**: validated Gregorian dates, Julian Day Numbers and the
//!   arithmetic Hijri approximation
//! - **Holidays**: fixed Gregorian and lunar Hijri rules for day badges
//! - **Conflicts**: weekly time windows (Friday prayer) checked against events
//! - **Schedule**: the in-memory event list of one calendar page
//! - **Presenter**: month grids and the add/edit form warning, composed from
//!   the above
//! - **Storage**: TOML configuration for rules, windows and display options
//!
//! ## Key Components
//!
//! - [`to_julian_day_number`], [`to_hijri_date`], [`is_recognized_holiday`],
//!   [`is_within_window`]: the pure predicates
//! - [`ScheduleConflictPresenter`]: view models for the calendar page
//! - [`ScheduleBook`]: event storage for one session
//! - [`Config`]: application configuration management

pub mod calendar;
pub mod conflict;
pub mod error;
pub mod events;
pub mod holiday;
pub mod presenter;
pub mod schedule;
pub mod storage;

pub use calendar::{
    from_julian_day_number, to_hijri_date, to_julian_day_number, GregorianDate, HijriConverter,
    HijriDate, HijriYearMode, JulianDayNumber,
};
pub use conflict::{is_within_window, parse_hhmm, ConflictDetector, TimeOfDay, TimeWindow};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::ScheduleChange;
pub use holiday::{
    is_recognized_holiday, recognized_holiday, FixedGregorianRule, Holiday, HolidayCalendar,
    HolidayKind, HolidayRule, LunarHijriRule,
};
pub use presenter::{
    AnnotatedEvent, ConflictWarning, DayCell, EventDraft, EventForm, FormMode, MonthView,
    SavedEvent, ScheduleConflictPresenter,
};
pub use schedule::{EventType, NewEvent, ScheduleBook, ScheduleEvent};
pub use storage::Config;
