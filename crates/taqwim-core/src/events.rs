use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schedule::ScheduleEvent;

/// Every mutation of a [`ScheduleBook`](crate::ScheduleBook) produces a change.
/// The front-end polls for changes to refresh the views that show the event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScheduleChange {
    EventAdded {
        event: ScheduleEvent,
        at: DateTime<Utc>,
    },
    EventUpdated {
        before: ScheduleEvent,
        after: ScheduleEvent,
        at: DateTime<Utc>,
    },
    EventRemoved {
        event: ScheduleEvent,
        at: DateTime<Utc>,
    },
}

impl ScheduleChange {
    /// Id of the event this change concerns.
    pub fn event_id(&self) -> &str {
        match self {
            ScheduleChange::EventAdded { event, .. }
            | ScheduleChange::EventRemoved { event, .. } => &event.id,
            ScheduleChange::EventUpdated { after, .. } => &after.id,
        }
    }

    pub fn at(&self) -> DateTime<Utc> {
        match self {
            ScheduleChange::EventAdded { at, .. }
            | ScheduleChange::EventUpdated { at, .. }
            | ScheduleChange::EventRemoved { at, .. } => *at,
        }
    }
}
