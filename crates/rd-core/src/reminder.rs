// crates/rd-core/src/reminder.rs - Reminder Record

use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::schedule::Schedule;

/// Stable reminder identifier, assigned once at creation and never reused
pub type ReminderId = u64;

/// A single reminder as persisted in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub text: String,
    #[serde(default)]
    pub scheduled_for: Option<Schedule>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Reminder {
    pub fn new(
        id: ReminderId,
        text: impl Into<String>,
        scheduled_for: Option<Schedule>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            scheduled_for,
            created_at,
            done: false,
            completed_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.done
    }

    /// Unscheduled reminders are always due; scheduled ones once their due
    /// moment has arrived
    pub fn is_due(&self, now: NaiveDateTime, default_time: NaiveTime) -> bool {
        self.scheduled_for
            .is_none_or(|schedule| schedule.due_at(default_time) <= now)
    }

    /// Listing order: most recently created first, newer id first on ties
    pub fn newest_first(a: &Reminder, b: &Reminder) -> Ordering {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    }
}
