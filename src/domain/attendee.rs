use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::AttendeeId;

/// Person registered for the event, as returned by the listing API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub id: AttendeeId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    /// Moment the attendee was marked present; `None` when not checked in.
    #[serde(default)]
    pub checked_in_at: Option<DateTime<Utc>>,
}

impl Attendee {
    pub fn is_checked_in(&self) -> bool {
        self.checked_in_at.is_some()
    }
}

/// One page of attendees together with the number of matches across all pages.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AttendeePage {
    pub attendees: Vec<Attendee>,
    pub total: usize,
}
