use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::id::{ClubId, EventId, PersonId};
use super::person::PersonKind;

/// A club event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub club_id: ClubId,
    pub name: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub venue: Option<String>,
}

/// Input for scheduling a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub venue: Option<String>,
}

/// An event awaiting persistence.
///
/// Carries no id; the backing store assigns one when the record is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub club_id: ClubId,
    pub name: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub venue: Option<String>,
}

/// A check-in record for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    pub person_id: PersonId,
    pub event_id: EventId,
    pub checked_in: DateTime<Utc>,
}

/// An attendance row joined with person details, as consumed by the
/// attendance export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttendee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub checked_in: DateTime<Utc>,
    pub kind: PersonKind,
}
