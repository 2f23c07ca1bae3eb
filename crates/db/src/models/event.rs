//! Event entity model and the embedded-detail aggregate.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use matchday_core::types::{DbId, EventRef, Timestamp};

use crate::models::participant::Participant;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub name: String,
    pub event_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_by_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An event with its team links and participant rows embedded, as the
/// list/detail endpoints return it.
#[derive(Debug, Clone, Serialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub team_ids: Vec<DbId>,
    pub participants: Vec<Participant>,
}

impl EventDetail {
    /// Snapshot view for the calendar and availability modules.
    pub fn to_ref(&self) -> EventRef {
        EventRef {
            id: self.event.id,
            name: self.event.name.clone(),
            event_date: self.event.event_date,
            start_time: self.event.start_time,
            team_ids: self.team_ids.clone(),
            participants: self.participants.iter().map(Participant::to_ref).collect(),
        }
    }
}

/// DTO for inserting an event. Invitees ride alongside in
/// `EventRepo::create_with_participants`, not in this struct.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub name: String,
    pub event_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_by_id: DbId,
}

/// Optional narrowing for event listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventListFilter {
    pub team_id: Option<DbId>,
    pub athlete_id: Option<DbId>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}
