//! Shared aliases and snapshot structs.
//!
//! The snapshot structs are the read-only slices of entity-store state
//! that the pure modules (teams, calendar, availability) consume. The
//! repository layer maps its row types into these; core never talks to
//! the database directly.

use chrono::{NaiveDate, NaiveTime};

use crate::rsvp::{AthleteStatus, ParticipantStatus};

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A team as the scheduling logic sees it. Coach name is pre-resolved
/// by the repository layer (join against users) so core stays lookup-free.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRef {
    pub id: DbId,
    pub name: String,
    pub coach_user_id: Option<DbId>,
    pub coach_name: Option<String>,
}

/// An athlete as the scheduling logic sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct AthleteRef {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub team_id: Option<DbId>,
    pub status: AthleteStatus,
}

/// One invitee's RSVP record on an event. Exactly one of `athlete_id`
/// and `user_id` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticipantRef {
    pub id: DbId,
    pub athlete_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub status: ParticipantStatus,
}

/// An event plus the pieces the derived views need: explicit team links
/// and the participant list in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRef {
    pub id: DbId,
    pub name: String,
    pub event_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub team_ids: Vec<DbId>,
    pub participants: Vec<ParticipantRef>,
}
