//! Event participant (RSVP record) model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use matchday_core::rsvp::ParticipantStatus;
use matchday_core::types::{DbId, ParticipantRef, Timestamp};

/// A row from the `event_participants` table. Exactly one of
/// `athlete_id` / `user_id` is set (CHECK constraint).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Participant {
    pub id: DbId,
    pub event_id: DbId,
    pub athlete_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub status: String,
    pub invited_at: Timestamp,
    pub responded_at: Option<Timestamp>,
}

impl Participant {
    /// Snapshot view for the core modules. The status CHECK constraint
    /// guarantees the stored value parses.
    pub fn to_ref(&self) -> ParticipantRef {
        ParticipantRef {
            id: self.id,
            athlete_id: self.athlete_id,
            user_id: self.user_id,
            status: ParticipantStatus::parse(&self.status).unwrap_or(ParticipantStatus::Invited),
        }
    }
}

/// DTO for inserting a single participant row outside the event-creation
/// batch (roster patch-up).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateParticipant {
    pub event_id: DbId,
    pub athlete_id: Option<DbId>,
    pub user_id: Option<DbId>,
}
