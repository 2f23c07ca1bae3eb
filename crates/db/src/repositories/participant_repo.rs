//! Repository for the `event_participants` table.

use sqlx::PgPool;

use matchday_core::types::DbId;

use crate::models::participant::{CreateParticipant, Participant};
use crate::repositories::event_repo::PARTICIPANT_COLUMNS;

/// Provides data access for participant (RSVP) rows. Updates are keyed
/// per row, so concurrent submissions from different invitees never
/// contend.
pub struct ParticipantRepo;

impl ParticipantRepo {
    /// Insert a single participant row at `invited` status. The unique
    /// constraints on `(event_id, athlete_id)` / `(event_id, user_id)`
    /// reject duplicate invitations.
    pub async fn add(pool: &PgPool, input: &CreateParticipant) -> Result<Participant, sqlx::Error> {
        let query = format!(
            "INSERT INTO event_participants (event_id, athlete_id, user_id)
             VALUES ($1, $2, $3)
             RETURNING {PARTICIPANT_COLUMNS}"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(input.event_id)
            .bind(input.athlete_id)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a participant row by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Participant>, sqlx::Error> {
        let query = format!("SELECT {PARTICIPANT_COLUMNS} FROM event_participants WHERE id = $1");
        sqlx::query_as::<_, Participant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the row for an athlete invitee on an event.
    pub async fn find_for_event_athlete(
        pool: &PgPool,
        event_id: DbId,
        athlete_id: DbId,
    ) -> Result<Option<Participant>, sqlx::Error> {
        let query = format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM event_participants
             WHERE event_id = $1 AND athlete_id = $2"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(event_id)
            .bind(athlete_id)
            .fetch_optional(pool)
            .await
    }

    /// Find the row for a user invitee (coach-as-invitee) on an event.
    pub async fn find_for_event_user(
        pool: &PgPool,
        event_id: DbId,
        user_id: DbId,
    ) -> Result<Option<Participant>, sqlx::Error> {
        let query = format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM event_participants
             WHERE event_id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(event_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List an event's participant rows in original invitation order.
    pub async fn list_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<Participant>, sqlx::Error> {
        let query = format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM event_participants
             WHERE event_id = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Update a row's status, stamping `responded_at` with the server
    /// time. The stamp is unconditional: re-submitting the current
    /// status records a fresh "last confirmed at" time.
    ///
    /// Returns `None` if no row with the given `id` exists (deleted
    /// from under a concurrent confirm).
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Participant>, sqlx::Error> {
        let query = format!(
            "UPDATE event_participants
             SET status = $2, responded_at = NOW()
             WHERE id = $1
             RETURNING {PARTICIPANT_COLUMNS}"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Remove a participant row. Returns `true` if a row was removed.
    pub async fn remove(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM event_participants WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
