//! Repository for the `events` table and its embedded detail aggregate.

use std::collections::HashMap;

use sqlx::{PgPool, Row};

use matchday_core::types::DbId;

use crate::models::event::{CreateEvent, Event, EventDetail, EventListFilter};
use crate::models::participant::Participant;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, event_date, start_time, end_time, location, \
    notes, status, created_by_id, created_at, updated_at";

/// Prefixed column list for joined queries.
const PREFIXED: &str = "e.id, e.name, e.event_date, e.start_time, e.end_time, \
    e.location, e.notes, e.status, e.created_by_id, e.created_at, e.updated_at";

/// Participant column list, reused by `ParticipantRepo`.
pub(crate) const PARTICIPANT_COLUMNS: &str =
    "id, event_id, athlete_id, user_id, status, invited_at, responded_at";

/// Provides data access for events, their team links and the
/// participant batch created with them.
pub struct EventRepo;

impl EventRepo {
    /// Atomically create an event, its team links, and one `invited`
    /// participant row per invitee.
    ///
    /// Runs in a single transaction: an invalid team or invitee id
    /// fails the whole operation and leaves nothing behind.
    pub async fn create_with_participants(
        pool: &PgPool,
        input: &CreateEvent,
        team_ids: &[DbId],
        athlete_ids: &[DbId],
        invitee_user_ids: &[DbId],
    ) -> Result<EventDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO events (name, event_date, start_time, end_time, location, notes, created_by_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let event = sqlx::query_as::<_, Event>(&query)
            .bind(&input.name)
            .bind(input.event_date)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.location)
            .bind(&input.notes)
            .bind(input.created_by_id)
            .fetch_one(&mut *tx)
            .await?;

        for &team_id in team_ids {
            sqlx::query("INSERT INTO event_team_links (event_id, team_id) VALUES ($1, $2)")
                .bind(event.id)
                .bind(team_id)
                .execute(&mut *tx)
                .await?;
        }

        let participant_insert = format!(
            "INSERT INTO event_participants (event_id, athlete_id, user_id)
             VALUES ($1, $2, $3)
             RETURNING {PARTICIPANT_COLUMNS}"
        );
        let mut participants = Vec::with_capacity(athlete_ids.len() + invitee_user_ids.len());
        for &athlete_id in athlete_ids {
            let row = sqlx::query_as::<_, Participant>(&participant_insert)
                .bind(event.id)
                .bind(Some(athlete_id))
                .bind(None::<DbId>)
                .fetch_one(&mut *tx)
                .await?;
            participants.push(row);
        }
        for &user_id in invitee_user_ids {
            let row = sqlx::query_as::<_, Participant>(&participant_insert)
                .bind(event.id)
                .bind(None::<DbId>)
                .bind(Some(user_id))
                .fetch_one(&mut *tx)
                .await?;
            participants.push(row);
        }

        tx.commit().await?;

        Ok(EventDetail {
            event,
            team_ids: team_ids.to_vec(),
            participants,
        })
    }

    /// Find an event by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an event with team links and participants embedded.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<EventDetail>, sqlx::Error> {
        let Some(event) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let mut details = Self::load_details(pool, vec![event]).await?;
        Ok(details.pop())
    }

    /// List events matching the filter, with details embedded. Ordered
    /// ascending by (date, start time, id); untimed events sort first
    /// on their day.
    pub async fn list(
        pool: &PgPool,
        filter: &EventListFilter,
    ) -> Result<Vec<EventDetail>, sqlx::Error> {
        let query = format!(
            "SELECT DISTINCT {PREFIXED} FROM events e
             LEFT JOIN event_team_links l ON l.event_id = e.id
             LEFT JOIN event_participants p ON p.event_id = e.id
             WHERE ($1::BIGINT IS NULL OR l.team_id = $1)
               AND ($2::BIGINT IS NULL OR p.athlete_id = $2)
               AND ($3::DATE IS NULL OR e.event_date >= $3)
               AND ($4::DATE IS NULL OR e.event_date <= $4)
             ORDER BY e.event_date, e.start_time ASC NULLS FIRST, e.id"
        );
        let events = sqlx::query_as::<_, Event>(&query)
            .bind(filter.team_id)
            .bind(filter.athlete_id)
            .bind(filter.date_from)
            .bind(filter.date_to)
            .fetch_all(pool)
            .await?;

        Self::load_details(pool, events).await
    }

    /// List events where the user is the creator or an invitee (as a
    /// user participant, or via the linked athlete if given).
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        athlete_id: Option<DbId>,
    ) -> Result<Vec<EventDetail>, sqlx::Error> {
        let query = format!(
            "SELECT DISTINCT {PREFIXED} FROM events e
             LEFT JOIN event_participants p ON p.event_id = e.id
             WHERE e.created_by_id = $1
                OR p.user_id = $1
                OR ($2::BIGINT IS NOT NULL AND p.athlete_id = $2)
             ORDER BY e.event_date, e.start_time ASC NULLS FIRST, e.id"
        );
        let events = sqlx::query_as::<_, Event>(&query)
            .bind(user_id)
            .bind(athlete_id)
            .fetch_all(pool)
            .await?;

        Self::load_details(pool, events).await
    }

    /// Delete an event. Team links and participant rows cascade; safe
    /// to call with zero participants. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Embed team links and participants for a batch of events with two
    /// grouped queries instead of per-event round trips.
    async fn load_details(
        pool: &PgPool,
        events: Vec<Event>,
    ) -> Result<Vec<EventDetail>, sqlx::Error> {
        let ids: Vec<DbId> = events.iter().map(|e| e.id).collect();

        let link_rows = sqlx::query(
            "SELECT event_id, team_id FROM event_team_links
             WHERE event_id = ANY($1)
             ORDER BY team_id",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let mut links: HashMap<DbId, Vec<DbId>> = HashMap::new();
        for row in link_rows {
            links
                .entry(row.get("event_id"))
                .or_default()
                .push(row.get("team_id"));
        }

        // Participant order is insertion order (ascending id), which is
        // the "original participant order" the availability view keeps.
        let participant_query = format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM event_participants
             WHERE event_id = ANY($1)
             ORDER BY id"
        );
        let participant_rows = sqlx::query_as::<_, Participant>(&participant_query)
            .bind(&ids)
            .fetch_all(pool)
            .await?;

        let mut participants: HashMap<DbId, Vec<Participant>> = HashMap::new();
        for row in participant_rows {
            participants.entry(row.event_id).or_default().push(row);
        }

        Ok(events
            .into_iter()
            .map(|event| {
                let team_ids = links.remove(&event.id).unwrap_or_default();
                let participants = participants.remove(&event.id).unwrap_or_default();
                EventDetail {
                    event,
                    team_ids,
                    participants,
                }
            })
            .collect())
    }
}
