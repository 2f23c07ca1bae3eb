//! Handlers for event listing, creation and deletion.

use std::collections::HashSet;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use validator::Validate;

use matchday_core::error::CoreError;
use matchday_core::types::DbId;
use matchday_db::models::event::{CreateEvent, EventListFilter};
use matchday_db::repositories::{EventRepo, ParticipantRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for event creation. Invitee lists are split by kind:
/// `athlete_ids` for roster members, `invitee_ids` for users invited
/// directly (e.g. a coach).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub event_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub team_ids: Vec<DbId>,
    #[serde(default)]
    pub athlete_ids: Vec<DbId>,
    #[serde(default)]
    pub invitee_ids: Vec<DbId>,
    #[serde(default)]
    pub send_email: bool,
    #[serde(default)]
    pub send_push: bool,
}

/// GET /api/v1/events
///
/// List events with embedded team links and participants, optionally
/// narrowed by team, athlete, or date range.
pub async fn list_events(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<EventListFilter>,
) -> AppResult<impl IntoResponse> {
    let events = EventRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: events }))
}

/// GET /api/v1/events/my-events
///
/// List events where the caller is the creator or an invitee.
pub async fn my_events(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let events = EventRepo::list_for_user(&state.pool, auth.user_id, auth.athlete_id).await?;
    Ok(Json(DataResponse { data: events }))
}

/// POST /api/v1/events
///
/// Create an event together with its initial invitee batch, atomically:
/// one invalid team or invitee id fails the whole request and nothing
/// is persisted.
pub async fn create_event(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateEventRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let create = CreateEvent {
        name: input.name,
        event_date: input.event_date,
        start_time: input.start_time,
        end_time: input.end_time,
        location: input.location,
        notes: input.notes,
        created_by_id: auth.user_id,
    };
    let team_ids = dedupe(&input.team_ids);
    let athlete_ids = dedupe(&input.athlete_ids);
    let invitee_ids = dedupe(&input.invitee_ids);

    let event = EventRepo::create_with_participants(
        &state.pool,
        &create,
        &team_ids,
        &athlete_ids,
        &invitee_ids,
    )
    .await?;

    tracing::info!(
        user_id = auth.user_id,
        event_id = event.event.id,
        participants = event.participants.len(),
        "Event created"
    );

    if input.send_email || input.send_push {
        // Delivery itself is the external notifier's concern; the flags
        // are recorded so it can pick the invitation batch up.
        tracing::info!(
            event_id = event.event.id,
            send_email = input.send_email,
            send_push = input.send_push,
            "Invitation notifications requested"
        );
    }

    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// DELETE /api/v1/events/{event_id}
///
/// Delete an event; participant rows and team links cascade.
pub async fn delete_event(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = EventRepo::delete(&state.pool, event_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }));
    }

    tracing::info!(user_id = auth.user_id, event_id = event_id, "Event deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/events/{event_id}/participants/{participant_id}
///
/// Explicitly remove a single invitee from an event. Restricted to
/// administrators and the event's creator.
pub async fn remove_participant(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((event_id, participant_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::find_by_id(&state.pool, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;

    if !auth.is_admin() && event.created_by_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the event creator or an administrator may remove participants".into(),
        )));
    }

    let participant = ParticipantRepo::find_by_id(&state.pool, participant_id)
        .await?
        .filter(|p| p.event_id == event_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Participant",
            id: participant_id,
        }))?;

    ParticipantRepo::remove(&state.pool, participant.id).await?;

    tracing::info!(
        user_id = auth.user_id,
        event_id = event_id,
        participant_id = participant_id,
        "Participant removed"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// De-duplicate ids while preserving first-seen order.
fn dedupe(ids: &[DbId]) -> Vec<DbId> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
