//! Handler for the RSVP (confirm attendance) operation.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use matchday_core::error::CoreError;
use matchday_core::rsvp::{validate_transition, ParticipantStatus};
use matchday_core::types::DbId;
use matchday_db::models::participant::Participant;
use matchday_db::repositories::{EventRepo, ParticipantRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for POST /events/{id}/confirm.
///
/// `athlete_id` / `user_id` may only be set by administrators acting on
/// someone else's row; everyone else responds to their own invitation,
/// resolved from the token.
#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    pub status: ParticipantStatus,
    pub athlete_id: Option<DbId>,
    pub user_id: Option<DbId>,
}

/// The participant row an RSVP targets.
enum ParticipantKey {
    Athlete(DbId),
    User(DbId),
}

/// POST /api/v1/events/{event_id}/confirm
///
/// Update one invitee's RSVP. Idempotent: re-submitting the current
/// status succeeds and refreshes `responded_at` (the row records the
/// last confirmation time). A row never returns to `invited`.
pub async fn confirm_attendance(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
    Json(input): Json<ConfirmRequest>,
) -> AppResult<impl IntoResponse> {
    EventRepo::find_by_id(&state.pool, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;

    let key = resolve_key(&auth, &input)?;

    let participant = find_row(&state, event_id, &key).await?.ok_or_else(|| {
        let id = match key {
            ParticipantKey::Athlete(id) | ParticipantKey::User(id) => id,
        };
        AppError::Core(CoreError::NotFound {
            entity: "Participant",
            id,
        })
    })?;

    let current = ParticipantStatus::parse(&participant.status)
        .unwrap_or(ParticipantStatus::Invited);
    validate_transition(current, input.status)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    // The row can vanish between the read above and this update when a
    // delete races the confirm; surface that as a retryable conflict.
    let updated = ParticipantRepo::set_status(&state.pool, participant.id, input.status.as_str())
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Invitation no longer exists; refresh and try again".into(),
            ))
        })?;

    tracing::info!(
        user_id = auth.user_id,
        event_id = event_id,
        participant_id = updated.id,
        status = input.status.as_str(),
        "RSVP recorded"
    );

    Ok(Json(DataResponse { data: updated }))
}

/// Resolve which participant row the caller may act on.
///
/// Self-service is restricted to the caller's own row (their linked
/// athlete, else their user id). Explicit `athlete_id`/`user_id`
/// overrides targeting someone else's row require the admin role.
fn resolve_key(auth: &AuthUser, input: &ConfirmRequest) -> Result<ParticipantKey, AppError> {
    if let Some(athlete_id) = input.athlete_id {
        if auth.athlete_id != Some(athlete_id) && !auth.is_admin() {
            return Err(forbidden());
        }
        return Ok(ParticipantKey::Athlete(athlete_id));
    }

    if let Some(user_id) = input.user_id {
        if user_id != auth.user_id && !auth.is_admin() {
            return Err(forbidden());
        }
        return Ok(ParticipantKey::User(user_id));
    }

    match auth.athlete_id {
        Some(athlete_id) => Ok(ParticipantKey::Athlete(athlete_id)),
        None => Ok(ParticipantKey::User(auth.user_id)),
    }
}

fn forbidden() -> AppError {
    AppError::Core(CoreError::Forbidden(
        "You may only respond to your own invitation".into(),
    ))
}

async fn find_row(
    state: &AppState,
    event_id: DbId,
    key: &ParticipantKey,
) -> Result<Option<Participant>, sqlx::Error> {
    match key {
        ParticipantKey::Athlete(athlete_id) => {
            ParticipantRepo::find_for_event_athlete(&state.pool, event_id, *athlete_id).await
        }
        ParticipantKey::User(user_id) => {
            ParticipantRepo::find_for_event_user(&state.pool, event_id, *user_id).await
        }
    }
}
