pub mod athletes;
pub mod calendar;
pub mod events;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /events                                     list (GET), create (POST)
/// /events/my-events                           caller's events (GET)
/// /events/availability                        per-date breakdown (GET)
/// /events/upcoming                            next events strip (GET)
/// /events/{id}                                delete (DELETE)
/// /events/{id}/confirm                        RSVP (POST)
/// /events/{id}/participants/{participant_id}  remove invitee (DELETE)
///
/// /athletes/candidates                        invitee filter (GET)
///
/// /calendar/{year}/{month}                    month grid + date index (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/events", events::router())
        .nest("/athletes", athletes::router())
        .nest("/calendar", calendar::router())
}
