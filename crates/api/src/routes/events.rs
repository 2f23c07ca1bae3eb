//! Route definitions for event scheduling and RSVP.
//!
//! ```text
//! GET    /                                     list_events
//! POST   /                                     create_event
//! GET    /my-events                            my_events
//! GET    /availability                         get_availability
//! GET    /upcoming                             upcoming_events
//! DELETE /{event_id}                           delete_event
//! POST   /{event_id}/confirm                   confirm_attendance
//! DELETE /{event_id}/participants/{participant_id}  remove_participant
//! ```

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{availability, events, rsvp};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list_events).post(events::create_event))
        .route("/my-events", get(events::my_events))
        .route("/availability", get(availability::get_availability))
        .route("/upcoming", get(availability::upcoming_events))
        .route("/{event_id}", delete(events::delete_event))
        .route("/{event_id}/confirm", post(rsvp::confirm_attendance))
        .route(
            "/{event_id}/participants/{participant_id}",
            delete(events::remove_participant),
        )
}
