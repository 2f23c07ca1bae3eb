//! Handlers for the per-date availability breakdown and the upcoming
//! events strip.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;

use matchday_core::availability::{
    build_availability, clamp_page, paginate_availability, AvailabilityPage, EventAvailability,
    DEFAULT_PAGE_SIZE,
};
use matchday_core::calendar;
use matchday_core::types::{AthleteRef, DbId, EventRef, TeamRef};
use matchday_db::models::event::{EventDetail, EventListFilter};
use matchday_db::repositories::{AthleteRepo, EventRepo, TeamRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::{AvailabilityParams, UpcomingParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Availability breakdown for one date, with display pagination.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub date: NaiveDate,
    pub events: Vec<EventAvailability>,
    pub pages: Vec<AvailabilityPage>,
    /// Requested page clamped into range; 0 when there are no pages.
    pub page: usize,
    pub total_pages: usize,
}

/// GET /api/v1/events/availability?date=YYYY-MM-DD&page=&page_size=
///
/// Cross-reference the date's events with teams, athletes and RSVP
/// rows. Everything is recomputed from the current snapshot; the page
/// index is clamped so a shrunken team list never leaves a stale
/// selection.
pub async fn get_availability(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<AvailabilityParams>,
) -> AppResult<impl IntoResponse> {
    let filter = EventListFilter {
        date_from: Some(params.date),
        date_to: Some(params.date),
        ..Default::default()
    };
    let details = EventRepo::list(&state.pool, &filter).await?;

    let teams: HashMap<DbId, TeamRef> = TeamRepo::list_with_coach(&state.pool)
        .await?
        .iter()
        .map(|t| (t.id, t.to_ref()))
        .collect();
    let athletes: Vec<AthleteRef> = AthleteRepo::list(&state.pool)
        .await?
        .iter()
        .map(|a| a.to_ref())
        .collect();

    let event_refs: Vec<EventRef> = details.iter().map(EventDetail::to_ref).collect();
    let events = build_availability(&event_refs, &teams, &athletes);

    let page_size = params.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    let pages = paginate_availability(&events, page_size);
    let page = clamp_page(params.page.unwrap_or(0), pages.len());

    Ok(Json(DataResponse {
        data: AvailabilityResponse {
            date: params.date,
            total_pages: pages.len(),
            page,
            pages,
            events,
        },
    }))
}

/// GET /api/v1/events/upcoming?limit=
///
/// The next events from today on, ascending by (date, start time);
/// untimed events sort first within their day.
pub async fn upcoming_events(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<UpcomingParams>,
) -> AppResult<impl IntoResponse> {
    let today = chrono::Local::now().date_naive();
    let filter = EventListFilter {
        date_from: Some(today),
        ..Default::default()
    };
    let details = EventRepo::list(&state.pool, &filter).await?;

    let refs: Vec<EventRef> = details.iter().map(EventDetail::to_ref).collect();
    let limit = params.limit.unwrap_or(calendar::DEFAULT_UPCOMING_LIMIT);
    let ordered = calendar::upcoming_events(&refs, today, limit);

    let by_id: HashMap<DbId, &EventDetail> = details.iter().map(|d| (d.event.id, d)).collect();
    let upcoming: Vec<EventDetail> = ordered
        .iter()
        .filter_map(|r| by_id.get(&r.id).copied().cloned())
        .collect();

    Ok(Json(DataResponse { data: upcoming }))
}
