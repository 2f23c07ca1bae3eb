//! Handler for the calendar month view.

use std::collections::{BTreeMap, HashMap};

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;

use matchday_core::calendar::{build_month_grid, index_events_by_date};
use matchday_core::types::{DbId, EventRef};
use matchday_db::models::event::{EventDetail, EventListFilter};
use matchday_db::repositories::EventRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// One month's grid plus its events grouped by local calendar date.
#[derive(Debug, Serialize)]
pub struct MonthViewResponse {
    pub year: i32,
    pub month: u32,
    /// `null` padding cells around day numbers; always full weeks.
    pub cells: Vec<Option<u32>>,
    pub events_by_date: BTreeMap<NaiveDate, Vec<EventDetail>>,
}

/// GET /api/v1/calendar/{year}/{month}
///
/// Build the month grid and the date-keyed event index for that month.
pub async fn month_view(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> AppResult<impl IntoResponse> {
    let grid = build_month_grid(year, month)?;

    let last_day = grid.cells.iter().flatten().max().copied().unwrap_or(1);
    let filter = EventListFilter {
        date_from: NaiveDate::from_ymd_opt(year, month, 1),
        date_to: NaiveDate::from_ymd_opt(year, month, last_day),
        ..Default::default()
    };
    let details = EventRepo::list(&state.pool, &filter).await?;

    let refs: Vec<EventRef> = details.iter().map(EventDetail::to_ref).collect();
    let by_id: HashMap<DbId, &EventDetail> = details.iter().map(|d| (d.event.id, d)).collect();

    let events_by_date: BTreeMap<NaiveDate, Vec<EventDetail>> = index_events_by_date(&refs)
        .into_iter()
        .map(|(date, events)| {
            let details: Vec<EventDetail> = events
                .iter()
                .filter_map(|r| by_id.get(&r.id).copied().cloned())
                .collect();
            (date, details)
        })
        .collect();

    Ok(Json(DataResponse {
        data: MonthViewResponse {
            year: grid.year,
            month: grid.month,
            cells: grid.cells,
            events_by_date,
        },
    }))
}
