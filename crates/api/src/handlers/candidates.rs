//! Handler for invitee candidate filtering.

use std::collections::HashSet;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use matchday_core::filter::{filter_candidates, AgeBracket, CandidateFilter, TeamFilter};
use matchday_core::types::{AthleteRef, DbId};
use matchday_db::repositories::AthleteRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::CandidateParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/athletes/candidates?team=&age_bracket=&gender=
///
/// Narrow the athlete pool for event invitation. All predicates AND
/// together; with everything cleared this returns the full roster in
/// display order. An empty result is "no candidates", not an error.
pub async fn list_candidates(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<CandidateParams>,
) -> AppResult<impl IntoResponse> {
    let filter = CandidateFilter {
        team: TeamFilter::parse(params.team.as_deref())?,
        age_bracket: params
            .age_bracket
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(AgeBracket::parse)
            .transpose()?,
        gender: params.gender,
    };

    let athletes = AthleteRepo::list(&state.pool).await?;
    let refs: Vec<AthleteRef> = athletes.iter().map(|a| a.to_ref()).collect();

    let today = chrono::Local::now().date_naive();
    let matching: HashSet<DbId> = filter_candidates(refs, &filter, today)
        .iter()
        .map(|a| a.id)
        .collect();

    let candidates: Vec<_> = athletes
        .into_iter()
        .filter(|a| matching.contains(&a.id))
        .collect();

    Ok(Json(DataResponse { data: candidates }))
}
