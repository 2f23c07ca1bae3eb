//! Shared query parameter types for API handlers.
//!
//! Query structs that shape the derived views (availability pages,
//! upcoming strip, candidate filter) are extracted here: the selection
//! state lives with the caller and arrives as explicit parameters.

use chrono::NaiveDate;
use serde::Deserialize;

/// Query parameters for the per-date availability breakdown
/// (`?date=YYYY-MM-DD&page=&page_size=`).
#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    pub date: NaiveDate,
    /// Requested page; clamped server-side, never an error.
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// Query parameters for the upcoming-events strip (`?limit=`).
#[derive(Debug, Deserialize)]
pub struct UpcomingParams {
    pub limit: Option<usize>,
}

/// Query parameters for the invitee candidate filter
/// (`?team=&age_bracket=&gender=`). All optional; absent means "no
/// filter". `team` accepts a team id or the literal `unassigned`.
#[derive(Debug, Deserialize)]
pub struct CandidateParams {
    pub team: Option<String>,
    pub age_bracket: Option<String>,
    pub gender: Option<String>,
}
