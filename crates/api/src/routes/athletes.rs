//! Route definitions for athlete candidate filtering.
//!
//! ```text
//! GET    /candidates    list_candidates
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::candidates;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/candidates", get(candidates::list_candidates))
}
