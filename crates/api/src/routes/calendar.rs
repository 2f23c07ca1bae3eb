//! Route definitions for the calendar month view.
//!
//! ```text
//! GET    /{year}/{month}    month_view
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::calendar;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/{year}/{month}", get(calendar::month_view))
}
