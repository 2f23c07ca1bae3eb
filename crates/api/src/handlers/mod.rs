//! HTTP handlers, grouped by concern.

pub mod availability;
pub mod calendar;
pub mod candidates;
pub mod events;
pub mod rsvp;
