//! Matchday domain core.
//!
//! Pure scheduling and availability logic with zero internal deps, so it
//! can be used by the API/repository layer and any future CLI tooling.
//! Every module here is a function of its inputs: the entity store hands
//! in a snapshot and these modules derive views from it. Nothing is
//! cached across calls.

pub mod availability;
pub mod calendar;
pub mod error;
pub mod filter;
pub mod rsvp;
pub mod teams;
pub mod types;
