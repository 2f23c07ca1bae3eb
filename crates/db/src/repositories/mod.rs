//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod athlete_repo;
pub mod event_repo;
pub mod participant_repo;
pub mod team_repo;
pub mod user_repo;

pub use athlete_repo::AthleteRepo;
pub use event_repo::EventRepo;
pub use participant_repo::ParticipantRepo;
pub use team_repo::TeamRepo;
pub use user_repo::UserRepo;
