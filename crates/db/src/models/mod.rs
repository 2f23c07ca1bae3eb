//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Conversions into the snapshot structs `matchday-core` consumes

pub mod athlete;
pub mod event;
pub mod participant;
pub mod team;
pub mod user;
