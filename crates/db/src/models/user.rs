//! User entity model.
//!
//! Users are owned by the external auth collaborator; they exist here
//! because events and participant rows reference user ids.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use matchday_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a user (fixtures and admin tooling).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub role: String,
}
