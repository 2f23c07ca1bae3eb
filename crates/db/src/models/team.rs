//! Team entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use matchday_core::types::{DbId, TeamRef, Timestamp};

/// A row from the `teams` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Team {
    pub id: DbId,
    pub name: String,
    pub age_category: Option<String>,
    pub coach_user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A team with its coach's name resolved (join against `users`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamWithCoach {
    pub id: DbId,
    pub name: String,
    pub age_category: Option<String>,
    pub coach_user_id: Option<DbId>,
    pub coach_name: Option<String>,
}

impl TeamWithCoach {
    /// Snapshot view for the availability aggregator.
    pub fn to_ref(&self) -> TeamRef {
        TeamRef {
            id: self.id,
            name: self.name.clone(),
            coach_user_id: self.coach_user_id,
            coach_name: self.coach_name.clone(),
        }
    }
}

/// DTO for inserting a team.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeam {
    pub name: String,
    pub age_category: Option<String>,
    pub coach_user_id: Option<DbId>,
}
