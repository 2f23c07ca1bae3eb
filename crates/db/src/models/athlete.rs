//! Athlete entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use matchday_core::rsvp::AthleteStatus;
use matchday_core::types::{AthleteRef, DbId, Timestamp};

/// A row from the `athletes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Athlete {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub team_id: Option<DbId>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Athlete {
    /// Snapshot view for the filter and availability modules. The
    /// status CHECK constraint guarantees the stored value parses.
    pub fn to_ref(&self) -> AthleteRef {
        AthleteRef {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            birth_date: self.birth_date,
            gender: self.gender.clone(),
            team_id: self.team_id,
            status: AthleteStatus::parse(&self.status).unwrap_or(AthleteStatus::Inactive),
        }
    }
}

/// DTO for inserting an athlete.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAthlete {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub team_id: Option<DbId>,
}
