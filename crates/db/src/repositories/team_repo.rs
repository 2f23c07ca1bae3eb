//! Repository for the `teams` table.

use sqlx::PgPool;

use matchday_core::types::DbId;

use crate::models::team::{CreateTeam, Team, TeamWithCoach};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age_category, coach_user_id, created_at, updated_at";

/// Coach-resolving select used by the availability endpoints.
const WITH_COACH: &str = "t.id, t.name, t.age_category, t.coach_user_id, \
    u.name AS coach_name";

/// Provides data access for teams.
pub struct TeamRepo;

impl TeamRepo {
    /// Insert a new team, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTeam) -> Result<Team, sqlx::Error> {
        let query = format!(
            "INSERT INTO teams (name, age_category, coach_user_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Team>(&query)
            .bind(&input.name)
            .bind(&input.age_category)
            .bind(input.coach_user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a team by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Team>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teams WHERE id = $1");
        sqlx::query_as::<_, Team>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all teams with their coach's name resolved, ordered by name.
    pub async fn list_with_coach(pool: &PgPool) -> Result<Vec<TeamWithCoach>, sqlx::Error> {
        let query = format!(
            "SELECT {WITH_COACH} FROM teams t
             LEFT JOIN users u ON u.id = t.coach_user_id
             ORDER BY t.name, t.id"
        );
        sqlx::query_as::<_, TeamWithCoach>(&query)
            .fetch_all(pool)
            .await
    }
}
