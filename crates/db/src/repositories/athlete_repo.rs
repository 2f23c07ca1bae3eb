//! Repository for the `athletes` table.

use sqlx::PgPool;

use matchday_core::types::DbId;

use crate::models::athlete::{Athlete, CreateAthlete};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, birth_date, gender, team_id, \
    status, created_at, updated_at";

/// Provides data access for athletes. Fine-grained candidate filtering
/// (team/age bracket/gender) happens in `matchday-core`; this repo only
/// hands out ordered rosters.
pub struct AthleteRepo;

impl AthleteRepo {
    /// Insert a new athlete, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAthlete) -> Result<Athlete, sqlx::Error> {
        let query = format!(
            "INSERT INTO athletes (first_name, last_name, birth_date, gender, team_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Athlete>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.birth_date)
            .bind(&input.gender)
            .bind(input.team_id)
            .fetch_one(pool)
            .await
    }

    /// Find an athlete by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Athlete>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM athletes WHERE id = $1");
        sqlx::query_as::<_, Athlete>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all athletes in roster display order (surname, first name).
    pub async fn list(pool: &PgPool) -> Result<Vec<Athlete>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM athletes
             ORDER BY last_name, first_name, id"
        );
        sqlx::query_as::<_, Athlete>(&query).fetch_all(pool).await
    }

    /// Mark an athlete inactive. Returns `true` if a row changed.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE athletes SET status = 'inactive', updated_at = NOW()
             WHERE id = $1 AND status = 'active'",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
