// ABOUTME: Workout log database operations scoped to the owning user
// ABOUTME: Insert, list newest-first, and owner-checked delete

use super::{parse_uuid, Database};
use crate::errors::{AppError, AppResult};
use crate::models::Workout;
use sqlx::Row;
use uuid::Uuid;

impl Database {
    pub(super) async fn migrate_workouts(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                duration INTEGER NOT NULL,
                calories_burned INTEGER NOT NULL,
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_workouts_user_id ON workouts(user_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a workout
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_workout(&self, workout: &Workout) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO workouts (id, user_id, name, duration, calories_burned, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(workout.id.to_string())
        .bind(workout.user_id.to_string())
        .bind(&workout.name)
        .bind(workout.duration)
        .bind(workout.calories_burned)
        .bind(workout.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create workout: {e}")))?;

        Ok(())
    }

    /// List a user's workouts, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_workouts(&self, user_id: Uuid) -> AppResult<Vec<Workout>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, name, duration, calories_burned, created_at
            FROM workouts WHERE user_id = $1 ORDER BY created_at DESC
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list workouts: {e}")))?;

        rows.iter().map(Self::row_to_workout).collect()
    }

    /// Delete a workout owned by `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_workout(&self, user_id: Uuid, workout_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1 AND user_id = $2")
            .bind(workout_id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete workout: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    fn row_to_workout(row: &sqlx::sqlite::SqliteRow) -> AppResult<Workout> {
        let id: String = row.get("id");
        let user_id: String = row.get("user_id");
        Ok(Workout {
            id: parse_uuid(&id, "workouts.id")?,
            user_id: parse_uuid(&user_id, "workouts.user_id")?,
            name: row.get("name"),
            duration: row.get("duration"),
            calories_burned: row.get("calories_burned"),
            created_at: row.get("created_at"),
        })
    }
}
