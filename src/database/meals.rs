// ABOUTME: Meal log database operations scoped to the owning user
// ABOUTME: Insert, list newest-first, and owner-checked delete

use super::{parse_uuid, Database};
use crate::errors::{AppError, AppResult};
use crate::models::Meal;
use sqlx::Row;
use uuid::Uuid;

impl Database {
    pub(super) async fn migrate_meals(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS meals (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                weight INTEGER NOT NULL,
                calories INTEGER NOT NULL,
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_meals_user_id ON meals(user_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a meal
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_meal(&self, meal: &Meal) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO meals (id, user_id, name, weight, calories, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(meal.id.to_string())
        .bind(meal.user_id.to_string())
        .bind(&meal.name)
        .bind(meal.weight)
        .bind(meal.calories)
        .bind(meal.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create meal: {e}")))?;

        Ok(())
    }

    /// List a user's meals, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_meals(&self, user_id: Uuid) -> AppResult<Vec<Meal>> {
        let rows = sqlx::query(
            "SELECT id, user_id, name, weight, calories, created_at FROM meals WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list meals: {e}")))?;

        rows.iter().map(Self::row_to_meal).collect()
    }

    /// Delete a meal owned by `user_id`. Returns false when no such meal exists
    /// for that owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete_meal(&self, user_id: Uuid, meal_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM meals WHERE id = $1 AND user_id = $2")
            .bind(meal_id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete meal: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    fn row_to_meal(row: &sqlx::sqlite::SqliteRow) -> AppResult<Meal> {
        let id: String = row.get("id");
        let user_id: String = row.get("user_id");
        Ok(Meal {
            id: parse_uuid(&id, "meals.id")?,
            user_id: parse_uuid(&user_id, "meals.user_id")?,
            name: row.get("name"),
            weight: row.get("weight"),
            calories: row.get("calories"),
            created_at: row.get("created_at"),
        })
    }
}
