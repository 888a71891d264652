// ABOUTME: Water intake database operations keyed by UTC calendar day
// ABOUTME: Log an entry, sum a day's total, and clear a day's entries

use super::{parse_uuid, Database};
use crate::errors::{AppError, AppResult};
use crate::models::WaterEntry;
use chrono::NaiveDate;
use sqlx::Row;
use uuid::Uuid;

impl Database {
    pub(super) async fn migrate_water(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS water_entries (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                amount INTEGER NOT NULL,
                date DATE NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_water_entries_user_date ON water_entries(user_id, date)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a water entry
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn log_water(&self, entry: &WaterEntry) -> AppResult<()> {
        sqlx::query("INSERT INTO water_entries (id, user_id, amount, date) VALUES ($1, $2, $3, $4)")
            .bind(entry.id.to_string())
            .bind(entry.user_id.to_string())
            .bind(entry.amount)
            .bind(entry.date)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to log water: {e}")))?;

        Ok(())
    }

    /// Sum of a user's water entries for `date`, 0 when there are none
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn daily_water_total(&self, user_id: Uuid, date: NaiveDate) -> AppResult<i64> {
        let row = sqlx::query(
            "SELECT COALESCE(SUM(amount), 0) AS total FROM water_entries WHERE user_id = $1 AND date = $2",
        )
        .bind(user_id.to_string())
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to sum water entries: {e}")))?;

        Ok(row.get("total"))
    }

    /// Remove a user's water entries for `date`, returning how many were removed
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn reset_daily_water(&self, user_id: Uuid, date: NaiveDate) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM water_entries WHERE user_id = $1 AND date = $2")
            .bind(user_id.to_string())
            .bind(date)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to reset water entries: {e}")))?;

        Ok(result.rows_affected())
    }

    /// All water entries a user logged on `date`
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_water_entries(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Vec<WaterEntry>> {
        let rows = sqlx::query(
            "SELECT id, user_id, amount, date FROM water_entries WHERE user_id = $1 AND date = $2",
        )
        .bind(user_id.to_string())
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list water entries: {e}")))?;

        rows.iter()
            .map(|row| {
                let id: String = row.get("id");
                let owner: String = row.get("user_id");
                Ok(WaterEntry {
                    id: parse_uuid(&id, "water_entries.id")?,
                    user_id: parse_uuid(&owner, "water_entries.user_id")?,
                    amount: row.get("amount"),
                    date: row.get("date"),
                })
            })
            .collect()
    }
}
