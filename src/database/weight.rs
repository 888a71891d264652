// ABOUTME: Weight history database operations
// ABOUTME: Append timestamped observations and read them back in chronological order

use super::{parse_uuid, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{User, WeightEntry};
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::{Row, Sqlite};
use tracing::debug;
use uuid::Uuid;

impl Database {
    pub(super) async fn migrate_weight(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS weight_entries (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                weight REAL NOT NULL,
                date DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_weight_entries_user_date ON weight_entries(user_id, date)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Append a weight observation and persist the user it updates in one transaction.
    ///
    /// Either both rows are written or neither is.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The insert or update fails (the transaction is rolled back)
    /// - The user does not exist (`ResourceNotFound`, rolled back)
    /// - The commit fails
    pub async fn record_weight(&self, entry: &WeightEntry, user: &User) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        Self::insert_weight_query(entry)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to add weight entry: {e}")))?;

        let result = Self::update_user_query(user)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to update user: {e}")))?;
        Self::ensure_user_updated(&result, user)?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Transaction commit failed: {e}")))?;
        debug!(user.id = %user.id, entry.id = %entry.id, "Weight entry committed");
        Ok(())
    }

    fn insert_weight_query(entry: &WeightEntry) -> Query<'_, Sqlite, SqliteArguments<'_>> {
        sqlx::query("INSERT INTO weight_entries (id, user_id, weight, date) VALUES ($1, $2, $3, $4)")
            .bind(entry.id.to_string())
            .bind(entry.user_id.to_string())
            .bind(entry.weight)
            .bind(entry.date)
    }

    /// A user's weight history, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn weight_history(&self, user_id: Uuid) -> AppResult<Vec<WeightEntry>> {
        let rows = sqlx::query(
            "SELECT id, user_id, weight, date FROM weight_entries WHERE user_id = $1 ORDER BY date ASC",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to load weight history: {e}")))?;

        rows.iter()
            .map(|row| {
                let id: String = row.get("id");
                let owner: String = row.get("user_id");
                Ok(WeightEntry {
                    id: parse_uuid(&id, "weight_entries.id")?,
                    user_id: parse_uuid(&owner, "weight_entries.user_id")?,
                    weight: row.get("weight"),
                    date: row.get("date"),
                })
            })
            .collect()
    }
}
