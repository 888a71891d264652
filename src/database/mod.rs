// ABOUTME: SQLite persistence for accounts, activity logs, water intake, and weight history
// ABOUTME: Owns the connection pool and creates tables idempotently on connect
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! `Database` wraps a sqlx `SqlitePool`. Tables are created with
//! `CREATE TABLE IF NOT EXISTS` on every connect, so opening an existing
//! database file is safe. Per-table operations live in submodules as
//! `impl Database` blocks.

mod meals;
mod users;
mod water;
mod weight;
mod workouts;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Pool size for file-backed databases
const FILE_POOL_MAX_CONNECTIONS: u32 = 5;

/// Database manager for all persisted records
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Connect to `database_url` and create tables.
    ///
    /// File-backed databases are created (with their parent directory) when
    /// missing. In-memory databases use a single pooled connection so every
    /// query sees the same data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The URL cannot be parsed
    /// - The parent directory cannot be created
    /// - The connection or table creation fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::config(format!("Invalid DATABASE_URL '{database_url}': {e}")))?
            .create_if_missing(true);

        let in_memory = database_url.contains(":memory:");
        if !in_memory {
            if let Some(parent) = options.get_filename().parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        AppError::database(format!(
                            "Failed to create database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }
        }

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(FILE_POOL_MAX_CONNECTIONS)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;

        info!(in_memory, "Database ready");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Create every table and index
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_users().await?;
        self.migrate_meals().await?;
        self.migrate_workouts().await?;
        self.migrate_water().await?;
        self.migrate_weight().await?;
        debug!("Database schema verified");
        Ok(())
    }
}

/// Parse a UUID stored as TEXT
pub(crate) fn parse_uuid(value: &str, column: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| AppError::database(format!("Corrupt {column} '{value}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_database_migrates_twice() {
        let db = Database::new("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
    }

    #[test]
    fn test_parse_uuid_rejects_garbage() {
        let err = parse_uuid("not-a-uuid", "users.id").unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::DatabaseError);
    }
}
