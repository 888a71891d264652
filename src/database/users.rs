// ABOUTME: User account database operations
// ABOUTME: Registration insert, lookup by id or email, and profile/goal updates

use super::{parse_uuid, Database};
use crate::errors::{AppError, AppResult};
use crate::models::User;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteQueryResult};
use sqlx::{Row, Sqlite};
use uuid::Uuid;

impl Database {
    /// Create users table
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Table creation fails
    /// - Index creation fails
    pub(super) async fn migrate_users(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                full_name TEXT,
                gender TEXT,
                age INTEGER,
                height REAL,
                weight REAL,
                start_weight REAL,
                goal_weight REAL,
                activity_rate TEXT,
                daily_calorie_goal INTEGER,
                protein_goal INTEGER,
                carbs_goal INTEGER,
                fats_goal INTEGER,
                bmi REAL,
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Insert a new user
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The email is already registered (`ResourceAlreadyExists`)
    /// - Database operation fails
    pub async fn create_user(&self, user: &User) -> AppResult<Uuid> {
        sqlx::query(
            r"
            INSERT INTO users (
                id, email, password_hash, full_name, gender, age, height, weight,
                start_weight, goal_weight, activity_rate, daily_calorie_goal,
                protein_goal, carbs_goal, fats_goal, bmi, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.full_name)
        .bind(&user.gender)
        .bind(user.age.map(i64::from))
        .bind(user.height)
        .bind(user.weight)
        .bind(user.start_weight)
        .bind(user.goal_weight)
        .bind(&user.activity_rate)
        .bind(user.daily_calorie_goal)
        .bind(user.protein_goal)
        .bind(user.carbs_goal)
        .bind(user.fats_goal)
        .bind(user.bmi)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match AppError::from(e) {
            err if err.code == crate::errors::ErrorCode::ResourceAlreadyExists => {
                AppError::already_exists("Email already registered")
            }
            err => err,
        })?;

        Ok(user.id)
    }

    /// Get user by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is corrupt
    pub async fn get_user(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE id = $1")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get user: {e}")))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    /// Get user by email
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is corrupt
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get user by email: {e}")))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    /// Persist profile fields and the stored goal set
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The user does not exist (`ResourceNotFound`)
    /// - Database operation fails
    pub async fn update_user(&self, user: &User) -> AppResult<()> {
        let result = Self::update_user_query(user)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to update user: {e}")))?;

        Self::ensure_user_updated(&result, user)
    }

    /// UPDATE statement for a user's profile and goals, executable on a pool or a transaction
    pub(super) fn update_user_query(user: &User) -> Query<'_, Sqlite, SqliteArguments<'_>> {
        sqlx::query(
            r"
            UPDATE users SET
                full_name = $2, gender = $3, age = $4, height = $5, weight = $6,
                start_weight = $7, goal_weight = $8, activity_rate = $9,
                daily_calorie_goal = $10, protein_goal = $11, carbs_goal = $12,
                fats_goal = $13, bmi = $14
            WHERE id = $1
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.full_name)
        .bind(&user.gender)
        .bind(user.age.map(i64::from))
        .bind(user.height)
        .bind(user.weight)
        .bind(user.start_weight)
        .bind(user.goal_weight)
        .bind(&user.activity_rate)
        .bind(user.daily_calorie_goal)
        .bind(user.protein_goal)
        .bind(user.carbs_goal)
        .bind(user.fats_goal)
        .bind(user.bmi)
    }

    pub(super) fn ensure_user_updated(result: &SqliteQueryResult, user: &User) -> AppResult<()> {
        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User").with_resource_id(user.id.to_string()));
        }
        Ok(())
    }

    fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> AppResult<User> {
        let id: String = row.get("id");
        let age: Option<i64> = row.get("age");

        Ok(User {
            id: parse_uuid(&id, "users.id")?,
            email: row.get("email"),
            password_hash: row.get("password_hash"),
            full_name: row.get("full_name"),
            gender: row.get("gender"),
            age: age.and_then(|a| u32::try_from(a).ok()),
            height: row.get("height"),
            weight: row.get("weight"),
            start_weight: row.get("start_weight"),
            goal_weight: row.get("goal_weight"),
            activity_rate: row.get("activity_rate"),
            daily_calorie_goal: row.get("daily_calorie_goal"),
            protein_goal: row.get("protein_goal"),
            carbs_goal: row.get("carbs_goal"),
            fats_goal: row.get("fats_goal"),
            bmi: row.get("bmi"),
            created_at: row.get("created_at"),
        })
    }
}
