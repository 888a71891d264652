// ABOUTME: Activity log service for meals, workouts, and daily water intake
// ABOUTME: Owner-scoped create/list/delete plus per-day water totals keyed on the UTC date

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{
    CreateMealRequest, CreateWorkoutRequest, DailyWaterTotal, Meal, WaterEntry, Workout,
};
use crate::resources::ServerResources;

/// Today's date in UTC, the day water entries count towards
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Meal, workout, and water logging
pub struct ActivityService {
    database: Arc<Database>,
}

impl ActivityService {
    /// Create a service over the shared resources
    #[must_use]
    pub fn new(resources: &ServerResources) -> Self {
        Self {
            database: resources.database.clone(),
        }
    }

    /// List the caller's meals
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_meals(&self, user_id: Uuid) -> AppResult<Vec<Meal>> {
        self.database.list_meals(user_id).await
    }

    /// Log a meal for the caller
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_meal(&self, user_id: Uuid, request: CreateMealRequest) -> AppResult<Meal> {
        let meal = Meal {
            id: Uuid::new_v4(),
            user_id,
            name: request.name,
            weight: request.weight,
            calories: request.calories,
            created_at: Utc::now(),
        };
        self.database.create_meal(&meal).await?;
        debug!(user.id = %user_id, meal.id = %meal.id, "Meal logged");
        Ok(meal)
    }

    /// Delete one of the caller's meals
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the meal does not exist or belongs to
    /// someone else
    pub async fn delete_meal(&self, user_id: Uuid, meal_id: Uuid) -> AppResult<()> {
        if self.database.delete_meal(user_id, meal_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Meal").with_resource_id(meal_id.to_string()))
        }
    }

    /// List the caller's workouts
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_workouts(&self, user_id: Uuid) -> AppResult<Vec<Workout>> {
        self.database.list_workouts(user_id).await
    }

    /// Log a workout for the caller
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn create_workout(
        &self,
        user_id: Uuid,
        request: CreateWorkoutRequest,
    ) -> AppResult<Workout> {
        let workout = Workout {
            id: Uuid::new_v4(),
            user_id,
            name: request.name,
            duration: request.duration,
            calories_burned: request.calories_burned,
            created_at: Utc::now(),
        };
        self.database.create_workout(&workout).await?;
        debug!(user.id = %user_id, workout.id = %workout.id, "Workout logged");
        Ok(workout)
    }

    /// Delete one of the caller's workouts
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the workout does not exist or belongs
    /// to someone else
    pub async fn delete_workout(&self, user_id: Uuid, workout_id: Uuid) -> AppResult<()> {
        if self.database.delete_workout(user_id, workout_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Workout").with_resource_id(workout_id.to_string()))
        }
    }

    /// Log water against today's date
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive amount, or an error if the
    /// insert fails
    pub async fn log_water(&self, user_id: Uuid, amount: i64) -> AppResult<WaterEntry> {
        if amount <= 0 {
            return Err(AppError::invalid_input("Amount must be positive"));
        }
        let entry = WaterEntry {
            id: Uuid::new_v4(),
            user_id,
            amount,
            date: today(),
        };
        self.database.log_water(&entry).await?;
        Ok(entry)
    }

    /// Today's water total, 0 when nothing was logged
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn todays_water(&self, user_id: Uuid) -> AppResult<DailyWaterTotal> {
        let date = today();
        let total_amount = self.database.daily_water_total(user_id, date).await?;
        Ok(DailyWaterTotal { total_amount, date })
    }

    /// Clear today's water entries
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn reset_todays_water(&self, user_id: Uuid) -> AppResult<()> {
        let removed = self.database.reset_daily_water(user_id, today()).await?;
        debug!(user.id = %user_id, removed, "Water entries reset");
        Ok(())
    }
}
