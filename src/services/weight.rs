// ABOUTME: Weight-logging service appending history and refreshing the current weight
// ABOUTME: Every logged weight re-derives the goal direction and recomputes stored goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::intelligence::nutrition_goals::calculate_nutrition_goals;
use crate::logging::AppLogger;
use crate::models::{User, UserProfile, WeightEntry};
use crate::resources::ServerResources;

/// Weight history and the goal recalculation it triggers
pub struct WeightService {
    database: Arc<Database>,
}

impl WeightService {
    /// Create a service over the shared resources
    #[must_use]
    pub fn new(resources: &ServerResources) -> Self {
        Self {
            database: resources.database.clone(),
        }
    }

    async fn load_user(&self, user_id: Uuid) -> AppResult<User> {
        self.database
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User").with_user_id(user_id))
    }

    /// Record a weight observation, make it the current weight, and recompute goals
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The weight is not a positive number (`InvalidInput`)
    /// - The user does not exist
    /// - Persistence fails
    pub async fn log_weight(&self, user_id: Uuid, weight: f64) -> AppResult<UserProfile> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(AppError::invalid_input("Weight must be a positive number"));
        }

        let mut user = self.load_user(user_id).await?;

        let entry = WeightEntry {
            id: Uuid::new_v4(),
            user_id,
            weight,
            date: Utc::now(),
        };

        user.weight = Some(weight);
        let goals = calculate_nutrition_goals(&user.profile_snapshot());
        AppLogger::log_goal_recalculation(user.id, "weight_log", goals.as_ref());
        user.apply_goals(goals);

        self.database.record_weight(&entry, &user).await?;
        Ok(user.into())
    }

    /// Weight history, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn history(&self, user_id: Uuid) -> AppResult<Vec<WeightEntry>> {
        self.database.weight_history(user_id).await
    }
}
