// ABOUTME: Daily log models for meals, workouts, water intake, and weight history
// ABOUTME: Stored entries plus the request payloads that create them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Logged meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meal {
    /// Entry identifier
    pub id: Uuid,
    /// Owner
    pub user_id: Uuid,
    /// Meal name
    pub name: String,
    /// Portion weight in grams
    pub weight: i64,
    /// Energy in kcal
    pub calories: i64,
    /// When the meal was logged
    pub created_at: DateTime<Utc>,
}

/// Payload for logging a meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMealRequest {
    /// Meal name
    pub name: String,
    /// Portion weight in grams
    pub weight: i64,
    /// Energy in kcal
    pub calories: i64,
}

/// Logged workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Workout {
    /// Entry identifier
    pub id: Uuid,
    /// Owner
    pub user_id: Uuid,
    /// Workout name
    pub name: String,
    /// Duration in minutes
    pub duration: i64,
    /// Energy burned in kcal
    pub calories_burned: i64,
    /// When the workout was logged
    pub created_at: DateTime<Utc>,
}

/// Payload for logging a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkoutRequest {
    /// Workout name
    pub name: String,
    /// Duration in minutes
    pub duration: i64,
    /// Energy burned in kcal; web clients send `caloriesBurned`
    #[serde(alias = "caloriesBurned")]
    pub calories_burned: i64,
}

/// Single water intake entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WaterEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Owner
    pub user_id: Uuid,
    /// Amount in ml
    pub amount: i64,
    /// Calendar day (UTC) the entry counts towards
    pub date: NaiveDate,
}

/// Payload for logging water
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogWaterRequest {
    /// Amount in ml, must be positive
    pub amount: i64,
}

/// Water intake summed over one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyWaterTotal {
    /// Sum in ml
    pub total_amount: i64,
    /// Day the total covers
    pub date: NaiveDate,
}

/// Weight observation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Owner
    pub user_id: Uuid,
    /// Weight in kg
    pub weight: f64,
    /// When the weight was recorded
    pub date: DateTime<Utc>,
}

/// Payload for logging a weight observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogWeightRequest {
    /// Weight in kg
    pub weight: f64,
}

/// Plain acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

impl MessageResponse {
    /// Build a message body
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
