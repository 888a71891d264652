// ABOUTME: Data models for accounts and daily tracking logs
// ABOUTME: Re-exports User, Meal, Workout, WaterEntry, WeightEntry and request payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Storage-facing records and the JSON payloads the HTTP API accepts and
//! returns. Records carry UUID identifiers and UTC timestamps.
//!
//! ## Core Models
//!
//! - `User`: account with physical profile and the stored goal set
//! - `UserProfile`: public view of a user
//! - `Meal`, `Workout`: owner-scoped activity logs
//! - `WaterEntry`, `DailyWaterTotal`: water intake per UTC day
//! - `WeightEntry`: weight history

mod activity;
mod user;

pub use activity::{
    CreateMealRequest, CreateWorkoutRequest, DailyWaterTotal, LogWaterRequest, LogWeightRequest,
    Meal, MessageResponse, WaterEntry, WeightEntry, Workout,
};
pub use user::{
    LoginRequest, RegisterRequest, TokenResponse, UpdateProfileRequest, User, UserProfile,
};
