// ABOUTME: Nutrition intelligence module root
// ABOUTME: Exposes the goal engine that derives calorie and macro targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// BMI, BMR, TDEE, and macro goal calculation
pub mod nutrition_goals;

pub use nutrition_goals::{
    calculate_bmi, calculate_bmr, calculate_nutrition_goals, ActivityLevel, GoalDirection,
    NutritionGoals, ProfileSnapshot, Sex,
};
