// ABOUTME: Goal engine constants for BMR, TDEE, calorie targets, and macro split
// ABOUTME: Mifflin-St Jeor coefficients, activity multipliers, and per-kg macro factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal engine constants
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//! - Activity multipliers: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology

/// Mifflin-St Jeor weight coefficient (per kg)
pub const MSJ_WEIGHT_COEF: f64 = 10.0;
/// Mifflin-St Jeor height coefficient (per cm)
pub const MSJ_HEIGHT_COEF: f64 = 6.25;
/// Mifflin-St Jeor age coefficient (per year)
pub const MSJ_AGE_COEF: f64 = 5.0;
/// Mifflin-St Jeor male constant
pub const MSJ_MALE_CONSTANT: f64 = 5.0;
/// Mifflin-St Jeor constant for every non-male value
pub const MSJ_OTHER_CONSTANT: f64 = -161.0;

/// Sedentary activity multiplier (also the fallback tier)
pub const ACTIVITY_SEDENTARY: f64 = 1.2;
/// Light activity multiplier
pub const ACTIVITY_LIGHT: f64 = 1.375;
/// Moderate activity multiplier
pub const ACTIVITY_MODERATE: f64 = 1.55;
/// Active multiplier
pub const ACTIVITY_ACTIVE: f64 = 1.725;
/// Very active multiplier
pub const ACTIVITY_VERY_ACTIVE: f64 = 1.9;

/// Daily calorie change for a weight-loss goal (kcal)
pub const LOSE_CALORIE_ADJUSTMENT: i64 = -500;
/// Daily calorie change for a weight-gain goal (kcal)
pub const GAIN_CALORIE_ADJUSTMENT: i64 = 500;

/// Hard floor for the daily calorie goal, applied after the goal adjustment
pub const MIN_DAILY_CALORIES: i64 = 1200;

/// Protein grams per kg of body weight
pub const PROTEIN_G_PER_KG: f64 = 2.0;
/// Fat grams per kg of body weight
pub const FAT_G_PER_KG: f64 = 0.8;

/// Energy density of protein (kcal/g)
pub const KCAL_PER_G_PROTEIN: i64 = 4;
/// Energy density of fat (kcal/g)
pub const KCAL_PER_G_FAT: i64 = 9;
/// Energy density of carbohydrate (kcal/g)
pub const KCAL_PER_G_CARBS: i64 = 4;
