// ABOUTME: Goal engine deriving daily calorie and macro targets from a profile snapshot
// ABOUTME: BMI, Mifflin-St Jeor BMR, activity-scaled TDEE, goal adjustment, and macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Goal Engine
//!
//! Pure, stateless pipeline: BMR -> TDEE -> calorie target -> macro split.
//! Identical inputs always produce identical outputs and nothing here touches
//! storage. Callers persist the returned [`NutritionGoals`].
//!
//! Insufficient profile data (weight, height, age, or sex absent) is reported as
//! `None` so callers must decide explicitly what to do; the account and
//! weight-logging services both keep the previously stored goals in that case.
//!
//! Protein and fat grams depend on body weight alone. When the 1200 kcal floor
//! clamps the calorie target, protein and fat are left as they are and only
//! carbohydrates absorb the difference (down to zero). At very low calorie
//! targets and high body weight the macro calories can therefore exceed the
//! calorie goal.
//!
//! # Reference
//! Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241

use nutrifit_core::constants::nutrition::{
    ACTIVITY_ACTIVE, ACTIVITY_LIGHT, ACTIVITY_MODERATE, ACTIVITY_SEDENTARY, ACTIVITY_VERY_ACTIVE,
    FAT_G_PER_KG, GAIN_CALORIE_ADJUSTMENT, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
    LOSE_CALORIE_ADJUSTMENT, MIN_DAILY_CALORIES, MSJ_AGE_COEF, MSJ_HEIGHT_COEF, MSJ_MALE_CONSTANT,
    MSJ_OTHER_CONSTANT, MSJ_WEIGHT_COEF, PROTEIN_G_PER_KG,
};
use serde::{Deserialize, Serialize};

/// Sex branch of the Mifflin-St Jeor equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// "male", compared case-insensitively
    Male,
    /// Every other value
    Other,
}

impl Sex {
    /// Parse a stored sex/gender label. Only an exact case-insensitive "male"
    /// selects the male branch.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        if label.eq_ignore_ascii_case("male") {
            Self::Male
        } else {
            Self::Other
        }
    }
}

/// Activity tier used to scale BMR into TDEE
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise
    Light,
    /// Moderate exercise
    Moderate,
    /// Hard exercise
    Active,
    /// Very hard exercise or physical job
    VeryActive,
}

impl ActivityLevel {
    /// Convert a raw activity label into a tier.
    ///
    /// The label is lower-cased before lookup. Unrecognized, empty, or absent
    /// labels silently fall back to [`ActivityLevel::Sedentary`].
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::to_lowercase).as_deref() {
            Some("light") => Self::Light,
            Some("moderate") => Self::Moderate,
            Some("active") => Self::Active,
            Some("very_active") => Self::VeryActive,
            _ => Self::Sedentary,
        }
    }

    /// TDEE multiplier for this tier
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => ACTIVITY_SEDENTARY,
            Self::Light => ACTIVITY_LIGHT,
            Self::Moderate => ACTIVITY_MODERATE,
            Self::Active => ACTIVITY_ACTIVE,
            Self::VeryActive => ACTIVITY_VERY_ACTIVE,
        }
    }
}

/// Direction of the user's weight goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalDirection {
    /// Caloric deficit
    Lose,
    /// Caloric surplus
    Gain,
    /// Caloric balance
    #[default]
    Maintain,
}

impl GoalDirection {
    /// Convert a free-form goal label into a direction.
    ///
    /// Case-insensitive substring match: anything containing "lose" is
    /// [`GoalDirection::Lose`], otherwise anything containing "gain" is
    /// [`GoalDirection::Gain`], everything else (including absent) is
    /// [`GoalDirection::Maintain`].
    #[must_use]
    pub fn from_label(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return Self::Maintain;
        };
        let label = label.to_lowercase();
        if label.contains("lose") {
            Self::Lose
        } else if label.contains("gain") {
            Self::Gain
        } else {
            Self::Maintain
        }
    }

    /// Derive the direction by comparing a target weight with the current weight.
    ///
    /// Absent or zero weights on either side mean [`GoalDirection::Maintain`].
    #[must_use]
    pub fn from_weights(current_kg: Option<f64>, target_kg: Option<f64>) -> Self {
        match (present(current_kg), present(target_kg)) {
            (Some(current), Some(target)) if target < current => Self::Lose,
            (Some(current), Some(target)) if target > current => Self::Gain,
            _ => Self::Maintain,
        }
    }

    /// Daily calorie adjustment applied on top of TDEE
    #[must_use]
    pub const fn calorie_adjustment(self) -> i64 {
        match self {
            Self::Lose => LOSE_CALORIE_ADJUSTMENT,
            Self::Gain => GAIN_CALORIE_ADJUSTMENT,
            Self::Maintain => 0,
        }
    }
}

/// Physical parameters the engine needs, supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    /// Current body weight
    pub weight_kg: Option<f64>,
    /// Height
    pub height_cm: Option<f64>,
    /// Age in whole years
    pub age_years: Option<u32>,
    /// Raw sex/gender label
    pub sex: Option<String>,
    /// Raw activity label, see [`ActivityLevel::from_label`]
    pub activity_level: Option<String>,
    /// Goal direction, already derived by the caller
    pub goal_direction: GoalDirection,
}

/// Derived daily targets persisted onto the user record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoals {
    /// Daily calorie target (kcal), never below 1200
    pub daily_calorie_goal: i64,
    /// Daily protein (g)
    pub protein_goal: i64,
    /// Daily fat (g)
    pub fats_goal: i64,
    /// Daily carbohydrates (g), never negative
    pub carbs_goal: i64,
    /// Body mass index rounded to one decimal
    pub bmi: f64,
}

/// Macro grams for a calorie target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroSplit {
    /// Protein (g)
    pub protein_g: i64,
    /// Fat (g)
    pub fat_g: i64,
    /// Carbohydrates (g)
    pub carbs_g: i64,
}

/// Treat zero as absent
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// Round to one decimal place
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)^2, rounded to one decimal.
///
/// Returns 0.0 when either input is zero, which guards the division.
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if weight_kg == 0.0 || height_cm == 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    round_to_tenth(weight_kg / (height_m * height_m))
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Each term is rounded separately (no fused multiply-add) so results near an
/// integer boundary truncate the same way everywhere.
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Other: -161
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> f64 {
    let base = MSJ_WEIGHT_COEF * weight_kg + MSJ_HEIGHT_COEF * height_cm
        - MSJ_AGE_COEF * f64::from(age_years);
    match sex {
        Sex::Male => base + MSJ_MALE_CONSTANT,
        Sex::Other => base + MSJ_OTHER_CONSTANT,
    }
}

/// Calculate Total Daily Energy Expenditure (BMR x activity multiplier)
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Apply the goal adjustment to TDEE, truncate, and enforce the calorie floor
#[must_use]
pub fn calculate_daily_calories(tdee: f64, goal_direction: GoalDirection) -> i64 {
    let adjusted = (tdee + goal_direction.calorie_adjustment() as f64) as i64;
    adjusted.max(MIN_DAILY_CALORIES)
}

/// Split a calorie target into macro grams.
///
/// Protein and fat come from body weight only; carbohydrates take the
/// remaining calories and are clamped at zero.
///
/// The remainder is computed in `f64` so absurd body weights saturate instead
/// of overflowing integer arithmetic.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn calculate_macro_split(weight_kg: f64, daily_calories: i64) -> MacroSplit {
    let protein_g = (weight_kg * PROTEIN_G_PER_KG) as i64;
    let fat_g = (weight_kg * FAT_G_PER_KG) as i64;

    let macro_calories = protein_g as f64 * KCAL_PER_G_PROTEIN as f64
        + fat_g as f64 * KCAL_PER_G_FAT as f64;
    let remaining = daily_calories as f64 - macro_calories;
    let carbs_g = ((remaining / KCAL_PER_G_CARBS as f64) as i64).max(0);

    MacroSplit {
        protein_g,
        fat_g,
        carbs_g,
    }
}

/// Calculate the full goal set for a profile snapshot.
///
/// Returns `None` when weight, height, age, or sex is absent (zero and the
/// empty string count as absent). Every other input, however implausible,
/// produces a numeric result.
#[must_use]
pub fn calculate_nutrition_goals(profile: &ProfileSnapshot) -> Option<NutritionGoals> {
    let weight_kg = present(profile.weight_kg)?;
    let height_cm = present(profile.height_cm)?;
    let age_years = profile.age_years.filter(|age| *age != 0)?;
    let sex = profile.sex.as_deref().filter(|s| !s.is_empty()).map(Sex::parse)?;

    let bmr = calculate_bmr(weight_kg, height_cm, age_years, sex);
    let activity_level = ActivityLevel::from_label(profile.activity_level.as_deref());
    let tdee = calculate_tdee(bmr, activity_level);
    let daily_calorie_goal = calculate_daily_calories(tdee, profile.goal_direction);
    let macros = calculate_macro_split(weight_kg, daily_calorie_goal);

    Some(NutritionGoals {
        daily_calorie_goal,
        protein_goal: macros.protein_g,
        fats_goal: macros.fat_g,
        carbs_goal: macros.carbs_g,
        bmi: calculate_bmi(weight_kg, height_cm),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_parse_is_case_insensitive_equality() {
        assert_eq!(Sex::parse("male"), Sex::Male);
        assert_eq!(Sex::parse("MALE"), Sex::Male);
        assert_eq!(Sex::parse("Male"), Sex::Male);
        assert_eq!(Sex::parse("female"), Sex::Other);
        assert_eq!(Sex::parse(" male"), Sex::Other);
        assert_eq!(Sex::parse("unspecified"), Sex::Other);
    }

    #[test]
    fn test_activity_level_lookup() {
        assert_eq!(
            ActivityLevel::from_label(Some("Moderate")),
            ActivityLevel::Moderate
        );
        assert_eq!(
            ActivityLevel::from_label(Some("VERY_ACTIVE")),
            ActivityLevel::VeryActive
        );
        assert_eq!(ActivityLevel::from_label(Some("light")), ActivityLevel::Light);
        assert_eq!(ActivityLevel::from_label(Some("active")), ActivityLevel::Active);
    }

    #[test]
    fn test_activity_level_silent_default() {
        assert_eq!(ActivityLevel::from_label(None), ActivityLevel::Sedentary);
        assert_eq!(ActivityLevel::from_label(Some("")), ActivityLevel::Sedentary);
        assert_eq!(
            ActivityLevel::from_label(Some("couch potato")),
            ActivityLevel::Sedentary
        );
        assert!((ActivityLevel::Sedentary.multiplier() - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_goal_direction_substring_match() {
        assert_eq!(
            GoalDirection::from_label(Some("I want to LOSE weight")),
            GoalDirection::Lose
        );
        assert_eq!(GoalDirection::from_label(Some("gain")), GoalDirection::Gain);
        assert_eq!(
            GoalDirection::from_label(Some("lose or gain")),
            GoalDirection::Lose
        );
        assert_eq!(
            GoalDirection::from_label(Some("maintain")),
            GoalDirection::Maintain
        );
        assert_eq!(GoalDirection::from_label(None), GoalDirection::Maintain);
    }

    #[test]
    fn test_goal_direction_from_weights() {
        assert_eq!(
            GoalDirection::from_weights(Some(80.0), Some(75.0)),
            GoalDirection::Lose
        );
        assert_eq!(
            GoalDirection::from_weights(Some(80.0), Some(85.0)),
            GoalDirection::Gain
        );
        assert_eq!(
            GoalDirection::from_weights(Some(80.0), Some(80.0)),
            GoalDirection::Maintain
        );
        assert_eq!(
            GoalDirection::from_weights(Some(80.0), None),
            GoalDirection::Maintain
        );
        assert_eq!(
            GoalDirection::from_weights(None, Some(70.0)),
            GoalDirection::Maintain
        );
        assert_eq!(
            GoalDirection::from_weights(Some(80.0), Some(0.0)),
            GoalDirection::Maintain
        );
    }

    #[test]
    fn test_bmi_zero_guard() {
        assert!(calculate_bmi(0.0, 180.0).abs() < f64::EPSILON);
        assert!(calculate_bmi(80.0, 0.0).abs() < f64::EPSILON);
        assert!((calculate_bmi(80.0, 180.0) - 24.7).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_branches() {
        // 10*80 + 6.25*180 - 5*25 = 1800
        assert!((calculate_bmr(80.0, 180.0, 25, Sex::Male) - 1805.0).abs() < 1e-9);
        assert!((calculate_bmr(80.0, 180.0, 25, Sex::Other) - 1639.0).abs() < 1e-9);
    }

    #[test]
    fn test_daily_calories_truncate_then_floor() {
        assert_eq!(calculate_daily_calories(2797.75, GoalDirection::Maintain), 2797);
        assert_eq!(calculate_daily_calories(2797.75, GoalDirection::Lose), 2297);
        assert_eq!(calculate_daily_calories(1500.0, GoalDirection::Lose), 1200);
    }

    #[test]
    fn test_macro_split_clamps_carbs_at_zero() {
        let split = calculate_macro_split(150.0, 1200);
        assert_eq!(split.protein_g, 300);
        assert_eq!(split.fat_g, 120);
        assert_eq!(split.carbs_g, 0);
    }

    #[test]
    fn test_macro_split_huge_weight_saturates() {
        let split = calculate_macro_split(1e18, MIN_DAILY_CALORIES);
        assert_eq!(split.protein_g, 2_000_000_000_000_000_000);
        assert!(split.fat_g > 0);
        assert_eq!(split.carbs_g, 0);
    }

    #[test]
    fn test_bmr_matches_unfused_arithmetic() {
        let weight = 70.3;
        let height = 171.7;
        let expected = 10.0 * weight + 6.25 * height - 5.0 * 33.0 + 5.0;
        assert_eq!(calculate_bmr(weight, height, 33, Sex::Male).to_bits(), expected.to_bits());
    }
}
