// ABOUTME: User account model with physical profile and stored nutrition goals
// ABOUTME: User, UserProfile response, and account request/response payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::intelligence::nutrition_goals::{GoalDirection, NutritionGoals, ProfileSnapshot};

/// Registered user with profile parameters and the last computed goal set
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique user identifier
    pub id: Uuid,
    /// Login email, unique across users
    pub email: String,
    /// bcrypt hash, never serialized
    pub password_hash: String,
    /// Display name
    pub full_name: Option<String>,
    /// Sex/gender label fed to the BMR equation
    pub gender: Option<String>,
    /// Age in years
    pub age: Option<u32>,
    /// Height in cm
    pub height: Option<f64>,
    /// Current weight in kg
    pub weight: Option<f64>,
    /// Weight when tracking started, informational only
    pub start_weight: Option<f64>,
    /// Target weight in kg, drives the goal direction
    pub goal_weight: Option<f64>,
    /// Activity label, see `ActivityLevel::from_label`
    pub activity_rate: Option<String>,
    /// Stored daily calorie goal
    pub daily_calorie_goal: Option<i64>,
    /// Stored protein goal (g)
    pub protein_goal: Option<i64>,
    /// Stored carbohydrate goal (g)
    pub carbs_goal: Option<i64>,
    /// Stored fat goal (g)
    pub fats_goal: Option<i64>,
    /// Stored BMI
    pub bmi: Option<f64>,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with an empty physical profile
    #[must_use]
    pub fn new(email: String, password_hash: String, full_name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            full_name,
            gender: None,
            age: None,
            height: None,
            weight: None,
            start_weight: None,
            goal_weight: None,
            activity_rate: None,
            daily_calorie_goal: None,
            protein_goal: None,
            carbs_goal: None,
            fats_goal: None,
            bmi: None,
            created_at: Utc::now(),
        }
    }

    /// Direction implied by comparing `goal_weight` with the current weight
    #[must_use]
    pub fn goal_direction(&self) -> GoalDirection {
        GoalDirection::from_weights(self.weight, self.goal_weight)
    }

    /// Physical parameters the goal engine reads from this user
    #[must_use]
    pub fn profile_snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            weight_kg: self.weight,
            height_cm: self.height,
            age_years: self.age,
            sex: self.gender.clone(),
            activity_level: self.activity_rate.clone(),
            goal_direction: self.goal_direction(),
        }
    }

    /// Store a freshly computed goal set.
    ///
    /// `None` leaves the previously stored goals untouched. Returns whether
    /// anything was applied.
    pub fn apply_goals(&mut self, goals: Option<NutritionGoals>) -> bool {
        let Some(goals) = goals else {
            return false;
        };
        self.daily_calorie_goal = Some(goals.daily_calorie_goal);
        self.protein_goal = Some(goals.protein_goal);
        self.carbs_goal = Some(goals.carbs_goal);
        self.fats_goal = Some(goals.fats_goal);
        self.bmi = Some(goals.bmi);
        true
    }
}

/// Public view of a user; never carries the password hash
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// User identifier
    pub id: Uuid,
    /// Login email
    pub email: String,
    /// Display name
    pub full_name: Option<String>,
    /// Sex/gender label
    pub gender: Option<String>,
    /// Age in years
    pub age: Option<u32>,
    /// Height in cm
    pub height: Option<f64>,
    /// Current weight in kg
    pub weight: Option<f64>,
    /// Starting weight in kg
    pub start_weight: Option<f64>,
    /// Target weight in kg
    pub goal_weight: Option<f64>,
    /// Activity label
    pub activity_rate: Option<String>,
    /// Daily calorie goal
    pub daily_calorie_goal: Option<i64>,
    /// Protein goal (g)
    pub protein_goal: Option<i64>,
    /// Carbohydrate goal (g)
    pub carbs_goal: Option<i64>,
    /// Fat goal (g)
    pub fats_goal: Option<i64>,
    /// Body mass index
    pub bmi: Option<f64>,
    /// Account creation time
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            gender: user.gender,
            age: user.age,
            height: user.height,
            weight: user.weight,
            start_weight: user.start_weight,
            goal_weight: user.goal_weight,
            activity_rate: user.activity_rate,
            daily_calorie_goal: user.daily_calorie_goal,
            protein_goal: user.protein_goal,
            carbs_goal: user.carbs_goal,
            fats_goal: user.fats_goal,
            bmi: user.bmi,
            created_at: user.created_at,
        }
    }
}

/// Account registration payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Login email
    pub email: String,
    /// Plain-text password, hashed before storage
    pub password: String,
    /// Display name
    #[serde(default)]
    pub full_name: Option<String>,
    /// Sex/gender label
    #[serde(default)]
    pub gender: Option<String>,
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Height in cm
    #[serde(default)]
    pub height: Option<f64>,
    /// Current weight in kg
    #[serde(default)]
    pub weight: Option<f64>,
    /// Starting weight in kg
    #[serde(default)]
    pub start_weight: Option<f64>,
    /// Target weight in kg
    #[serde(default)]
    pub goal_weight: Option<f64>,
    /// Activity label
    #[serde(default)]
    pub activity_rate: Option<String>,
}

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login email
    pub email: String,
    /// Plain-text password
    pub password: String,
}

/// Issued bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed JWT
    pub access_token: String,
    /// Always "bearer"
    pub token_type: String,
}

/// Accept `null` as an explicit value so it can be told apart from an absent field
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Partial profile update.
///
/// Absent fields are left unchanged, an explicit `null` clears the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// Display name
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<Option<String>>,
    /// Sex/gender label
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub gender: Option<Option<String>>,
    /// Age in years
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub age: Option<Option<u32>>,
    /// Height in cm
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub height: Option<Option<f64>>,
    /// Current weight in kg
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub weight: Option<Option<f64>>,
    /// Starting weight in kg
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub start_weight: Option<Option<f64>>,
    /// Target weight in kg
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub goal_weight: Option<Option<f64>>,
    /// Activity label
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub activity_rate: Option<Option<String>>,
}

impl UpdateProfileRequest {
    /// Whether any field that feeds the goal engine was supplied, including as `null`
    #[must_use]
    pub const fn touches_goal_inputs(&self) -> bool {
        self.weight.is_some()
            || self.height.is_some()
            || self.age.is_some()
            || self.gender.is_some()
            || self.activity_rate.is_some()
            || self.goal_weight.is_some()
    }

    /// Copy every supplied field onto the user
    pub fn apply_to(self, user: &mut User) {
        if let Some(full_name) = self.full_name {
            user.full_name = full_name;
        }
        if let Some(gender) = self.gender {
            user.gender = gender;
        }
        if let Some(age) = self.age {
            user.age = age;
        }
        if let Some(height) = self.height {
            user.height = height;
        }
        if let Some(weight) = self.weight {
            user.weight = weight;
        }
        if let Some(start_weight) = self.start_weight {
            user.start_weight = start_weight;
        }
        if let Some(goal_weight) = self.goal_weight {
            user.goal_weight = goal_weight;
        }
        if let Some(activity_rate) = self.activity_rate {
            user.activity_rate = activity_rate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profiled_user() -> User {
        let mut user = User::new("a@example.com".into(), "hash".into(), None);
        user.gender = Some("male".into());
        user.age = Some(25);
        user.height = Some(180.0);
        user.weight = Some(80.0);
        user.activity_rate = Some("moderate".into());
        user
    }

    #[test]
    fn test_goal_direction_follows_goal_weight() {
        let mut user = profiled_user();
        assert_eq!(user.goal_direction(), GoalDirection::Maintain);
        user.goal_weight = Some(70.0);
        assert_eq!(user.goal_direction(), GoalDirection::Lose);
        user.goal_weight = Some(90.0);
        assert_eq!(user.goal_direction(), GoalDirection::Gain);
    }

    #[test]
    fn test_apply_goals_none_keeps_previous() {
        let mut user = profiled_user();
        user.daily_calorie_goal = Some(2000);
        assert!(!user.apply_goals(None));
        assert_eq!(user.daily_calorie_goal, Some(2000));
    }

    #[test]
    fn test_profile_view_omits_password_hash() {
        let profile = UserProfile::from(profiled_user());
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("hash"));
    }

    #[test]
    fn test_touches_goal_inputs() {
        let name_only = UpdateProfileRequest {
            full_name: Some(Some("New".into())),
            start_weight: Some(Some(90.0)),
            ..Default::default()
        };
        assert!(!name_only.touches_goal_inputs());

        let with_goal = UpdateProfileRequest {
            goal_weight: Some(Some(70.0)),
            ..Default::default()
        };
        assert!(with_goal.touches_goal_inputs());
    }

    #[test]
    fn test_explicit_null_clears_absent_field_keeps() {
        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"goal_weight": null, "full_name": "Renamed"}"#).unwrap();
        assert_eq!(request.goal_weight, Some(None));
        assert_eq!(request.start_weight, None);
        assert!(request.touches_goal_inputs());

        let mut user = profiled_user();
        user.goal_weight = Some(70.0);
        user.start_weight = Some(85.0);
        request.apply_to(&mut user);

        assert_eq!(user.goal_weight, None);
        assert_eq!(user.start_weight, Some(85.0));
        assert_eq!(user.full_name.as_deref(), Some("Renamed"));
    }
}
