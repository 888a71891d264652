// ABOUTME: Account service for registration, login, and profile updates
// ABOUTME: Recomputes stored nutrition goals whenever a goal-engine input changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::auth::AuthManager;
use crate::constants::defaults::TOKEN_TYPE_BEARER;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::intelligence::nutrition_goals::calculate_nutrition_goals;
use crate::logging::AppLogger;
use crate::models::{
    LoginRequest, RegisterRequest, TokenResponse, UpdateProfileRequest, User, UserProfile,
};
use crate::resources::ServerResources;

/// Account registration, authentication, and profile management
pub struct AccountService {
    database: Arc<Database>,
    auth_manager: Arc<AuthManager>,
}

impl AccountService {
    /// Create a service over the shared resources
    #[must_use]
    pub fn new(resources: &ServerResources) -> Self {
        Self {
            database: resources.database.clone(),
            auth_manager: resources.auth_manager.clone(),
        }
    }

    /// Minimal structural email check
    #[must_use]
    pub fn is_valid_email(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
    }

    /// Register a new account and compute its initial goals
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The email is malformed or the password is empty (`InvalidInput`)
    /// - The email is already registered (`ResourceAlreadyExists`)
    /// - Hashing or database operations fail
    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserProfile> {
        let email = request.email.trim().to_owned();
        info!(user.email = %email, "User registration attempt");

        if !Self::is_valid_email(&email) {
            return Err(AppError::invalid_input("Invalid email format"));
        }
        if request.password.is_empty() {
            return Err(AppError::invalid_input("Password must not be empty"));
        }
        if self.database.get_user_by_email(&email).await?.is_some() {
            return Err(AppError::already_exists("Email already registered"));
        }

        let password_hash = self.auth_manager.hash_password(&request.password).await?;

        let mut user = User::new(email, password_hash, request.full_name);
        user.gender = request.gender;
        user.age = request.age;
        user.height = request.height;
        user.weight = request.weight;
        user.start_weight = request.start_weight;
        user.goal_weight = request.goal_weight;
        user.activity_rate = request.activity_rate;

        let goals = calculate_nutrition_goals(&user.profile_snapshot());
        AppLogger::log_goal_recalculation(user.id, "register", goals.as_ref());
        user.apply_goals(goals);

        self.database.create_user(&user).await?;
        info!(user.id = %user.id, user.email = %user.email, "User registered successfully");

        Ok(user.into())
    }

    /// Verify credentials and issue a bearer token
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` for an unknown email or wrong password, or an
    /// internal error if verification or signing fails
    pub async fn login(&self, request: LoginRequest) -> AppResult<TokenResponse> {
        let email = request.email.trim();
        let Some(user) = self.database.get_user_by_email(email).await? else {
            AppLogger::log_auth_event(email, "login", false);
            return Err(AppError::auth_invalid("Incorrect email or password"));
        };

        if !self
            .auth_manager
            .verify_password(&request.password, &user.password_hash)
            .await?
        {
            AppLogger::log_auth_event(email, "login", false);
            return Err(AppError::auth_invalid("Incorrect email or password"));
        }

        let access_token = self.auth_manager.generate_token(&user)?;
        AppLogger::log_auth_event(email, "login", true);

        Ok(TokenResponse {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_owned(),
        })
    }

    /// Load a user, failing with `ResourceNotFound` when absent
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or the query fails
    pub async fn load_user(&self, user_id: Uuid) -> AppResult<User> {
        self.database
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User").with_user_id(user_id))
    }

    /// Current profile of `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or the query fails
    pub async fn get_profile(&self, user_id: Uuid) -> AppResult<UserProfile> {
        self.load_user(user_id).await.map(UserProfile::from)
    }

    /// Apply a partial profile update.
    ///
    /// Goals are recomputed only when one of `weight`, `height`, `age`,
    /// `gender`, `activity_rate` or `goal_weight` was supplied. An insufficient-data result
    /// keeps the previously stored goals.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or persistence fails
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> AppResult<UserProfile> {
        let mut user = self.load_user(user_id).await?;
        let recalculate = request.touches_goal_inputs();
        request.apply_to(&mut user);

        if recalculate {
            let goals = calculate_nutrition_goals(&user.profile_snapshot());
            AppLogger::log_goal_recalculation(user.id, "profile_update", goals.as_ref());
            user.apply_goals(goals);
        } else {
            debug!(user.id = %user.id, "Profile update does not affect goals");
        }

        self.database.update_user(&user).await?;
        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(AccountService::is_valid_email("a@example.com"));
        assert!(!AccountService::is_valid_email("example.com"));
        assert!(!AccountService::is_valid_email("@example.com"));
        assert!(!AccountService::is_valid_email("a@localhost"));
        assert!(!AccountService::is_valid_email("a@example."));
    }
}
