// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database, auth, resources, and user creation helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `nutrifit_server`

use anyhow::Result;
use nutrifit_server::{
    auth::AuthManager,
    config::environment::ServerConfig,
    database::Database,
    models::{LoginRequest, RegisterRequest, UserProfile},
    resources::ServerResources,
    services::AccountService,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Lowest bcrypt cost accepted by the library, keeps tests fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// Password used for every fixture account
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Standard in-memory test database
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// Create test authentication manager
pub fn create_test_auth_manager() -> AuthManager {
    AuthManager::new(b"test-secret-with-enough-length-for-hs256", 24)
        .with_bcrypt_cost(TEST_BCRYPT_COST)
}

/// Server resources backed by an in-memory database
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::new(
        database,
        create_test_auth_manager(),
        Arc::new(ServerConfig::default()),
    )))
}

/// Registration payload for a 25 year old, 180 cm, 80 kg, moderately active male
pub fn full_profile_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_owned(),
        password: TEST_PASSWORD.to_owned(),
        full_name: Some("Test User".to_owned()),
        gender: Some("male".to_owned()),
        age: Some(25),
        height: Some(180.0),
        weight: Some(80.0),
        start_weight: Some(80.0),
        goal_weight: None,
        activity_rate: Some("Moderate".to_owned()),
    }
}

/// Registration payload with credentials only
pub fn bare_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_owned(),
        password: TEST_PASSWORD.to_owned(),
        ..RegisterRequest::default()
    }
}

/// Register `request` and log in, returning the profile and an access token
pub async fn register_and_login(
    resources: &ServerResources,
    request: RegisterRequest,
) -> Result<(UserProfile, String)> {
    let service = AccountService::new(resources);
    let email = request.email.clone();
    let password = request.password.clone();
    let profile = service.register(request).await?;
    let token = service.login(LoginRequest { email, password }).await?;
    Ok((profile, token.access_token))
}

/// Fully profiled test user with a token
pub async fn create_test_user(resources: &ServerResources) -> Result<(UserProfile, String)> {
    register_and_login(resources, full_profile_request("test@example.com")).await
}
