// ABOUTME: Integration tests for account and weight services
// ABOUTME: Registration, login, profile updates, and goal recalculation against SQLite
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{
    bare_request, create_test_resources, create_test_user, full_profile_request,
    register_and_login, TEST_PASSWORD,
};
use nutrifit_server::{
    errors::ErrorCode,
    models::{LoginRequest, UpdateProfileRequest},
    services::{AccountService, WeightService},
};

#[tokio::test]
async fn test_register_with_full_profile_computes_goals() {
    let resources = create_test_resources().await.unwrap();
    let service = AccountService::new(&resources);

    let profile = service
        .register(full_profile_request("runner@example.com"))
        .await
        .unwrap();

    assert_eq!(profile.email, "runner@example.com");
    assert_eq!(profile.daily_calorie_goal, Some(2797));
    assert_eq!(profile.protein_goal, Some(160));
    assert_eq!(profile.fats_goal, Some(64));
    assert_eq!(profile.carbs_goal, Some(395));
    assert_eq!(profile.bmi, Some(24.7));
}

#[tokio::test]
async fn test_register_without_profile_leaves_goals_empty() {
    let resources = create_test_resources().await.unwrap();
    let profile = AccountService::new(&resources)
        .register(bare_request("bare@example.com"))
        .await
        .unwrap();

    assert!(profile.daily_calorie_goal.is_none());
    assert!(profile.protein_goal.is_none());
    assert!(profile.bmi.is_none());
}

#[tokio::test]
async fn test_register_with_goal_weight_below_current_loses() {
    let resources = create_test_resources().await.unwrap();
    let mut request = full_profile_request("cutting@example.com");
    request.goal_weight = Some(72.0);

    let profile = AccountService::new(&resources)
        .register(request)
        .await
        .unwrap();
    assert_eq!(profile.daily_calorie_goal, Some(2297));
    assert_eq!(profile.carbs_goal, Some(270));
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let resources = create_test_resources().await.unwrap();
    let service = AccountService::new(&resources);

    service
        .register(bare_request("dup@example.com"))
        .await
        .unwrap();
    let err = service
        .register(bare_request("dup@example.com"))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(err.http_status(), 409);
}

#[tokio::test]
async fn test_invalid_email_rejected() {
    let resources = create_test_resources().await.unwrap();
    let err = AccountService::new(&resources)
        .register(bare_request("not-an-email"))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_login_issues_valid_token() {
    let resources = create_test_resources().await.unwrap();
    let (profile, token) = create_test_user(&resources).await.unwrap();

    let claims = resources.auth_manager.validate_token(&token).unwrap();
    assert_eq!(claims.sub, profile.id.to_string());
    assert_eq!(claims.email, profile.email);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let resources = create_test_resources().await.unwrap();
    create_test_user(&resources).await.unwrap();
    let service = AccountService::new(&resources);

    let wrong_password = service
        .login(LoginRequest {
            email: "test@example.com".to_owned(),
            password: "wrong".to_owned(),
        })
        .await
        .unwrap_err();
    let unknown_email = service
        .login(LoginRequest {
            email: "nobody@example.com".to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await
        .unwrap_err();

    assert_eq!(wrong_password.code, ErrorCode::AuthInvalid);
    assert_eq!(unknown_email.code, ErrorCode::AuthInvalid);
    assert_eq!(wrong_password.message, unknown_email.message);
}

#[tokio::test]
async fn test_update_name_only_keeps_goals() {
    let resources = create_test_resources().await.unwrap();
    let (profile, _) = create_test_user(&resources).await.unwrap();

    let updated = AccountService::new(&resources)
        .update_profile(
            profile.id,
            UpdateProfileRequest {
                full_name: Some(Some("Renamed".to_owned())),
                ..UpdateProfileRequest::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.full_name.as_deref(), Some("Renamed"));
    assert_eq!(updated.daily_calorie_goal, profile.daily_calorie_goal);
    assert_eq!(updated.carbs_goal, profile.carbs_goal);
}

#[tokio::test]
async fn test_update_goal_weight_recalculates() {
    let resources = create_test_resources().await.unwrap();
    let (profile, _) = create_test_user(&resources).await.unwrap();

    let updated = AccountService::new(&resources)
        .update_profile(
            profile.id,
            UpdateProfileRequest {
                goal_weight: Some(Some(90.0)),
                ..UpdateProfileRequest::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.daily_calorie_goal, Some(3297));
    assert_eq!(updated.carbs_goal, Some(520));
}

#[tokio::test]
async fn test_update_completing_profile_populates_goals() {
    let resources = create_test_resources().await.unwrap();
    let (profile, _) = register_and_login(&resources, bare_request("late@example.com"))
        .await
        .unwrap();
    assert!(profile.daily_calorie_goal.is_none());

    let service = AccountService::new(&resources);
    let partial = service
        .update_profile(
            profile.id,
            UpdateProfileRequest {
                weight: Some(Some(80.0)),
                height: Some(Some(180.0)),
                ..UpdateProfileRequest::default()
            },
        )
        .await
        .unwrap();
    assert!(partial.daily_calorie_goal.is_none());

    let complete = service
        .update_profile(
            profile.id,
            UpdateProfileRequest {
                age: Some(Some(25)),
                gender: Some(Some("male".to_owned())),
                activity_rate: Some(Some("moderate".to_owned())),
                ..UpdateProfileRequest::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(complete.daily_calorie_goal, Some(2797));

    let reloaded = service.get_profile(profile.id).await.unwrap();
    assert_eq!(reloaded, complete);
}

#[tokio::test]
async fn test_log_weight_updates_profile_and_history() {
    let resources = create_test_resources().await.unwrap();
    let (profile, _) = create_test_user(&resources).await.unwrap();
    let service = WeightService::new(&resources);

    let after_first = service.log_weight(profile.id, 78.0).await.unwrap();
    assert_eq!(after_first.weight, Some(78.0));
    assert_eq!(after_first.protein_goal, Some(156));
    assert_eq!(after_first.start_weight, Some(80.0));

    service.log_weight(profile.id, 77.5).await.unwrap();

    let history = service.history(profile.id).await.unwrap();
    let weights: Vec<f64> = history.iter().map(|entry| entry.weight).collect();
    assert_eq!(weights, vec![78.0, 77.5]);
    assert!(history[0].date <= history[1].date);
}

#[tokio::test]
async fn test_log_weight_rejects_non_positive() {
    let resources = create_test_resources().await.unwrap();
    let (profile, _) = create_test_user(&resources).await.unwrap();
    let service = WeightService::new(&resources);

    for bad in [0.0, -5.0, f64::NAN] {
        let err = service.log_weight(profile.id, bad).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
    assert!(service.history(profile.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_log_weight_without_profile_keeps_goals_empty() {
    let resources = create_test_resources().await.unwrap();
    let (profile, _) = register_and_login(&resources, bare_request("w@example.com"))
        .await
        .unwrap();

    let updated = WeightService::new(&resources)
        .log_weight(profile.id, 70.0)
        .await
        .unwrap();
    assert_eq!(updated.weight, Some(70.0));
    assert!(updated.daily_calorie_goal.is_none());
}
