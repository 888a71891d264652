// ABOUTME: Integration tests for meal, workout, and water logging
// ABOUTME: Checks ownership scoping, ordering, and daily water totals
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{bare_request, create_test_resources, register_and_login};
use nutrifit_server::{
    errors::ErrorCode,
    models::{CreateMealRequest, CreateWorkoutRequest},
    services::{activity::today, ActivityService},
};
use uuid::Uuid;

fn meal(name: &str, calories: i64) -> CreateMealRequest {
    CreateMealRequest {
        name: name.to_owned(),
        weight: 250,
        calories,
    }
}

#[tokio::test]
async fn test_meals_are_scoped_to_owner() {
    let resources = create_test_resources().await.unwrap();
    let (alice, _) = register_and_login(&resources, bare_request("alice@example.com"))
        .await
        .unwrap();
    let (bob, _) = register_and_login(&resources, bare_request("bob@example.com"))
        .await
        .unwrap();
    let service = ActivityService::new(&resources);

    let oats = service.create_meal(alice.id, meal("Oats", 350)).await.unwrap();
    service.create_meal(bob.id, meal("Rice", 500)).await.unwrap();

    let alice_meals = service.list_meals(alice.id).await.unwrap();
    assert_eq!(alice_meals.len(), 1);
    assert_eq!(alice_meals[0].id, oats.id);
    assert_eq!(alice_meals[0].calories, 350);

    let err = service.delete_meal(bob.id, oats.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(service.list_meals(alice.id).await.unwrap().len(), 1);

    service.delete_meal(alice.id, oats.id).await.unwrap();
    assert!(service.list_meals(alice.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_meals_listed_newest_first() {
    let resources = create_test_resources().await.unwrap();
    let (user, _) = register_and_login(&resources, bare_request("order@example.com"))
        .await
        .unwrap();
    let service = ActivityService::new(&resources);

    let first = service.create_meal(user.id, meal("Breakfast", 400)).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = service.create_meal(user.id, meal("Lunch", 700)).await.unwrap();

    let ids: Vec<Uuid> = service
        .list_meals(user.id)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn test_delete_unknown_workout_is_not_found() {
    let resources = create_test_resources().await.unwrap();
    let (user, _) = register_and_login(&resources, bare_request("gym@example.com"))
        .await
        .unwrap();
    let service = ActivityService::new(&resources);

    let workout = service
        .create_workout(
            user.id,
            CreateWorkoutRequest {
                name: "Intervals".to_owned(),
                duration: 45,
                calories_burned: 520,
            },
        )
        .await
        .unwrap();
    assert_eq!(service.list_workouts(user.id).await.unwrap()[0].id, workout.id);

    let err = service
        .delete_workout(user.id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    service.delete_workout(user.id, workout.id).await.unwrap();
    assert!(service.list_workouts(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_water_total_and_reset() {
    let resources = create_test_resources().await.unwrap();
    let (user, _) = register_and_login(&resources, bare_request("water@example.com"))
        .await
        .unwrap();
    let (other, _) = register_and_login(&resources, bare_request("other@example.com"))
        .await
        .unwrap();
    let service = ActivityService::new(&resources);

    let empty = service.todays_water(user.id).await.unwrap();
    assert_eq!(empty.total_amount, 0);
    assert_eq!(empty.date, today());

    service.log_water(user.id, 250).await.unwrap();
    service.log_water(user.id, 500).await.unwrap();
    service.log_water(other.id, 1000).await.unwrap();

    assert_eq!(service.todays_water(user.id).await.unwrap().total_amount, 750);

    service.reset_todays_water(user.id).await.unwrap();
    assert_eq!(service.todays_water(user.id).await.unwrap().total_amount, 0);
    assert_eq!(service.todays_water(other.id).await.unwrap().total_amount, 1000);
}

#[tokio::test]
async fn test_water_rejects_non_positive_amount() {
    let resources = create_test_resources().await.unwrap();
    let (user, _) = register_and_login(&resources, bare_request("dry@example.com"))
        .await
        .unwrap();
    let service = ActivityService::new(&resources);

    for amount in [0, -100] {
        let err = service.log_water(user.id, amount).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
}
