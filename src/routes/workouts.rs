// ABOUTME: Workout log route handlers
// ABOUTME: List, create, and delete the caller's workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::{
    errors::AppError,
    models::{CreateWorkoutRequest, MessageResponse},
    resources::ServerResources,
    services::ActivityService,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use std::sync::Arc;

use super::{authenticate, parse_entry_id};

/// Workout routes
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/workouts",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route("/workouts/:workout_id", delete(Self::handle_delete))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let workouts = ActivityService::new(&resources)
            .list_workouts(auth.user_id)
            .await?;
        Ok((StatusCode::OK, Json(workouts)).into_response())
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
        Json(request): Json<CreateWorkoutRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let workout = ActivityService::new(&resources)
            .create_workout(auth.user_id, request)
            .await?;
        Ok((StatusCode::CREATED, Json(workout)).into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
        Path(workout_id): Path<String>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let workout_id = parse_entry_id(&workout_id, "Workout")?;
        ActivityService::new(&resources)
            .delete_workout(auth.user_id, workout_id)
            .await?;
        Ok((StatusCode::OK, Json(MessageResponse::new("Workout deleted"))).into_response())
    }
}
