// ABOUTME: Meal log route handlers
// ABOUTME: List, create, and delete the caller's meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::{
    errors::AppError,
    models::{CreateMealRequest, MessageResponse},
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

/// Meal routes
pub struct MealRoutes;

impl MealRoutes {
    /// Create all meal routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/meals",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route("/meals/:meal_id", delete(Self::handle_delete))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let meals = ActivityService::new(&resources)
            .list_meals(auth.user_id)
            .await?;
        Ok((StatusCode::OK, Json(meals)).into_response())
    }

    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
        Json(request): Json<CreateMealRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let meal = ActivityService::new(&resources)
            .create_meal(auth.user_id, request)
            .await?;
        Ok((StatusCode::CREATED, Json(meal)).into_response())
    }

    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
        Path(meal_id): Path<String>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let meal_id = parse_entry_id(&meal_id, "Meal")?;
        ActivityService::new(&resources)
            .delete_meal(auth.user_id, meal_id)
            .await?;
        Ok((StatusCode::OK, Json(MessageResponse::new("Meal deleted"))).into_response())
    }
}
