// ABOUTME: User profile and weight history route handlers
// ABOUTME: Profile read/update and weight logging, each of which may refresh nutrition goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! User routes
//!
//! All handlers require a valid bearer token and act on the token's user.

use crate::{
    errors::AppError,
    models::{LogWeightRequest, UpdateProfileRequest},
    resources::ServerResources,
    services::{AccountService, WeightService},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use super::authenticate;

/// User profile routes
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/users/me",
                get(Self::handle_get_me).put(Self::handle_update_me),
            )
            .route("/users/weight", post(Self::handle_log_weight))
            .route("/users/weight/history", get(Self::handle_weight_history))
            .with_state(resources)
    }

    async fn handle_get_me(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let profile = AccountService::new(&resources)
            .get_profile(auth.user_id)
            .await?;
        Ok((StatusCode::OK, Json(profile)).into_response())
    }

    async fn handle_update_me(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
        Json(request): Json<UpdateProfileRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let profile = AccountService::new(&resources)
            .update_profile(auth.user_id, request)
            .await?;
        Ok((StatusCode::OK, Json(profile)).into_response())
    }

    async fn handle_log_weight(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
        Json(request): Json<LogWeightRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let profile = WeightService::new(&resources)
            .log_weight(auth.user_id, request.weight)
            .await?;
        Ok((StatusCode::OK, Json(profile)).into_response())
    }

    async fn handle_weight_history(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let history = WeightService::new(&resources).history(auth.user_id).await?;
        Ok((StatusCode::OK, Json(history)).into_response())
    }
}
