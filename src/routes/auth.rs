// ABOUTME: Authentication route handlers for registration and login
// ABOUTME: Public endpoints that create accounts and issue bearer tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::{
    errors::AppError,
    models::{LoginRequest, RegisterRequest},
    resources::ServerResources,
    services::AccountService,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;

/// Authentication routes
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/auth/register", post(Self::handle_register))
            .route("/auth/login", post(Self::handle_login))
            .with_state(resources)
    }

    /// Handle user registration
    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RegisterRequest>,
    ) -> Result<Response, AppError> {
        let profile = AccountService::new(&resources).register(request).await?;
        Ok((StatusCode::CREATED, Json(profile)).into_response())
    }

    /// Handle user login
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> Result<Response, AppError> {
        let token = AccountService::new(&resources).login(request).await?;
        Ok((StatusCode::OK, Json(token)).into_response())
    }
}
