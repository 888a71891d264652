// ABOUTME: Water intake route handlers
// ABOUTME: Today's total, log an amount, and reset today's entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::{
    errors::AppError, models::LogWaterRequest, resources::ServerResources,
    services::ActivityService,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use super::authenticate;

/// Water intake routes
pub struct WaterRoutes;

impl WaterRoutes {
    /// Create all water routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/water",
                get(Self::handle_today)
                    .post(Self::handle_log)
                    .delete(Self::handle_reset),
            )
            .with_state(resources)
    }

    async fn handle_today(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let total = ActivityService::new(&resources)
            .todays_water(auth.user_id)
            .await?;
        Ok((StatusCode::OK, Json(total)).into_response())
    }

    async fn handle_log(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
        Json(request): Json<LogWaterRequest>,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        let entry = ActivityService::new(&resources)
            .log_water(auth.user_id, request.amount)
            .await?;
        Ok((StatusCode::CREATED, Json(entry)).into_response())
    }

    async fn handle_reset(
        State(resources): State<Arc<ServerResources>>,
        headers: axum::http::HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = authenticate(&headers, &resources)?;
        ActivityService::new(&resources)
            .reset_todays_water(auth.user_id)
            .await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
