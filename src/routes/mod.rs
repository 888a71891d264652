// ABOUTME: Route module organization and HTTP router assembly
// ABOUTME: Nests domain routes under the API prefix and wires the tower middleware stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes
//!
//! Each domain exposes a `XRoutes::routes(resources)` constructor returning an
//! axum [`Router`]. [`build_router`] merges them under `/api/v1` and adds the
//! request-id, tracing, timeout, and CORS layers.

/// Registration and login
pub mod auth;
/// Root status, liveness and readiness
pub mod health;
/// Meal log
pub mod meals;
/// Profile and weight history
pub mod users;
/// Water intake
pub mod water;
/// Workout log
pub mod workouts;

pub use auth::AuthRoutes;
pub use health::HealthRoutes;
pub use meals::MealRoutes;
pub use users::UserRoutes;
pub use water::WaterRoutes;
pub use workouts::WorkoutRoutes;

use crate::{
    auth::AuthResult,
    constants::{limits::REQUEST_TIMEOUT_SECS, routes::API_V1},
    errors::{AppError, AppResult},
    middleware::{make_request_span, record_user, request_id_middleware, setup_cors},
    resources::ServerResources,
};
use axum::{
    body::Body,
    http::{header::AUTHORIZATION, HeaderMap},
    middleware, Router,
};
use std::{sync::Arc, time::Duration};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use uuid::Uuid;

/// Build the full application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let api = Router::new()
        .merge(AuthRoutes::routes(resources.clone()))
        .merge(UserRoutes::routes(resources.clone()))
        .merge(MealRoutes::routes(resources.clone()))
        .merge(WorkoutRoutes::routes(resources.clone()))
        .merge(WaterRoutes::routes(resources.clone()));

    Router::new()
        .nest(API_V1, api)
        .merge(HealthRoutes::routes(resources.clone()))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .layer(setup_cors(&resources.config))
}

/// Validate the bearer token on a request and tag the request span with its user
pub(crate) fn authenticate(
    headers: &HeaderMap,
    resources: &ServerResources,
) -> AppResult<AuthResult> {
    let header = headers
        .get(AUTHORIZATION)
        .map(|value| {
            value
                .to_str()
                .map_err(|_| AppError::auth_malformed("Authorization header is not valid text"))
        })
        .transpose()?;

    let auth = resources.auth_manager.authenticate_bearer(header)?;
    record_user(auth.user_id);
    Ok(auth)
}

/// Parse a path id, reporting unknown ids as a missing resource
pub(crate) fn parse_entry_id(raw: &str, resource: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found(resource))
}
