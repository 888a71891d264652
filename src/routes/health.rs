// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides root status, liveness, and database-backed readiness endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! Unauthenticated. `/ready` reports 503 when the database does not answer.

use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::root_handler))
            .route("/health", get(Self::health_handler))
            .route("/ready", get(Self::ready_handler))
            .with_state(resources)
    }

    async fn root_handler() -> Json<serde_json::Value> {
        Json(serde_json::json!({ "message": "System is running" }))
    }

    async fn health_handler() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn ready_handler(State(resources): State<Arc<ServerResources>>) -> Response {
        let database_ok = sqlx::query("SELECT 1")
            .execute(resources.database.pool())
            .await
            .is_ok();

        let (status, label) = if database_ok {
            (StatusCode::OK, "ready")
        } else {
            tracing::warn!("Readiness check failed: database unavailable");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        };

        (
            status,
            Json(serde_json::json!({
                "status": label,
                "database": database_ok,
                "timestamp": chrono::Utc::now().to_rfc3339()
            })),
        )
            .into_response()
    }
}
