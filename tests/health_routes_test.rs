// ABOUTME: HTTP tests for health endpoints and request correlation headers
// ABOUTME: Root status, liveness, readiness, and x-request-id propagation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::create_test_resources;
use helpers::axum_test::AxumTestRequest;
use nutrifit_server::{middleware::REQUEST_ID_HEADER, routes::build_router};
use serde_json::Value;

#[tokio::test]
async fn test_root_reports_running() {
    let resources = create_test_resources().await.unwrap();

    let body: Value = AxumTestRequest::get("/")
        .send(build_router(resources))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(body["message"], "System is running");
}

#[tokio::test]
async fn test_health_and_ready() {
    let resources = create_test_resources().await.unwrap();

    let health: Value = AxumTestRequest::get("/health")
        .send(build_router(resources.clone()))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(health["status"], "healthy");

    let ready: Value = AxumTestRequest::get("/ready")
        .send(build_router(resources))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(ready["status"], "ready");
    assert_eq!(ready["database"], true);
}

#[tokio::test]
async fn test_request_id_generated_when_absent() {
    let resources = create_test_resources().await.unwrap();

    let response = AxumTestRequest::get("/health")
        .send(build_router(resources))
        .await;
    let request_id = response.header(REQUEST_ID_HEADER).unwrap();
    assert!(uuid::Uuid::parse_str(&request_id).is_ok());
}

#[tokio::test]
async fn test_request_id_propagated_from_client() {
    let resources = create_test_resources().await.unwrap();

    let response = AxumTestRequest::get("/api/v1/users/me")
        .header(REQUEST_ID_HEADER, "client-trace.42")
        .send(build_router(resources.clone()))
        .await;
    assert_eq!(response.status(), 401);
    assert_eq!(
        response.header(REQUEST_ID_HEADER).as_deref(),
        Some("client-trace.42")
    );
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "AUTH_REQUIRED");
    assert_eq!(body["error"]["request_id"], "client-trace.42");

    let rejected = AxumTestRequest::get("/health")
        .header(REQUEST_ID_HEADER, "has spaces and {braces}")
        .send(build_router(resources))
        .await;
    let replaced = rejected.header(REQUEST_ID_HEADER).unwrap();
    assert_ne!(replaced, "has spaces and {braces}");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let resources = create_test_resources().await.unwrap();

    let response = AxumTestRequest::get("/api/v1/does-not-exist")
        .send(build_router(resources))
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_error_body_carries_generated_request_id() {
    let resources = create_test_resources().await.unwrap();
    let (_, token) = common::create_test_user(&resources).await.unwrap();

    let response = AxumTestRequest::delete("/api/v1/meals/not-a-uuid")
        .bearer(&token)
        .send(build_router(resources.clone()))
        .await;
    assert_eq!(response.status(), 404);
    let header_id = response.header(REQUEST_ID_HEADER).unwrap();
    assert_eq!(
        response.header("content-type").as_deref(),
        Some("application/json")
    );
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(body["error"]["request_id"], header_id.as_str());

    let ok: Value = AxumTestRequest::get("/health")
        .send(build_router(resources))
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert!(ok.get("request_id").is_none());
}
