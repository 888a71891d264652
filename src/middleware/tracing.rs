// ABOUTME: Request tracing span construction for the tower-http TraceLayer
// ABOUTME: Declares request_id and user_id fields that later middleware and handlers fill in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::http::Request;
use tracing::Span;
use uuid::Uuid;

/// Create a tracing span for an HTTP request
pub fn make_request_span<B>(request: &Request<B>) -> Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = tracing::field::Empty,
        user_id = tracing::field::Empty,
    )
}

/// Record the authenticated user on the current request span
pub fn record_user(user_id: Uuid) {
    Span::current().record("user_id", tracing::field::display(user_id));
}
