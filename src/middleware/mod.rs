// ABOUTME: HTTP middleware for CORS, request correlation IDs, and request tracing
// ABOUTME: Layers applied to the assembled axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS layer built from configuration
pub mod cors;
/// x-request-id propagation
pub mod request_id;
/// Request span construction
pub mod tracing;

pub use cors::setup_cors;
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
pub use self::tracing::{make_request_span, record_user};
