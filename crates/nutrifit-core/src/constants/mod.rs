// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for the goal engine, defaults, and service identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace.

/// Goal engine coefficients (BMR, activity multipliers, macro split)
pub mod nutrition;

/// Service identity used in logs and token audiences
pub mod service_names {
    /// Server crate name, used as the tracing target directive
    pub const NUTRIFIT_SERVER: &str = "nutrifit_server";
    /// Token audience for issued access tokens
    pub const API_AUDIENCE: &str = "nutrifit-api";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Default configuration values
pub mod defaults {
    /// Default bind host
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default `SQLite` database location
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/nutrifit.db";
    /// Default CORS origin list (any origin)
    pub const DEFAULT_CORS_ORIGINS: &str = "*";
    /// Token type returned by the login endpoint
    pub const TOKEN_TYPE_BEARER: &str = "bearer";
}

/// Default limits
pub mod limits {
    /// Default access token lifetime in hours
    pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;
    /// Upper bound accepted for `JWT_EXPIRY_HOURS`
    pub const MAX_JWT_EXPIRY_HOURS: i64 = 24 * 30;
    /// Minimum accepted length for a configured JWT secret
    pub const MIN_JWT_SECRET_LEN: usize = 32;
    /// Request timeout applied by the HTTP layer, in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// API route prefixes
pub mod routes {
    /// Versioned API prefix
    pub const API_V1: &str = "/api/v1";
}
