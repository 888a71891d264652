// ABOUTME: Main library entry point for the Nutrifit nutrition and fitness API
// ABOUTME: Exposes accounts, activity logs, and the nutrition goal engine over REST
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrifit Server
//!
//! A REST API for personal nutrition and fitness tracking. Users register with
//! an optional body profile, log meals, workouts, water, and weight, and get
//! daily calorie and macronutrient targets derived from their profile.
//!
//! ## Architecture
//!
//! - **Intelligence**: pure BMI/BMR/TDEE and macro goal engine
//! - **Database**: `SQLite` persistence through `sqlx`
//! - **Services**: account, weight, and activity workflows
//! - **Routes**: axum handlers under `/api/v1`
//! - **Auth**: bcrypt password hashes and HS256 bearer tokens
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrifit_server::config::environment::ServerConfig;
//! use nutrifit_server::resources::ServerResources;
//! use nutrifit_server::routes::build_router;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::from_config(config).await?);
//!     let _router = build_router(resources);
//!     Ok(())
//! }
//! ```

/// Password hashing and bearer token handling
pub mod auth;

/// Environment-driven server configuration
pub mod config;

/// Shared constants re-exported from `nutrifit-core`
pub mod constants;

/// `SQLite` persistence layer
pub mod database;

/// Unified error handling re-exported from `nutrifit-core`
pub mod errors;

/// Nutrition goal engine
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (request ids, tracing spans, CORS)
pub mod middleware;

/// Domain and request/response models
pub mod models;

/// Shared server resources
pub mod resources;

/// HTTP routes
pub mod routes;

/// Business workflows between routes and the database
pub mod services;
