// ABOUTME: Core types and constants for the Nutrifit tracking API
// ABOUTME: Foundation crate with unified error handling and goal engine constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrifit Core
//!
//! Foundation crate providing shared types and constants for the Nutrifit
//! nutrition tracking server. This crate changes infrequently, which keeps
//! incremental rebuilds of the server crate cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and HTTP rendering
//! - **constants**: Goal engine coefficients, defaults, and service names

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;
