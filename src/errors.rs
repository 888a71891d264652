// ABOUTME: Unified error handling re-exported from nutrifit-core
// ABOUTME: AppError, ErrorCode, and AppResult used by every server module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Error types live in `nutrifit-core` so the HTTP rendering and the sqlx
//! conversion are compiled once. Server modules import them from here.

pub use nutrifit_core::errors::*;
