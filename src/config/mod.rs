// ABOUTME: Configuration module root
// ABOUTME: Environment-driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable parsing and validation
pub mod environment;

pub use environment::{Environment, LogLevel, ServerConfig};
