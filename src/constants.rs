// ABOUTME: Application constants re-exported from nutrifit-core
// ABOUTME: Goal engine coefficients, service names, ports, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutrifit_core::constants::*;
