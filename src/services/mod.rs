// ABOUTME: Service layer between HTTP handlers and persistence
// ABOUTME: Accounts, weight logging, and activity logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Service layer
//!
//! Services own the business rules (validation, goal recalculation triggers,
//! ownership checks) and are the only callers of the goal engine.

/// Registration, login, and profile updates
pub mod accounts;
/// Meals, workouts, and water intake
pub mod activity;
/// Weight history
pub mod weight;

pub use accounts::AccountService;
pub use activity::ActivityService;
pub use weight::WeightService;
