// ABOUTME: Configuration module for the plan generation engine
// ABOUTME: Exposes planning configuration with defaults, env overrides, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors
//! Configuration module for the TransFit planning engine
//!
//! - **Planning**: scoring weights, variety window, exercise counts, jitter seed
//! - **Errors**: `ConfigError` for invalid environment overrides

/// Configuration error types
pub mod error;
/// Plan generation tunables
pub mod planning;

pub use error::ConfigError;
pub use planning::{PlanningConfig, ScoringConfig, SelectionConfig, VarietyConfig};
