// ABOUTME: Main library entry point for the TransFit plan generation engine
// ABOUTME: Turns a safety-relevant fitness profile into a multi-day, multi-duration workout plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

#![deny(unsafe_code)]

//! # TransFit Plan Generation Engine
//!
//! Filters a shared exercise catalog through cascading safety constraints
//! (equipment, surgical recovery phase, chest binding, impact and floor
//! restrictions), scores exercises against weighted goals, adjusts volume for
//! hormone therapy and experience, and assembles a 1 or 4 week block of
//! workouts in four duration variants with timed safety checkpoints.
//!
//! ## Architecture
//!
//! - **Models / Constants / Errors**: re-exported from `transfit-core`
//! - **Config**: `PlanningConfig` with environment overrides
//! - **Providers**: catalog repository and safety rules ports
//! - **Safety**: default rules engine producing a `SafetyContext`
//! - **Planning**: the generation pipeline and its orchestrator
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use chrono::Utc;
//! use transfit::errors::AppResult;
//! use transfit::models::{Goal, Profile};
//! use transfit::planning::{PlanGenerator, PlanOptions};
//! use transfit::providers::JsonFileExerciseRepository;
//! use transfit::safety::DefaultSafetyRulesEngine;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let generator = PlanGenerator::new(
//!         Arc::new(JsonFileExerciseRepository::new("catalog.json")),
//!         Arc::new(DefaultSafetyRulesEngine::new()),
//!     );
//!
//!     let profile = Profile::new(Goal::Strength);
//!     let plan = generator
//!         .generate_plan(&profile, PlanOptions::starting(Utc::now().date_naive()))
//!         .await?;
//!
//!     println!("{} workout days", plan.workout_day_count());
//!     Ok(())
//! }
//! ```

pub use transfit_core::{constants, errors, models};

/// Planning configuration and environment overrides
pub mod config;

/// Structured logging setup
pub mod logging;

/// Plan generation pipeline
pub mod planning;

/// External ports: exercise catalog and safety rules
pub mod providers;

/// Default safety rules engine
pub mod safety;
