// ABOUTME: External ports of the plan generator: exercise catalog and safety rules
// ABOUTME: Async traits with in-memory, file-backed, and static implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

//! # Providers
//!
//! The plan generator suspends only on these two ports: fetching the exercise
//! catalog and evaluating safety rules. Repository errors propagate to the
//! caller unchanged; rules engine errors degrade to an empty context.

/// Exercise catalog repository
pub mod repository;
/// Safety rules engine port
pub mod safety_rules;

pub use repository::{ExerciseRepository, InMemoryExerciseRepository, JsonFileExerciseRepository};
pub use safety_rules::{SafetyRulesEngine, StaticSafetyRules};
