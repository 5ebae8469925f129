// ABOUTME: Domain models for the TransFit plan generation engine
// ABOUTME: Re-exports Profile, Exercise, SafetyContext, Plan and their supporting types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

//! # Data Models
//!
//! - `Profile`: read-only user input (goals, HRT, binding, surgeries, preferences)
//! - `Exercise`: immutable catalog entity with safety flags
//! - `SafetyContext`: output of the safety rules engine
//! - `Plan`: generated output, days with four duration variants each

mod exercise;
mod plan;
mod profile;
mod safety;

pub use exercise::{Difficulty, Exercise, RecoveryPhase};
pub use plan::{
    Day, DayFocus, ExerciseFormat, ExerciseInstance, GoalWeighting, Plan, Routine, RoutineItem,
    SafetyCheckpoint, Workout, WorkoutDuration, WorkoutMetadata, WorkoutVariants,
};
pub use profile::{
    BindingFrequency, BlockLength, Constraint, FitnessExperience, Goal, HrtType, Profile, Surgery,
    SurgeryType,
};
pub use safety::{
    AppliedRule, CheckpointConfig, CheckpointTrigger, CheckpointType, ModifiedParameters,
    RuleCategory, SafetyContext, Severity,
};
