// ABOUTME: Plan generation pipeline from profile snapshot to assembled multi-week plan
// ABOUTME: Filtering, scoring, templates, volume, prescriptions, routines, and checkpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

//! # Plan Generation
//!
//! Pipeline, leaves first:
//!
//! - `snapshot` / `validation`: derived profile view and contradiction checks
//! - `recovery_phase`: surgical recovery phase from surgery dates
//! - `equipment` / `classification`: canonical equipment and keyword classification
//! - `safety_filters`: ordered filter cascade with fallback ladder
//! - `exercise_selection`: scoring, variety tracking, per-day ranking
//! - `templates` / `volume` / `prescription`: sets, reps, rest, load guidance
//! - `warmup` / `checkpoints`: routines, time estimate, timed safety reminders
//! - `calendar`: workout versus rest days
//! - `plan_generator`: the orchestrator
//! - `observer`: generation events

/// Calendar resolution
pub mod calendar;
/// Timeline estimate and safety checkpoints
pub mod checkpoints;
/// Keyword classification of exercises
pub mod classification;
/// Canonical equipment tokens
pub mod equipment;
/// Scoring and selection
pub mod exercise_selection;
/// Generation events
pub mod observer;
/// Plan orchestrator
pub mod plan_generator;
/// Sets, reps, rest, and load guidance
pub mod prescription;
/// Recovery phase calculator
pub mod recovery_phase;
/// Safety filter cascade
pub mod safety_filters;
/// Derived profile view
pub mod snapshot;
/// Template selection
pub mod templates;
/// Profile validation
pub mod validation;
/// Volume adjustment
pub mod volume;
/// Warm-up and cool-down routines
pub mod warmup;

pub use observer::{DayEvent, NoopPlanObserver, PlanObserver, RestOnlyReason, TracingPlanObserver};
pub use plan_generator::{PlanGenerator, PlanOptions};
pub use recovery_phase::calculate_recovery_phase;
pub use safety_filters::{filter_exercises_by_constraints, FilterReport, FilteredPool};
pub use snapshot::{ProfileSnapshot, SurgeryStatus};
pub use templates::{select_template, SelectedTemplate};
pub use validation::validate_profile;
pub use volume::{calculate_volume_adjustments, VolumeAdjustment};
