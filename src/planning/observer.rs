// ABOUTME: Observability port for plan generation: filter reports, day events, and degradations
// ABOUTME: Default implementation forwards every event to tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

use tracing::{debug, info, warn};

use super::safety_filters::FilterReport;
use crate::errors::AppError;
use crate::models::{DayFocus, RecoveryPhase};

/// Why a plan contains no workouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestOnlyReason {
    /// The catalog was empty
    EmptyCatalog,
    /// Nothing survived exclusions and recovery-phase gating
    NothingSafe {
        /// Phase used for gating
        phase: RecoveryPhase,
    },
}

/// Summary of one generated workout day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEvent {
    /// 1-based day number
    pub day_number: u32,
    /// Template focus
    pub focus: DayFocus,
    /// Candidates after the recency filter
    pub candidate_count: usize,
    /// Whether the recency filter was applied
    pub variety_applied: bool,
    /// Exercises in the longest variant
    pub exercise_count: usize,
    /// Checkpoints in the longest variant
    pub checkpoint_count: usize,
}

/// Receives generation events; every method defaults to a no-op
pub trait PlanObserver: Send + Sync {
    /// Safety filter cascade finished
    fn on_filter_report(&self, _report: &FilterReport) {}

    /// Safety rules engine failed and an empty context was used
    fn on_safety_rules_degraded(&self, _error: &AppError) {}

    /// A workout day was generated
    fn on_workout_day(&self, _event: &DayEvent) {}

    /// Trailing exercises were dropped to fit a session length cap
    fn on_session_trimmed(&self, _day_number: u32, _dropped: usize, _cap_minutes: u32) {}

    /// The plan is all rest days
    fn on_rest_only(&self, _reason: RestOnlyReason) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPlanObserver;

impl PlanObserver for NoopPlanObserver {}

/// Observer that logs through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPlanObserver;

impl PlanObserver for TracingPlanObserver {
    fn on_filter_report(&self, report: &FilterReport) {
        for stage in &report.stages {
            debug!(
                stage = %stage.stage,
                input = stage.input_count,
                output = stage.output_count,
                applied = stage.applied,
                fell_back = stage.fell_back,
                "safety filter stage"
            );
        }
        if let Some(tier) = report.fallback {
            warn!(
                ?tier,
                output = report.output_count,
                "safety filters emptied the pool, using fallback"
            );
        } else {
            info!(
                input = report.input_count,
                output = report.output_count,
                "safety filters applied"
            );
        }
    }

    fn on_safety_rules_degraded(&self, error: &AppError) {
        warn!(error = %error, "safety rules evaluation failed, continuing without rules");
    }

    fn on_workout_day(&self, event: &DayEvent) {
        debug!(
            day = event.day_number,
            focus = %event.focus,
            candidates = event.candidate_count,
            variety_applied = event.variety_applied,
            exercises = event.exercise_count,
            checkpoints = event.checkpoint_count,
            "workout day generated"
        );
    }

    fn on_session_trimmed(&self, day_number: u32, dropped: usize, cap_minutes: u32) {
        info!(
            day = day_number,
            dropped,
            cap_minutes, "trimmed exercises to fit session cap"
        );
    }

    fn on_rest_only(&self, reason: RestOnlyReason) {
        warn!(?reason, "no safe exercises available, generating rest-only plan");
    }
}
