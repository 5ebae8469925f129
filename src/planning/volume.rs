// ABOUTME: Volume adjustment from safety overrides, training experience, and template multiplier
// ABOUTME: Produces clamped set and rest multipliers plus prescription caps carried downstream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

//! # Volume Adjuster
//!
//! Applied in order:
//!
//! 1. Safety overrides: `volume_reduction_percent` scales sets,
//!    `rest_seconds_increase` adds to the rest multiplier relative to a 60 s
//!    baseline, `recovery_multiplier` scales rest.
//! 2. Experience: beginners get fewer sets and more rest, advanced users more
//!    sets, less rest and two extra reps.
//! 3. Template multiplier on sets.
//!
//! Sets never drop below half; rest stays within `[0.7, 2.0]`.

use serde::Serialize;

use crate::constants::volume::{
    ADVANCED_REPS_BONUS, ADVANCED_REST_MULTIPLIER, ADVANCED_SETS_MULTIPLIER,
    BASELINE_REST_SECONDS, BEGINNER_REST_MULTIPLIER, BEGINNER_SETS_MULTIPLIER,
    MAX_REST_MULTIPLIER, MIN_REST_MULTIPLIER, MIN_SETS_MULTIPLIER,
};
use crate::models::{FitnessExperience, ModifiedParameters};

/// Multipliers and caps applied to every prescription of a plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeAdjustment {
    /// Multiplier on base sets
    pub sets_multiplier: f64,
    /// Multiplier on base rest
    pub rest_multiplier: f64,
    /// Reps added to the goal base
    pub reps_adjustment: i32,
    /// Hard cap on sets
    pub max_sets: Option<u32>,
    /// Fixed rep range, `"min-max"` or a bare integer
    pub rep_range: Option<String>,
    /// Load cap in pounds
    pub max_weight: Option<f64>,
    /// Session length cap
    pub max_workout_minutes: Option<u32>,
    /// Week-over-week overload rate, informational
    pub progressive_overload_rate: Option<f64>,
}

impl Default for VolumeAdjustment {
    fn default() -> Self {
        Self {
            sets_multiplier: 1.0,
            rest_multiplier: 1.0,
            reps_adjustment: 0,
            max_sets: None,
            rep_range: None,
            max_weight: None,
            max_workout_minutes: None,
            progressive_overload_rate: None,
        }
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Combine safety overrides, experience, and template multiplier
#[must_use]
pub fn calculate_volume_adjustments(
    experience: Option<FitnessExperience>,
    params: &ModifiedParameters,
    template_multiplier: f64,
) -> VolumeAdjustment {
    let mut adjustment = VolumeAdjustment {
        max_sets: params.max_sets,
        rep_range: params.rep_range.clone(),
        max_weight: finite(params.max_weight).filter(|w| *w > 0.0),
        max_workout_minutes: params.max_workout_minutes.filter(|m| *m > 0),
        progressive_overload_rate: finite(params.progressive_overload_rate),
        ..VolumeAdjustment::default()
    };

    if let Some(percent) = finite(params.volume_reduction_percent) {
        adjustment.sets_multiplier *= 1.0 - percent.clamp(0.0, 100.0) / 100.0;
    }
    if let Some(seconds) = finite(params.rest_seconds_increase) {
        adjustment.rest_multiplier += seconds / BASELINE_REST_SECONDS;
    }
    if let Some(multiplier) = finite(params.recovery_multiplier).filter(|m| *m > 0.0) {
        adjustment.rest_multiplier *= multiplier;
    }

    match experience {
        Some(FitnessExperience::Beginner) => {
            adjustment.sets_multiplier *= BEGINNER_SETS_MULTIPLIER;
            adjustment.rest_multiplier *= BEGINNER_REST_MULTIPLIER;
        }
        Some(FitnessExperience::Advanced) => {
            adjustment.sets_multiplier *= ADVANCED_SETS_MULTIPLIER;
            adjustment.rest_multiplier *= ADVANCED_REST_MULTIPLIER;
            adjustment.reps_adjustment += ADVANCED_REPS_BONUS;
        }
        Some(FitnessExperience::Intermediate) | None => {}
    }

    if template_multiplier.is_finite() && template_multiplier > 0.0 {
        adjustment.sets_multiplier *= template_multiplier;
    }

    adjustment.sets_multiplier = adjustment.sets_multiplier.max(MIN_SETS_MULTIPLIER);
    adjustment.rest_multiplier = adjustment
        .rest_multiplier
        .clamp(MIN_REST_MULTIPLIER, MAX_REST_MULTIPLIER);

    adjustment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_inputs_is_neutral() {
        let adjustment = calculate_volume_adjustments(None, &ModifiedParameters::default(), 1.0);
        assert_eq!(adjustment, VolumeAdjustment::default());
    }

    #[test]
    fn test_rest_increase_is_relative_to_baseline() {
        let params = ModifiedParameters {
            rest_seconds_increase: Some(30.0),
            ..ModifiedParameters::default()
        };
        let adjustment = calculate_volume_adjustments(None, &params, 1.0);
        assert!((adjustment.rest_multiplier - 1.5).abs() < 1e-9);
    }
}
