// ABOUTME: Prescription engine turning selected exercises into sets, reps, rest, and load guidance
// ABOUTME: Table-driven bases by duration and difficulty, scaled by volume adjustment and clamped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

//! # Prescription Engine
//!
//! Base sets and rest come from a duration x difficulty table. The first three
//! exercises of a workout get one extra base set. Results are scaled by the
//! [`VolumeAdjustment`] and clamped to sets `[2, 5]`, reps `[5, 20]`, rest
//! `[10, 120]` seconds.

use super::equipment::is_bodyweight_only;
use super::volume::VolumeAdjustment;
use crate::constants::prescription::{
    DEFAULT_BASE_REPS, ENDURANCE_BASE_REPS, HYPERTROPHY_BASE_REPS, MAX_REPS, MAX_REST_SECONDS,
    MAX_SETS, MIN_REPS, MIN_REST_SECONDS, MIN_SETS, PRIORITY_POSITIONS, STRENGTH_BASE_REPS,
};
use crate::models::{
    Difficulty, Exercise, ExerciseFormat, ExerciseInstance, FitnessExperience, Goal,
    WorkoutDuration,
};

/// Base sets: beginner, intermediate, advanced
const fn base_sets(duration: WorkoutDuration, difficulty: Difficulty) -> u32 {
    let row: [u32; 3] = match duration {
        WorkoutDuration::Thirty => [2, 2, 3],
        WorkoutDuration::FortyFive => [2, 3, 3],
        WorkoutDuration::Sixty => [3, 3, 4],
        WorkoutDuration::Ninety => [3, 4, 4],
    };
    row[difficulty_column(difficulty)]
}

/// Base rest seconds: beginner, intermediate, advanced
const fn base_rest_seconds(duration: WorkoutDuration, difficulty: Difficulty) -> u32 {
    let row: [u32; 3] = match duration {
        WorkoutDuration::Thirty => [45, 40, 30],
        WorkoutDuration::FortyFive => [60, 50, 45],
        WorkoutDuration::Sixty => [75, 60, 60],
        WorkoutDuration::Ninety => [90, 75, 75],
    };
    row[difficulty_column(difficulty)]
}

const fn difficulty_column(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Beginner => 0,
        Difficulty::Intermediate => 1,
        Difficulty::Advanced => 2,
    }
}

/// Inputs shared by every exercise of one workout
#[derive(Debug, Clone, Copy)]
pub struct PrescriptionContext<'v> {
    /// Workout length
    pub duration: WorkoutDuration,
    /// Goal driving the rep band
    pub primary_goal: Goal,
    /// Recorded experience
    pub experience: Option<FitnessExperience>,
    /// Volume adjustment for the plan
    pub adjustment: &'v VolumeAdjustment,
}

impl PrescriptionContext<'_> {
    /// Prescribe the exercise at `position` (0-based) of the workout
    #[must_use]
    pub fn prescribe(&self, exercise: &Exercise, position: usize) -> ExerciseInstance {
        ExerciseInstance {
            exercise_id: exercise.id.clone(),
            exercise_name: exercise.name.clone(),
            sets: self.sets(exercise, position),
            reps: self.reps(),
            rest_seconds: self.rest_seconds(exercise),
            format: workout_format(self.duration),
            weight_guidance: self.weight_guidance(exercise),
        }
    }

    /// Working sets
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sets(&self, exercise: &Exercise, position: usize) -> u32 {
        let mut base = base_sets(self.duration, exercise.difficulty);
        if position < PRIORITY_POSITIONS {
            base += 1;
        }
        let mut sets = (f64::from(base) * self.adjustment.sets_multiplier).round() as u32;
        if let Some(cap) = self.adjustment.max_sets {
            sets = sets.min(cap);
        }
        sets.clamp(MIN_SETS, MAX_SETS)
    }

    /// Reps per set
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn reps(&self) -> u32 {
        if let Some(reps) = self
            .adjustment
            .rep_range
            .as_deref()
            .and_then(parse_rep_range)
        {
            return reps.clamp(MIN_REPS, MAX_REPS);
        }
        let base = match self.primary_goal {
            Goal::Strength => STRENGTH_BASE_REPS,
            Goal::Endurance => ENDURANCE_BASE_REPS,
            Goal::Hypertrophy => HYPERTROPHY_BASE_REPS,
            _ => DEFAULT_BASE_REPS,
        };
        let reps = (base + self.adjustment.reps_adjustment).max(0) as u32;
        reps.clamp(MIN_REPS, MAX_REPS)
    }

    /// Rest between sets
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rest_seconds(&self, exercise: &Exercise) -> u32 {
        let base = base_rest_seconds(self.duration, exercise.difficulty);
        let rest = (f64::from(base) * self.adjustment.rest_multiplier).round() as u32;
        rest.clamp(MIN_REST_SECONDS, MAX_REST_SECONDS)
    }

    /// Load guidance; bodyweight-only exercises get none
    #[must_use]
    pub fn weight_guidance(&self, exercise: &Exercise) -> Option<String> {
        if is_bodyweight_only(&exercise.equipment) {
            return None;
        }
        if let Some(cap) = self.adjustment.max_weight {
            return Some(format!(
                "Recovery caution: keep loads at or below {} lbs and stop if anything pulls at healing tissue",
                format_pounds(cap)
            ));
        }
        let text = match self.experience {
            None | Some(FitnessExperience::Beginner) => {
                "Start light and focus on form; finish each set with 3-4 reps in reserve"
            }
            Some(FitnessExperience::Intermediate) => {
                "Moderate load; finish each set with 2-3 reps in reserve"
            }
            Some(FitnessExperience::Advanced) => {
                "Challenging load; finish each set with 1-2 reps in reserve"
            }
        };
        Some(text.to_owned())
    }
}

/// Circuits for 30 minute workouts, straight sets otherwise
#[must_use]
pub const fn workout_format(duration: WorkoutDuration) -> ExerciseFormat {
    match duration {
        WorkoutDuration::Thirty => ExerciseFormat::Circuit,
        _ => ExerciseFormat::StraightSets,
    }
}

/// Parse `"min-max"` to its rounded average, or a bare integer.
///
/// Returns `None` for anything unparsable.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_rep_range(range: &str) -> Option<u32> {
    let range = range.trim();
    if let Some((low, high)) = range.split_once('-') {
        let low: u32 = low.trim().parse().ok()?;
        let high: u32 = high.trim().parse().ok()?;
        return Some(((f64::from(low) + f64::from(high)) / 2.0).round() as u32);
    }
    range.parse().ok()
}

fn format_pounds(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
