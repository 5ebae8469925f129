// ABOUTME: Workout time estimation and timed safety checkpoint injection
// ABOUTME: Places rule checkpoints on the workout timeline and maps them to the exercise in progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

//! # Safety Checkpoint Injector
//!
//! The timeline is a heuristic: warm-up, then per exercise
//! `sets x reps x 3 s` of work plus `(sets - 1) x rest`, then cool-down.
//! Each applied rule carrying a checkpoint contributes reminders at fixed
//! minutes of that timeline.

use crate::constants::timeline::SECONDS_PER_REP;
use crate::models::{
    AppliedRule, CheckpointTrigger, CheckpointType, ExerciseInstance, Routine, RuleCategory,
    SafetyCheckpoint,
};

/// Estimated schedule of a workout, in seconds from its start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutTimeline {
    /// End of the warm-up
    pub warm_up_seconds: u32,
    /// `(start, end)` of each exercise
    pub exercise_windows: Vec<(u32, u32)>,
    /// End of the cool-down
    pub total_seconds: u32,
}

impl WorkoutTimeline {
    /// Estimate the timeline of a workout
    #[must_use]
    pub fn estimate(warm_up: &Routine, exercises: &[ExerciseInstance], cool_down: &Routine) -> Self {
        let warm_up_seconds = warm_up.total_seconds();
        let mut cursor = warm_up_seconds;
        let mut exercise_windows = Vec::with_capacity(exercises.len());
        for exercise in exercises {
            let start = cursor;
            cursor += exercise_seconds(exercise);
            exercise_windows.push((start, cursor));
        }
        Self {
            warm_up_seconds,
            exercise_windows,
            total_seconds: cursor + cool_down.total_seconds(),
        }
    }

    /// Total length rounded up to whole minutes
    #[must_use]
    pub const fn total_minutes(&self) -> u32 {
        self.total_seconds.div_ceil(60)
    }

    /// Exercise in progress at `second`, if any
    #[must_use]
    pub fn exercise_at(&self, second: u32) -> Option<usize> {
        self.exercise_windows
            .iter()
            .position(|&(start, end)| start <= second && second < end)
    }
}

/// Work plus inter-set rest of one exercise
#[must_use]
pub const fn exercise_seconds(exercise: &ExerciseInstance) -> u32 {
    let work = exercise.sets * exercise.reps * SECONDS_PER_REP;
    let rest = exercise.sets.saturating_sub(1) * exercise.rest_seconds;
    work + rest
}

/// Checkpoint type used when a rule does not name one
#[must_use]
pub const fn default_checkpoint_type(
    category: RuleCategory,
    has_bottom_surgery: bool,
) -> CheckpointType {
    match category {
        RuleCategory::Binding => CheckpointType::BinderBreak,
        RuleCategory::PostOperative if has_bottom_surgery => CheckpointType::PelvicFloorCheck,
        RuleCategory::PostOperative => CheckpointType::ScarCare,
        RuleCategory::Hrt => CheckpointType::Hydration,
        RuleCategory::General => CheckpointType::SafetyReminder,
    }
}

/// Minutes at which a trigger fires within `total_minutes`
fn trigger_minutes(trigger: CheckpointTrigger, total_minutes: u32) -> Vec<u32> {
    match trigger {
        CheckpointTrigger::AfterMinutes(minute) if minute > 0 && minute <= total_minutes => {
            vec![minute]
        }
        CheckpointTrigger::EveryMinutes(interval) if interval > 0 => (1..)
            .map(|n| n * interval)
            .take_while(|m| *m <= total_minutes)
            .collect(),
        _ => Vec::new(),
    }
}

/// Checkpoints for every rule that carries one, sorted by minute
#[must_use]
pub fn inject_checkpoints(
    rules: &[AppliedRule],
    timeline: &WorkoutTimeline,
    has_bottom_surgery: bool,
) -> Vec<SafetyCheckpoint> {
    let total_minutes = timeline.total_minutes();
    let mut checkpoints: Vec<SafetyCheckpoint> = rules
        .iter()
        .filter_map(|rule| rule.checkpoint.as_ref().map(|config| (rule, config)))
        .flat_map(|(rule, config)| {
            let checkpoint_type = config
                .checkpoint_type
                .unwrap_or_else(|| default_checkpoint_type(rule.category, has_bottom_surgery));
            trigger_minutes(config.trigger, total_minutes)
                .into_iter()
                .map(move |minute| SafetyCheckpoint {
                    checkpoint_type,
                    minute,
                    severity: rule.severity,
                    message: config.message.clone(),
                    requires_acknowledgment: rule.severity.requires_acknowledgment(),
                    rule_id: rule.rule_id.clone(),
                    exercise_index: timeline.exercise_at(minute * 60),
                })
        })
        .collect();
    checkpoints.sort_by_key(|c| c.minute);
    checkpoints
}
