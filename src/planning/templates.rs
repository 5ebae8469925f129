// ABOUTME: Workout template selection from weekly frequency, experience, and HRT status
// ABOUTME: Produces the day-focus rotation and a template-level volume multiplier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

use serde::Serialize;

use super::snapshot::ProfileSnapshot;
use crate::constants::volume::{
    EARLY_TESTOSTERONE_MONTHS, EARLY_TESTOSTERONE_TEMPLATE_MULTIPLIER,
    FEMINIZING_HRT_TEMPLATE_MULTIPLIER,
};
use crate::models::{DayFocus, FitnessExperience, HrtType};

/// One day of a template rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayTemplate {
    /// Focus of the day
    pub focus: DayFocus,
}

/// A template chosen for a profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedTemplate {
    /// Template name
    pub name: &'static str,
    /// Rotation, consumed one entry per workout day
    pub days: Vec<DayTemplate>,
    /// Multiplier applied to working sets
    pub volume_multiplier: f64,
}

impl SelectedTemplate {
    /// Template day for the `n`th workout day (0-based), cycling the rotation
    #[must_use]
    pub fn day(&self, workout_index: usize) -> DayTemplate {
        if self.days.is_empty() {
            return DayTemplate {
                focus: DayFocus::FullBody,
            };
        }
        self.days[workout_index % self.days.len()]
    }
}

fn rotation(foci: &[DayFocus]) -> Vec<DayTemplate> {
    foci.iter().map(|&focus| DayTemplate { focus }).collect()
}

/// Choose the template for a profile
#[must_use]
pub fn select_template(snapshot: &ProfileSnapshot<'_>) -> SelectedTemplate {
    let frequency = snapshot.profile.workout_frequency.clamp(1, 7);
    let beginner = snapshot.experience() == Some(FitnessExperience::Beginner);

    let (name, days) = match frequency {
        1 | 2 => ("full_body", rotation(&[DayFocus::FullBody])),
        3 if beginner => ("full_body", rotation(&[DayFocus::FullBody])),
        3 => (
            "push_pull_legs",
            rotation(&[DayFocus::Push, DayFocus::Pull, DayFocus::Legs]),
        ),
        4 => ("upper_lower", rotation(&[DayFocus::Upper, DayFocus::Lower])),
        _ => (
            "push_pull_legs",
            rotation(&[DayFocus::Push, DayFocus::Pull, DayFocus::Legs]),
        ),
    };

    SelectedTemplate {
        name,
        days,
        volume_multiplier: hrt_volume_multiplier(snapshot),
    }
}

/// Template volume multiplier from HRT type and duration
#[must_use]
pub fn hrt_volume_multiplier(snapshot: &ProfileSnapshot<'_>) -> f64 {
    match snapshot.active_hrt() {
        Some(hrt) if hrt.is_feminizing() => FEMINIZING_HRT_TEMPLATE_MULTIPLIER,
        Some(HrtType::Testosterone)
            if snapshot
                .hrt_months
                .is_some_and(|m| m < EARLY_TESTOSTERONE_MONTHS) =>
        {
            EARLY_TESTOSTERONE_TEMPLATE_MULTIPLIER
        }
        _ => 1.0,
    }
}
