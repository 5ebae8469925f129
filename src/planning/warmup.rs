// ABOUTME: Warm-up and cool-down routines keyed by the body region of the day's focus
// ABOUTME: Fixed low-impact items with per-item seconds and a rounded total in minutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

use crate::models::{DayFocus, Routine, RoutineItem};

/// Region used to pick a routine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutineRegion {
    /// Push, pull and upper days
    Upper,
    /// Lower and leg days
    Lower,
    /// Full body days
    FullBody,
}

impl From<DayFocus> for RoutineRegion {
    fn from(focus: DayFocus) -> Self {
        match focus {
            DayFocus::Upper | DayFocus::Push | DayFocus::Pull => Self::Upper,
            DayFocus::Lower | DayFocus::Legs => Self::Lower,
            DayFocus::FullBody => Self::FullBody,
        }
    }
}

const UPPER_WARM_UP: [(&str, u32); 4] = [
    ("Arm circles", 60),
    ("Band pull-aparts", 60),
    ("Wall slides", 60),
    ("Cat-cow", 60),
];

const LOWER_WARM_UP: [(&str, u32); 4] = [
    ("Marching in place", 60),
    ("Bodyweight good mornings", 60),
    ("Leg swings", 60),
    ("Hip circles", 60),
];

const FULL_BODY_WARM_UP: [(&str, u32); 5] = [
    ("Marching in place", 60),
    ("Arm circles", 45),
    ("Hip circles", 45),
    ("Bodyweight good mornings", 60),
    ("Torso rotations", 45),
];

const UPPER_COOL_DOWN: [(&str, u32); 3] = [
    ("Doorway chest stretch", 60),
    ("Cross-body shoulder stretch", 60),
    ("Slow diaphragmatic breathing", 60),
];

const LOWER_COOL_DOWN: [(&str, u32); 3] = [
    ("Standing quad stretch", 60),
    ("Standing hamstring stretch", 60),
    ("Slow diaphragmatic breathing", 60),
];

const FULL_BODY_COOL_DOWN: [(&str, u32); 4] = [
    ("Standing hamstring stretch", 60),
    ("Doorway chest stretch", 45),
    ("Standing quad stretch", 45),
    ("Slow diaphragmatic breathing", 60),
];

fn routine(items: &[(&str, u32)]) -> Routine {
    let exercises: Vec<RoutineItem> = items
        .iter()
        .map(|&(name, duration_seconds)| RoutineItem {
            name: name.to_owned(),
            duration_seconds,
        })
        .collect();
    let seconds: u32 = exercises.iter().map(|e| e.duration_seconds).sum();
    Routine {
        exercises,
        total_duration_minutes: seconds.div_ceil(60),
    }
}

/// Warm-up for a day focus
#[must_use]
pub fn generate_warm_up(focus: DayFocus) -> Routine {
    match RoutineRegion::from(focus) {
        RoutineRegion::Upper => routine(&UPPER_WARM_UP),
        RoutineRegion::Lower => routine(&LOWER_WARM_UP),
        RoutineRegion::FullBody => routine(&FULL_BODY_WARM_UP),
    }
}

/// Cool-down for a day focus
#[must_use]
pub fn generate_cool_down(focus: DayFocus) -> Routine {
    match RoutineRegion::from(focus) {
        RoutineRegion::Upper => routine(&UPPER_COOL_DOWN),
        RoutineRegion::Lower => routine(&LOWER_COOL_DOWN),
        RoutineRegion::FullBody => routine(&FULL_BODY_COOL_DOWN),
    }
}
