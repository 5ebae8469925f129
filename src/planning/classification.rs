// ABOUTME: Exercise classification derived from id, name, pattern, tags, and target muscles
// ABOUTME: Detects high-impact and floor-based movements and assigns a coarse body region
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

//! Keyword classification of catalog exercises.
//!
//! The catalog does not carry impact, floor, or region columns, so they are
//! inferred from text. Matching is case-insensitive substring search.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{DayFocus, Exercise};

const HIGH_IMPACT_KEYWORDS: [&str; 3] = ["jump", "plyo", "burpee"];

const FLOOR_KEYWORDS: [&str; 5] = ["plank", "bridge", "supine", "prone", "floor"];

const FULL_BODY_KEYWORDS: [&str; 9] = [
    "full body",
    "full_body",
    "burpee",
    "thruster",
    "clean",
    "snatch",
    "carry",
    "mountain climber",
    "turkish get",
];

const LOWER_KEYWORDS: [&str; 15] = [
    "squat",
    "lunge",
    "deadlift",
    "hinge",
    "glute",
    "hamstring",
    "quad",
    "calf",
    "calves",
    "leg",
    "hip thrust",
    "bridge",
    "step-up",
    "step up",
    "gait",
];

const CORE_KEYWORDS: [&str; 8] = [
    "core", "abs", "plank", "crunch", "oblique", "dead bug", "bird dog", "sit-up",
];

const PULL_KEYWORDS: [&str; 9] = [
    "pull", "row", "chin", "lat ", "lats", "curl", "biceps", "rear delt", "back",
];

const PUSH_KEYWORDS: [&str; 8] = [
    "push", "press", "dip", "chest", "triceps", "shoulder", "fly", "pec",
];

/// Coarse body region of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyRegion {
    /// Pressing upper-body work
    UpperPush,
    /// Pulling upper-body work
    UpperPull,
    /// Legs and hips
    Lower,
    /// Trunk
    Core,
    /// Compound or unclassified
    FullBody,
}

impl BodyRegion {
    /// Whether an exercise of this region belongs on a day with `focus`
    #[must_use]
    pub const fn matches_focus(self, focus: DayFocus) -> bool {
        match focus {
            DayFocus::FullBody => true,
            DayFocus::Upper => matches!(self, Self::UpperPush | Self::UpperPull),
            DayFocus::Push => matches!(self, Self::UpperPush),
            DayFocus::Pull => matches!(self, Self::UpperPull),
            DayFocus::Lower => matches!(self, Self::Lower | Self::Core),
            DayFocus::Legs => matches!(self, Self::Lower),
        }
    }

    /// Ordering used when chest compression must be minimized:
    /// lower body and core first, then full body, then upper body
    #[must_use]
    pub const fn binding_priority(self) -> u8 {
        match self {
            Self::Lower | Self::Core => 0,
            Self::FullBody => 1,
            Self::UpperPush | Self::UpperPull => 2,
        }
    }
}

impl fmt::Display for BodyRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpperPush => write!(f, "upper_push"),
            Self::UpperPull => write!(f, "upper_pull"),
            Self::Lower => write!(f, "lower"),
            Self::Core => write!(f, "core"),
            Self::FullBody => write!(f, "full_body"),
        }
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Jumping, plyometric, or burpee movement
#[must_use]
pub fn is_high_impact(exercise: &Exercise) -> bool {
    contains_any(&exercise.search_text(), &HIGH_IMPACT_KEYWORDS)
}

/// Performed lying or kneeling on the floor
#[must_use]
pub fn is_floor_based(exercise: &Exercise) -> bool {
    contains_any(&exercise.search_text(), &FLOOR_KEYWORDS)
}

/// Body region inferred from pattern, text, and target muscles
#[must_use]
pub fn body_region(exercise: &Exercise) -> BodyRegion {
    if let Some(pattern) = exercise.pattern.as_deref() {
        match pattern.trim().to_lowercase().as_str() {
            "squat" | "hinge" | "lunge" | "gait" => return BodyRegion::Lower,
            "core" => return BodyRegion::Core,
            "carry" => return BodyRegion::FullBody,
            "push" => return BodyRegion::UpperPush,
            "pull" => return BodyRegion::UpperPull,
            _ => {}
        }
    }

    let mut text = exercise.search_text();
    if let Some(muscles) = &exercise.target_muscles {
        text.push(' ');
        text.push_str(&muscles.to_lowercase());
    }

    if contains_any(&text, &FULL_BODY_KEYWORDS) {
        BodyRegion::FullBody
    } else if contains_any(&text, &LOWER_KEYWORDS) {
        BodyRegion::Lower
    } else if contains_any(&text, &CORE_KEYWORDS) {
        BodyRegion::Core
    } else if contains_any(&text, &PULL_KEYWORDS) {
        BodyRegion::UpperPull
    } else if contains_any(&text, &PUSH_KEYWORDS) {
        BodyRegion::UpperPush
    } else {
        BodyRegion::FullBody
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(id: &str, name: &str) -> Exercise {
        Exercise::new(id, name)
    }

    #[test]
    fn test_impact_and_floor_keywords() {
        assert!(is_high_impact(&named("box_jump", "Box Jump")));
        assert!(is_high_impact(&named("x1", "Burpee")));
        assert!(!is_high_impact(&named("goblet_squat", "Goblet Squat")));

        let mut tagged = named("x2", "Hold");
        tagged.tags.push("Plyometric".to_owned());
        assert!(is_high_impact(&tagged));

        assert!(is_floor_based(&named("front_plank", "Front Plank")));
        assert!(is_floor_based(&named("glute_bridge", "Glute Bridge")));
        assert!(!is_floor_based(&named("row", "Seated Cable Row")));
    }

    #[test]
    fn test_body_region() {
        assert_eq!(body_region(&named("a", "Goblet Squat")), BodyRegion::Lower);
        assert_eq!(body_region(&named("b", "Dumbbell Bench Press")), BodyRegion::UpperPush);
        assert_eq!(body_region(&named("c", "Bent Over Row")), BodyRegion::UpperPull);
        assert_eq!(body_region(&named("d", "Dead Bug")), BodyRegion::Core);
        assert_eq!(body_region(&named("e", "Kettlebell Clean")), BodyRegion::FullBody);
        assert_eq!(body_region(&named("f", "Mystery Move")), BodyRegion::FullBody);

        let mut by_pattern = named("g", "Mystery Move");
        by_pattern.pattern = Some("Hinge".to_owned());
        assert_eq!(body_region(&by_pattern), BodyRegion::Lower);
    }

    #[test]
    fn test_focus_matching() {
        assert!(BodyRegion::UpperPull.matches_focus(DayFocus::Upper));
        assert!(!BodyRegion::UpperPull.matches_focus(DayFocus::Push));
        assert!(BodyRegion::Core.matches_focus(DayFocus::Lower));
        assert!(BodyRegion::Lower.matches_focus(DayFocus::FullBody));
    }
}
