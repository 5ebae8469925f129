// ABOUTME: Exercise catalog entity and the post-surgical recovery phase scale
// ABOUTME: Catalog rows are supplied externally and treated as immutable during generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::FitnessExperience;

/// Coarse post-surgical healing stage.
///
/// Variants are declared from most to least restrictive so the derived
/// ordering reads naturally: `Immediate < Early < Mid < Late < Maintenance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryPhase {
    /// Weeks 0-2
    Immediate,
    /// Weeks 2-6
    Early,
    /// Weeks 6-12
    Mid,
    /// Weeks 12-24
    Late,
    /// Week 24 onward, or no active recovery
    Maintenance,
}

impl fmt::Display for RecoveryPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate => write!(f, "immediate"),
            Self::Early => write!(f, "early"),
            Self::Mid => write!(f, "mid"),
            Self::Late => write!(f, "late"),
            Self::Maintenance => write!(f, "maintenance"),
        }
    }
}

impl FromStr for RecoveryPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "immediate" => Ok(Self::Immediate),
            "early" => Ok(Self::Early),
            "mid" => Ok(Self::Mid),
            "late" => Ok(Self::Late),
            "maintenance" => Ok(Self::Maintenance),
            other => Err(format!("Unknown recovery phase: {other}")),
        }
    }
}

/// Exercise difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Suitable for beginners
    Beginner,
    /// Requires some training history
    #[default]
    Intermediate,
    /// Requires solid technique and conditioning
    Advanced,
}

impl Difficulty {
    /// Difficulty tiers available to a given experience level
    #[must_use]
    pub const fn allowed_for(experience: FitnessExperience) -> &'static [Self] {
        match experience {
            FitnessExperience::Beginner => &[Self::Beginner],
            FitnessExperience::Intermediate => &[Self::Beginner, Self::Intermediate],
            FitnessExperience::Advanced => &[Self::Beginner, Self::Intermediate, Self::Advanced],
        }
    }
}

/// Exercise from the shared catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Stable identifier (slug-like)
    pub id: String,
    /// Display name
    pub name: String,
    /// Movement pattern (squat, hinge, push, pull, core, ...)
    #[serde(default)]
    pub pattern: Option<String>,
    /// Catalog goal label (strength, mobility, ...)
    #[serde(default)]
    pub goal: Option<String>,
    /// Raw equipment labels; empty means none required
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Difficulty tier
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Safe while wearing a chest binder
    #[serde(default)]
    pub binder_aware: bool,
    /// Safe for heavy/daily binders
    #[serde(default)]
    pub heavy_binding_safe: bool,
    /// Safe for a recovering pelvic floor
    #[serde(default)]
    pub pelvic_floor_safe: bool,
    /// Earliest recovery phase in which this exercise is permissible
    #[serde(default)]
    pub earliest_safe_phase: Option<RecoveryPhase>,
    /// Free-form tags (goals, regions, modalities)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-text primary muscles
    #[serde(default)]
    pub target_muscles: Option<String>,
}

impl Exercise {
    /// Minimal exercise with every safety flag off
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pattern: None,
            goal: None,
            equipment: Vec::new(),
            difficulty: Difficulty::default(),
            binder_aware: false,
            heavy_binding_safe: false,
            pelvic_floor_safe: false,
            earliest_safe_phase: None,
            tags: Vec::new(),
            target_muscles: None,
        }
    }

    /// Lower-cased id, name, pattern and tags joined for keyword matching
    #[must_use]
    pub fn search_text(&self) -> String {
        let mut parts = vec![self.id.to_lowercase(), self.name.to_lowercase()];
        if let Some(pattern) = &self.pattern {
            parts.push(pattern.to_lowercase());
        }
        parts.extend(self.tags.iter().map(|t| t.to_lowercase()));
        parts.join(" ")
    }

    /// Whether a tag (or the catalog goal label) equals `tag`, ignoring case
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
            || self
                .goal
                .as_deref()
                .is_some_and(|g| g.eq_ignore_ascii_case(tag))
    }
}
