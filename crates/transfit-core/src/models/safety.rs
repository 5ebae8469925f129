// ABOUTME: Safety rules engine output consumed by the plan generator
// ABOUTME: Applied rules, excluded exercise ids, and optional volume/prescription overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a safety rule or checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational
    #[default]
    Info,
    /// Low
    Low,
    /// Medium, requires acknowledgment
    Medium,
    /// High, requires acknowledgment
    High,
}

impl Severity {
    /// Medium and high severities must be acknowledged in-workout
    #[must_use]
    pub const fn requires_acknowledgment(&self) -> bool {
        matches!(self, Self::Medium | Self::High)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Domain a safety rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    /// Chest binding
    Binding,
    /// Post-surgical recovery
    PostOperative,
    /// Hormone therapy
    Hrt,
    /// Anything else
    #[default]
    General,
}

/// In-workout reminder kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckpointType {
    /// Loosen or remove the binder and check breathing
    BinderBreak,
    /// Drink water
    Hydration,
    /// Check for pelvic pressure or pain
    PelvicFloorCheck,
    /// Check incisions and scars
    ScarCare,
    /// Generic reminder
    SafetyReminder,
}

/// When a rule's checkpoint fires, measured from workout start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "minutes", rename_all = "snake_case")]
pub enum CheckpointTrigger {
    /// Once, after this many minutes
    AfterMinutes(u32),
    /// Repeatedly, every this many minutes
    EveryMinutes(u32),
}

/// Checkpoint configuration attached to a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointConfig {
    /// Explicit type; derived from the rule category when absent
    #[serde(default)]
    pub checkpoint_type: Option<CheckpointType>,
    /// Placement in the workout timeline
    pub trigger: CheckpointTrigger,
    /// Text shown to the user
    pub message: String,
}

/// A rule the safety engine decided applies to this profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedRule {
    /// Stable rule identifier
    pub rule_id: String,
    /// Rule domain
    #[serde(default)]
    pub category: RuleCategory,
    /// Rule severity
    #[serde(default)]
    pub severity: Severity,
    /// Human-readable explanation
    #[serde(default)]
    pub description: String,
    /// Optional in-workout checkpoint
    #[serde(default)]
    pub checkpoint: Option<CheckpointConfig>,
}

/// Parameter overrides produced by the rules engine.
///
/// Every field is optional; an absent field means "no adjustment".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModifiedParameters {
    /// Percent reduction applied to training volume (sets)
    #[serde(default)]
    pub volume_reduction_percent: Option<f64>,
    /// Extra rest seconds between sets
    #[serde(default)]
    pub rest_seconds_increase: Option<f64>,
    /// Hard cap on sets per exercise
    #[serde(default)]
    pub max_sets: Option<u32>,
    /// Rep range override, `"min-max"` or a bare integer
    #[serde(default)]
    pub rep_range: Option<String>,
    /// Load cap in pounds
    #[serde(default)]
    pub max_weight: Option<f64>,
    /// Multiplier applied to rest
    #[serde(default)]
    pub recovery_multiplier: Option<f64>,
    /// Week-over-week load increase rate
    #[serde(default)]
    pub progressive_overload_rate: Option<f64>,
    /// Cap on total session length
    #[serde(default)]
    pub max_workout_minutes: Option<u32>,
}

/// Output of the external safety rules engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SafetyContext {
    /// Rules that matched the profile
    #[serde(default)]
    pub rules_applied: Vec<AppliedRule>,
    /// Exercises that must never be selected
    #[serde(default)]
    pub excluded_exercise_ids: Vec<String>,
    /// Parameter overrides; absent means no adjustment
    #[serde(default)]
    pub modified_parameters: Option<ModifiedParameters>,
}

impl SafetyContext {
    /// Overrides, or an all-`None` set when the engine supplied none
    #[must_use]
    pub fn parameters(&self) -> ModifiedParameters {
        self.modified_parameters.clone().unwrap_or_default()
    }

    /// Ids of every applied rule
    #[must_use]
    pub fn rule_ids(&self) -> Vec<String> {
        self.rules_applied.iter().map(|r| r.rule_id.clone()).collect()
    }
}
