// ABOUTME: Default safety rules engine covering chest binding, HRT, and post-operative recovery
// ABOUTME: Emits applied rules with checkpoints, most-restrictive parameter overrides, and exclusions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

//! # Default Safety Rules
//!
//! | Rule                         | Trigger                              | Effect                                   |
//! |------------------------------|--------------------------------------|------------------------------------------|
//! | `binding_break`              | binds chest                          | binder break every 45 min (30 if daily)  |
//! | `heavy_binding_volume`       | binds daily                          | -10% volume, +15 s rest                  |
//! | `hrt_feminizing_hydration`   | estrogen or anti-androgen            | hydration reminder every 20 min          |
//! | `hrt_testosterone_early`     | testosterone, first 6 months         | slower overload, hydration at 30 min     |
//! | `post_op_<surgery>_<phase>`  | active surgery before maintenance    | phase caps on sets, load, session length |
//! | `post_op_chest_load`         | chest surgery in immediate/early     | excludes upper-body loading exercises    |
//!
//! Overrides from several rules merge to the most restrictive value.
//! Exclusions are computed from the catalog the plan generator already
//! fetched, so evaluation itself never fails.

use async_trait::async_trait;
use tracing::debug;

use crate::constants::volume::EARLY_TESTOSTERONE_MONTHS;
use crate::errors::AppResult;
use crate::models::{
    AppliedRule, CheckpointConfig, CheckpointTrigger, CheckpointType, Constraint, Exercise,
    HrtType, ModifiedParameters, RecoveryPhase, RuleCategory, SafetyContext, Severity,
};
use crate::planning::classification::{body_region, BodyRegion};
use crate::planning::{ProfileSnapshot, SurgeryStatus};
use crate::providers::SafetyRulesEngine;

/// Hanging and overhead pulls that load the chest wall
const CHEST_LOADING_PULL_KEYWORDS: [&str; 4] = ["pull-up", "pull up", "chin", "hang"];

/// Phase-specific caps applied while a surgery heals
struct PhaseLimits {
    severity: Severity,
    max_sets: Option<u32>,
    max_weight: Option<f64>,
    recovery_multiplier: f64,
    max_workout_minutes: Option<u32>,
    volume_reduction_percent: Option<f64>,
    trigger: CheckpointTrigger,
}

const fn phase_limits(phase: RecoveryPhase) -> Option<PhaseLimits> {
    match phase {
        RecoveryPhase::Immediate => Some(PhaseLimits {
            severity: Severity::High,
            max_sets: Some(2),
            max_weight: Some(5.0),
            recovery_multiplier: 1.5,
            max_workout_minutes: Some(20),
            volume_reduction_percent: Some(50.0),
            trigger: CheckpointTrigger::EveryMinutes(10),
        }),
        RecoveryPhase::Early => Some(PhaseLimits {
            severity: Severity::High,
            max_sets: Some(2),
            max_weight: Some(10.0),
            recovery_multiplier: 1.3,
            max_workout_minutes: Some(30),
            volume_reduction_percent: Some(30.0),
            trigger: CheckpointTrigger::EveryMinutes(15),
        }),
        RecoveryPhase::Mid => Some(PhaseLimits {
            severity: Severity::Medium,
            max_sets: Some(3),
            max_weight: Some(25.0),
            recovery_multiplier: 1.15,
            max_workout_minutes: Some(45),
            volume_reduction_percent: Some(15.0),
            trigger: CheckpointTrigger::EveryMinutes(20),
        }),
        RecoveryPhase::Late => Some(PhaseLimits {
            severity: Severity::Low,
            max_sets: Some(4),
            max_weight: None,
            recovery_multiplier: 1.1,
            max_workout_minutes: None,
            volume_reduction_percent: None,
            trigger: CheckpointTrigger::AfterMinutes(20),
        }),
        RecoveryPhase::Maintenance => None,
    }
}

fn min_option<T: PartialOrd + Copy>(a: Option<T>, b: Option<T>) -> Option<T> {
    match (a, b) {
        (Some(x), Some(y)) => Some(if y < x { y } else { x }),
        (x, None) => x,
        (None, y) => y,
    }
}

fn max_option<T: PartialOrd + Copy>(a: Option<T>, b: Option<T>) -> Option<T> {
    match (a, b) {
        (Some(x), Some(y)) => Some(if y > x { y } else { x }),
        (x, None) => x,
        (None, y) => y,
    }
}

/// Merge `other` into `base`, keeping the most restrictive value of each field
fn merge_restrictive(base: &mut ModifiedParameters, other: &ModifiedParameters) {
    base.volume_reduction_percent =
        max_option(base.volume_reduction_percent, other.volume_reduction_percent);
    base.rest_seconds_increase =
        max_option(base.rest_seconds_increase, other.rest_seconds_increase);
    base.max_sets = min_option(base.max_sets, other.max_sets);
    base.max_weight = min_option(base.max_weight, other.max_weight);
    base.recovery_multiplier = max_option(base.recovery_multiplier, other.recovery_multiplier);
    base.progressive_overload_rate =
        min_option(base.progressive_overload_rate, other.progressive_overload_rate);
    base.max_workout_minutes = min_option(base.max_workout_minutes, other.max_workout_minutes);
    if base.rep_range.is_none() {
        base.rep_range.clone_from(&other.rep_range);
    }
}

/// Accumulates rules while evaluating one profile
#[derive(Default)]
struct ContextBuilder {
    rules: Vec<AppliedRule>,
    excluded: Vec<String>,
    parameters: Option<ModifiedParameters>,
}

impl ContextBuilder {
    fn rule(
        &mut self,
        rule_id: impl Into<String>,
        category: RuleCategory,
        severity: Severity,
        description: impl Into<String>,
        checkpoint: Option<CheckpointConfig>,
    ) {
        self.rules.push(AppliedRule {
            rule_id: rule_id.into(),
            category,
            severity,
            description: description.into(),
            checkpoint,
        });
    }

    fn parameters(&mut self, params: &ModifiedParameters) {
        merge_restrictive(self.parameters.get_or_insert_with(ModifiedParameters::default), params);
    }

    fn exclude(&mut self, ids: impl IntoIterator<Item = String>) {
        for id in ids {
            if !self.excluded.contains(&id) {
                self.excluded.push(id);
            }
        }
    }

    fn build(self) -> SafetyContext {
        SafetyContext {
            rules_applied: self.rules,
            excluded_exercise_ids: self.excluded,
            modified_parameters: self.parameters,
        }
    }
}

/// Built-in rules for binding, HRT, and surgical recovery
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSafetyRulesEngine;

impl DefaultSafetyRulesEngine {
    /// Engine with the built-in rule set
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn binding_rules(snapshot: &ProfileSnapshot<'_>, builder: &mut ContextBuilder) {
        if !snapshot.profile.binds_chest {
            return;
        }
        let heavy = snapshot.has_constraint(Constraint::HeavyBinding);
        let (severity, interval) = if heavy {
            (Severity::Medium, 30)
        } else {
            (Severity::Low, 45)
        };
        builder.rule(
            "binding_break",
            RuleCategory::Binding,
            severity,
            "Chest binding restricts breathing; schedule binder breaks",
            Some(CheckpointConfig {
                checkpoint_type: Some(CheckpointType::BinderBreak),
                trigger: CheckpointTrigger::EveryMinutes(interval),
                message: "Binder check: pause, take a few deep breaths, and loosen or remove your binder if breathing feels restricted".to_owned(),
            }),
        );

        if heavy {
            builder.rule(
                "heavy_binding_volume",
                RuleCategory::Binding,
                Severity::Medium,
                "Daily binding: reduced volume and longer rest between sets",
                None,
            );
            builder.parameters(&ModifiedParameters {
                volume_reduction_percent: Some(10.0),
                rest_seconds_increase: Some(15.0),
                ..ModifiedParameters::default()
            });
        }
    }

    fn hrt_rules(snapshot: &ProfileSnapshot<'_>, builder: &mut ContextBuilder) {
        let Some(hrt) = snapshot.active_hrt() else {
            return;
        };
        if hrt.is_feminizing() {
            builder.rule(
                "hrt_feminizing_hydration",
                RuleCategory::Hrt,
                Severity::Low,
                "Anti-androgens can increase fluid loss; regular hydration reminders",
                Some(CheckpointConfig {
                    checkpoint_type: None,
                    trigger: CheckpointTrigger::EveryMinutes(20),
                    message: "Hydration check: take a few sips of water".to_owned(),
                }),
            );
        } else if hrt == HrtType::Testosterone
            && snapshot
                .hrt_months
                .is_some_and(|m| m < EARLY_TESTOSTERONE_MONTHS)
        {
            builder.rule(
                "hrt_testosterone_early",
                RuleCategory::Hrt,
                Severity::Info,
                "Early testosterone: strength rises faster than tendons adapt; progress gradually",
                Some(CheckpointConfig {
                    checkpoint_type: None,
                    trigger: CheckpointTrigger::AfterMinutes(30),
                    message: "Hydration check: drink some water before your next set".to_owned(),
                }),
            );
            builder.parameters(&ModifiedParameters {
                progressive_overload_rate: Some(0.05),
                ..ModifiedParameters::default()
            });
        }
    }

    fn post_op_rules(snapshot: &ProfileSnapshot<'_>, builder: &mut ContextBuilder) {
        for status in snapshot.surgeries.iter().filter(|s| s.is_active()) {
            let Some(phase) = status.phase else {
                continue;
            };
            let Some(limits) = phase_limits(phase) else {
                continue;
            };
            builder.rule(
                format!("post_op_{}_{phase}", status.surgery_type),
                RuleCategory::PostOperative,
                limits.severity,
                format!("{} recovery, {phase} phase", status.surgery_type),
                Some(CheckpointConfig {
                    checkpoint_type: None,
                    trigger: limits.trigger,
                    message: post_op_message(status),
                }),
            );
            builder.parameters(&ModifiedParameters {
                volume_reduction_percent: limits.volume_reduction_percent,
                max_sets: limits.max_sets,
                max_weight: limits.max_weight,
                recovery_multiplier: Some(limits.recovery_multiplier),
                max_workout_minutes: limits.max_workout_minutes,
                ..ModifiedParameters::default()
            });
        }
    }

    fn chest_load_exclusions(
        snapshot: &ProfileSnapshot<'_>,
        catalog: &[Exercise],
        builder: &mut ContextBuilder,
    ) {
        let Some(phase) = snapshot.active_chest_surgery_phase() else {
            return;
        };
        if phase > RecoveryPhase::Early {
            return;
        }

        let excluded: Vec<String> = catalog
            .iter()
            .filter(|e| loads_chest(e))
            .map(|e| e.id.clone())
            .collect();
        debug!(count = excluded.len(), %phase, "excluding chest-loading exercises");

        builder.rule(
            "post_op_chest_load",
            RuleCategory::PostOperative,
            Severity::High,
            "No pressing or hanging while chest incisions heal",
            None,
        );
        builder.exclude(excluded);
    }
}

fn post_op_message(status: &SurgeryStatus) -> String {
    if status.surgery_type.is_bottom_surgery() {
        "Pelvic floor check: relax your pelvic floor, breathe out on effort, and stop if you feel pressure or pain".to_owned()
    } else {
        "Scar check: stop if you feel pulling, burning, or swelling around your incisions".to_owned()
    }
}

fn loads_chest(exercise: &Exercise) -> bool {
    if body_region(exercise) == BodyRegion::UpperPush {
        return true;
    }
    let text = exercise.search_text();
    CHEST_LOADING_PULL_KEYWORDS.iter().any(|k| text.contains(k))
}

#[async_trait]
impl SafetyRulesEngine for DefaultSafetyRulesEngine {
    async fn evaluate(
        &self,
        snapshot: &ProfileSnapshot<'_>,
        catalog: &[Exercise],
    ) -> AppResult<SafetyContext> {
        let mut builder = ContextBuilder::default();
        Self::binding_rules(snapshot, &mut builder);
        Self::hrt_rules(snapshot, &mut builder);
        Self::post_op_rules(snapshot, &mut builder);
        Self::chest_load_exclusions(snapshot, catalog, &mut builder);
        Ok(builder.build())
    }
}
