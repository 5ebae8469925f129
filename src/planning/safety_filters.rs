// ABOUTME: Ordered safety filter cascade over the exercise catalog with a terminal fallback ladder
// ABOUTME: Equipment, difficulty, binding, pelvic floor, recovery phase, and impact/floor stages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

//! # Safety Filter Cascade
//!
//! Stages run in a fixed order, each narrowing the pool produced by the one
//! before it:
//!
//! 1. Equipment
//! 2. Difficulty
//! 3. Binder safety
//! 4. Heavy binding (also reorders lower body first)
//! 5. Pelvic floor
//! 6. Recovery phase gating
//! 7. Impact and floor restrictions
//!
//! Binder, heavy-binding and pelvic-floor stages keep their input when they
//! would empty the pool. If the final pool is still empty, a fallback ladder
//! picks the first non-empty of: equipment + difficulty, equipment only,
//! equipment plus bodyweight, the whole input.
//!
//! The [`hard_safety_gate`] runs before the cascade and is never relaxed by
//! the fallback ladder: rule-engine exclusions and recovery-phase gating.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::classification::{body_region, is_floor_based, is_high_impact};
use super::equipment::{canonical_set, is_bodyweight_only, BODYWEIGHT};
use super::snapshot::ProfileSnapshot;
use crate::models::{Constraint, Difficulty, Exercise, RecoveryPhase};

/// Identifies a cascade stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterStage {
    /// User equipment
    Equipment,
    /// Experience level
    Difficulty,
    /// Binder-aware exercises
    BinderSafety,
    /// Daily binding
    HeavyBinding,
    /// Bottom surgery recovery
    PelvicFloor,
    /// Surgical recovery phase
    RecoveryPhase,
    /// `no_jumping` and `no_floor`
    ImpactFloor,
}

impl fmt::Display for FilterStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Equipment => "equipment",
            Self::Difficulty => "difficulty",
            Self::BinderSafety => "binder_safety",
            Self::HeavyBinding => "heavy_binding",
            Self::PelvicFloor => "pelvic_floor",
            Self::RecoveryPhase => "recovery_phase",
            Self::ImpactFloor => "impact_floor",
        };
        f.write_str(name)
    }
}

/// Fallback used when the cascade emptied the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackTier {
    /// Equipment and difficulty filters only
    EquipmentAndDifficulty,
    /// Equipment filter only
    EquipmentOnly,
    /// Equipment matches plus any bodyweight exercise
    EquipmentPlusBodyweight,
    /// Everything that entered the cascade
    EntireInput,
}

/// Result of running one stage
#[derive(Debug, Clone)]
pub struct StageOutcome<'a> {
    /// Pool after the stage
    pub pool: Vec<&'a Exercise>,
    /// Whether the stage's constraint was in effect
    pub applied: bool,
    /// Whether the stage kept its input because it would have emptied it
    pub fell_back: bool,
}

impl<'a> StageOutcome<'a> {
    fn skipped(pool: Vec<&'a Exercise>) -> Self {
        Self {
            pool,
            applied: false,
            fell_back: false,
        }
    }

    fn filtered(pool: Vec<&'a Exercise>) -> Self {
        Self {
            pool,
            applied: true,
            fell_back: false,
        }
    }

    fn kept_input(pool: Vec<&'a Exercise>) -> Self {
        Self {
            pool,
            applied: true,
            fell_back: true,
        }
    }
}

/// Per-stage counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageReport {
    /// Stage
    pub stage: FilterStage,
    /// Pool size before
    pub input_count: usize,
    /// Pool size after
    pub output_count: usize,
    /// Constraint in effect
    pub applied: bool,
    /// Input kept to avoid an empty pool
    pub fell_back: bool,
}

/// Summary of one cascade run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    /// Exercises entering the cascade
    pub input_count: usize,
    /// Exercises leaving the cascade
    pub output_count: usize,
    /// Stage by stage counts
    pub stages: Vec<StageReport>,
    /// Terminal fallback used, if any
    pub fallback: Option<FallbackTier>,
}

/// Exercises that survived the cascade
#[derive(Debug, Clone)]
pub struct FilteredPool<'a> {
    /// Surviving exercises in cascade order
    pub exercises: Vec<&'a Exercise>,
    /// Diagnostics
    pub report: FilterReport,
}

/// Inputs shared by every stage
struct FilterContext<'s, 'p> {
    snapshot: &'s ProfileSnapshot<'p>,
    user_equipment: BTreeSet<String>,
}

impl<'s, 'p> FilterContext<'s, 'p> {
    fn new(snapshot: &'s ProfileSnapshot<'p>) -> Self {
        Self {
            snapshot,
            user_equipment: canonical_set(&snapshot.profile.equipment),
        }
    }

    fn equipment_matches(&self, exercise: &Exercise) -> bool {
        if is_bodyweight_only(&exercise.equipment) && self.user_equipment.contains(BODYWEIGHT) {
            return true;
        }
        canonical_set(&exercise.equipment)
            .iter()
            .any(|token| self.user_equipment.contains(token))
    }
}

type StageFn = for<'a> fn(&FilterContext<'_, '_>, Vec<&'a Exercise>) -> StageOutcome<'a>;

const STAGES: [(FilterStage, StageFn); 7] = [
    (FilterStage::Equipment, equipment_stage),
    (FilterStage::Difficulty, difficulty_stage),
    (FilterStage::BinderSafety, binder_stage),
    (FilterStage::HeavyBinding, heavy_binding_stage),
    (FilterStage::PelvicFloor, pelvic_floor_stage),
    (FilterStage::RecoveryPhase, recovery_phase_stage),
    (FilterStage::ImpactFloor, impact_floor_stage),
];

fn equipment_stage<'a>(ctx: &FilterContext<'_, '_>, pool: Vec<&'a Exercise>) -> StageOutcome<'a> {
    if ctx.user_equipment.is_empty() {
        return StageOutcome::skipped(pool);
    }
    StageOutcome::filtered(pool.into_iter().filter(|e| ctx.equipment_matches(e)).collect())
}

fn difficulty_stage<'a>(ctx: &FilterContext<'_, '_>, pool: Vec<&'a Exercise>) -> StageOutcome<'a> {
    let Some(experience) = ctx.snapshot.experience() else {
        return StageOutcome::skipped(pool);
    };
    let allowed = Difficulty::allowed_for(experience);
    StageOutcome::filtered(
        pool.into_iter()
            .filter(|e| allowed.contains(&e.difficulty))
            .collect(),
    )
}

fn binder_stage<'a>(ctx: &FilterContext<'_, '_>, pool: Vec<&'a Exercise>) -> StageOutcome<'a> {
    if !ctx.snapshot.has_constraint(Constraint::BinderAware)
        && !ctx.snapshot.has_constraint(Constraint::HeavyBinding)
    {
        return StageOutcome::skipped(pool);
    }
    let safe: Vec<&Exercise> = pool.iter().copied().filter(|e| e.binder_aware).collect();
    if safe.is_empty() {
        StageOutcome::kept_input(pool)
    } else {
        StageOutcome::filtered(safe)
    }
}

fn heavy_binding_stage<'a>(
    ctx: &FilterContext<'_, '_>,
    pool: Vec<&'a Exercise>,
) -> StageOutcome<'a> {
    if !ctx.snapshot.has_constraint(Constraint::HeavyBinding) {
        return StageOutcome::skipped(pool);
    }
    let safe: Vec<&Exercise> = pool
        .iter()
        .copied()
        .filter(|e| e.binder_aware && e.heavy_binding_safe)
        .collect();
    let mut outcome = if safe.is_empty() {
        StageOutcome::kept_input(pool)
    } else {
        StageOutcome::filtered(safe)
    };
    outcome
        .pool
        .sort_by_key(|e| body_region(e).binding_priority());
    outcome
}

fn pelvic_floor_stage<'a>(
    ctx: &FilterContext<'_, '_>,
    pool: Vec<&'a Exercise>,
) -> StageOutcome<'a> {
    if !ctx.snapshot.has_constraint(Constraint::PostOp) || !ctx.snapshot.has_bottom_surgery() {
        return StageOutcome::skipped(pool);
    }
    let safe: Vec<&Exercise> = pool
        .iter()
        .copied()
        .filter(|e| e.pelvic_floor_safe)
        .collect();
    if safe.is_empty() {
        StageOutcome::kept_input(pool)
    } else {
        StageOutcome::filtered(safe)
    }
}

fn recovery_phase_stage<'a>(
    ctx: &FilterContext<'_, '_>,
    pool: Vec<&'a Exercise>,
) -> StageOutcome<'a> {
    let phase = ctx.snapshot.recovery_phase;
    if phase == RecoveryPhase::Maintenance {
        return StageOutcome::skipped(pool);
    }
    StageOutcome::filtered(
        pool.into_iter()
            .filter(|e| safe_in_phase(e, phase))
            .collect(),
    )
}

fn impact_floor_stage<'a>(
    ctx: &FilterContext<'_, '_>,
    pool: Vec<&'a Exercise>,
) -> StageOutcome<'a> {
    let no_jumping = ctx.snapshot.has_constraint(Constraint::NoJumping);
    let no_floor = ctx.snapshot.has_constraint(Constraint::NoFloor);
    if !no_jumping && !no_floor {
        return StageOutcome::skipped(pool);
    }
    StageOutcome::filtered(
        pool.into_iter()
            .filter(|e| !(no_jumping && is_high_impact(e)))
            .filter(|e| !(no_floor && is_floor_based(e)))
            .collect(),
    )
}

/// Whether an exercise is cleared for a recovery phase.
///
/// Outside maintenance, untagged exercises are not cleared.
#[must_use]
pub fn safe_in_phase(exercise: &Exercise, phase: RecoveryPhase) -> bool {
    phase == RecoveryPhase::Maintenance
        || exercise
            .earliest_safe_phase
            .is_some_and(|earliest| earliest <= phase)
}

/// Remove rule-engine exclusions and exercises not cleared for `phase`.
///
/// Runs before the cascade; nothing downstream may reintroduce an exercise
/// removed here.
#[must_use]
pub fn hard_safety_gate<'a>(
    catalog: &'a [Exercise],
    excluded_ids: &[String],
    phase: RecoveryPhase,
) -> Vec<&'a Exercise> {
    let excluded: BTreeSet<&str> = excluded_ids.iter().map(String::as_str).collect();
    catalog
        .iter()
        .filter(|e| !excluded.contains(e.id.as_str()))
        .filter(|e| safe_in_phase(e, phase))
        .collect()
}

/// Run the cascade.
///
/// Never returns an empty pool for a non-empty input.
#[must_use]
pub fn filter_exercises_by_constraints<'a>(
    input: &[&'a Exercise],
    snapshot: &ProfileSnapshot<'_>,
) -> FilteredPool<'a> {
    let ctx = FilterContext::new(snapshot);
    let mut report = FilterReport {
        input_count: input.len(),
        ..FilterReport::default()
    };

    let mut pool = input.to_vec();
    for (stage, run) in STAGES {
        let input_count = pool.len();
        let outcome = run(&ctx, pool);
        report.stages.push(StageReport {
            stage,
            input_count,
            output_count: outcome.pool.len(),
            applied: outcome.applied,
            fell_back: outcome.fell_back,
        });
        pool = outcome.pool;
    }

    if pool.is_empty() && !input.is_empty() {
        let (tier, fallback) = fallback_pool(&ctx, input);
        report.fallback = Some(tier);
        pool = fallback;
    }

    report.output_count = pool.len();
    FilteredPool {
        exercises: pool,
        report,
    }
}

fn fallback_pool<'a>(
    ctx: &FilterContext<'_, '_>,
    input: &[&'a Exercise],
) -> (FallbackTier, Vec<&'a Exercise>) {
    let equipment = equipment_stage(ctx, input.to_vec()).pool;

    let with_difficulty = difficulty_stage(ctx, equipment.clone()).pool;
    if !with_difficulty.is_empty() {
        return (FallbackTier::EquipmentAndDifficulty, with_difficulty);
    }
    if !equipment.is_empty() {
        return (FallbackTier::EquipmentOnly, equipment);
    }

    let plus_bodyweight: Vec<&Exercise> = input
        .iter()
        .copied()
        .filter(|e| is_bodyweight_only(&e.equipment) || ctx.equipment_matches(e))
        .collect();
    if !plus_bodyweight.is_empty() {
        return (FallbackTier::EquipmentPlusBodyweight, plus_bodyweight);
    }

    (FallbackTier::EntireInput, input.to_vec())
}
