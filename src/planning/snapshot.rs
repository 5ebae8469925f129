// ABOUTME: Derived per-call view of a profile: surgery timing, HRT duration, and constraints
// ABOUTME: Computed once from the raw profile and today's date, then shared by every stage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

//! Profile snapshot.
//!
//! Temporal fields (weeks post-op, HRT months, recovery phase) depend on
//! today's date, so they are derived here once per generation call instead of
//! being read from the stored profile. The effective constraint set merges
//! user-declared constraints with the ones implied by binding and surgery
//! status.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use super::recovery_phase::{calculate_recovery_phase, surgery_phase, weeks_since};
use crate::models::{
    BindingFrequency, Constraint, FitnessExperience, HrtType, Profile, RecoveryPhase, SurgeryType,
};

/// Timing of one surgery relative to today
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurgeryStatus {
    /// Surgery kind
    pub surgery_type: SurgeryType,
    /// Whole weeks since the surgery date, when dated
    pub weeks_post_op: Option<i64>,
    /// Phase of this surgery; `None` when undated or fully healed
    pub phase: Option<RecoveryPhase>,
}

impl SurgeryStatus {
    /// Still recovering, i.e. dated, not healed, and before maintenance
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase.is_some_and(|p| p < RecoveryPhase::Maintenance)
    }
}

/// Derived view of a profile for one generation call
#[derive(Debug, Clone)]
pub struct ProfileSnapshot<'a> {
    /// The untouched input profile
    pub profile: &'a Profile,
    /// Reference date for every temporal field
    pub today: NaiveDate,
    /// Per-surgery timing
    pub surgeries: Vec<SurgeryStatus>,
    /// Most restrictive recovery phase
    pub recovery_phase: RecoveryPhase,
    /// Whole months on HRT, when a start date is known
    pub hrt_months: Option<i64>,
    /// User constraints plus implied ones
    pub constraints: BTreeSet<Constraint>,
}

impl<'a> ProfileSnapshot<'a> {
    /// Derive the snapshot for `today`
    #[must_use]
    pub fn derive(profile: &'a Profile, today: NaiveDate) -> Self {
        let surgeries: Vec<SurgeryStatus> = profile
            .surgeries
            .iter()
            .map(|s| SurgeryStatus {
                surgery_type: s.surgery_type,
                weeks_post_op: s.date.map(|d| weeks_since(d, today)),
                phase: surgery_phase(s, today),
            })
            .collect();

        let recovery_phase = calculate_recovery_phase(&profile.surgeries, today);

        let hrt_months = if profile.on_hrt {
            profile.hrt_start_date.map(|start| months_between(start, today))
        } else {
            None
        };

        let mut constraints: BTreeSet<Constraint> = profile.constraints.iter().copied().collect();
        if profile.binds_chest {
            constraints.insert(Constraint::BinderAware);
            if profile.binding_frequency == Some(BindingFrequency::Daily) {
                constraints.insert(Constraint::HeavyBinding);
            }
        }
        if surgeries.iter().any(SurgeryStatus::is_active) {
            constraints.insert(Constraint::PostOp);
        }

        Self {
            profile,
            today,
            surgeries,
            recovery_phase,
            hrt_months,
            constraints,
        }
    }

    /// Whether a constraint is in effect
    #[must_use]
    pub fn has_constraint(&self, constraint: Constraint) -> bool {
        self.constraints.contains(&constraint)
    }

    /// Any active bottom surgery
    #[must_use]
    pub fn has_active_bottom_surgery(&self) -> bool {
        self.surgeries
            .iter()
            .any(|s| s.is_active() && s.surgery_type.is_bottom_surgery())
    }

    /// Any bottom surgery on record, healed or not
    #[must_use]
    pub fn has_bottom_surgery(&self) -> bool {
        self.surgeries
            .iter()
            .any(|s| s.surgery_type.is_bottom_surgery())
    }

    /// Active chest surgery with its phase, most restrictive first
    #[must_use]
    pub fn active_chest_surgery_phase(&self) -> Option<RecoveryPhase> {
        self.surgeries
            .iter()
            .filter(|s| s.is_active() && s.surgery_type.is_chest_surgery())
            .filter_map(|s| s.phase)
            .min()
    }

    /// HRT type when the user is on HRT
    #[must_use]
    pub fn active_hrt(&self) -> Option<HrtType> {
        if self.profile.on_hrt {
            self.profile.hrt_type
        } else {
            None
        }
    }

    /// Recorded experience
    #[must_use]
    pub const fn experience(&self) -> Option<FitnessExperience> {
        self.profile.fitness_experience
    }
}

/// Whole calendar months from `start` to `today`, never negative
fn months_between(start: NaiveDate, today: NaiveDate) -> i64 {
    let mut months = i64::from(today.year() - start.year()) * 12
        + i64::from(today.month()) - i64::from(start.month());
    if today.day() < start.day() {
        months -= 1;
    }
    months.max(0)
}
