// ABOUTME: Post-surgical recovery phase calculation from surgery dates
// ABOUTME: Returns the most restrictive phase across all surgeries that are not fully healed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

//! Recovery phase calculator.
//!
//! | Weeks since surgery | Phase         |
//! |---------------------|---------------|
//! | 0 to 2              | `immediate`   |
//! | 2 to 6              | `early`       |
//! | 6 to 12             | `mid`         |
//! | 12 to 24            | `late`        |
//! | 24 and later        | `maintenance` |
//!
//! Lower bounds are inclusive. The phase is a pure function of `today` and is
//! recomputed on every generation call; stored `weeks_post_op` values are
//! never trusted.

use chrono::NaiveDate;

use crate::constants::recovery::{
    EARLY_PHASE_START_WEEKS, LATE_PHASE_START_WEEKS, MAINTENANCE_START_WEEKS,
    MID_PHASE_START_WEEKS,
};
use crate::models::{RecoveryPhase, Surgery};

/// Whole weeks elapsed from `date` to `today`, negative for future dates
#[must_use]
pub fn weeks_since(date: NaiveDate, today: NaiveDate) -> i64 {
    (today - date).num_weeks()
}

/// Phase for a number of whole weeks since surgery
#[must_use]
pub const fn phase_for_weeks(weeks: i64) -> RecoveryPhase {
    if weeks < EARLY_PHASE_START_WEEKS {
        RecoveryPhase::Immediate
    } else if weeks < MID_PHASE_START_WEEKS {
        RecoveryPhase::Early
    } else if weeks < LATE_PHASE_START_WEEKS {
        RecoveryPhase::Mid
    } else if weeks < MAINTENANCE_START_WEEKS {
        RecoveryPhase::Late
    } else {
        RecoveryPhase::Maintenance
    }
}

/// Phase of a single surgery, `None` when it has no date or is fully healed
#[must_use]
pub fn surgery_phase(surgery: &Surgery, today: NaiveDate) -> Option<RecoveryPhase> {
    if surgery.fully_healed {
        return None;
    }
    surgery
        .date
        .map(|date| phase_for_weeks(weeks_since(date, today)))
}

/// Most restrictive recovery phase across all active surgeries.
///
/// Surgeries without a date or marked fully healed are ignored; with none
/// left the user is in `maintenance`.
#[must_use]
pub fn calculate_recovery_phase(surgeries: &[Surgery], today: NaiveDate) -> RecoveryPhase {
    surgeries
        .iter()
        .filter_map(|s| surgery_phase(s, today))
        .min()
        .unwrap_or(RecoveryPhase::Maintenance)
}
