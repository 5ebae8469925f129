// ABOUTME: Profile validation run before any plan generation work
// ABOUTME: Rejects contradictory surgery combinations and surgery or HRT dates in the future
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

use chrono::NaiveDate;

use crate::errors::ValidationError;
use crate::models::{Profile, SurgeryType};

const FEMINIZING_BOTTOM: [SurgeryType; 2] = [SurgeryType::Vaginoplasty, SurgeryType::Vulvoplasty];
const MASCULINIZING_BOTTOM: [SurgeryType; 2] =
    [SurgeryType::Phalloplasty, SurgeryType::Metoidioplasty];

/// Validate a profile against `today`.
///
/// # Errors
///
/// Returns the first contradiction found: conflicting bottom surgeries, a
/// surgery dated after `today`, or an HRT start date after `today`.
pub fn validate_profile(profile: &Profile, today: NaiveDate) -> Result<(), ValidationError> {
    let first = profile
        .surgeries
        .iter()
        .map(|s| s.surgery_type)
        .find(|t| FEMINIZING_BOTTOM.contains(t));
    let second = profile
        .surgeries
        .iter()
        .map(|s| s.surgery_type)
        .find(|t| MASCULINIZING_BOTTOM.contains(t));
    if let (Some(first), Some(second)) = (first, second) {
        return Err(ValidationError::ConflictingSurgeries { first, second });
    }

    for surgery in &profile.surgeries {
        if let Some(date) = surgery.date {
            if date > today {
                return Err(ValidationError::FutureSurgeryDate {
                    surgery: surgery.surgery_type,
                    date,
                });
            }
        }
    }

    if let Some(date) = profile.hrt_start_date {
        if date > today {
            return Err(ValidationError::FutureHrtStartDate { date });
        }
    }

    Ok(())
}
