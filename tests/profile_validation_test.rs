// ABOUTME: Unit tests for profile validation and its conversion into engine errors
// ABOUTME: Validates conflicting surgeries, future dates, and the resulting error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{base_profile, days_after, days_before, monday, surgery};
use transfit::errors::{AppError, ErrorCode, ValidationError};
use transfit::models::{HrtType, SurgeryType};
use transfit::planning::validate_profile;

#[test]
fn test_valid_profile_passes() {
    let mut profile = base_profile();
    profile
        .surgeries
        .push(surgery(SurgeryType::Vaginoplasty, days_before(monday(), 90)));
    profile
        .surgeries
        .push(surgery(SurgeryType::FacialFeminization, monday()));
    profile.on_hrt = true;
    profile.hrt_type = Some(HrtType::Estrogen);
    profile.hrt_start_date = Some(monday());

    assert!(validate_profile(&profile, monday()).is_ok());
}

#[test]
fn test_conflicting_bottom_surgeries() {
    let mut profile = base_profile();
    profile
        .surgeries
        .push(surgery(SurgeryType::Metoidioplasty, days_before(monday(), 300)));
    profile
        .surgeries
        .push(surgery(SurgeryType::Vulvoplasty, days_before(monday(), 100)));

    let err = validate_profile(&profile, monday()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::ConflictingSurgeries {
            first: SurgeryType::Vulvoplasty,
            second: SurgeryType::Metoidioplasty,
        }
    );
    assert!(err.to_string().contains("vulvoplasty"));
}

#[test]
fn test_future_surgery_date() {
    let mut profile = base_profile();
    let next_week = days_after(monday(), 7);
    profile
        .surgeries
        .push(surgery(SurgeryType::TopSurgery, next_week));

    let err = validate_profile(&profile, monday()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::FutureSurgeryDate {
            surgery: SurgeryType::TopSurgery,
            date: next_week,
        }
    );
}

#[test]
fn test_future_hrt_start_rejected_even_when_paused() {
    let mut profile = base_profile();
    profile.hrt_start_date = Some(days_after(monday(), 1));
    let err = validate_profile(&profile, monday()).unwrap_err();
    assert!(matches!(err, ValidationError::FutureHrtStartDate { .. }));

    profile.on_hrt = true;
    let err = validate_profile(&profile, monday()).unwrap_err();
    assert!(matches!(err, ValidationError::FutureHrtStartDate { .. }));

    profile.hrt_start_date = Some(monday());
    assert!(validate_profile(&profile, monday()).is_ok());
}

#[test]
fn test_validation_error_converts_to_invalid_input() {
    let err: AppError = ValidationError::FutureHrtStartDate {
        date: days_after(monday(), 3),
    }
    .into();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.code.is_client_error());
    assert!(err.to_string().contains("2025-06-05"));
    assert!(err.source.is_some());
}
