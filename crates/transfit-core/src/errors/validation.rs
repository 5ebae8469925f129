// ABOUTME: Profile validation errors raised before any plan generation work starts
// ABOUTME: Describes contradictory surgery combinations and dates set in the future
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::SurgeryType;

/// Contradictory or impossible profile data.
///
/// Generation never starts when one of these is present. The message names
/// the exact contradiction so onboarding can point the user at it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Two surgeries that cannot both have been performed
    #[error("surgeries {first} and {second} cannot both be present on one profile")]
    ConflictingSurgeries {
        /// First surgery of the conflicting pair
        first: SurgeryType,
        /// Second surgery of the conflicting pair
        second: SurgeryType,
    },

    /// A surgery dated after today
    #[error("{surgery} surgery date {date} is in the future")]
    FutureSurgeryDate {
        /// Surgery carrying the bad date
        surgery: SurgeryType,
        /// The offending date
        date: NaiveDate,
    },

    /// HRT reported as starting after today
    #[error("HRT start date {date} is in the future")]
    FutureHrtStartDate {
        /// The offending date
        date: NaiveDate,
    },
}
