// ABOUTME: Planning constants shared by the plan generator and its tests
// ABOUTME: Recovery boundaries, scoring weights, prescription clamps, and variety limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

//! Planning constants organized by domain.
//!
//! All numbers here are heuristic, table-driven estimates rather than
//! physiological models. Values that operators may want to tune live in the
//! engine's `PlanningConfig`; the constants below are its defaults or hard
//! safety bounds that configuration cannot relax.

/// Post-surgical recovery phase boundaries in whole weeks since surgery
pub mod recovery {
    /// Weeks before the early phase starts (immediate is `[0, 2)`)
    pub const EARLY_PHASE_START_WEEKS: i64 = 2;

    /// Weeks before the mid phase starts (early is `[2, 6)`)
    pub const MID_PHASE_START_WEEKS: i64 = 6;

    /// Weeks before the late phase starts (mid is `[6, 12)`)
    pub const LATE_PHASE_START_WEEKS: i64 = 12;

    /// Weeks before maintenance (late is `[12, 24)`)
    pub const MAINTENANCE_START_WEEKS: i64 = 24;
}

/// Exercise scoring weights
pub mod scoring {
    /// Tag matches the primary goal
    pub const PRIMARY_GOAL_WEIGHT: f64 = 7.0;

    /// Tag matches the secondary goal
    pub const SECONDARY_GOAL_WEIGHT: f64 = 3.0;

    /// Matches the first preferred body-focus region
    pub const FIRST_PREFERRED_REGION_WEIGHT: f64 = 25.0;

    /// Matches the second preferred body-focus region
    pub const SECOND_PREFERRED_REGION_WEIGHT: f64 = 15.0;

    /// Penalty per matched soft-avoid region
    pub const AVOID_REGION_PENALTY: f64 = 25.0;

    /// Upper bound (exclusive) of the random tie-breaking jitter
    pub const JITTER_MAX: f64 = 2.0;

    /// Heavy binders: bonus per step a region sits below upper body in
    /// binding priority (full body one step, lower body and core two)
    pub const BINDING_PRIORITY_WEIGHT: f64 = 1.5;

    /// Goal weighting percentage for the primary goal when a secondary exists
    pub const PRIMARY_GOAL_SHARE_PERCENT: u8 = 70;

    /// Goal weighting percentage for the secondary goal
    pub const SECONDARY_GOAL_SHARE_PERCENT: u8 = 30;
}

/// Cross-day variety tracking
pub mod variety {
    /// Days an exercise stays excluded from reselection
    pub const VARIETY_WINDOW_DAYS: usize = 3;

    /// Below this many candidates the recency filter is skipped for the day
    pub const MIN_POOL_AFTER_VARIETY: usize = 10;

    /// Maximum ids kept in the rolling used-exercise set
    pub const MAX_TRACKED_EXERCISE_IDS: usize = 20;
}

/// Volume adjustment multipliers and safety clamps
pub mod volume {
    /// Beginner sets multiplier
    pub const BEGINNER_SETS_MULTIPLIER: f64 = 0.85;

    /// Beginner rest multiplier
    pub const BEGINNER_REST_MULTIPLIER: f64 = 1.2;

    /// Advanced sets multiplier
    pub const ADVANCED_SETS_MULTIPLIER: f64 = 1.15;

    /// Advanced rest multiplier
    pub const ADVANCED_REST_MULTIPLIER: f64 = 0.9;

    /// Extra reps prescribed to advanced trainees
    pub const ADVANCED_REPS_BONUS: i32 = 2;

    /// Rest seconds that one full unit of rest multiplier represents
    pub const BASELINE_REST_SECONDS: f64 = 60.0;

    /// Floor on the composed sets multiplier
    pub const MIN_SETS_MULTIPLIER: f64 = 0.5;

    /// Floor on the composed rest multiplier
    pub const MIN_REST_MULTIPLIER: f64 = 0.7;

    /// Ceiling on the composed rest multiplier
    pub const MAX_REST_MULTIPLIER: f64 = 2.0;

    /// Template multiplier for estrogen-based or anti-androgen HRT
    pub const FEMINIZING_HRT_TEMPLATE_MULTIPLIER: f64 = 0.9;

    /// Template multiplier during the first months of testosterone
    pub const EARLY_TESTOSTERONE_TEMPLATE_MULTIPLIER: f64 = 0.95;

    /// Months of testosterone treated as the early adaptation window
    pub const EARLY_TESTOSTERONE_MONTHS: i64 = 6;
}

/// Per-exercise prescription bounds
pub mod prescription {
    /// Minimum sets for any prescribed exercise
    pub const MIN_SETS: u32 = 2;

    /// Maximum sets for any prescribed exercise
    pub const MAX_SETS: u32 = 5;

    /// Minimum reps
    pub const MIN_REPS: u32 = 5;

    /// Maximum reps
    pub const MAX_REPS: u32 = 20;

    /// Minimum rest between sets (seconds)
    pub const MIN_REST_SECONDS: u32 = 10;

    /// Maximum rest between sets (seconds)
    pub const MAX_REST_SECONDS: u32 = 120;

    /// Leading positions that receive one extra base set
    pub const PRIORITY_POSITIONS: usize = 3;

    /// Base reps for strength-focused goals
    pub const STRENGTH_BASE_REPS: i32 = 6;

    /// Base reps for endurance-focused goals
    pub const ENDURANCE_BASE_REPS: i32 = 15;

    /// Base reps for hypertrophy-focused goals
    pub const HYPERTROPHY_BASE_REPS: i32 = 12;

    /// Base reps for every other goal
    pub const DEFAULT_BASE_REPS: i32 = 10;
}

/// Workout timeline estimation
pub mod timeline {
    /// Seconds of work attributed to a single rep
    pub const SECONDS_PER_REP: u32 = 3;
}
