// ABOUTME: Tests for planning configuration defaults, environment overrides, and validation
// ABOUTME: Environment-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use std::env;

use serial_test::serial;
use transfit::config::{ConfigError, PlanningConfig, SelectionConfig};
use transfit::errors::{AppError, ErrorCode};
use transfit::models::WorkoutDuration;

const OVERRIDE_VARS: [&str; 9] = [
    "TRANSFIT_SCORING_JITTER_MAX",
    "TRANSFIT_VARIETY_WINDOW_DAYS",
    "TRANSFIT_VARIETY_MIN_POOL",
    "TRANSFIT_VARIETY_MAX_TRACKED",
    "TRANSFIT_EXERCISES_30",
    "TRANSFIT_EXERCISES_45",
    "TRANSFIT_EXERCISES_60",
    "TRANSFIT_EXERCISES_90",
    "TRANSFIT_RANDOM_SEED",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_defaults() {
    let config = PlanningConfig::default();
    assert_eq!(config.scoring.primary_goal_weight, 7.0);
    assert_eq!(config.scoring.secondary_goal_weight, 3.0);
    assert_eq!(config.scoring.first_region_weight, 25.0);
    assert_eq!(config.scoring.second_region_weight, 15.0);
    assert_eq!(config.scoring.avoid_region_penalty, 25.0);
    assert_eq!(config.scoring.jitter_max, 2.0);
    assert_eq!(config.scoring.binding_priority_weight, 1.5);
    assert_eq!(config.variety.window_days, 3);
    assert_eq!(config.variety.min_pool_after_filter, 10);
    assert_eq!(config.variety.max_tracked_ids, 20);
    assert!(config.random_seed.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_selection_counts() {
    let selection = SelectionConfig::default();
    let counts: Vec<usize> = WorkoutDuration::ALL
        .into_iter()
        .map(|d| selection.count_for(d))
        .collect();
    assert_eq!(counts, vec![5, 6, 10, 15]);
}

#[test]
fn test_with_seed() {
    let config = PlanningConfig::default().with_seed(99);
    assert_eq!(config.random_seed, Some(99));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validation_rejects_bad_values() {
    let mut config = PlanningConfig::default();
    config.scoring.jitter_max = -1.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = PlanningConfig::default();
    config.scoring.primary_goal_weight = f64::NAN;
    assert!(config.validate().is_err());

    let mut config = PlanningConfig::default();
    config.variety.window_days = 0;
    assert!(config.validate().is_err());

    let mut config = PlanningConfig::default();
    config.variety.max_tracked_ids = 0;
    assert!(config.validate().is_err());

    let mut config = PlanningConfig::default();
    config.selection.exercises_30 = 0;
    assert!(config.validate().is_err());

    let mut config = PlanningConfig::default();
    config.selection.exercises_60 = 20;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_zero_jitter_is_valid() {
    let mut config = PlanningConfig::default();
    config.scoring.jitter_max = 0.0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_error_converts_to_app_error() {
    let err: AppError = ConfigError::ValueOutOfRange("variety window must be at least one day").into();
    assert_eq!(err.code, ErrorCode::ConfigError);
    assert!(err.message.contains("variety window"));
}

// ============================================================================
// Environment Overrides
// ============================================================================

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_overrides();
    let config = PlanningConfig::load().unwrap();
    assert_eq!(config.selection.exercises_45, 6);
    assert!(config.random_seed.is_none());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_overrides();
    env::set_var("TRANSFIT_SCORING_JITTER_MAX", "0.5");
    env::set_var("TRANSFIT_VARIETY_WINDOW_DAYS", "5");
    env::set_var("TRANSFIT_VARIETY_MAX_TRACKED", "30");
    env::set_var("TRANSFIT_EXERCISES_90", "18");
    env::set_var("TRANSFIT_RANDOM_SEED", "1234");

    let config = PlanningConfig::load().unwrap();
    assert_eq!(config.scoring.jitter_max, 0.5);
    assert_eq!(config.variety.window_days, 5);
    assert_eq!(config.variety.max_tracked_ids, 30);
    assert_eq!(config.selection.exercises_90, 18);
    assert_eq!(config.random_seed, Some(1234));

    clear_overrides();
}

#[test]
#[serial]
fn test_unparsable_override_is_rejected() {
    clear_overrides();
    env::set_var("TRANSFIT_EXERCISES_30", "five");
    let err = PlanningConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("TRANSFIT_EXERCISES_30"));

    clear_overrides();
    env::set_var("TRANSFIT_RANDOM_SEED", "-3");
    assert!(PlanningConfig::load().is_err());

    clear_overrides();
}

#[test]
#[serial]
fn test_override_failing_validation_is_rejected() {
    clear_overrides();
    env::set_var("TRANSFIT_EXERCISES_45", "2");
    let err = PlanningConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRange(_)));
    clear_overrides();
}
