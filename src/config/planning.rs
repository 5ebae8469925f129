// ABOUTME: Plan generation configuration: scoring weights, variety tracking, and selection sizes
// ABOUTME: Loaded from defaults plus TRANSFIT_* environment overrides, validated once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

//! Planning Configuration
//!
//! Tunable knobs of the plan generator. Hard safety bounds (prescription
//! clamps, volume multiplier floors) are constants and deliberately not
//! configurable.

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ConfigError;
use crate::constants::{scoring, variety};
use crate::models::WorkoutDuration;

/// Global configuration singleton
static PLANNING_CONFIG: OnceLock<PlanningConfig> = OnceLock::new();

/// Weights used by the exercise scorer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Tag matches primary goal
    pub primary_goal_weight: f64,
    /// Tag matches secondary goal
    pub secondary_goal_weight: f64,
    /// Matches the first preferred region
    pub first_region_weight: f64,
    /// Matches the second preferred region
    pub second_region_weight: f64,
    /// Penalty per matched soft-avoid region
    pub avoid_region_penalty: f64,
    /// Jitter upper bound (exclusive); zero disables jitter
    pub jitter_max: f64,
    /// Heavy binding bonus per binding priority step
    pub binding_priority_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            primary_goal_weight: scoring::PRIMARY_GOAL_WEIGHT,
            secondary_goal_weight: scoring::SECONDARY_GOAL_WEIGHT,
            first_region_weight: scoring::FIRST_PREFERRED_REGION_WEIGHT,
            second_region_weight: scoring::SECOND_PREFERRED_REGION_WEIGHT,
            avoid_region_penalty: scoring::AVOID_REGION_PENALTY,
            jitter_max: scoring::JITTER_MAX,
            binding_priority_weight: scoring::BINDING_PRIORITY_WEIGHT,
        }
    }
}

/// Cross-day variety tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VarietyConfig {
    /// Days before the rolling set starts being truncated
    pub window_days: usize,
    /// Skip the recency filter when fewer candidates would remain
    pub min_pool_after_filter: usize,
    /// Size the rolling used-exercise set is truncated to
    pub max_tracked_ids: usize,
}

impl Default for VarietyConfig {
    fn default() -> Self {
        Self {
            window_days: variety::VARIETY_WINDOW_DAYS,
            min_pool_after_filter: variety::MIN_POOL_AFTER_VARIETY,
            max_tracked_ids: variety::MAX_TRACKED_EXERCISE_IDS,
        }
    }
}

/// Exercises selected per duration variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// 30 minute workouts
    pub exercises_30: usize,
    /// 45 minute workouts
    pub exercises_45: usize,
    /// 60 minute workouts
    pub exercises_60: usize,
    /// 90 minute workouts
    pub exercises_90: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            exercises_30: 5,
            exercises_45: 6,
            exercises_60: 10,
            exercises_90: 15,
        }
    }
}

impl SelectionConfig {
    /// Number of exercises for a duration
    #[must_use]
    pub const fn count_for(&self, duration: WorkoutDuration) -> usize {
        match duration {
            WorkoutDuration::Thirty => self.exercises_30,
            WorkoutDuration::FortyFive => self.exercises_45,
            WorkoutDuration::Sixty => self.exercises_60,
            WorkoutDuration::Ninety => self.exercises_90,
        }
    }
}

/// Main planning configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Exercise scoring weights
    pub scoring: ScoringConfig,
    /// Variety tracking
    pub variety: VarietyConfig,
    /// Exercises per duration
    pub selection: SelectionConfig,
    /// Seed for the scoring jitter; `None` seeds from entropy
    pub random_seed: Option<u64>,
}

impl PlanningConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planning config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Same configuration with a fixed jitter seed
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent value
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.scoring;
        if [
            s.primary_goal_weight,
            s.secondary_goal_weight,
            s.first_region_weight,
            s.second_region_weight,
            s.avoid_region_penalty,
            s.jitter_max,
            s.binding_priority_weight,
        ]
        .iter()
        .any(|w| !w.is_finite() || *w < 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "scoring weights must be finite and non-negative",
            ));
        }

        if self.variety.window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "variety window must be at least one day",
            ));
        }
        if self.variety.max_tracked_ids == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "variety max_tracked_ids must be at least 1",
            ));
        }

        let sel = &self.selection;
        if sel.exercises_30 == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "every duration must select at least one exercise",
            ));
        }
        if sel.exercises_30 > sel.exercises_45
            || sel.exercises_45 > sel.exercises_60
            || sel.exercises_60 > sel.exercises_90
        {
            return Err(ConfigError::InvalidRange(
                "exercise counts must not decrease with duration",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "TRANSFIT_SCORING_JITTER_MAX",
            &mut self.scoring.jitter_max,
        )?;
        Self::apply_env_var(
            "TRANSFIT_VARIETY_WINDOW_DAYS",
            &mut self.variety.window_days,
        )?;
        Self::apply_env_var(
            "TRANSFIT_VARIETY_MIN_POOL",
            &mut self.variety.min_pool_after_filter,
        )?;
        Self::apply_env_var(
            "TRANSFIT_VARIETY_MAX_TRACKED",
            &mut self.variety.max_tracked_ids,
        )?;
        Self::apply_env_var("TRANSFIT_EXERCISES_30", &mut self.selection.exercises_30)?;
        Self::apply_env_var("TRANSFIT_EXERCISES_45", &mut self.selection.exercises_45)?;
        Self::apply_env_var("TRANSFIT_EXERCISES_60", &mut self.selection.exercises_60)?;
        Self::apply_env_var("TRANSFIT_EXERCISES_90", &mut self.selection.exercises_90)?;

        if let Ok(seed) = env::var("TRANSFIT_RANDOM_SEED") {
            self.random_seed = Some(
                seed.parse()
                    .map_err(|_| ConfigError::Parse("Invalid TRANSFIT_RANDOM_SEED".to_owned()))?,
            );
        }

        Ok(self)
    }
}
