// ABOUTME: Exercise scoring against weighted goals and body-focus preferences, plus selection
// ABOUTME: Tracks recently used exercises across days to keep consecutive workouts varied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

//! # Exercise Scoring & Selection
//!
//! Score = primary goal match + secondary goal match + preferred region
//! matches - avoided region matches + jitter. Heavy binders also get a
//! bonus for lower body and core work so chest compression stays low. The
//! jitter comes from a caller supplied RNG so seeded runs are reproducible.
//!
//! Each workout day is scored once. Every duration variant then takes a
//! prefix of the same ranking, so shorter variants are subsets of longer
//! ones.

use std::collections::HashSet;

use rand::Rng;

use super::classification::{body_region, BodyRegion};
use crate::config::{ScoringConfig, VarietyConfig};
use crate::models::{DayFocus, Exercise, Goal, Profile};

/// An exercise with its score for the current day
#[derive(Debug, Clone, Copy)]
pub struct ScoredExercise<'a> {
    /// Catalog entry
    pub exercise: &'a Exercise,
    /// Score including jitter
    pub score: f64,
}

/// Scores exercises for one profile
#[derive(Debug, Clone)]
pub struct ExerciseScorer<'c> {
    config: &'c ScoringConfig,
    primary_goal: Goal,
    secondary_goal: Option<Goal>,
    prefer: Vec<String>,
    avoid: Vec<String>,
    binding_priority: bool,
}

impl<'c> ExerciseScorer<'c> {
    /// Build a scorer from the profile's goals and body-focus lists
    #[must_use]
    pub fn new(profile: &Profile, config: &'c ScoringConfig) -> Self {
        let normalize = |list: &[String]| -> Vec<String> {
            list.iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect()
        };
        Self {
            config,
            primary_goal: profile.primary_goal,
            secondary_goal: profile.secondary_goal,
            prefer: normalize(&profile.body_focus_prefer),
            avoid: normalize(&profile.body_focus_soft_avoid),
            binding_priority: false,
        }
    }

    /// Favor lower body and core over upper body (heavy binding)
    #[must_use]
    pub fn with_binding_priority(mut self, enabled: bool) -> Self {
        self.binding_priority = enabled;
        self
    }

    /// Score without jitter
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn base_score(&self, exercise: &Exercise) -> f64 {
        let mut score = 0.0;

        if exercise.has_tag(self.primary_goal.as_tag()) {
            score += self.config.primary_goal_weight;
        }
        if self
            .secondary_goal
            .is_some_and(|goal| exercise.has_tag(goal.as_tag()))
        {
            score += self.config.secondary_goal_weight;
        }

        let region_text = region_text(exercise);
        let matches = |region: &String| region_text.iter().any(|t| t.contains(region.as_str()));

        if self.prefer.first().is_some_and(matches) {
            score += self.config.first_region_weight;
        }
        if self.prefer.get(1).is_some_and(matches) {
            score += self.config.second_region_weight;
        }

        let avoided = self.avoid.iter().filter(|r| matches(*r)).count();
        score -= self.config.avoid_region_penalty * avoided as f64;

        if self.binding_priority {
            let steps = BodyRegion::UpperPush.binding_priority()
                - body_region(exercise).binding_priority();
            score += self.config.binding_priority_weight * f64::from(steps);
        }

        score
    }

    /// Score with jitter in `[0, jitter_max)`
    pub fn score<R: Rng>(&self, exercise: &Exercise, rng: &mut R) -> f64 {
        let jitter = if self.config.jitter_max > 0.0 {
            rng.gen_range(0.0..self.config.jitter_max)
        } else {
            0.0
        };
        self.base_score(exercise) + jitter
    }

    /// Score every exercise and sort by descending score; ties keep pool order
    pub fn rank<'a, R: Rng>(&self, pool: &[&'a Exercise], rng: &mut R) -> Vec<ScoredExercise<'a>> {
        let mut scored: Vec<ScoredExercise<'a>> = pool
            .iter()
            .map(|&exercise| ScoredExercise {
                exercise,
                score: self.score(exercise, rng),
            })
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }
}

/// Lower-cased tags and target muscles used for region matching
fn region_text(exercise: &Exercise) -> Vec<String> {
    exercise
        .tags
        .iter()
        .map(|t| t.to_lowercase())
        .chain(exercise.target_muscles.iter().map(|m| m.to_lowercase()))
        .collect()
}

/// Rolling set of exercise ids used on recent workout days
#[derive(Debug, Clone)]
pub struct VarietyTracker {
    config: VarietyConfig,
    /// Oldest first, unique
    used_exercise_ids: Vec<String>,
}

impl VarietyTracker {
    /// Empty tracker
    #[must_use]
    pub const fn new(config: VarietyConfig) -> Self {
        Self {
            config,
            used_exercise_ids: Vec::new(),
        }
    }

    /// Ids currently tracked, oldest first
    #[must_use]
    pub fn used_ids(&self) -> &[String] {
        &self.used_exercise_ids
    }

    /// Drop recently used exercises unless too few would remain.
    ///
    /// Returns the pool to score and whether the recency filter was applied.
    #[must_use]
    pub fn exclude_recent<'a>(&self, pool: &[&'a Exercise]) -> (Vec<&'a Exercise>, bool) {
        if self.used_exercise_ids.is_empty() {
            return (pool.to_vec(), false);
        }
        let used: HashSet<&str> = self.used_exercise_ids.iter().map(String::as_str).collect();
        let fresh: Vec<&Exercise> = pool
            .iter()
            .copied()
            .filter(|e| !used.contains(e.id.as_str()))
            .collect();
        if fresh.len() < self.config.min_pool_after_filter {
            (pool.to_vec(), false)
        } else {
            (fresh, true)
        }
    }

    /// Record ids used on a day; re-used ids move to the most recent end
    pub fn record<'i>(&mut self, ids: impl IntoIterator<Item = &'i str>) {
        for id in ids {
            self.used_exercise_ids.retain(|existing| existing != id);
            self.used_exercise_ids.push(id.to_owned());
        }
    }

    /// Truncate to the most recent ids once past the variety window
    pub fn end_day(&mut self, day_index: usize) {
        let max = self.config.max_tracked_ids;
        if day_index >= self.config.window_days && self.used_exercise_ids.len() > max {
            let overflow = self.used_exercise_ids.len() - max;
            self.used_exercise_ids.drain(..overflow);
        }
    }
}

/// Ranked candidates for one workout day
#[derive(Debug, Clone)]
pub struct DaySelection<'a> {
    focus: DayFocus,
    ranked: Vec<ScoredExercise<'a>>,
    /// Whether the recency filter narrowed the pool
    pub variety_applied: bool,
}

impl<'a> DaySelection<'a> {
    /// Rank the day's pool once
    pub fn rank<R: Rng>(
        pool: &[&'a Exercise],
        focus: DayFocus,
        scorer: &ExerciseScorer<'_>,
        tracker: &VarietyTracker,
        rng: &mut R,
    ) -> Self {
        let (candidates, variety_applied) = tracker.exclude_recent(pool);
        Self {
            focus,
            ranked: scorer.rank(&candidates, rng),
            variety_applied,
        }
    }

    /// Number of ranked candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// No candidates at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Top `count` exercises, narrowed to the day's focus when enough match
    #[must_use]
    pub fn take(&self, count: usize) -> Vec<&'a Exercise> {
        let focused: Vec<&'a Exercise> = self
            .ranked
            .iter()
            .filter(|s| body_region(s.exercise).matches_focus(self.focus))
            .map(|s| s.exercise)
            .collect();
        if focused.len() >= count {
            focused.into_iter().take(count).collect()
        } else {
            self.ranked.iter().take(count).map(|s| s.exercise).collect()
        }
    }
}
