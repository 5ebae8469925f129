// ABOUTME: Shared test utilities and fixtures for plan generation integration tests
// ABOUTME: Provides catalog builders, profiles, fixed dates, failing collaborators, and a recording observer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::unwrap_used
)]
//! Shared test utilities for `transfit`
//!
//! Catalog fixtures are generated deterministically so assertions about pool
//! sizes stay stable across runs.

use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use tracing::Level;

use transfit::config::PlanningConfig;
use transfit::errors::{AppError, AppResult};
use transfit::models::{
    Difficulty, Exercise, FitnessExperience, Goal, Profile, RecoveryPhase, SafetyContext, Surgery,
    SurgeryType,
};
use transfit::planning::{
    DayEvent, FilterReport, PlanGenerator, PlanObserver, ProfileSnapshot, RestOnlyReason,
};
use transfit::providers::{
    ExerciseRepository, InMemoryExerciseRepository, SafetyRulesEngine, StaticSafetyRules,
};

static INIT_LOGGER: Once = Once::new();

/// Seed used by every deterministic generator in the suite
pub const TEST_SEED: u64 = 42;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Monday, 2 June 2025
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

/// `days` before `date`
pub fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap()
}

/// `days` after `date`
pub fn days_after(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap()
}

/// Fluent builder over `Exercise::new`
#[derive(Debug, Clone)]
pub struct ExerciseFixture(Exercise);

impl ExerciseFixture {
    pub fn new(id: &str) -> Self {
        let name = id
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect()
                })
            })
            .collect::<Vec<_>>()
            .join(" ");
        Self(Exercise::new(id, name))
    }

    pub fn pattern(mut self, pattern: &str) -> Self {
        self.0.pattern = Some(pattern.to_owned());
        self
    }

    pub fn equipment(mut self, labels: &[&str]) -> Self {
        self.0.equipment = labels.iter().map(|l| (*l).to_owned()).collect();
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.0.difficulty = difficulty;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.0.tags = tags.iter().map(|t| (*t).to_owned()).collect();
        self
    }

    pub fn muscles(mut self, muscles: &str) -> Self {
        self.0.target_muscles = Some(muscles.to_owned());
        self
    }

    pub fn binder_aware(mut self) -> Self {
        self.0.binder_aware = true;
        self
    }

    pub fn heavy_binding_safe(mut self) -> Self {
        self.0.binder_aware = true;
        self.0.heavy_binding_safe = true;
        self
    }

    pub fn pelvic_floor_safe(mut self) -> Self {
        self.0.pelvic_floor_safe = true;
        self
    }

    pub fn safe_from(mut self, phase: RecoveryPhase) -> Self {
        self.0.earliest_safe_phase = Some(phase);
        self
    }

    pub fn build(self) -> Exercise {
        self.0
    }
}

const REGIONS: [(&str, &str, usize, &[&str]); 5] = [
    ("squat", "goblet_squat", 12, &["feminization", "strength"]),
    ("push", "incline_press", 10, &["masculinization", "hypertrophy"]),
    ("pull", "cable_row", 10, &["masculinization", "hypertrophy"]),
    ("core", "dead_bug", 8, &["general_fitness"]),
    ("carry", "farmer_carry", 8, &["strength", "endurance"]),
];

const EQUIPMENT_CYCLE: [&[&str]; 4] = [&[], &["Dumbbells"], &["Resistance Band"], &["Barbell"]];

const DIFFICULTY_CYCLE: [Difficulty; 3] = [
    Difficulty::Beginner,
    Difficulty::Intermediate,
    Difficulty::Advanced,
];

const PHASE_CYCLE: [Option<RecoveryPhase>; 5] = [
    Some(RecoveryPhase::Immediate),
    Some(RecoveryPhase::Early),
    Some(RecoveryPhase::Mid),
    Some(RecoveryPhase::Late),
    None,
];

/// 48 exercises across five regions with rotating equipment, difficulty,
/// safety flags, and earliest safe phase.
///
/// Within each region, index `i` gets:
/// equipment `EQUIPMENT_CYCLE[i % 4]`, difficulty `DIFFICULTY_CYCLE[i % 3]`,
/// `binder_aware` when `i` is even, `heavy_binding_safe` when `i % 4 == 0`,
/// `pelvic_floor_safe` when `i % 3 == 0`, and phase `PHASE_CYCLE[i % 5]`.
pub fn sample_catalog() -> Vec<Exercise> {
    let mut catalog = Vec::new();
    for (pattern, stem, count, tags) in REGIONS {
        for i in 0..count {
            let mut fixture = ExerciseFixture::new(&format!("{stem}_{i}"))
                .pattern(pattern)
                .equipment(EQUIPMENT_CYCLE[i % 4])
                .difficulty(DIFFICULTY_CYCLE[i % 3])
                .tags(tags);
            if i % 2 == 0 {
                fixture = fixture.binder_aware();
            }
            if i % 4 == 0 {
                fixture = fixture.heavy_binding_safe();
            }
            if i % 3 == 0 {
                fixture = fixture.pelvic_floor_safe();
            }
            if let Some(phase) = PHASE_CYCLE[i % 5] {
                fixture = fixture.safe_from(phase);
            }
            catalog.push(fixture.build());
        }
    }
    catalog
}

/// `count` bodyweight, intermediate, full-body exercises cleared from the
/// immediate phase, with no other flags
pub fn uniform_catalog(count: usize) -> Vec<Exercise> {
    (0..count)
        .map(|i| {
            ExerciseFixture::new(&format!("carry_variation_{i}"))
                .pattern("carry")
                .safe_from(RecoveryPhase::Immediate)
                .build()
        })
        .collect()
}

/// Intermediate strength profile training three days a week with bodyweight,
/// dumbbells, and bands
pub fn base_profile() -> Profile {
    let mut profile = Profile::new(Goal::Strength);
    profile.id = "profile-test".to_owned();
    profile.fitness_experience = Some(FitnessExperience::Intermediate);
    profile.workout_frequency = 3;
    profile.session_duration = Some(45);
    profile.equipment = vec![
        "bodyweight".to_owned(),
        "dumbbells".to_owned(),
        "resistance band".to_owned(),
    ];
    profile
}

/// Surgery on `date`, not marked healed
pub const fn surgery(surgery_type: SurgeryType, date: NaiveDate) -> Surgery {
    Surgery {
        surgery_type,
        date: Some(date),
        weeks_post_op: None,
        fully_healed: false,
    }
}

/// Refs to every exercise of a catalog, as the cascade consumes them
pub fn refs(catalog: &[Exercise]) -> Vec<&Exercise> {
    catalog.iter().collect()
}

/// Snapshot of `profile` on the fixed Monday
pub fn snapshot(profile: &Profile) -> ProfileSnapshot<'_> {
    ProfileSnapshot::derive(profile, monday())
}

/// Seeded generator over an in-memory catalog and a fixed safety context
pub fn generator(catalog: Vec<Exercise>, context: SafetyContext) -> PlanGenerator {
    init_test_logging();
    PlanGenerator::new(
        Arc::new(InMemoryExerciseRepository::new(catalog)),
        Arc::new(StaticSafetyRules::new(context)),
    )
    .with_config(PlanningConfig::default().with_seed(TEST_SEED))
}

/// Repository whose fetch always fails
#[derive(Debug, Default)]
pub struct FailingRepository;

#[async_trait]
impl ExerciseRepository for FailingRepository {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn fetch_all(&self) -> AppResult<Vec<Exercise>> {
        Err(AppError::storage("catalog store unreachable"))
    }
}

/// Rules engine whose evaluation always fails
#[derive(Debug, Default)]
pub struct FailingRulesEngine;

#[async_trait]
impl SafetyRulesEngine for FailingRulesEngine {
    async fn evaluate(
        &self,
        _snapshot: &ProfileSnapshot<'_>,
        _catalog: &[Exercise],
    ) -> AppResult<SafetyContext> {
        Err(AppError::external_service("rules", "evaluation timed out"))
    }
}

/// In-memory catalog that counts fetches and fails every fetch after the first
#[derive(Debug)]
pub struct SingleFetchRepository {
    exercises: Vec<Exercise>,
    calls: AtomicUsize,
}

impl SingleFetchRepository {
    pub const fn new(exercises: Vec<Exercise>) -> Self {
        Self {
            exercises,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExerciseRepository for SingleFetchRepository {
    fn name(&self) -> &'static str {
        "single_fetch"
    }

    async fn fetch_all(&self) -> AppResult<Vec<Exercise>> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Ok(self.exercises.clone())
        } else {
            Err(AppError::storage("catalog fetched more than once"))
        }
    }
}

/// Observer that records every event it receives
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub reports: Mutex<Vec<FilterReport>>,
    pub days: Mutex<Vec<DayEvent>>,
    pub degraded: Mutex<Vec<String>>,
    pub trimmed: Mutex<Vec<(u32, usize, u32)>>,
    pub rest_only: Mutex<Vec<RestOnlyReason>>,
}

impl PlanObserver for RecordingObserver {
    fn on_filter_report(&self, report: &FilterReport) {
        self.reports.lock().unwrap().push(report.clone());
    }

    fn on_safety_rules_degraded(&self, error: &AppError) {
        self.degraded.lock().unwrap().push(error.to_string());
    }

    fn on_workout_day(&self, event: &DayEvent) {
        self.days.lock().unwrap().push(event.clone());
    }

    fn on_session_trimmed(&self, day_number: u32, dropped: usize, cap_minutes: u32) {
        self.trimmed
            .lock()
            .unwrap()
            .push((day_number, dropped, cap_minutes));
    }

    fn on_rest_only(&self, reason: RestOnlyReason) {
        self.rest_only.lock().unwrap().push(reason);
    }
}
