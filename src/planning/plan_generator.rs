// ABOUTME: Plan orchestrator assembling a multi-week block of safety-filtered, prescribed workouts
// ABOUTME: Validates the profile, gates the catalog, then builds each day in four duration variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

//! # Plan Orchestrator
//!
//! One awaitable call per plan. The catalog fetch and the safety rules
//! evaluation are the only suspension points; everything after them is
//! synchronous. Days are generated in calendar order because cross-day
//! variety depends on what earlier days used.

use std::sync::Arc;

use chrono::{NaiveDate, Utc, Weekday};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use uuid::Uuid;

use super::calendar::{resolve_workout_days, CalendarDay, PlanCalendar};
use super::checkpoints::{inject_checkpoints, WorkoutTimeline};
use super::exercise_selection::{DaySelection, ExerciseScorer, VarietyTracker};
use super::observer::{DayEvent, PlanObserver, RestOnlyReason, TracingPlanObserver};
use super::prescription::PrescriptionContext;
use super::safety_filters::{filter_exercises_by_constraints, hard_safety_gate};
use super::snapshot::ProfileSnapshot;
use super::templates::{select_template, SelectedTemplate};
use super::validation::validate_profile;
use super::volume::{calculate_volume_adjustments, VolumeAdjustment};
use super::warmup::{generate_cool_down, generate_warm_up};
use crate::config::PlanningConfig;
use crate::constants::scoring::{PRIMARY_GOAL_SHARE_PERCENT, SECONDARY_GOAL_SHARE_PERCENT};
use crate::errors::AppResult;
use crate::models::{
    Constraint, Day, DayFocus, Exercise, GoalWeighting, Plan, Profile, SafetyContext, Workout,
    WorkoutDuration, WorkoutMetadata, WorkoutVariants,
};
use crate::providers::{ExerciseRepository, SafetyRulesEngine};

/// Per-call options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOptions {
    /// First calendar day of the block
    pub start_date: NaiveDate,
    /// Reference date for recovery phase and HRT duration
    pub today: NaiveDate,
    /// Replaces the weekday pattern for days 1-7 only
    pub first_week_workout_days: Option<Vec<Weekday>>,
}

impl PlanOptions {
    /// Block starting today
    #[must_use]
    pub const fn starting(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            today: start_date,
            first_week_workout_days: None,
        }
    }

    /// Use a different reference date
    #[must_use]
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Substitute workout weekdays for the first week
    #[must_use]
    pub fn with_first_week_days(mut self, days: Vec<Weekday>) -> Self {
        self.first_week_workout_days = Some(days);
        self
    }
}

/// Generates plans from a catalog repository and a safety rules engine
#[derive(Clone)]
pub struct PlanGenerator {
    repository: Arc<dyn ExerciseRepository>,
    rules: Arc<dyn SafetyRulesEngine>,
    observer: Arc<dyn PlanObserver>,
    config: PlanningConfig,
}

impl PlanGenerator {
    /// Generator using the global configuration and tracing observer
    #[must_use]
    pub fn new(repository: Arc<dyn ExerciseRepository>, rules: Arc<dyn SafetyRulesEngine>) -> Self {
        Self {
            repository,
            rules,
            observer: Arc::new(TracingPlanObserver),
            config: PlanningConfig::global().clone(),
        }
    }

    /// Replace the configuration
    #[must_use]
    pub fn with_config(mut self, config: PlanningConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the observer
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn PlanObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &PlanningConfig {
        &self.config
    }

    /// Generate a complete plan.
    ///
    /// An empty or fully excluded catalog yields an all-rest plan, not an
    /// error. A failing rules engine is logged and treated as no rules.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for contradictory profiles and propagates
    /// catalog repository errors unchanged.
    pub async fn generate_plan(&self, profile: &Profile, options: PlanOptions) -> AppResult<Plan> {
        validate_profile(profile, options.today)?;
        let snapshot = ProfileSnapshot::derive(profile, options.today);

        let catalog = self.repository.fetch_all().await?;
        let safety = match self.rules.evaluate(&snapshot, &catalog).await {
            Ok(context) => context,
            Err(error) => {
                self.observer.on_safety_rules_degraded(&error);
                SafetyContext::default()
            }
        };

        info!(
            profile_id = %profile.id,
            catalog = catalog.len(),
            recovery_phase = %snapshot.recovery_phase,
            rules = safety.rules_applied.len(),
            excluded = safety.excluded_exercise_ids.len(),
            "generating plan"
        );

        let template = select_template(&snapshot);
        let workout_days = resolve_workout_days(profile);
        let calendar = PlanCalendar::new(
            options.start_date,
            workout_days.clone(),
            options.first_week_workout_days.as_deref(),
        );
        let calendar_days = calendar.days(profile.block_length.days());

        let gated = hard_safety_gate(
            &catalog,
            &safety.excluded_exercise_ids,
            snapshot.recovery_phase,
        );

        let days = if gated.is_empty() {
            let reason = if catalog.is_empty() {
                RestOnlyReason::EmptyCatalog
            } else {
                RestOnlyReason::NothingSafe {
                    phase: snapshot.recovery_phase,
                }
            };
            self.observer.on_rest_only(reason);
            calendar_days.iter().map(rest_day).collect()
        } else {
            let filtered = filter_exercises_by_constraints(&gated, &snapshot);
            self.observer.on_filter_report(&filtered.report);

            let adjustment = calculate_volume_adjustments(
                snapshot.experience(),
                &safety.parameters(),
                template.volume_multiplier,
            );
            let builder = DayBuilder {
                config: &self.config,
                observer: self.observer.as_ref(),
                snapshot: &snapshot,
                safety: &safety,
                template: &template,
                adjustment,
                pool: filtered.exercises,
                excluded_count: catalog.len().saturating_sub(filtered.report.output_count),
            };
            builder.build_days(&calendar_days, &mut self.rng())
        };

        let plan = Plan {
            id: Uuid::new_v4(),
            block_length: profile.block_length,
            start_date: options.start_date,
            goals: profile.goals(),
            goal_weighting: goal_weighting(profile),
            workout_days,
            template_name: template.name.to_owned(),
            preferred_duration: profile
                .session_duration
                .map_or(WorkoutDuration::FortyFive, WorkoutDuration::closest),
            days,
            generated_at: Utc::now(),
        };

        info!(
            plan_id = %plan.id,
            days = plan.days.len(),
            workout_days = plan.workout_day_count(),
            template = %plan.template_name,
            "plan generated"
        );
        Ok(plan)
    }

    fn rng(&self) -> ChaCha8Rng {
        self.config
            .random_seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64)
    }
}

fn rest_day(day: &CalendarDay) -> Day {
    Day::rest(day.day_number, day.date, day.weekday)
}

fn goal_weighting(profile: &Profile) -> GoalWeighting {
    if profile.secondary_goal.is_some() {
        GoalWeighting {
            primary: PRIMARY_GOAL_SHARE_PERCENT,
            secondary: SECONDARY_GOAL_SHARE_PERCENT,
        }
    } else {
        GoalWeighting {
            primary: 100,
            secondary: 0,
        }
    }
}

/// Everything fixed for the whole block once the pool is known
struct DayBuilder<'g, 'p> {
    config: &'g PlanningConfig,
    observer: &'g dyn PlanObserver,
    snapshot: &'g ProfileSnapshot<'p>,
    safety: &'g SafetyContext,
    template: &'g SelectedTemplate,
    adjustment: VolumeAdjustment,
    pool: Vec<&'g Exercise>,
    excluded_count: usize,
}

impl DayBuilder<'_, '_> {
    fn build_days(&self, calendar_days: &[CalendarDay], rng: &mut ChaCha8Rng) -> Vec<Day> {
        let scorer = ExerciseScorer::new(self.snapshot.profile, &self.config.scoring)
            .with_binding_priority(self.snapshot.has_constraint(Constraint::HeavyBinding));
        let mut tracker = VarietyTracker::new(self.config.variety.clone());
        let mut workout_index = 0;
        let mut days = Vec::with_capacity(calendar_days.len());

        for (day_index, calendar_day) in calendar_days.iter().enumerate() {
            if calendar_day.is_workout_day {
                let focus = self.template.day(workout_index).focus;
                workout_index += 1;

                let selection = DaySelection::rank(&self.pool, focus, &scorer, &tracker, rng);
                let variants = self.build_variants(calendar_day.day_number, focus, &selection);

                tracker.record(
                    variants
                        .all()
                        .into_iter()
                        .flat_map(|w| w.exercises.iter().map(|e| e.exercise_id.as_str())),
                );

                self.observer.on_workout_day(&DayEvent {
                    day_number: calendar_day.day_number,
                    focus,
                    candidate_count: selection.len(),
                    variety_applied: selection.variety_applied,
                    exercise_count: variants.ninety.exercises.len(),
                    checkpoint_count: variants.ninety.safety_checkpoints.len(),
                });

                days.push(Day::workout(
                    calendar_day.day_number,
                    calendar_day.date,
                    calendar_day.weekday,
                    variants,
                ));
            } else {
                days.push(rest_day(calendar_day));
            }
            tracker.end_day(day_index);
        }
        days
    }

    fn build_variants(
        &self,
        day_number: u32,
        focus: DayFocus,
        selection: &DaySelection<'_>,
    ) -> WorkoutVariants {
        let build = |duration: WorkoutDuration| {
            let exercises = selection.take(self.config.selection.count_for(duration));
            self.build_workout(day_number, duration, focus, &exercises)
        };
        WorkoutVariants {
            thirty: build(WorkoutDuration::Thirty),
            forty_five: build(WorkoutDuration::FortyFive),
            sixty: build(WorkoutDuration::Sixty),
            ninety: build(WorkoutDuration::Ninety),
        }
    }

    fn build_workout(
        &self,
        day_number: u32,
        duration: WorkoutDuration,
        focus: DayFocus,
        exercises: &[&Exercise],
    ) -> Workout {
        let prescription = PrescriptionContext {
            duration,
            primary_goal: self.snapshot.profile.primary_goal,
            experience: self.snapshot.experience(),
            adjustment: &self.adjustment,
        };
        let mut instances: Vec<_> = exercises
            .iter()
            .enumerate()
            .map(|(position, exercise)| prescription.prescribe(exercise, position))
            .collect();

        let warm_up = generate_warm_up(focus);
        let cool_down = generate_cool_down(focus);
        let mut timeline = WorkoutTimeline::estimate(&warm_up, &instances, &cool_down);

        if let Some(cap) = self.adjustment.max_workout_minutes {
            let before = instances.len();
            while instances.len() > 1 && timeline.total_minutes() > cap {
                instances.pop();
                timeline = WorkoutTimeline::estimate(&warm_up, &instances, &cool_down);
            }
            if instances.len() < before {
                self.observer
                    .on_session_trimmed(day_number, before - instances.len(), cap);
            }
        }

        let safety_checkpoints = inject_checkpoints(
            &self.safety.rules_applied,
            &timeline,
            self.snapshot.has_active_bottom_surgery(),
        );

        Workout {
            duration,
            exercises: instances,
            warm_up,
            cool_down,
            safety_checkpoints,
            metadata: WorkoutMetadata {
                template_name: self.template.name.to_owned(),
                focus,
                rules_applied: self.safety.rule_ids(),
                excluded_exercise_count: self.excluded_count,
                estimated_minutes: timeline.total_minutes(),
            },
        }
    }
}
