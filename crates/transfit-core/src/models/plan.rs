// ABOUTME: Generated plan structures: plan, days, duration variants, workouts, and prescriptions
// ABOUTME: The rest-day invariant is encoded in the type via Option<WorkoutVariants>
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BlockLength, CheckpointType, Goal, Severity};

/// Supported workout lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum WorkoutDuration {
    /// 30 minutes
    Thirty,
    /// 45 minutes
    FortyFive,
    /// 60 minutes
    Sixty,
    /// 90 minutes
    Ninety,
}

impl WorkoutDuration {
    /// Every variant generated for a workout day, shortest first
    pub const ALL: [Self; 4] = [Self::Thirty, Self::FortyFive, Self::Sixty, Self::Ninety];

    /// Length in minutes
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        match self {
            Self::Thirty => 30,
            Self::FortyFive => 45,
            Self::Sixty => 60,
            Self::Ninety => 90,
        }
    }

    /// Variant closest to an arbitrary session length
    #[must_use]
    pub fn closest(minutes: u32) -> Self {
        Self::ALL
            .into_iter()
            .min_by_key(|d| d.minutes().abs_diff(minutes))
            .unwrap_or(Self::FortyFive)
    }
}

impl TryFrom<u32> for WorkoutDuration {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            30 => Ok(Self::Thirty),
            45 => Ok(Self::FortyFive),
            60 => Ok(Self::Sixty),
            90 => Ok(Self::Ninety),
            other => Err(format!("unsupported workout duration: {other} minutes")),
        }
    }
}

impl From<WorkoutDuration> for u32 {
    fn from(value: WorkoutDuration) -> Self {
        value.minutes()
    }
}

impl fmt::Display for WorkoutDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}min", self.minutes())
    }
}

/// Focus label of a template day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayFocus {
    /// Whole body
    FullBody,
    /// Upper body
    Upper,
    /// Lower body
    Lower,
    /// Pressing movements
    Push,
    /// Pulling movements
    Pull,
    /// Legs and hips
    Legs,
}

impl fmt::Display for DayFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullBody => write!(f, "full_body"),
            Self::Upper => write!(f, "upper"),
            Self::Lower => write!(f, "lower"),
            Self::Push => write!(f, "push"),
            Self::Pull => write!(f, "pull"),
            Self::Legs => write!(f, "legs"),
        }
    }
}

/// How sets of an exercise are organized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseFormat {
    /// All sets of one exercise before moving on
    StraightSets,
    /// One set of each exercise per round
    Circuit,
}

/// A prescribed exercise inside a workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseInstance {
    /// Catalog id
    pub exercise_id: String,
    /// Catalog display name
    pub exercise_name: String,
    /// Working sets
    pub sets: u32,
    /// Reps per set
    pub reps: u32,
    /// Rest between sets
    pub rest_seconds: u32,
    /// Set organization
    pub format: ExerciseFormat,
    /// Load guidance text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_guidance: Option<String>,
}

/// One item of a warm-up or cool-down
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineItem {
    /// Movement name
    pub name: String,
    /// Estimated seconds
    pub duration_seconds: u32,
}

/// Warm-up or cool-down routine
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Routine {
    /// Items in order
    pub exercises: Vec<RoutineItem>,
    /// Sum of item durations, in minutes
    pub total_duration_minutes: u32,
}

impl Routine {
    /// Sum of item durations in seconds
    #[must_use]
    pub fn total_seconds(&self) -> u32 {
        self.exercises.iter().map(|e| e.duration_seconds).sum()
    }
}

/// Timed in-workout safety reminder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyCheckpoint {
    /// Reminder kind
    #[serde(rename = "type")]
    pub checkpoint_type: CheckpointType,
    /// Minute from workout start
    pub minute: u32,
    /// Severity inherited from the rule
    pub severity: Severity,
    /// Text shown to the user
    pub message: String,
    /// Medium and high severities require acknowledgment
    pub requires_acknowledgment: bool,
    /// Rule that produced the checkpoint
    pub rule_id: String,
    /// Exercise in progress at that minute, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_index: Option<usize>,
}

/// Descriptive metadata attached to a workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutMetadata {
    /// Template the workout came from
    pub template_name: String,
    /// Focus of the template day
    pub focus: DayFocus,
    /// Safety rules in force
    pub rules_applied: Vec<String>,
    /// Catalog exercises excluded by safety filtering
    pub excluded_exercise_count: usize,
    /// Estimated total minutes including warm-up and cool-down
    pub estimated_minutes: u32,
}

/// A complete workout for one duration variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    /// Target duration
    pub duration: WorkoutDuration,
    /// Prescribed exercises in order
    pub exercises: Vec<ExerciseInstance>,
    /// Warm-up routine
    pub warm_up: Routine,
    /// Cool-down routine
    pub cool_down: Routine,
    /// Timed safety reminders
    pub safety_checkpoints: Vec<SafetyCheckpoint>,
    /// Descriptive metadata
    pub metadata: WorkoutMetadata,
}

/// The four duration variants of a workout day; all present or none
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutVariants {
    /// 30 minute variant
    pub thirty: Workout,
    /// 45 minute variant
    pub forty_five: Workout,
    /// 60 minute variant
    pub sixty: Workout,
    /// 90 minute variant
    pub ninety: Workout,
}

impl WorkoutVariants {
    /// Variant for a duration
    #[must_use]
    pub const fn get(&self, duration: WorkoutDuration) -> &Workout {
        match duration {
            WorkoutDuration::Thirty => &self.thirty,
            WorkoutDuration::FortyFive => &self.forty_five,
            WorkoutDuration::Sixty => &self.sixty,
            WorkoutDuration::Ninety => &self.ninety,
        }
    }

    /// All variants, shortest first
    #[must_use]
    pub fn all(&self) -> [&Workout; 4] {
        [&self.thirty, &self.forty_five, &self.sixty, &self.ninety]
    }
}

/// One calendar day of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// 1-based position in the block
    pub day_number: u32,
    /// Calendar date
    pub date: NaiveDate,
    /// Weekday of `date`
    pub day_of_week: Weekday,
    /// Rest day flag; always equal to `workouts.is_none()`
    pub is_rest_day: bool,
    /// Duration variants, absent on rest days
    pub workouts: Option<WorkoutVariants>,
}

impl Day {
    /// Rest day
    #[must_use]
    pub const fn rest(day_number: u32, date: NaiveDate, day_of_week: Weekday) -> Self {
        Self {
            day_number,
            date,
            day_of_week,
            is_rest_day: true,
            workouts: None,
        }
    }

    /// Workout day with every duration variant
    #[must_use]
    pub fn workout(
        day_number: u32,
        date: NaiveDate,
        day_of_week: Weekday,
        workouts: WorkoutVariants,
    ) -> Self {
        Self {
            day_number,
            date,
            day_of_week,
            is_rest_day: false,
            workouts: Some(workouts),
        }
    }

    /// Workout for a duration, `None` on rest days
    #[must_use]
    pub fn workout_for(&self, duration: WorkoutDuration) -> Option<&Workout> {
        self.workouts.as_ref().map(|w| w.get(duration))
    }
}

/// Share of emphasis between primary and secondary goal, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalWeighting {
    /// Primary goal share
    pub primary: u8,
    /// Secondary goal share
    pub secondary: u8,
}

/// A generated multi-day plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan identifier
    pub id: Uuid,
    /// Block length
    pub block_length: BlockLength,
    /// First calendar day
    pub start_date: NaiveDate,
    /// Goals in priority order
    pub goals: Vec<Goal>,
    /// Goal emphasis split
    pub goal_weighting: GoalWeighting,
    /// Regular weekly workout days
    pub workout_days: Vec<Weekday>,
    /// Template driving the day-focus rotation
    pub template_name: String,
    /// Variant matching the profile's preferred session length
    pub preferred_duration: WorkoutDuration,
    /// Days, exactly `block_length.days()` long
    pub days: Vec<Day>,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
}

impl Plan {
    /// Number of workout days
    #[must_use]
    pub fn workout_day_count(&self) -> usize {
        self.days.iter().filter(|d| !d.is_rest_day).count()
    }

    /// Whether every day is a rest day
    #[must_use]
    pub fn is_rest_only(&self) -> bool {
        self.days.iter().all(|d| d.is_rest_day)
    }
}
