// ABOUTME: User profile model with HRT, binding, surgical history, and training preferences
// ABOUTME: Read-only input to plan generation; never mutated by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

use std::fmt;
use std::iter;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Primary or secondary training goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Lower-body emphasis, glute/hip development
    Feminization,
    /// Upper-body emphasis, shoulder/chest/back development
    Masculinization,
    /// Balanced development
    Androgyny,
    /// General health and fitness
    GeneralFitness,
    /// Maximal strength
    Strength,
    /// Muscular endurance
    Endurance,
    /// Muscle size
    Hypertrophy,
    /// Range of motion and joint health
    Mobility,
}

impl Goal {
    /// Tag string matched against exercise tags and goal fields
    #[must_use]
    pub const fn as_tag(&self) -> &'static str {
        match self {
            Self::Feminization => "feminization",
            Self::Masculinization => "masculinization",
            Self::Androgyny => "androgyny",
            Self::GeneralFitness => "general_fitness",
            Self::Strength => "strength",
            Self::Endurance => "endurance",
            Self::Hypertrophy => "hypertrophy",
            Self::Mobility => "mobility",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Hormone therapy type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HrtType {
    /// Estradiol-based therapy
    Estrogen,
    /// Testosterone therapy
    Testosterone,
    /// Androgen blockers without estrogen
    AntiAndrogen,
    /// Anything else (microdosing, progesterone only, ...)
    Other,
}

impl HrtType {
    /// Estrogen or anti-androgen therapy
    #[must_use]
    pub const fn is_feminizing(&self) -> bool {
        matches!(self, Self::Estrogen | Self::AntiAndrogen)
    }
}

/// How often the user binds their chest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingFrequency {
    /// Every day
    Daily,
    /// A few times per week
    FewTimesWeek,
    /// Rarely
    Occasionally,
    /// Never binds
    Never,
}

/// Self-reported training experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessExperience {
    /// New to structured training
    Beginner,
    /// Trains regularly
    Intermediate,
    /// Years of structured training
    Advanced,
}

impl fmt::Display for FitnessExperience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

/// Training restriction applied during exercise filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// Only exercises safe to perform in a binder
    BinderAware,
    /// Stricter binding tier: binder-aware plus heavy-binding safe
    HeavyBinding,
    /// Currently recovering from surgery
    PostOp,
    /// No jumping or plyometric work
    NoJumping,
    /// No floor-based work
    NoFloor,
}

/// Surgical procedure type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurgeryType {
    /// Mastectomy / chest masculinization
    TopSurgery,
    /// Breast augmentation
    BreastAugmentation,
    /// Vaginoplasty
    Vaginoplasty,
    /// Vulvoplasty (zero-depth)
    Vulvoplasty,
    /// Phalloplasty
    Phalloplasty,
    /// Metoidioplasty
    Metoidioplasty,
    /// Orchiectomy
    Orchiectomy,
    /// Hysterectomy
    Hysterectomy,
    /// Facial feminization surgery
    FacialFeminization,
    /// Any other procedure
    Other,
}

impl SurgeryType {
    /// Genital or pelvic procedure affecting the pelvic floor
    #[must_use]
    pub const fn is_bottom_surgery(&self) -> bool {
        matches!(
            self,
            Self::Vaginoplasty
                | Self::Vulvoplasty
                | Self::Phalloplasty
                | Self::Metoidioplasty
                | Self::Orchiectomy
                | Self::Hysterectomy
        )
    }

    /// Chest procedure affecting pressing and pulling
    #[must_use]
    pub const fn is_chest_surgery(&self) -> bool {
        matches!(self, Self::TopSurgery | Self::BreastAugmentation)
    }
}

impl fmt::Display for SurgeryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TopSurgery => "top_surgery",
            Self::BreastAugmentation => "breast_augmentation",
            Self::Vaginoplasty => "vaginoplasty",
            Self::Vulvoplasty => "vulvoplasty",
            Self::Phalloplasty => "phalloplasty",
            Self::Metoidioplasty => "metoidioplasty",
            Self::Orchiectomy => "orchiectomy",
            Self::Hysterectomy => "hysterectomy",
            Self::FacialFeminization => "facial_feminization",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// A surgery in the user's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surgery {
    /// Procedure type
    #[serde(rename = "type")]
    pub surgery_type: SurgeryType,
    /// Date of the procedure, if known
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Stored weeks post-op from onboarding. Informational only: the engine
    /// always recomputes this from `date`.
    #[serde(default)]
    pub weeks_post_op: Option<u32>,
    /// User or clinician reported full healing
    #[serde(default)]
    pub fully_healed: bool,
}

/// Training block length in weeks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BlockLength {
    /// One week (7 days)
    #[default]
    OneWeek,
    /// Four weeks (28 days)
    FourWeeks,
}

impl BlockLength {
    /// Number of weeks in the block
    #[must_use]
    pub const fn weeks(&self) -> u8 {
        match self {
            Self::OneWeek => 1,
            Self::FourWeeks => 4,
        }
    }

    /// Number of calendar days in the block
    #[must_use]
    pub const fn days(&self) -> usize {
        self.weeks() as usize * 7
    }
}

impl TryFrom<u8> for BlockLength {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::OneWeek),
            4 => Ok(Self::FourWeeks),
            other => Err(format!("block length must be 1 or 4 weeks, got {other}")),
        }
    }
}

impl From<BlockLength> for u8 {
    fn from(value: BlockLength) -> Self {
        value.weeks()
    }
}

/// Fully-populated, already-migrated user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Profile identifier
    #[serde(default)]
    pub id: String,
    /// Self-described gender identity
    #[serde(default)]
    pub gender_identity: Option<String>,
    /// Pronouns used in generated copy
    #[serde(default)]
    pub pronouns: Option<String>,
    /// Main training goal
    pub primary_goal: Goal,
    /// Optional secondary goal
    #[serde(default)]
    pub secondary_goal: Option<Goal>,
    /// Currently on hormone therapy
    #[serde(default)]
    pub on_hrt: bool,
    /// Type of hormone therapy
    #[serde(default)]
    pub hrt_type: Option<HrtType>,
    /// When hormone therapy started
    #[serde(default)]
    pub hrt_start_date: Option<NaiveDate>,
    /// Binds chest
    #[serde(default)]
    pub binds_chest: bool,
    /// Binding frequency
    #[serde(default)]
    pub binding_frequency: Option<BindingFrequency>,
    /// Surgical history
    #[serde(default)]
    pub surgeries: Vec<Surgery>,
    /// Training experience, if recorded
    #[serde(default)]
    pub fitness_experience: Option<FitnessExperience>,
    /// Desired workouts per week
    #[serde(default = "default_workout_frequency")]
    pub workout_frequency: u8,
    /// Preferred session length in minutes
    #[serde(default)]
    pub session_duration: Option<u32>,
    /// Available equipment (raw labels)
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Explicit workout weekdays
    #[serde(default)]
    pub preferred_workout_days: Option<Vec<Weekday>>,
    /// Body regions to emphasize, most important first
    #[serde(default)]
    pub body_focus_prefer: Vec<String>,
    /// Body regions to de-emphasize
    #[serde(default)]
    pub body_focus_soft_avoid: Vec<String>,
    /// User-declared restrictions
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    /// Block length (1 or 4 weeks)
    #[serde(default)]
    pub block_length: BlockLength,
}

const fn default_workout_frequency() -> u8 {
    3
}

impl Profile {
    /// Minimal profile with a goal and defaults everywhere else
    #[must_use]
    pub fn new(primary_goal: Goal) -> Self {
        Self {
            id: String::new(),
            gender_identity: None,
            pronouns: None,
            primary_goal,
            secondary_goal: None,
            on_hrt: false,
            hrt_type: None,
            hrt_start_date: None,
            binds_chest: false,
            binding_frequency: None,
            surgeries: Vec::new(),
            fitness_experience: None,
            workout_frequency: default_workout_frequency(),
            session_duration: None,
            equipment: Vec::new(),
            preferred_workout_days: None,
            body_focus_prefer: Vec::new(),
            body_focus_soft_avoid: Vec::new(),
            constraints: Vec::new(),
            block_length: BlockLength::default(),
        }
    }

    /// Goals in priority order
    #[must_use]
    pub fn goals(&self) -> Vec<Goal> {
        iter::once(self.primary_goal)
            .chain(self.secondary_goal)
            .collect()
    }
}
