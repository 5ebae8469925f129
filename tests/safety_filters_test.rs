// ABOUTME: Unit tests for the safety filter cascade and its fallback ladder
// ABOUTME: Validates each stage, stage ordering, the hard safety gate, and never-empty output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TransFit Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{base_profile, days_before, monday, refs, sample_catalog, snapshot, surgery, ExerciseFixture};
use transfit::models::{
    BindingFrequency, Constraint, Difficulty, Exercise, FitnessExperience, Goal, Profile,
    RecoveryPhase, SurgeryType,
};
use transfit::planning::safety_filters::{
    hard_safety_gate, safe_in_phase, FallbackTier, FilterStage,
};
use transfit::planning::{filter_exercises_by_constraints, FilteredPool};

fn ids(pool: &FilteredPool<'_>) -> Vec<String> {
    pool.exercises.iter().map(|e| e.id.clone()).collect()
}

fn stage_applied(pool: &FilteredPool<'_>, stage: FilterStage) -> bool {
    pool.report
        .stages
        .iter()
        .find(|s| s.stage == stage)
        .unwrap()
        .applied
}

fn equipment_catalog() -> Vec<Exercise> {
    vec![
        ExerciseFixture::new("air_squat").pattern("squat").build(),
        ExerciseFixture::new("dumbbell_row")
            .pattern("pull")
            .equipment(&["Dumbbell"])
            .build(),
        ExerciseFixture::new("band_press")
            .pattern("push")
            .equipment(&["Resistance Band"])
            .build(),
    ]
}

// ============================================================================
// Pass-through and Reporting
// ============================================================================

#[test]
fn test_unconstrained_profile_keeps_everything() {
    let catalog = sample_catalog();
    let profile = Profile::new(Goal::Strength);
    let pool = filter_exercises_by_constraints(&refs(&catalog), &snapshot(&profile));

    assert_eq!(pool.exercises.len(), catalog.len());
    assert_eq!(pool.report.input_count, 48);
    assert_eq!(pool.report.output_count, 48);
    assert!(pool.report.fallback.is_none());
    assert!(pool.report.stages.iter().all(|s| !s.applied && !s.fell_back));
}

#[test]
fn test_stages_run_in_fixed_order() {
    let catalog = sample_catalog();
    let profile = base_profile();
    let pool = filter_exercises_by_constraints(&refs(&catalog), &snapshot(&profile));

    let order: Vec<FilterStage> = pool.report.stages.iter().map(|s| s.stage).collect();
    assert_eq!(
        order,
        vec![
            FilterStage::Equipment,
            FilterStage::Difficulty,
            FilterStage::BinderSafety,
            FilterStage::HeavyBinding,
            FilterStage::PelvicFloor,
            FilterStage::RecoveryPhase,
            FilterStage::ImpactFloor,
        ]
    );
    assert_eq!(FilterStage::BinderSafety.to_string(), "binder_safety");

    // Each stage consumes the previous stage's output
    for pair in pool.report.stages.windows(2) {
        assert_eq!(pair[0].output_count, pair[1].input_count);
    }
}

#[test]
fn test_empty_input_stays_empty() {
    let profile = base_profile();
    let pool = filter_exercises_by_constraints(&[], &snapshot(&profile));
    assert!(pool.exercises.is_empty());
    assert!(pool.report.fallback.is_none());
}

// ============================================================================
// Equipment and Difficulty
// ============================================================================

#[test]
fn test_equipment_matches_canonical_tokens() {
    let catalog = equipment_catalog();
    let mut profile = Profile::new(Goal::Strength);
    profile.equipment = vec!["Dumbbells".to_owned()];

    let pool = filter_exercises_by_constraints(&refs(&catalog), &snapshot(&profile));
    assert_eq!(ids(&pool), vec!["dumbbell_row"]);
    assert!(stage_applied(&pool, FilterStage::Equipment));
}

#[test]
fn test_bodyweight_exercises_need_bodyweight_in_user_equipment() {
    let catalog = equipment_catalog();
    let mut profile = Profile::new(Goal::Strength);
    profile.equipment = vec!["Body Weight".to_owned(), "bands".to_owned()];

    let pool = filter_exercises_by_constraints(&refs(&catalog), &snapshot(&profile));
    assert_eq!(ids(&pool), vec!["air_squat", "band_press"]);
}

#[test]
fn test_difficulty_follows_experience() {
    let catalog = vec![
        ExerciseFixture::new("easy")
            .difficulty(Difficulty::Beginner)
            .build(),
        ExerciseFixture::new("medium")
            .difficulty(Difficulty::Intermediate)
            .build(),
        ExerciseFixture::new("hard")
            .difficulty(Difficulty::Advanced)
            .build(),
    ];
    let mut profile = Profile::new(Goal::Strength);

    profile.fitness_experience = Some(FitnessExperience::Beginner);
    let pool = filter_exercises_by_constraints(&refs(&catalog), &snapshot(&profile));
    assert_eq!(ids(&pool), vec!["easy"]);

    profile.fitness_experience = Some(FitnessExperience::Intermediate);
    let pool = filter_exercises_by_constraints(&refs(&catalog), &snapshot(&profile));
    assert_eq!(ids(&pool), vec!["easy", "medium"]);

    profile.fitness_experience = Some(FitnessExperience::Advanced);
    let pool = filter_exercises_by_constraints(&refs(&catalog), &snapshot(&profile));
    assert_eq!(pool.exercises.len(), 3);
}

// ============================================================================
// Binding
// ============================================================================

#[test]
fn test_binder_stage_keeps_binder_aware_only() {
    let catalog = vec![
        ExerciseFixture::new("goblet_squat")
            .pattern("squat")
            .binder_aware()
            .build(),
        ExerciseFixture::new("burpee").pattern("carry").build(),
    ];
    let mut profile = Profile::new(Goal::Strength);
    profile.binds_chest = true;
    profile.binding_frequency = Some(BindingFrequency::Occasionally);

    let pool = filter_exercises_by_constraints(&refs(&catalog), &snapshot(&profile));
    assert_eq!(ids(&pool), vec!["goblet_squat"]);
    assert!(stage_applied(&pool, FilterStage::BinderSafety));
    assert!(!stage_applied(&pool, FilterStage::HeavyBinding));
}

#[test]
fn test_binder_stage_keeps_input_when_nothing_is_binder_aware() {
    let catalog = vec![
        ExerciseFixture::new("goblet_squat").pattern("squat").build(),
        ExerciseFixture::new("bench_press").pattern("push").build(),
    ];
    let mut profile = Profile::new(Goal::Strength);
    profile.binds_chest = true;

    let pool = filter_exercises_by_constraints(&refs(&catalog), &snapshot(&profile));
    assert_eq!(pool.exercises.len(), 2);
    let binder = &pool.report.stages[2];
    assert_eq!(binder.stage, FilterStage::BinderSafety);
    assert!(binder.fell_back);
    assert!(pool.report.fallback.is_none());
}

#[test]
fn test_heavy_binding_orders_lower_body_first() {
    let catalog = vec![
        ExerciseFixture::new("landmine_press")
            .pattern("push")
            .heavy_binding_safe()
            .build(),
        ExerciseFixture::new("suitcase_carry")
            .pattern("carry")
            .heavy_binding_safe()
            .build(),
        ExerciseFixture::new("split_squat")
            .pattern("lunge")
            .heavy_binding_safe()
            .build(),
        ExerciseFixture::new("pallof_hold")
            .pattern("core")
            .heavy_binding_safe()
            .build(),
        ExerciseFixture::new("seated_row")
            .pattern("pull")
            .binder_aware()
            .build(),
    ];
    let mut profile = Profile::new(Goal::Strength);
    profile.binds_chest = true;
    profile.binding_frequency = Some(BindingFrequency::Daily);

    let pool = filter_exercises_by_constraints(&refs(&catalog), &snapshot(&profile));
    assert_eq!(
        ids(&pool),
        vec!["split_squat", "pallof_hold", "suitcase_carry", "landmine_press"]
    );
    assert!(stage_applied(&pool, FilterStage::HeavyBinding));
}

// ============================================================================
// Surgical Recovery
// ============================================================================

#[test]
fn test_pelvic_floor_stage_for_active_bottom_surgery() {
    let catalog = vec![
        ExerciseFixture::new("glute_bridge_march")
            .pattern("hinge")
            .pelvic_floor_safe()
            .safe_from(RecoveryPhase::Immediate)
            .build(),
        ExerciseFixture::new("goblet_squat")
            .pattern("squat")
            .safe_from(RecoveryPhase::Immediate)
            .build(),
    ];
    let mut profile = Profile::new(Goal::Feminization);
    profile
        .surgeries
        .push(surgery(SurgeryType::Vaginoplasty, days_before(monday(), 21)));

    let pool = filter_exercises_by_constraints(&refs(&catalog), &snapshot(&profile));
    assert_eq!(ids(&pool), vec!["glute_bridge_march"]);
    assert!(stage_applied(&pool, FilterStage::PelvicFloor));
}

#[test]
fn test_pelvic_floor_stage_counts_healed_bottom_surgery_during_other_recovery() {
    let catalog = vec![
        ExerciseFixture::new("pelvic_safe_row")
            .pattern("pull")
            .pelvic_floor_safe()
            .safe_from(RecoveryPhase::Early)
            .build(),
        ExerciseFixture::new("plain_row")
            .pattern("pull")
            .safe_from(RecoveryPhase::Early)
            .build(),
    ];
    let mut profile = Profile::new(Goal::Strength);
    let mut healed = surgery(SurgeryType::Orchiectomy, days_before(monday(), 400));
    healed.fully_healed = true;
    profile.surgeries.push(healed);
    profile
        .surgeries
        .push(surgery(SurgeryType::FacialFeminization, days_before(monday(), 30)));

    let pool = filter_exercises_by_constraints(&refs(&catalog), &snapshot(&profile));
    assert_eq!(ids(&pool), vec!["pelvic_safe_row"]);
}

#[test]
fn test_recovery_stage_requires_phase_clearance() {
    let catalog = vec![
        ExerciseFixture::new("walk")
            .pattern("gait")
            .safe_from(RecoveryPhase::Immediate)
            .build(),
        ExerciseFixture::new("split_squat")
            .pattern("lunge")
            .safe_from(RecoveryPhase::Mid)
            .build(),
        ExerciseFixture::new("deadlift")
            .pattern("hinge")
            .safe_from(RecoveryPhase::Late)
            .build(),
        ExerciseFixture::new("unknown_lift").pattern("hinge").build(),
    ];
    let mut profile = Profile::new(Goal::Strength);
    profile
        .surgeries
        .push(surgery(SurgeryType::TopSurgery, days_before(monday(), 8 * 7)));

    let snap = snapshot(&profile);
    assert_eq!(snap.recovery_phase, RecoveryPhase::Mid);
    let pool = filter_exercises_by_constraints(&refs(&catalog), &snap);
    assert_eq!(ids(&pool), vec!["walk", "split_squat"]);
}

// ============================================================================
// Impact and Floor
// ============================================================================

#[test]
fn test_no_jumping_and_no_floor() {
    let catalog = vec![
        ExerciseFixture::new("jump_squat").pattern("squat").build(),
        ExerciseFixture::new("forearm_plank").pattern("core").build(),
        ExerciseFixture::new("glute_bridge").pattern("hinge").build(),
        ExerciseFixture::new("goblet_squat").pattern("squat").build(),
        ExerciseFixture::new("box_step_up")
            .pattern("lunge")
            .tags(&["plyometric"])
            .build(),
    ];
    let mut profile = Profile::new(Goal::Strength);

    profile.constraints = vec![Constraint::NoJumping];
    let pool = filter_exercises_by_constraints(&refs(&catalog), &snapshot(&profile));
    assert_eq!(
        ids(&pool),
        vec!["forearm_plank", "glute_bridge", "goblet_squat"]
    );

    profile.constraints = vec![Constraint::NoJumping, Constraint::NoFloor];
    let pool = filter_exercises_by_constraints(&refs(&catalog), &snapshot(&profile));
    assert_eq!(ids(&pool), vec!["goblet_squat"]);
}

// ============================================================================
// Fallback Ladder
// ============================================================================

#[test]
fn test_fallback_equipment_and_difficulty() {
    let catalog: Vec<Exercise> = (0..3)
        .map(|i| {
            ExerciseFixture::new(&format!("jump_lunge_{i}"))
                .pattern("lunge")
                .difficulty(Difficulty::Beginner)
                .build()
        })
        .collect();
    let mut profile = Profile::new(Goal::Strength);
    profile.fitness_experience = Some(FitnessExperience::Beginner);
    profile.constraints = vec![Constraint::NoJumping];

    let pool = filter_exercises_by_constraints(&refs(&catalog), &snapshot(&profile));
    assert_eq!(pool.exercises.len(), 3);
    assert_eq!(
        pool.report.fallback,
        Some(FallbackTier::EquipmentAndDifficulty)
    );
    assert_eq!(pool.report.output_count, 3);
}

#[test]
fn test_fallback_equipment_only() {
    let catalog = vec![
        ExerciseFixture::new("snatch")
            .pattern("carry")
            .difficulty(Difficulty::Advanced)
            .build(),
        ExerciseFixture::new("pistol_squat")
            .pattern("squat")
            .difficulty(Difficulty::Advanced)
            .build(),
    ];
    let mut profile = Profile::new(Goal::Strength);
    profile.fitness_experience = Some(FitnessExperience::Beginner);

    let pool = filter_exercises_by_constraints(&refs(&catalog), &snapshot(&profile));
    assert_eq!(pool.exercises.len(), 2);
    assert_eq!(pool.report.fallback, Some(FallbackTier::EquipmentOnly));
}

#[test]
fn test_fallback_adds_bodyweight() {
    let catalog = equipment_catalog();
    let mut profile = Profile::new(Goal::Strength);
    profile.equipment = vec!["kettlebell".to_owned()];

    let pool = filter_exercises_by_constraints(&refs(&catalog), &snapshot(&profile));
    assert_eq!(ids(&pool), vec!["air_squat"]);
    assert_eq!(
        pool.report.fallback,
        Some(FallbackTier::EquipmentPlusBodyweight)
    );
}

#[test]
fn test_fallback_entire_input() {
    let catalog = vec![ExerciseFixture::new("dumbbell_curl")
        .pattern("pull")
        .equipment(&["Dumbbell"])
        .build()];
    let mut profile = Profile::new(Goal::Strength);
    profile.equipment = vec!["kettlebell".to_owned()];

    let pool = filter_exercises_by_constraints(&refs(&catalog), &snapshot(&profile));
    assert_eq!(ids(&pool), vec!["dumbbell_curl"]);
    assert_eq!(pool.report.fallback, Some(FallbackTier::EntireInput));
}

// ============================================================================
// Hard Safety Gate
// ============================================================================

#[test]
fn test_safe_in_phase() {
    let tagged = ExerciseFixture::new("walk")
        .safe_from(RecoveryPhase::Early)
        .build();
    let untagged = ExerciseFixture::new("mystery").build();

    assert!(!safe_in_phase(&tagged, RecoveryPhase::Immediate));
    assert!(safe_in_phase(&tagged, RecoveryPhase::Early));
    assert!(safe_in_phase(&tagged, RecoveryPhase::Late));
    assert!(!safe_in_phase(&untagged, RecoveryPhase::Late));
    assert!(safe_in_phase(&untagged, RecoveryPhase::Maintenance));
}

#[test]
fn test_hard_gate_removes_exclusions_and_uncleared() {
    let catalog = sample_catalog();
    let excluded = vec!["goblet_squat_0".to_owned(), "not_in_catalog".to_owned()];

    let maintenance = hard_safety_gate(&catalog, &excluded, RecoveryPhase::Maintenance);
    assert_eq!(maintenance.len(), 47);
    assert!(maintenance.iter().all(|e| e.id != "goblet_squat_0"));

    let immediate = hard_safety_gate(&catalog, &excluded, RecoveryPhase::Immediate);
    assert!(immediate
        .iter()
        .all(|e| e.earliest_safe_phase == Some(RecoveryPhase::Immediate)));
    // goblet_squat_{0,5,10}, incline_press/cable_row_{0,5}, dead_bug/farmer_carry_{0,5}, minus one
    assert_eq!(immediate.len(), 10);
}

#[test]
fn test_cascade_never_reintroduces_gated_exercises() {
    let catalog = sample_catalog();
    let mut profile = base_profile();
    profile
        .surgeries
        .push(surgery(SurgeryType::TopSurgery, days_before(monday(), 4)));
    profile.equipment = vec!["kettlebell".to_owned()];

    let snap = snapshot(&profile);
    let gated = hard_safety_gate(&catalog, &[], snap.recovery_phase);
    let pool = filter_exercises_by_constraints(&gated, &snap);

    assert!(pool.report.fallback.is_some());
    assert!(pool
        .exercises
        .iter()
        .all(|e| e.earliest_safe_phase == Some(RecoveryPhase::Immediate)));
}
