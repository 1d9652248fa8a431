// ABOUTME: Integration tests for the calorie and macro estimator
// ABOUTME: Reference scenarios, rounding, goal defaulting, fallback multiplier and energy balance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::reference_profile;
use nutri_advisor::config::NutritionConfig;
use nutri_advisor::intelligence::{
    activity_multiplier, calculate_bmr, calorie_target, estimate_macros_with_config,
};
use nutri_core::models::{ActivityLevel, Gender, Goal, ProfileInput};

fn estimate(profile: &ProfileInput) -> nutri_core::models::MacroEstimate {
    estimate_macros_with_config(profile, &NutritionConfig::default())
}

#[test]
fn test_muscle_gain_reference_scenario() {
    common::init_test_logging();
    let result = estimate(&reference_profile(vec![Goal::MuscleGain]));

    assert!((result.bmr - 1648.75).abs() < 1e-9);
    assert!((result.tdee - 1978.5).abs() < 1e-9);
    assert_eq!(result.calories, 2279);
    assert_eq!(result.protein, 171);
    assert_eq!(result.fat, 63);
    assert_eq!(result.carbs, 256);
    assert_eq!(result.goal.label(), "Muscle Gain");
    assert!(!result.activity_defaulted);
}

#[test]
fn test_fat_loss_rounds_half_away_from_zero() {
    let result = estimate(&reference_profile(vec![Goal::FatLoss]));

    // 1478.5 kcal target
    assert_eq!(result.calories, 1479);
    assert_eq!(result.protein, 148);
    assert_eq!(result.fat, 49);
    assert_eq!(result.carbs, 111);
    assert_eq!(result.goal, Goal::FatLoss);
}

#[test]
fn test_empty_goals_match_stay_active() {
    let empty = estimate(&reference_profile(Vec::new()));
    let stay_active = estimate(&reference_profile(vec![Goal::from_label("Stay Active")]));

    assert_eq!(empty, stay_active);
    assert_eq!(empty.calories, 1979);
    assert_eq!(empty.protein, 148);
    assert_eq!(empty.fat, 66);
    assert_eq!(empty.carbs, 198);
    assert_eq!(empty.goal.label(), "Stay Active");
}

#[test]
fn test_only_first_goal_is_used() {
    let result = estimate(&reference_profile(vec![Goal::FatLoss, Goal::MuscleGain]));
    assert_eq!(result.goal, Goal::FatLoss);
    assert_eq!(result.calories, 1479);
}

#[test]
fn test_other_gender_uses_female_constant() {
    let mut profile = reference_profile(Vec::new());
    profile.gender = Gender::Other;
    let other = estimate(&profile);

    profile.gender = Gender::Female;
    let female = estimate(&profile);

    assert!((other.bmr - 1482.75).abs() < 1e-9);
    assert_eq!(other, female);
    assert_eq!(other.calories, 1779);
    assert_eq!(other.protein, 133);
    assert_eq!(other.fat, 59);
    assert_eq!(other.carbs, 178);
}

#[test]
fn test_unknown_activity_level_defaults_to_sedentary() {
    common::init_test_logging();
    let mut profile = reference_profile(vec![Goal::MuscleGain]);
    profile.activity_level = ActivityLevel::from_label_lossy("Unknown Value");

    let result = estimate(&profile);
    let sedentary = estimate(&reference_profile(vec![Goal::MuscleGain]));

    assert!(result.activity_defaulted);
    assert_eq!(result.calories, sedentary.calories);
    assert!((result.tdee - 1978.5).abs() < 1e-9);

    let multiplier = activity_multiplier(&profile.activity_level, &NutritionConfig::default().activity_factors);
    assert!((multiplier.factor - 1.2).abs() < f64::EPSILON);
    assert!(multiplier.defaulted);
}

#[test]
fn test_activity_factors_scale_tdee() {
    let config = NutritionConfig::default();
    let expected = [
        (ActivityLevel::Sedentary, 1.2),
        (ActivityLevel::LightlyActive, 1.375),
        (ActivityLevel::ModeratelyActive, 1.55),
        (ActivityLevel::VeryActive, 1.725),
        (ActivityLevel::SuperActive, 1.9),
    ];
    for (level, factor) in expected {
        let multiplier = activity_multiplier(&level, &config.activity_factors);
        assert!((multiplier.factor - factor).abs() < f64::EPSILON, "{level}");
        assert!(!multiplier.defaulted);
    }
}

#[test]
fn test_building_blocks() {
    let config = NutritionConfig::default();
    let bmr = calculate_bmr(70.0, 175.0, 30, Gender::Male, &config.bmr);
    assert!((bmr - 1648.75).abs() < 1e-9);

    let adjustments = &config.goal_adjustments;
    assert!((calorie_target(1978.5, Goal::FatLoss, adjustments) - 1478.5).abs() < 1e-9);
    assert!((calorie_target(1978.5, Goal::MuscleGain, adjustments) - 2278.5).abs() < 1e-9);
    assert!((calorie_target(1978.5, Goal::Maintain, adjustments) - 1978.5).abs() < 1e-9);
    assert!(calorie_target(100.0, Goal::FatLoss, adjustments).abs() < f64::EPSILON);
}

#[test]
fn test_estimation_is_idempotent() {
    let profile = reference_profile(vec![Goal::MuscleGain]);
    assert_eq!(estimate(&profile), estimate(&profile));
}

#[test]
fn test_extreme_profile_is_clamped_to_zero() {
    let profile = ProfileInput {
        weight_kg: 1.0,
        height_cm: 1.0,
        age: 120,
        gender: Gender::Female,
        activity_level: ActivityLevel::Sedentary,
        goals: vec![Goal::FatLoss],
    };
    let result = estimate(&profile);
    assert_eq!(result.calories, 0);
    assert_eq!(result.protein, 0);
    assert_eq!(result.fat, 0);
    assert_eq!(result.carbs, 0);
}

#[test]
fn test_energy_balance_bound_across_profiles() {
    let goals = [Goal::FatLoss, Goal::MuscleGain, Goal::Maintain];
    for weight in [45.0, 62.5, 80.0, 110.0, 150.0] {
        for height in [150.0, 165.0, 180.0, 200.0] {
            for age in [18, 35, 60, 85] {
                for gender in Gender::ALL {
                    for level in ActivityLevel::KNOWN {
                        for goal in goals {
                            let profile = ProfileInput {
                                weight_kg: weight,
                                height_cm: height,
                                age,
                                gender,
                                activity_level: level.clone(),
                                goals: vec![goal],
                            };
                            let result = estimate(&profile);
                            assert!(
                                result.energy_balance_error() <= 9.0,
                                "{profile:?} -> {result:?}"
                            );
                        }
                    }
                }
            }
        }
    }
}
