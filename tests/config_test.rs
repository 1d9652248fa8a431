// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Nutrition coefficient overrides, validation failures and advisor API settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use nutri_advisor::config::{AdvisorConfig, ConfigError, NutritionConfig};
use nutri_core::models::{Goal, MacroSplit};
use serial_test::serial;

const NUTRITION_VARS: [&str; 4] = [
    "NUTRITION_BMR_MALE_CONSTANT",
    "NUTRITION_FAT_LOSS_DEFICIT_KCAL",
    "NUTRITION_MUSCLE_GAIN_SURPLUS_KCAL",
    "NUTRITION_ACTIVITY_SEDENTARY",
];

const ADVISOR_VARS: [&str; 5] = [
    "USDA_API_KEY",
    "SPOONACULAR_API_KEY",
    "SPOONACULAR_BASE_URL",
    "HTTP_TIMEOUT_SECS",
    "HTTP_MAX_RETRIES",
];

fn clear(vars: &[&str]) {
    for var in vars {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_nutrition_defaults_without_env() {
    clear(&NUTRITION_VARS);
    let config = NutritionConfig::load().unwrap();
    assert!((config.bmr.msj_male_constant - 5.0).abs() < f64::EPSILON);
    assert!((config.bmr.msj_female_constant + 161.0).abs() < f64::EPSILON);
    assert!((config.goal_adjustments.fat_loss_deficit_kcal - 500.0).abs() < f64::EPSILON);
    assert_eq!(
        config.macro_splits.split_for(Goal::MuscleGain),
        MacroSplit::new(0.30, 0.25, 0.45)
    );
}

#[test]
#[serial]
fn test_nutrition_env_overrides() {
    clear(&NUTRITION_VARS);
    env::set_var("NUTRITION_FAT_LOSS_DEFICIT_KCAL", "400");
    env::set_var("NUTRITION_ACTIVITY_SEDENTARY", "1.25");

    let config = NutritionConfig::load().unwrap();
    assert!((config.goal_adjustments.fat_loss_deficit_kcal - 400.0).abs() < f64::EPSILON);
    assert!((config.activity_factors.sedentary - 1.25).abs() < f64::EPSILON);

    clear(&NUTRITION_VARS);
}

#[test]
#[serial]
fn test_nutrition_env_parse_error() {
    clear(&NUTRITION_VARS);
    env::set_var("NUTRITION_BMR_MALE_CONSTANT", "five");

    let err = NutritionConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    clear(&NUTRITION_VARS);
}

#[test]
#[serial]
fn test_nutrition_env_validation_error() {
    clear(&NUTRITION_VARS);
    env::set_var("NUTRITION_ACTIVITY_SEDENTARY", "0.9");
    assert!(matches!(
        NutritionConfig::load().unwrap_err(),
        ConfigError::ValueOutOfRange(_)
    ));

    clear(&NUTRITION_VARS);
    env::set_var("NUTRITION_MUSCLE_GAIN_SURPLUS_KCAL", "-10");
    assert!(NutritionConfig::load().is_err());

    clear(&NUTRITION_VARS);
}

#[test]
#[serial]
fn test_nutrition_env_non_finite_rejected() {
    clear(&NUTRITION_VARS);
    env::set_var("NUTRITION_ACTIVITY_SEDENTARY", "NaN");
    assert!(matches!(
        NutritionConfig::load().unwrap_err(),
        ConfigError::ValueOutOfRange(_)
    ));

    clear(&NUTRITION_VARS);
    env::set_var("NUTRITION_FAT_LOSS_DEFICIT_KCAL", "inf");
    assert!(NutritionConfig::load().is_err());

    clear(&NUTRITION_VARS);
    env::set_var("NUTRITION_BMR_MALE_CONSTANT", "NaN");
    assert!(NutritionConfig::load().is_err());

    clear(&NUTRITION_VARS);
}

#[test]
fn test_unbalanced_split_rejected() {
    let mut config = NutritionConfig::default();
    config.macro_splits.maintain = MacroSplit::new(0.5, 0.3, 0.3);
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::InvalidWeights(_)
    ));
}

#[test]
#[serial]
fn test_advisor_config_from_env() {
    clear(&ADVISOR_VARS);
    env::set_var("USDA_API_KEY", "usda-key");
    env::set_var("SPOONACULAR_API_KEY", "   ");
    env::set_var("SPOONACULAR_BASE_URL", "http://localhost:9999");
    env::set_var("HTTP_TIMEOUT_SECS", "5");

    let config = AdvisorConfig::from_env().unwrap();
    assert_eq!(config.usda.api_key.as_deref(), Some("usda-key"));
    assert!(config.spoonacular.api_key.is_none());
    assert_eq!(config.spoonacular.base_url, "http://localhost:9999");
    assert_eq!(config.http.timeout_secs, 5);
    assert_eq!(config.http.max_retries, 2);

    clear(&ADVISOR_VARS);
}

#[test]
#[serial]
fn test_advisor_config_rejects_bad_numbers() {
    clear(&ADVISOR_VARS);
    env::set_var("HTTP_MAX_RETRIES", "lots");
    assert!(matches!(
        AdvisorConfig::from_env().unwrap_err(),
        ConfigError::Parse(_)
    ));
    clear(&ADVISOR_VARS);
}
