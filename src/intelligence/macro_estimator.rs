// ABOUTME: Deterministic calorie and macronutrient estimator for validated profiles
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE, goal adjustment and gram conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie/Macro Estimator
//!
//! Pure, synchronous and allocation-free. Given a validated [`ProfileInput`] the
//! estimator always produces a [`MacroEstimate`]; every failure mode is handled by
//! the profile validator before this module runs.
//!
//! # Algorithm
//!
//! 1. Goal: the first listed goal, or [`Goal::DEFAULT`] when none are listed
//! 2. BMR (Mifflin-St Jeor): `10*weight + 6.25*height - 5*age + s`, with `s = +5` for
//!    males and `s = -161` otherwise
//! 3. TDEE: `bmr * activity_factor`; levels outside the table use the sedentary factor
//! 4. Calorie target: `tdee - 500` (fat loss), `tdee + 300` (muscle gain), `tdee` otherwise
//! 5. Grams: `round(target * pct / kcal_per_g)` using the *unrounded* target
//!
//! Rounding is half away from zero: 2278.5 kcal becomes 2279.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use tracing::warn;

use crate::config::nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentsConfig, MacroSplitsConfig, NutritionConfig,
};
use nutri_core::constants::energy::{CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use nutri_core::models::{ActivityLevel, Gender, Goal, MacroEstimate, MacroSplit, ProfileInput};

/// Activity multiplier and whether the table lookup missed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityMultiplier {
    /// Multiplier applied to BMR
    pub factor: f64,
    /// True when the level was not in the table and the sedentary factor was used
    pub defaulted: bool,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// `Gender::Other` takes the female constant. The components are summed in formula
/// order so results are bit-for-bit reproducible.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female | Gender::Other => config.msj_female_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Look up the TDEE multiplier for an activity level
///
/// Unknown levels resolve to the sedentary factor and are reported through
/// [`ActivityMultiplier::defaulted`].
#[must_use]
pub fn activity_multiplier(
    level: &ActivityLevel,
    config: &ActivityFactorsConfig,
) -> ActivityMultiplier {
    config.factor_for(level).map_or_else(
        || {
            warn!(
                activity_level = %level,
                fallback = config.fallback(),
                "Unrecognized activity level, using sedentary multiplier"
            );
            ActivityMultiplier {
                factor: config.fallback(),
                defaulted: true,
            }
        },
        |factor| ActivityMultiplier {
            factor,
            defaulted: false,
        },
    )
}

/// Apply the goal's calorie adjustment to TDEE, clamped at zero
#[must_use]
pub fn calorie_target(tdee: f64, goal: Goal, config: &GoalAdjustmentsConfig) -> f64 {
    let target = match goal {
        Goal::FatLoss => tdee - config.fat_loss_deficit_kcal,
        Goal::MuscleGain => tdee + config.muscle_gain_surplus_kcal,
        Goal::Maintain => tdee,
    };
    target.max(0.0)
}

/// Macro split for a goal
#[must_use]
pub const fn macro_split_for(goal: Goal, config: &MacroSplitsConfig) -> MacroSplit {
    config.split_for(goal)
}

/// Estimate daily calories and macros using the global configuration
#[must_use]
pub fn estimate_macros(profile: &ProfileInput) -> MacroEstimate {
    estimate_macros_with_config(profile, NutritionConfig::global())
}

/// Estimate daily calories and macros with an explicit configuration
#[must_use]
pub fn estimate_macros_with_config(
    profile: &ProfileInput,
    config: &NutritionConfig,
) -> MacroEstimate {
    let goal = profile.primary_goal();

    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    );
    let multiplier = activity_multiplier(&profile.activity_level, &config.activity_factors);
    let tdee = bmr * multiplier.factor;
    let target = calorie_target(tdee, goal, &config.goal_adjustments);
    let split = macro_split_for(goal, &config.macro_splits);

    MacroEstimate {
        goal,
        calories: round_non_negative(target),
        protein: grams(target, split.protein, PROTEIN_KCAL_PER_G),
        fat: grams(target, split.fat, FAT_KCAL_PER_G),
        carbs: grams(target, split.carbs, CARBS_KCAL_PER_G),
        bmr,
        tdee,
        activity_defaulted: multiplier.defaulted,
    }
}

/// Convert a share of the calorie target to grams
fn grams(target_kcal: f64, fraction: f64, kcal_per_gram: f64) -> u32 {
    round_non_negative(target_kcal * fraction / kcal_per_gram)
}

/// Round half away from zero into an unsigned integer
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_non_negative(value: f64) -> u32 {
    // Inputs are clamped at zero and bounded by validated profile limits.
    value.round().max(0.0) as u32
}
