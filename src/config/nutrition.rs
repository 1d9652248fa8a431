// ABOUTME: Nutrition configuration for the calorie/macro estimator
// ABOUTME: BMR coefficients, activity multipliers, goal calorie adjustments and macro split tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Estimation Configuration
//!
//! All constants used by the estimator live here so that they can be inspected,
//! overridden from the environment and validated in one place. Defaults reproduce
//! the reference behavior exactly.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

use nutri_core::models::{ActivityLevel, Goal, MacroSplit};

use super::error::ConfigError;

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

/// Tolerance when checking that a macro split sums to 1.0
const SPLIT_SUM_TOLERANCE: f64 = 1e-6;

/// Nutrition estimation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustment applied per goal
    pub goal_adjustments: GoalAdjustmentsConfig,
    /// Macro split per goal
    pub macro_splits: MacroSplitsConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161), also applied to `Gender::Other`
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2, also the fallback for unrecognized levels
    pub sedentary: f64,
    /// Lightly active: 1.375
    pub lightly_active: f64,
    /// Moderately active: 1.55
    pub moderately_active: f64,
    /// Very active: 1.725
    pub very_active: f64,
    /// Super active: 1.9
    pub super_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            super_active: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Table lookup. `None` for levels outside the table.
    #[must_use]
    pub const fn factor_for(&self, level: &ActivityLevel) -> Option<f64> {
        match level {
            ActivityLevel::Sedentary => Some(self.sedentary),
            ActivityLevel::LightlyActive => Some(self.lightly_active),
            ActivityLevel::ModeratelyActive => Some(self.moderately_active),
            ActivityLevel::VeryActive => Some(self.very_active),
            ActivityLevel::SuperActive => Some(self.super_active),
            ActivityLevel::Unrecognized(_) => None,
        }
    }

    /// Multiplier used when the lookup misses
    #[must_use]
    pub const fn fallback(&self) -> f64 {
        self.sedentary
    }
}

/// Calorie adjustments applied to TDEE per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentsConfig {
    /// Subtracted from TDEE for fat loss (500 kcal)
    pub fat_loss_deficit_kcal: f64,
    /// Added to TDEE for muscle gain (300 kcal)
    pub muscle_gain_surplus_kcal: f64,
}

impl Default for GoalAdjustmentsConfig {
    fn default() -> Self {
        Self {
            fat_loss_deficit_kcal: 500.0,
            muscle_gain_surplus_kcal: 300.0,
        }
    }
}

/// Macro split table per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitsConfig {
    /// Fat loss: 40% protein, 30% fat, 30% carbs
    pub fat_loss: MacroSplit,
    /// Muscle gain: 30% protein, 25% fat, 45% carbs
    pub muscle_gain: MacroSplit,
    /// Maintenance and everything else: 30% protein, 30% fat, 40% carbs
    pub maintain: MacroSplit,
}

impl Default for MacroSplitsConfig {
    fn default() -> Self {
        Self {
            fat_loss: MacroSplit::new(0.40, 0.30, 0.30),
            muscle_gain: MacroSplit::new(0.30, 0.25, 0.45),
            maintain: MacroSplit::new(0.30, 0.30, 0.40),
        }
    }
}

impl MacroSplitsConfig {
    /// Split for a goal
    #[must_use]
    pub const fn split_for(&self, goal: Goal) -> MacroSplit {
        match goal {
            Goal::FatLoss => self.fat_loss,
            Goal::MuscleGain => self.muscle_gain,
            Goal::Maintain => self.maintain,
        }
    }
}

impl NutritionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration: defaults, then environment overrides, then validation
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a value is not finite, a macro split does not sum to 1.0,
    /// an activity factor is below 1.0 or a goal adjustment is negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_finite()?;

        let splits = [
            ("fat_loss", &self.macro_splits.fat_loss),
            ("muscle_gain", &self.macro_splits.muscle_gain),
            ("maintain", &self.macro_splits.maintain),
        ];
        for (name, split) in splits {
            if (split.total() - 1.0).abs() > SPLIT_SUM_TOLERANCE {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} macro split must sum to 1.0, got {}",
                    split.total()
                )));
            }
            if split.protein < 0.0 || split.fat < 0.0 || split.carbs < 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} macro split fractions must be non-negative"
                )));
            }
        }

        let factors = &self.activity_factors;
        let named_factors = [
            ("sedentary", factors.sedentary),
            ("lightly_active", factors.lightly_active),
            ("moderately_active", factors.moderately_active),
            ("very_active", factors.very_active),
            ("super_active", factors.super_active),
        ];
        for (name, factor) in named_factors {
            if factor < 1.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} activity factor must be at least 1.0, got {factor}"
                )));
            }
        }

        if self.goal_adjustments.fat_loss_deficit_kcal < 0.0
            || self.goal_adjustments.muscle_gain_surplus_kcal < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "goal calorie adjustments must be non-negative".to_owned(),
            ));
        }

        Ok(())
    }

    /// Every coefficient, factor, adjustment and split fraction must be finite
    fn validate_finite(&self) -> Result<(), ConfigError> {
        let bmr = &self.bmr;
        let factors = &self.activity_factors;
        let adjustments = &self.goal_adjustments;
        let splits = &self.macro_splits;
        let values = [
            ("bmr.msj_weight_coef", bmr.msj_weight_coef),
            ("bmr.msj_height_coef", bmr.msj_height_coef),
            ("bmr.msj_age_coef", bmr.msj_age_coef),
            ("bmr.msj_male_constant", bmr.msj_male_constant),
            ("bmr.msj_female_constant", bmr.msj_female_constant),
            ("activity_factors.sedentary", factors.sedentary),
            ("activity_factors.lightly_active", factors.lightly_active),
            ("activity_factors.moderately_active", factors.moderately_active),
            ("activity_factors.very_active", factors.very_active),
            ("activity_factors.super_active", factors.super_active),
            ("goal_adjustments.fat_loss_deficit_kcal", adjustments.fat_loss_deficit_kcal),
            ("goal_adjustments.muscle_gain_surplus_kcal", adjustments.muscle_gain_surplus_kcal),
            ("macro_splits.fat_loss.protein", splits.fat_loss.protein),
            ("macro_splits.fat_loss.fat", splits.fat_loss.fat),
            ("macro_splits.fat_loss.carbs", splits.fat_loss.carbs),
            ("macro_splits.muscle_gain.protein", splits.muscle_gain.protein),
            ("macro_splits.muscle_gain.fat", splits.muscle_gain.fat),
            ("macro_splits.muscle_gain.carbs", splits.muscle_gain.carbs),
            ("macro_splits.maintain.protein", splits.maintain.protein),
            ("macro_splits.maintain.fat", splits.maintain.fat),
            ("macro_splits.maintain.carbs", splits.maintain.carbs),
        ];
        match values.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(ConfigError::ValueOutOfRange(format!(
                "{name} must be a finite number, got {value}"
            ))),
            None => Ok(()),
        }
    }

    /// Apply a single environment variable override
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
            "NUTRITION_BMR_MALE_CONSTANT",
            &mut self.bmr.msj_male_constant,
        )?;
        Self::apply_env_var(
            "NUTRITION_BMR_FEMALE_CONSTANT",
            &mut self.bmr.msj_female_constant,
        )?;

        Self::apply_env_var(
            "NUTRITION_FAT_LOSS_DEFICIT_KCAL",
            &mut self.goal_adjustments.fat_loss_deficit_kcal,
        )?;
        Self::apply_env_var(
            "NUTRITION_MUSCLE_GAIN_SURPLUS_KCAL",
            &mut self.goal_adjustments.muscle_gain_surplus_kcal,
        )?;

        Self::apply_env_var(
            "NUTRITION_ACTIVITY_SEDENTARY",
            &mut self.activity_factors.sedentary,
        )?;
        Self::apply_env_var(
            "NUTRITION_ACTIVITY_LIGHTLY_ACTIVE",
            &mut self.activity_factors.lightly_active,
        )?;
        Self::apply_env_var(
            "NUTRITION_ACTIVITY_MODERATELY_ACTIVE",
            &mut self.activity_factors.moderately_active,
        )?;
        Self::apply_env_var(
            "NUTRITION_ACTIVITY_VERY_ACTIVE",
            &mut self.activity_factors.very_active,
        )?;
        Self::apply_env_var(
            "NUTRITION_ACTIVITY_SUPER_ACTIVE",
            &mut self.activity_factors.super_active,
        )?;

        Ok(self)
    }
}
