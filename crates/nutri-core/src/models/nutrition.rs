// ABOUTME: Nutrition output models: macro split fractions, daily estimates and stored targets
// ABOUTME: MacroEstimate is the estimator's result; NutritionTargets is the profile's nutrition section
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::profile::Goal;
use crate::constants::energy::{CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};

/// Share of daily calories allocated to each macronutrient (fractions of 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein fraction
    pub protein: f64,
    /// Fat fraction
    pub fat: f64,
    /// Carbohydrate fraction
    pub carbs: f64,
}

impl MacroSplit {
    /// Create a split from three fractions
    #[must_use]
    pub const fn new(protein: f64, fat: f64, carbs: f64) -> Self {
        Self {
            protein,
            fat,
            carbs,
        }
    }

    /// Sum of the three fractions
    #[must_use]
    pub fn total(&self) -> f64 {
        self.protein + self.fat + self.carbs
    }
}

/// Daily calorie target and macro split in grams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroEstimate {
    /// Goal actually used, reported by its title-cased label
    pub goal: Goal,
    /// Daily calorie target (kcal, rounded)
    pub calories: u32,
    /// Protein (g, rounded)
    pub protein: u32,
    /// Fat (g, rounded)
    pub fat: u32,
    /// Carbohydrates (g, rounded)
    pub carbs: u32,
    /// Basal metabolic rate before rounding
    pub bmr: f64,
    /// Total daily energy expenditure before the goal adjustment
    pub tdee: f64,
    /// Set when the activity level was not in the multiplier table and the
    /// sedentary multiplier was used instead
    pub activity_defaulted: bool,
}

impl MacroEstimate {
    /// Calories implied by the rounded gram values
    #[must_use]
    pub fn macro_calories(&self) -> f64 {
        f64::from(self.protein) * PROTEIN_KCAL_PER_G
            + f64::from(self.fat) * FAT_KCAL_PER_G
            + f64::from(self.carbs) * CARBS_KCAL_PER_G
    }

    /// Absolute difference between the gram-implied calories and `calories`.
    ///
    /// Bounded by 9 kcal: each of the four rounded values is off by at most 0.5.
    #[must_use]
    pub fn energy_balance_error(&self) -> f64 {
        (self.macro_calories() - f64::from(self.calories)).abs()
    }
}

/// Nutrition section of a stored profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Daily calories (kcal)
    pub calories: u32,
    /// Protein (g)
    pub protein: u32,
    /// Fat (g)
    pub fat: u32,
    /// Carbohydrates (g)
    pub carbs: u32,
}

impl Default for NutritionTargets {
    fn default() -> Self {
        Self {
            calories: 2000,
            protein: 140,
            fat: 20,
            carbs: 100,
        }
    }
}

impl From<&MacroEstimate> for NutritionTargets {
    fn from(estimate: &MacroEstimate) -> Self {
        Self {
            calories: estimate.calories,
            protein: estimate.protein,
            fat: estimate.fat,
            carbs: estimate.carbs,
        }
    }
}
