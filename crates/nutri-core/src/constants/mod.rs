// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Field names, plausibility ranges, tool identifiers and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Profile field names as they appear in raw input mappings and tool arguments
pub mod fields {
    /// Body weight in kilograms
    pub const WEIGHT_KG: &str = "weight_kg";
    /// Height in centimeters
    pub const HEIGHT_CM: &str = "height_cm";
    /// Age in whole years
    pub const AGE: &str = "age";
    /// Gender label
    pub const GENDER: &str = "gender";
    /// Activity level label
    pub const ACTIVITY_LEVEL: &str = "activity_level";
    /// Ordered goal labels
    pub const GOALS: &str = "goals";

    /// Form alias for `weight_kg`
    pub const WEIGHT_ALIAS: &str = "weight";
    /// Form alias for `height_cm`
    pub const HEIGHT_ALIAS: &str = "height";

    /// Fixed order in which the validator reports violations
    pub const VALIDATION_ORDER: [&str; 6] =
        [WEIGHT_KG, HEIGHT_CM, AGE, GENDER, ACTIVITY_LEVEL, GOALS];
}

/// Plausibility limits enforced by the profile validator
pub mod limits {
    /// Upper bound for body weight (kg), matching the profile form
    pub const MAX_WEIGHT_KG: f64 = 300.0;
    /// Upper bound for height (cm), matching the profile form
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Youngest accepted age
    pub const MIN_AGE: u32 = 1;
    /// Oldest accepted age
    pub const MAX_AGE: u32 = 120;
}

/// Validation reason strings shared between validator and error mapping
pub mod validation {
    /// Reason used when a required field is absent or null
    pub const MISSING_REASON: &str = "is required";
    /// Reason used when a numeric field holds something else
    pub const NOT_A_NUMBER_REASON: &str = "must be a number";
}

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein kcal/g
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Fat kcal/g
    pub const FAT_KCAL_PER_G: f64 = 9.0;
    /// Carbohydrate kcal/g
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
}

/// Tool identifiers exposed to agents
pub mod tools {
    /// Deterministic calorie/macro estimator
    pub const CALCULATE_CALORIES_AND_MACROS: &str = "calculate_calories_and_macros";
    /// Third-party daily meal plan
    pub const GET_MEAL_PLAN: &str = "get_meal_plan";
    /// Nutrition facts by food name
    pub const LOOKUP_FOOD_NUTRITION: &str = "lookup_food_nutrition";
    /// Food recognition from an image URL
    pub const IDENTIFY_FOOD_IMAGE: &str = "identify_food_image";
}

/// Tool category names
pub mod tool_categories {
    /// Estimation tools
    pub const ESTIMATION: &str = "estimation";
    /// Meal planning tools
    pub const MEAL_PLAN: &str = "meal_plan";
    /// Food lookup tools
    pub const FOOD: &str = "food";
}

/// Service names used in logging and external-error messages
pub mod service_names {
    /// This service
    pub const NUTRI_ADVISOR: &str = "nutri_advisor";
    /// USDA `FoodData` Central
    pub const USDA_API: &str = "USDA API";
    /// Spoonacular
    pub const SPOONACULAR_API: &str = "Spoonacular API";
}
