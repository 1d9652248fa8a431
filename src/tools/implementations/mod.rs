// ABOUTME: Module containing all tool implementations organized by category.
// ABOUTME: Each submodule corresponds to a tool category with feature flag support.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Implementations
//!
//! - `nutrition` - Calorie target and macro split estimation
//! - `meal_plan` - One-day meal plans for a calorie target
//! - `food` - Food nutrition lookup and image recognition
//!
//! Each category is conditionally compiled based on feature flags.

// Profile argument schema and validate-then-estimate helper
#[cfg(any(feature = "tools-estimation", feature = "tools-meal-plan"))]
mod profile_args;

// Estimation tools: calculate_calories_and_macros
#[cfg(feature = "tools-estimation")]
pub mod nutrition;

// Meal plan tools: get_meal_plan
#[cfg(feature = "tools-meal-plan")]
pub mod meal_plan;

// Food tools: lookup_food_nutrition, identify_food_image
#[cfg(feature = "tools-food")]
pub mod food;
