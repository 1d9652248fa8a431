// ABOUTME: External API client modules (USDA FoodData Central, Spoonacular)
// ABOUTME: Shared HTTP plumbing plus the collaborator traits the tool layer depends on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! Everything here is an outer collaborator of the estimator. Tools depend on the
//! [`FoodDataSource`] and [`RecipeService`] traits so tests can swap in the mock
//! clients and never touch the network.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppResult;

/// Shared reqwest client and retry policy
pub mod http_client;
/// Spoonacular meal plans and image recognition
pub mod spoonacular_client;
/// USDA `FoodData` Central lookup
pub mod usda_client;

pub use spoonacular_client::{
    MealPlanRequest, MockSpoonacularClient, SpoonacularClient, SpoonacularClientConfig,
};
pub use usda_client::{
    FoodDetails, FoodNutrient, FoodNutritionSummary, FoodSearchResult, MockUsdaClient, UsdaClient,
    UsdaClientConfig,
};

/// Nutrition facts by food name
#[async_trait]
pub trait FoodDataSource: Send + Sync {
    /// Find the best match for `food_name` and summarize it per 100 g
    async fn lookup_by_name(&self, food_name: &str) -> AppResult<FoodNutritionSummary>;
}

/// Meal planning and food recognition
#[async_trait]
pub trait RecipeService: Send + Sync {
    /// One-day meal plan for a calorie target
    async fn generate_day_plan(&self, request: &MealPlanRequest) -> AppResult<Value>;

    /// Recognize the food in an image
    async fn analyze_food_image(&self, image_url: &str) -> AppResult<Value>;
}
