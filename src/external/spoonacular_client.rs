// ABOUTME: Spoonacular API client for daily meal plans and food image recognition
// ABOUTME: Thin HTTP boundary: responses are passed through as JSON without interpretation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Spoonacular API Client
//!
//! Two endpoints are used:
//! - `GET /mealplanner/generate?timeFrame=day&targetCalories=N` for a one-day meal plan
//! - `GET /food/images/analyze?imageUrl=...` for food recognition from a picture
//!
//! The advisor owns neither response shape, so both are returned as raw JSON.
//!
//! # API Reference
//! <https://spoonacular.com/food-api/docs>

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::http_client::{send_with_retry, shared_client};
use super::RecipeService;
use crate::config::{HttpClientSettings, SpoonacularApiConfig};
use crate::errors::{AppError, AppResult};
use nutri_core::constants::service_names::SPOONACULAR_API;

/// Parameters for a one-day meal plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanRequest {
    /// Daily calorie target
    pub target_calories: u32,
    /// Diet filter (e.g. "vegetarian")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    /// Comma-separated ingredients to exclude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
}

impl MealPlanRequest {
    /// Plan with only a calorie target
    #[must_use]
    pub const fn for_calories(target_calories: u32) -> Self {
        Self {
            target_calories,
            diet: None,
            exclude: None,
        }
    }

    /// Query parameters without the API key
    #[must_use]
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("timeFrame", "day".to_owned()),
            ("targetCalories", self.target_calories.to_string()),
        ];
        if let Some(diet) = &self.diet {
            params.push(("diet", diet.clone()));
        }
        if let Some(exclude) = &self.exclude {
            params.push(("exclude", exclude.clone()));
        }
        params
    }
}

/// Spoonacular client configuration
#[derive(Debug, Clone)]
pub struct SpoonacularClientConfig {
    /// API key
    pub api_key: String,
    /// Base URL (default: <https://api.spoonacular.com>)
    pub base_url: String,
    /// Retries on transient HTTP statuses
    pub max_retries: u32,
}

impl SpoonacularClientConfig {
    /// Build from environment-loaded settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when no API key is configured
    pub fn from_settings(api: &SpoonacularApiConfig, http: &HttpClientSettings) -> AppResult<Self> {
        let api_key = api
            .api_key
            .clone()
            .ok_or_else(|| AppError::config_missing("SPOONACULAR_API_KEY is not set"))?;
        Ok(Self {
            api_key,
            base_url: api.base_url.clone(),
            max_retries: http.max_retries,
        })
    }
}

/// Spoonacular HTTP client
pub struct SpoonacularClient {
    config: SpoonacularClientConfig,
}

impl SpoonacularClient {
    /// Create a new client
    #[must_use]
    pub const fn new(config: SpoonacularClientConfig) -> Self {
        Self { config }
    }

    async fn get_json(&self, path: &str, params: &[(&str, String)]) -> AppResult<Value> {
        let url = format!("{}{path}", self.config.base_url);
        let response = send_with_retry(
            || {
                shared_client()
                    .get(&url)
                    .query(params)
                    .query(&[("apiKey", self.config.api_key.as_str())])
            },
            SPOONACULAR_API,
            self.config.max_retries,
        )
        .await?;

        response.json().await.map_err(|e| {
            AppError::external_service(SPOONACULAR_API, format!("JSON parse error: {e}"))
        })
    }
}

#[async_trait]
impl RecipeService for SpoonacularClient {
    async fn generate_day_plan(&self, request: &MealPlanRequest) -> AppResult<Value> {
        self.get_json("/mealplanner/generate", &request.query_params())
            .await
    }

    async fn analyze_food_image(&self, image_url: &str) -> AppResult<Value> {
        self.get_json(
            "/food/images/analyze",
            &[("imageUrl", image_url.to_owned())],
        )
        .await
    }
}

/// Offline stand-in that echoes requests back in the rough shape of the real API
#[derive(Debug, Default)]
pub struct MockSpoonacularClient;

#[async_trait]
impl RecipeService for MockSpoonacularClient {
    async fn generate_day_plan(&self, request: &MealPlanRequest) -> AppResult<Value> {
        Ok(json!({
            "meals": [
                {"id": 1, "title": "Overnight Oats", "servings": 1},
                {"id": 2, "title": "Grilled Chicken Salad", "servings": 1},
                {"id": 3, "title": "Salmon with Rice", "servings": 1}
            ],
            "nutrients": {"calories": f64::from(request.target_calories)}
        }))
    }

    async fn analyze_food_image(&self, image_url: &str) -> AppResult<Value> {
        if image_url.trim().is_empty() {
            return Err(AppError::invalid_input("Image URL cannot be empty"));
        }
        Ok(json!({
            "category": {"name": "pizza", "probability": 0.9},
            "nutrition": {"recipesUsed": 0}
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_include_optional_filters() {
        let mut request = MealPlanRequest::for_calories(2279);
        assert_eq!(
            request.query_params(),
            vec![
                ("timeFrame", "day".to_owned()),
                ("targetCalories", "2279".to_owned()),
            ]
        );

        request.diet = Some("vegetarian".to_owned());
        request.exclude = Some("shellfish".to_owned());
        let params = request.query_params();
        assert!(params.contains(&("diet", "vegetarian".to_owned())));
        assert!(params.contains(&("exclude", "shellfish".to_owned())));
    }

    #[test]
    fn test_missing_api_key_is_config_missing() {
        let result = SpoonacularClientConfig::from_settings(
            &SpoonacularApiConfig::default(),
            &HttpClientSettings::default(),
        );
        assert!(result.is_err());
    }
}
