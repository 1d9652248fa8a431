// ABOUTME: Food fact tools backed by USDA FoodData Central and Spoonacular image analysis
// ABOUTME: Implements lookup_food_nutrition and identify_food_image
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Tools
//!
//! - `LookupFoodNutritionTool` - calories and macros per 100 g for a named food
//! - `IdentifyFoodImageTool` - recognize the food in an image URL

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::{AppError, AppResult, ToolError};
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::schema::{JsonSchema, PropertySchema};
use crate::tools::traits::{McpTool, ToolCapabilities};
use nutri_core::constants::tools::{IDENTIFY_FOOD_IMAGE, LOOKUP_FOOD_NUTRITION};

/// Required, non-blank string argument
fn required_string<'a>(tool: &str, args: &'a Value, key: &str) -> AppResult<&'a str> {
    match args.get(key) {
        None | Some(Value::Null) => Err(ToolError::missing_parameter(tool, key).into()),
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim()),
        Some(_) => Err(AppError::from(ToolError::invalid_parameter(
            tool,
            key,
            "must be a non-empty string",
        ))),
    }
}

fn single_string_schema(key: &str, description: &str) -> JsonSchema {
    let mut properties = std::collections::BTreeMap::new();
    properties.insert(key.to_owned(), PropertySchema::new("string", description));
    JsonSchema::object(properties, &[key])
}

// ============================================================================
// LookupFoodNutritionTool
// ============================================================================

/// Tool looking up nutrition facts for a food by name
pub struct LookupFoodNutritionTool;

#[async_trait]
impl McpTool for LookupFoodNutritionTool {
    fn name(&self) -> &'static str {
        LOOKUP_FOOD_NUTRITION
    }

    fn description(&self) -> &'static str {
        "Look up calories, protein, fat and carbohydrates per 100 g for a single named food \
         (e.g. 'chicken breast', 'apple'). Use for questions about what a food contains, \
         not for daily targets."
    }

    fn input_schema(&self) -> JsonSchema {
        single_string_schema("food_name", "Name of the food to look up")
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::EXTERNAL_API
            | ToolCapabilities::REQUIRES_API_KEY
            | ToolCapabilities::READS_DATA
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let food_name = required_string(LOOKUP_FOOD_NUTRITION, &args, "food_name")?;
        debug!(request_id = %ctx.request_id, food_name, "Looking up food nutrition");

        let source = ctx.resources.food_source()?;
        let summary = source.lookup_by_name(food_name).await?;

        Ok(ToolResult::ok(json!({
            "query": food_name,
            "fdc_id": summary.fdc_id,
            "description": summary.description,
            "basis": "per 100 g",
            "calories_kcal": summary.calories_kcal,
            "protein_g": summary.protein_g,
            "fat_g": summary.fat_g,
            "carbs_g": summary.carbs_g,
            "retrieved_at": Utc::now().to_rfc3339(),
        })))
    }
}

// ============================================================================
// IdentifyFoodImageTool
// ============================================================================

/// Tool recognizing the food shown in an image
pub struct IdentifyFoodImageTool;

#[async_trait]
impl McpTool for IdentifyFoodImageTool {
    fn name(&self) -> &'static str {
        IDENTIFY_FOOD_IMAGE
    }

    fn description(&self) -> &'static str {
        "Identify the food shown in an image given its public URL and return the recognized \
         category with a confidence. Use only when the user supplies a food photo."
    }

    fn input_schema(&self) -> JsonSchema {
        single_string_schema("image_url", "Publicly reachable URL of the food image")
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::EXTERNAL_API | ToolCapabilities::REQUIRES_API_KEY
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let image_url = required_string(IDENTIFY_FOOD_IMAGE, &args, "image_url")?;
        debug!(request_id = %ctx.request_id, "Identifying food image");

        let service = ctx.resources.recipe_service()?;
        let analysis = service.analyze_food_image(image_url).await?;

        Ok(ToolResult::ok(json!({
            "image_url": image_url,
            "analysis": analysis,
        })))
    }
}

// ============================================================================
// Tool factory
// ============================================================================

/// Create all food tools for registration
#[must_use]
pub fn create_food_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(LookupFoodNutritionTool),
        Box::new(IdentifyFoodImageTool),
    ]
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::errors::ErrorCode;
    use crate::external::{MockSpoonacularClient, MockUsdaClient};
    use crate::tools::context::ToolResources;

    fn mocked_context() -> ToolExecutionContext {
        let resources = ToolResources::default()
            .with_food_source(Arc::new(MockUsdaClient::new()))
            .with_recipe_service(Arc::new(MockSpoonacularClient));
        ToolExecutionContext::new(Arc::new(resources))
    }

    #[test]
    fn test_required_string() {
        let args = json!({"food_name": "  apple "});
        let tool = LOOKUP_FOOD_NUTRITION;
        assert_eq!(required_string(tool, &args, "food_name").unwrap(), "apple");
        assert!(required_string(tool, &json!({}), "food_name").is_err());
        assert!(required_string(tool, &json!({"food_name": ""}), "food_name").is_err());
    }

    #[tokio::test]
    async fn test_lookup_uses_food_source() {
        let ctx = mocked_context();
        let result = LookupFoodNutritionTool
            .execute(json!({"food_name": "apple"}), &ctx)
            .await
            .unwrap();
        assert!(!result.is_error);
        assert_eq!(result.content["fdc_id"], 171_688);
        assert_eq!(result.content["basis"], "per 100 g");
    }

    #[tokio::test]
    async fn test_lookup_without_key_is_config_missing() {
        let ctx = ToolExecutionContext::new(Arc::new(ToolResources::default()));
        let err = LookupFoodNutritionTool
            .execute(json!({"food_name": "apple"}), &ctx)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigMissing);
    }

    #[tokio::test]
    async fn test_identify_image_passthrough() {
        let ctx = mocked_context();
        let result = IdentifyFoodImageTool
            .execute(json!({"image_url": "https://example.com/pizza.jpg"}), &ctx)
            .await
            .unwrap();
        assert_eq!(result.content["analysis"]["category"]["name"], "pizza");
    }
}
