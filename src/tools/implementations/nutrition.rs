// ABOUTME: Calorie and macro estimation tool exposed to agents
// ABOUTME: Implements calculate_calories_and_macros on top of the profile validator and estimator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Tools
//!
//! - `CalculateCaloriesAndMacrosTool` - daily calorie target and macro split in grams
//!
//! The profile argument handling lives in `profile_args` and is shared with the meal
//! plan tool, which accepts the same fields as an alternative to a calorie target.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tracing::debug;

use super::profile_args::{args_as_profile, estimate_from_raw, profile_properties, PROFILE_REQUIRED};
use crate::errors::AppResult;
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::schema::JsonSchema;
use crate::tools::traits::{McpTool, ToolCapabilities};
use nutri_core::constants::tools::CALCULATE_CALORIES_AND_MACROS;

// ============================================================================
// CalculateCaloriesAndMacrosTool
// ============================================================================

/// Tool computing a daily calorie target and protein/fat/carb grams.
pub struct CalculateCaloriesAndMacrosTool;

#[async_trait]
impl McpTool for CalculateCaloriesAndMacrosTool {
    fn name(&self) -> &'static str {
        CALCULATE_CALORIES_AND_MACROS
    }

    fn description(&self) -> &'static str {
        "Calculate a person's daily calorie target and macronutrient split (protein, fat, \
         carbohydrate grams) from weight, height, age, gender, activity level and goal. \
         Use only for questions about how many calories or how much protein/fat/carbs \
         someone should eat per day; not for general diet advice or food facts."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(profile_properties(), &PROFILE_REQUIRED)
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::CALCULATION
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        debug!(request_id = %ctx.request_id, "Calculating calories and macros");

        let raw = args_as_profile(args)?;
        let estimate = estimate_from_raw(&raw, ctx)?;

        let mut content = serde_json::to_value(&estimate)?;
        content["calculated_at"] = Value::String(Utc::now().to_rfc3339());
        Ok(ToolResult::ok(content))
    }
}

// ============================================================================
// Tool factory
// ============================================================================

/// Create all nutrition tools for registration
#[must_use]
pub fn create_nutrition_tools() -> Vec<Box<dyn McpTool>> {
    vec![Box::new(CalculateCaloriesAndMacrosTool)]
}
