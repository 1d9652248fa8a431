// ABOUTME: Meal plan tool forwarding a calorie target to the recipe service
// ABOUTME: Implements get_meal_plan, estimating the target from a profile when none is given
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Plan Tools
//!
//! - `GetMealPlanTool` - one-day meal plan for a calorie target
//!
//! The target comes either from an explicit `target_calories` argument or from the
//! estimator run on profile fields. The plan itself is opaque JSON from the service.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use super::profile_args::{args_as_profile, estimate_from_raw, profile_properties};
use crate::errors::{AppError, AppResult};
use crate::external::MealPlanRequest;
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::schema::{JsonSchema, PropertySchema};
use crate::tools::traits::{McpTool, ToolCapabilities};
use nutri_core::constants::tools::GET_MEAL_PLAN;
use nutri_core::models::RawProfile;

/// Upper bound accepted for an explicit calorie target
const MAX_TARGET_CALORIES: f64 = 10_000.0;

fn optional_string(raw: &RawProfile, key: &str) -> AppResult<Option<String>> {
    match raw.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.trim().to_owned())),
        Some(Value::Array(items)) => {
            let parts = items
                .iter()
                .map(|item| item.as_str().map(str::trim))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| AppError::invalid_input(format!("{key} must be a list of strings")))?;
            Ok(Some(parts.join(",")).filter(|joined| !joined.is_empty()))
        }
        Some(_) => Err(AppError::invalid_input(format!("{key} must be a string"))),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn explicit_target(raw: &RawProfile) -> AppResult<Option<u32>> {
    match raw.get("target_calories") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => {
            // Bounds apply to the rounded value that is sent to the service
            let calories = value
                .as_f64()
                .map(f64::round)
                .filter(|c| *c >= 1.0 && *c <= MAX_TARGET_CALORIES)
                .ok_or_else(|| {
                    AppError::invalid_input(format!(
                        "target_calories must be a number between 1 and {MAX_TARGET_CALORIES}"
                    ))
                })?;
            Ok(Some(calories as u32))
        }
    }
}

// ============================================================================
// GetMealPlanTool
// ============================================================================

/// Tool requesting a one-day meal plan
pub struct GetMealPlanTool;

#[async_trait]
impl McpTool for GetMealPlanTool {
    fn name(&self) -> &'static str {
        GET_MEAL_PLAN
    }

    fn description(&self) -> &'static str {
        "Generate a one-day meal plan that hits a daily calorie target. Pass target_calories \
         directly, or the person's profile (weight_kg, height_cm, age, gender, activity_level, \
         goals) to have the target estimated first. Optional diet and exclude filters."
    }

    fn input_schema(&self) -> JsonSchema {
        let mut properties = profile_properties();
        properties.insert(
            "target_calories".to_owned(),
            PropertySchema::new("integer", "Daily calorie target; overrides the profile"),
        );
        properties.insert(
            "diet".to_owned(),
            PropertySchema::new("string", "Diet filter, e.g. vegetarian, vegan, paleo"),
        );
        properties.insert(
            "exclude".to_owned(),
            PropertySchema::new("string", "Comma-separated ingredients to exclude"),
        );
        JsonSchema::object(properties, &[])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::EXTERNAL_API
            | ToolCapabilities::REQUIRES_API_KEY
            | ToolCapabilities::MEAL_PLANNING
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let raw = args_as_profile(args)?;

        let (target_calories, estimate) = match explicit_target(&raw)? {
            Some(calories) => (calories, None),
            None => {
                let estimate = estimate_from_raw(&raw, ctx)?;
                (estimate.calories, Some(estimate))
            }
        };
        if target_calories == 0 {
            return Err(AppError::invalid_input(
                "Estimated calorie target is 0; pass target_calories or check the profile",
            ));
        }

        let request = MealPlanRequest {
            target_calories,
            diet: optional_string(&raw, "diet")?,
            exclude: optional_string(&raw, "exclude")?,
        };

        debug!(
            request_id = %ctx.request_id,
            target_calories,
            estimated = estimate.is_some(),
            "Requesting meal plan"
        );

        let service = ctx.resources.recipe_service()?;
        let meal_plan = service.generate_day_plan(&request).await?;

        Ok(ToolResult::ok(json!({
            "target_calories": target_calories,
            "diet": request.diet,
            "exclude": request.exclude,
            "estimate": estimate,
            "meal_plan": meal_plan,
        })))
    }
}

// ============================================================================
// Tool factory
// ============================================================================

/// Create all meal plan tools for registration
#[must_use]
pub fn create_meal_plan_tools() -> Vec<Box<dyn McpTool>> {
    vec![Box::new(GetMealPlanTool)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(value: Value) -> RawProfile {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_exclude_accepts_list() {
        let args = raw(json!({"exclude": ["peanuts", " shellfish "]}));
        assert_eq!(
            optional_string(&args, "exclude").unwrap(),
            Some("peanuts,shellfish".to_owned())
        );
        assert_eq!(optional_string(&raw(json!({"diet": ""})), "diet").unwrap(), None);
        assert!(optional_string(&raw(json!({"diet": 3})), "diet").is_err());
    }

    #[test]
    fn test_explicit_target_bounds() {
        assert_eq!(explicit_target(&raw(json!({}))).unwrap(), None);
        assert_eq!(
            explicit_target(&raw(json!({"target_calories": 1800}))).unwrap(),
            Some(1800)
        );
        assert!(explicit_target(&raw(json!({"target_calories": -5}))).is_err());
        assert!(explicit_target(&raw(json!({"target_calories": 0.4}))).is_err());
        assert_eq!(
            explicit_target(&raw(json!({"target_calories": 0.6}))).unwrap(),
            Some(1)
        );
        assert!(explicit_target(&raw(json!({"target_calories": 10_000.4}))).is_ok());
        assert!(explicit_target(&raw(json!({"target_calories": 10_000.6}))).is_err());
        assert!(explicit_target(&raw(json!({"target_calories": "lots"}))).is_err());
    }
}
