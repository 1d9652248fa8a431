// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, sample profiles and tool contexts backed by mock clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutri_advisor`

use std::sync::{Arc, Once};

use nutri_advisor::config::{AdvisorConfig, NutritionConfig};
use nutri_advisor::external::{MockSpoonacularClient, MockUsdaClient};
use nutri_advisor::tools::{ToolExecutionContext, ToolResources};
use nutri_core::models::{ActivityLevel, Gender, Goal, ProfileInput, RawProfile};
use serde_json::{json, Value};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 70 kg, 175 cm, 30 year old sedentary male
pub fn reference_profile(goals: Vec<Goal>) -> ProfileInput {
    ProfileInput {
        weight_kg: 70.0,
        height_cm: 175.0,
        age: 30,
        gender: Gender::Male,
        activity_level: ActivityLevel::Sedentary,
        goals,
    }
}

/// The reference profile as tool-call arguments
pub fn reference_args(goals: &[&str]) -> Value {
    json!({
        "weight_kg": 70,
        "height_cm": 175,
        "age": 30,
        "gender": "Male",
        "activity_level": "Sedentary",
        "goals": goals,
    })
}

/// Convert a JSON object literal into a raw profile
pub fn raw(value: Value) -> RawProfile {
    value.as_object().cloned().unwrap_or_default()
}

/// Tool context with default configuration and no API keys
pub fn offline_context() -> ToolExecutionContext {
    init_test_logging();
    let resources = ToolResources::new(NutritionConfig::default(), AdvisorConfig::default());
    ToolExecutionContext::new(Arc::new(resources))
}

/// Tool context whose collaborators are the mock clients
pub fn mocked_context() -> ToolExecutionContext {
    init_test_logging();
    let resources = ToolResources::new(NutritionConfig::default(), AdvisorConfig::default())
        .with_food_source(Arc::new(MockUsdaClient::new()))
        .with_recipe_service(Arc::new(MockSpoonacularClient));
    ToolExecutionContext::new(Arc::new(resources)).with_profile("1")
}
