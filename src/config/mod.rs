// ABOUTME: Configuration management module for estimator constants and collaborator settings
// ABOUTME: Re-exports NutritionConfig, AdvisorConfig and ConfigError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Nutrition**: BMR coefficients, activity factors, goal adjustments and macro splits,
//!   loaded once into a process-wide singleton
//! - **Environment**: API keys, base URLs and HTTP timeouts for external collaborators
//!
//! Configuration comes from environment variables only.

/// Configuration error types
pub mod error;
/// Environment-loaded collaborator configuration
pub mod environment;
/// Estimator constants
pub mod nutrition;

pub use environment::{AdvisorConfig, HttpClientSettings, SpoonacularApiConfig, UsdaApiConfig};
pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentsConfig, MacroSplitsConfig, NutritionConfig,
};
