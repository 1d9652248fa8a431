// ABOUTME: Main library entry point for the Nutri Advisor nutrition toolkit
// ABOUTME: Profile validation, calorie/macro estimation, food collaborators and agent tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutri Advisor
//!
//! Deterministic daily calorie and macronutrient targets from a person's profile,
//! exposed to LLM agents through a closed set of tools.
//!
//! ## Architecture
//!
//! - **Intelligence**: profile validation and the Mifflin-St Jeor based estimator
//! - **Config**: formula coefficients, activity factors, macro splits, API settings
//! - **External**: USDA `FoodData` Central and Spoonacular HTTP boundaries
//! - **Tools**: static registry mapping tool names to schemas and handlers
//! - **Profiles**: in-memory profile store with notes and form handlers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutri_advisor::intelligence::{estimate_macros, validate_profile};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "weight_kg": 70, "height_cm": 175, "age": 30,
//!     "gender": "Male", "activity_level": "Sedentary", "goals": ["Muscle Gain"]
//! });
//! let profile = validate_profile(raw.as_object().unwrap_or(&serde_json::Map::new()))?;
//! let estimate = estimate_macros(&profile);
//! println!("{} kcal", estimate.calories);
//! # Ok::<(), nutri_advisor::errors::ValidationError>(())
//! ```

/// Configuration management
pub mod config;

/// Error types re-exported from the core crate
pub mod errors;

/// External API clients
pub mod external;

/// Profile validation and macro estimation
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Profile store and forms
pub mod profiles;

/// Agent tools
pub mod tools;
