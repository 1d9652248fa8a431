// ABOUTME: Core data models for profiles and nutrition estimates
// ABOUTME: Re-exports profile enumerations, ProfileInput, MacroEstimate and NutritionTargets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Nutrition output models
pub mod nutrition;
/// Profile value objects
pub mod profile;

pub use nutrition::{MacroEstimate, MacroSplit, NutritionTargets};
pub use profile::{ActivityLevel, Gender, Goal, ProfileInput, RawProfile};
