// ABOUTME: Intelligence module with the deterministic nutrition core
// ABOUTME: Profile validation and calorie/macro estimation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! The reproducible part of the advisor. Raw profile data goes through the
//! [`profile_validator`] and the resulting [`ProfileInput`](nutri_core::models::ProfileInput)
//! feeds the [`macro_estimator`]. Neither module performs I/O.

/// Calorie and macro estimation
pub mod macro_estimator;
/// Raw profile validation and normalization
pub mod profile_validator;

pub use macro_estimator::{
    activity_multiplier, calculate_bmr, calorie_target, estimate_macros,
    estimate_macros_with_config, macro_split_for, ActivityMultiplier,
};
pub use profile_validator::validate_profile;
