// ABOUTME: Output helpers for nutri-cli
// ABOUTME: Pretty JSON on stdout and a short human summary of an estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use nutri_core::models::MacroEstimate;
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One-line summary of an estimate
pub fn summarize_estimate(estimate: &MacroEstimate) -> String {
    let mut summary = format!(
        "{}: {} kcal, {} g protein, {} g fat, {} g carbs",
        estimate.goal, estimate.calories, estimate.protein, estimate.fat, estimate.carbs
    );
    if estimate.activity_defaulted {
        summary.push_str(" (activity level not recognized, sedentary assumed)");
    }
    summary
}
