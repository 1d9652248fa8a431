// ABOUTME: Estimate command for nutri-cli
// ABOUTME: Validates profile flags and prints the calorie/macro estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use clap::Args;
use nutri_advisor::intelligence::{estimate_macros, validate_profile};
use nutri_core::constants::fields;
use serde_json::{json, Map};
use tracing::debug;

use crate::helpers::display::{print_json, summarize_estimate};

/// Profile flags
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Body weight in kilograms
    #[arg(long)]
    pub weight_kg: f64,

    /// Height in centimeters
    #[arg(long)]
    pub height_cm: f64,

    /// Age in years
    #[arg(long)]
    pub age: u32,

    /// Male, Female or Other
    #[arg(long)]
    pub gender: String,

    /// Sedentary, Lightly Active, Moderately Active, Very Active or Super Active
    #[arg(long)]
    pub activity_level: String,

    /// Goal label, repeatable; the first one wins
    #[arg(long = "goal")]
    pub goals: Vec<String>,

    /// Print a one-line summary instead of JSON
    #[arg(long)]
    pub summary: bool,
}

/// Run the estimate command
pub fn run(args: &EstimateArgs) -> Result<()> {
    let mut raw = Map::new();
    raw.insert(fields::WEIGHT_KG.to_owned(), json!(args.weight_kg));
    raw.insert(fields::HEIGHT_CM.to_owned(), json!(args.height_cm));
    raw.insert(fields::AGE.to_owned(), json!(args.age));
    raw.insert(fields::GENDER.to_owned(), json!(args.gender));
    raw.insert(fields::ACTIVITY_LEVEL.to_owned(), json!(args.activity_level));
    raw.insert(fields::GOALS.to_owned(), json!(args.goals));

    let profile = validate_profile(&raw)?;
    debug!(?profile, "Validated profile");
    let estimate = estimate_macros(&profile);

    if args.summary {
        println!("{}", summarize_estimate(&estimate));
        Ok(())
    } else {
        print_json(&estimate)
    }
}
