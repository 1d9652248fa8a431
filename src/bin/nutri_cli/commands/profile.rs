// ABOUTME: Profile command for nutri-cli
// ABOUTME: Submits the personal data and goals forms to an in-memory store and prints the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{anyhow, Result};
use clap::Args;
use nutri_advisor::profiles::{FormOutcome, ProfileForm, ProfileStore};
use serde_json::{json, Map};

use crate::helpers::display::print_json;

/// Personal data form fields
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Profile identifier
    #[arg(long, default_value = "1")]
    pub id: String,

    /// Display name
    #[arg(long)]
    pub name: String,

    /// Age in years
    #[arg(long)]
    pub age: u32,

    /// Weight in kilograms
    #[arg(long)]
    pub weight: f64,

    /// Height in centimeters
    #[arg(long)]
    pub height: f64,

    /// Male, Female or Other
    #[arg(long, default_value = "Male")]
    pub gender: String,

    /// Activity level label
    #[arg(long, default_value = "Moderately Active")]
    pub activity_level: String,

    /// Goal label, repeatable
    #[arg(long = "goal")]
    pub goals: Vec<String>,

    /// Note to attach, repeatable
    #[arg(long = "note")]
    pub notes: Vec<String>,
}

fn warn_on(outcome: FormOutcome) -> Result<()> {
    match outcome {
        FormOutcome::Saved(_) => Ok(()),
        FormOutcome::Warning(message) => Err(anyhow!(message)),
    }
}

/// Run the profile command
pub fn run(args: &ProfileArgs) -> Result<()> {
    let store = ProfileStore::new();
    let form = ProfileForm::default();

    let mut personal = Map::new();
    personal.insert("name".to_owned(), json!(args.name));
    personal.insert("age".to_owned(), json!(args.age));
    personal.insert("weight".to_owned(), json!(args.weight));
    personal.insert("height".to_owned(), json!(args.height));
    personal.insert("gender".to_owned(), json!(args.gender));
    personal.insert("activity_level".to_owned(), json!(args.activity_level));

    if !args.goals.is_empty() {
        warn_on(form.submit_goals(&store, &args.id, &args.goals)?)?;
    }
    warn_on(form.submit_personal_data(&store, &args.id, &personal)?)?;

    for note in &args.notes {
        store.add_note(&args.id, note)?;
    }

    let export = store
        .export(&args.id)
        .ok_or_else(|| anyhow!("Profile {} was not stored", args.id))?;
    print_json(&export)
}
