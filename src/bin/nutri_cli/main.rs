// ABOUTME: Nutri CLI - command-line front end for the nutrition advisor
// ABOUTME: Estimates calorie/macro targets, lists and calls tools, and runs the profile forms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Daily calorie target and macro split
//! nutri-cli estimate --weight-kg 70 --height-cm 175 --age 30 --gender male \
//!     --activity-level sedentary --goal "Muscle Gain"
//!
//! # List tool schemas
//! nutri-cli tools
//!
//! # Call a tool with JSON arguments
//! nutri-cli call lookup_food_nutrition '{"food_name": "apple"}'
//!
//! # Fill in the profile forms for a demo profile and print it with its notes
//! nutri-cli profile --name Sam --age 30 --weight 70 --height 175 --gender Male \
//!     --activity-level "Very Active" --goal "Fat Loss" --note "no dairy"
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutri_advisor::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "nutri-cli",
    about = "Nutrition advisor CLI",
    long_about = "Estimate daily calorie and macro targets and exercise the advisor's tools."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Estimate calories and macros for a profile
    Estimate(commands::estimate::EstimateArgs),

    /// List the available tools and their input schemas
    Tools {
        /// Only print tool names
        #[arg(long)]
        names_only: bool,
    },

    /// Call a tool with JSON arguments
    Call {
        /// Tool name
        tool: String,

        /// Arguments as a JSON object
        #[arg(default_value = "{}")]
        args: String,
    },

    /// Run the personal data and goals forms on an in-memory profile
    Profile(commands::profile::ProfileArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().with_level("debug")
    } else {
        LoggingConfig::from_env()
    };
    logging.init()?;

    match cli.command {
        Command::Estimate(args) => commands::estimate::run(&args)?,
        Command::Tools { names_only } => commands::tools::list(names_only)?,
        Command::Call { tool, args } => commands::tools::call(&tool, &args).await?,
        Command::Profile(args) => commands::profile::run(&args)?,
    }

    Ok(())
}
