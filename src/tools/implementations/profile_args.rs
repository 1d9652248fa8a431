// ABOUTME: Profile-shaped tool arguments shared by the estimation and meal plan tools
// ABOUTME: Argument schema, JSON-object coercion and validate-then-estimate helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::errors::{AppError, AppResult};
use crate::intelligence::{estimate_macros_with_config, validate_profile};
use crate::tools::context::ToolExecutionContext;
use crate::tools::schema::PropertySchema;
use nutri_core::constants::fields;
use nutri_core::models::{ActivityLevel, Gender, Goal, MacroEstimate, RawProfile};

/// Profile fields as tool argument properties
pub(super) fn profile_properties() -> BTreeMap<String, PropertySchema> {
    let mut properties = BTreeMap::new();
    properties.insert(
        fields::WEIGHT_KG.to_owned(),
        PropertySchema::new("number", "Body weight in kilograms (0-300)"),
    );
    properties.insert(
        fields::HEIGHT_CM.to_owned(),
        PropertySchema::new("number", "Height in centimeters (0-250)"),
    );
    properties.insert(
        fields::AGE.to_owned(),
        PropertySchema::new("integer", "Age in years (1-120)"),
    );
    properties.insert(
        fields::GENDER.to_owned(),
        PropertySchema::string_enum("Gender", Gender::ALL.iter().map(|g| g.label())),
    );
    properties.insert(
        fields::ACTIVITY_LEVEL.to_owned(),
        PropertySchema::string_enum(
            "Self-reported activity level",
            ActivityLevel::KNOWN.iter().map(ActivityLevel::label),
        ),
    );
    properties.insert(
        fields::GOALS.to_owned(),
        PropertySchema::array_of(
            "Goals in priority order; only the first is used. Empty means maintenance.",
            PropertySchema::string_enum(
                "Goal",
                [Goal::FatLoss, Goal::MuscleGain, Goal::Maintain].map(Goal::label),
            ),
        ),
    );
    properties
}

/// Required profile fields
pub(super) const PROFILE_REQUIRED: [&str; 5] = [
    fields::WEIGHT_KG,
    fields::HEIGHT_CM,
    fields::AGE,
    fields::GENDER,
    fields::ACTIVITY_LEVEL,
];

/// Interpret tool arguments as a raw profile mapping
pub(super) fn args_as_profile(args: Value) -> AppResult<RawProfile> {
    match args {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(AppError::invalid_input(format!(
            "Tool arguments must be a JSON object, got {other}"
        ))),
    }
}

/// Validate a raw profile and estimate against the context's configuration
pub(super) fn estimate_from_raw(
    raw: &RawProfile,
    ctx: &ToolExecutionContext,
) -> AppResult<MacroEstimate> {
    let profile = validate_profile(raw)?;
    Ok(estimate_macros_with_config(
        &profile,
        ctx.resources.nutrition(),
    ))
}
