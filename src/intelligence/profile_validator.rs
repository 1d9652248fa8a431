// ABOUTME: Profile validator turning raw form or tool-call attributes into a typed ProfileInput
// ABOUTME: Checks presence, numeric ranges and enum membership, aggregating every violation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile Validator
//!
//! Accepts a loosely typed mapping (JSON numbers or numeric strings, any letter
//! case for enum labels, `weight`/`height` aliases from the profile form) and
//! returns either a [`ProfileInput`] or one [`ValidationError`] listing every
//! violation in [`fields::VALIDATION_ORDER`].
//!
//! An empty or absent goal list is valid. Goal labels are normalized here so the
//! estimator never matches strings.

use serde_json::Value;

use nutri_core::constants::fields;
use nutri_core::constants::limits::{MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE};
use nutri_core::constants::validation::{MISSING_REASON, NOT_A_NUMBER_REASON};
use nutri_core::errors::{FieldViolation, ValidationError};
use nutri_core::models::{ActivityLevel, Gender, Goal, ProfileInput, RawProfile};

/// Validate and normalize a raw profile
///
/// # Errors
///
/// Returns a [`ValidationError`] with one entry per rejected field
pub fn validate_profile(raw: &RawProfile) -> Result<ProfileInput, ValidationError> {
    let mut violations = Vec::new();

    let weight_kg = positive_number(
        raw,
        fields::WEIGHT_KG,
        Some(fields::WEIGHT_ALIAS),
        MAX_WEIGHT_KG,
        &mut violations,
    );
    let height_cm = positive_number(
        raw,
        fields::HEIGHT_CM,
        Some(fields::HEIGHT_ALIAS),
        MAX_HEIGHT_CM,
        &mut violations,
    );
    let age = age_in_range(raw, &mut violations);
    let gender = parse_gender(raw, &mut violations);
    let activity_level = parse_activity_level(raw, &mut violations);
    let goals = parse_goals(raw, &mut violations);

    match (weight_kg, height_cm, age, gender, activity_level, goals) {
        (
            Some(weight_kg),
            Some(height_cm),
            Some(age),
            Some(gender),
            Some(activity_level),
            Some(goals),
        ) if violations.is_empty() => Ok(ProfileInput {
            weight_kg,
            height_cm,
            age,
            gender,
            activity_level,
            goals,
        }),
        _ => {
            violations.sort_by_key(|violation| validation_rank(&violation.field));
            Err(ValidationError::new(violations))
        }
    }
}

/// Position of a field in the reporting order; unknown fields go last
fn validation_rank(field: &str) -> usize {
    fields::VALIDATION_ORDER
        .iter()
        .position(|known| *known == field)
        .unwrap_or(fields::VALIDATION_ORDER.len())
}

/// Look up a field, falling back to its alias. `null` counts as absent.
fn lookup<'a>(raw: &'a RawProfile, field: &str, alias: Option<&str>) -> Option<&'a Value> {
    std::iter::once(field)
        .chain(alias)
        .find_map(|key| raw.get(key).filter(|v| !v.is_null()))
}

/// Interpret a JSON number or a numeric string as a finite float
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn positive_number(
    raw: &RawProfile,
    field: &'static str,
    alias: Option<&str>,
    max: f64,
    violations: &mut Vec<FieldViolation>,
) -> Option<f64> {
    let Some(value) = lookup(raw, field, alias) else {
        violations.push(FieldViolation::new(field, MISSING_REASON));
        return None;
    };
    let Some(number) = as_number(value) else {
        violations.push(FieldViolation::new(field, NOT_A_NUMBER_REASON));
        return None;
    };
    if number <= 0.0 || number > max {
        violations.push(FieldViolation::new(
            field,
            format!("must be greater than 0 and at most {max}"),
        ));
        return None;
    }
    Some(number)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn age_in_range(raw: &RawProfile, violations: &mut Vec<FieldViolation>) -> Option<u32> {
    let Some(value) = lookup(raw, fields::AGE, None) else {
        violations.push(FieldViolation::new(fields::AGE, MISSING_REASON));
        return None;
    };
    let Some(number) = as_number(value) else {
        violations.push(FieldViolation::new(fields::AGE, NOT_A_NUMBER_REASON));
        return None;
    };
    if number.fract() != 0.0 {
        violations.push(FieldViolation::new(fields::AGE, "must be a whole number"));
        return None;
    }
    if number < f64::from(MIN_AGE) || number > f64::from(MAX_AGE) {
        violations.push(FieldViolation::new(
            fields::AGE,
            format!("must be between {MIN_AGE} and {MAX_AGE}"),
        ));
        return None;
    }
    // In range and integral, so the cast is exact.
    Some(number as u32)
}

fn parse_gender(raw: &RawProfile, violations: &mut Vec<FieldViolation>) -> Option<Gender> {
    let Some(value) = lookup(raw, fields::GENDER, None) else {
        violations.push(FieldViolation::new(fields::GENDER, MISSING_REASON));
        return None;
    };
    let parsed = value.as_str().and_then(Gender::parse);
    if parsed.is_none() {
        let allowed: Vec<&str> = Gender::ALL.iter().map(|g| g.label()).collect();
        violations.push(FieldViolation::new(
            fields::GENDER,
            format!("must be one of {}", allowed.join(", ")),
        ));
    }
    parsed
}

fn parse_activity_level(
    raw: &RawProfile,
    violations: &mut Vec<FieldViolation>,
) -> Option<ActivityLevel> {
    let Some(value) = lookup(raw, fields::ACTIVITY_LEVEL, None) else {
        violations.push(FieldViolation::new(fields::ACTIVITY_LEVEL, MISSING_REASON));
        return None;
    };
    let parsed = value.as_str().and_then(ActivityLevel::parse);
    if parsed.is_none() {
        let allowed: Vec<String> = ActivityLevel::KNOWN
            .iter()
            .map(|level| level.label().to_owned())
            .collect();
        violations.push(FieldViolation::new(
            fields::ACTIVITY_LEVEL,
            format!("must be one of {}", allowed.join(", ")),
        ));
    }
    parsed
}

fn parse_goals(raw: &RawProfile, violations: &mut Vec<FieldViolation>) -> Option<Vec<Goal>> {
    let goals = match lookup(raw, fields::GOALS, None) {
        None => Some(Vec::new()),
        Some(Value::String(label)) => Some(vec![Goal::from_label(label)]),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(Goal::from_label))
            .collect::<Option<Vec<_>>>(),
        Some(_) => None,
    };
    if goals.is_none() {
        violations.push(FieldViolation::new(
            fields::GOALS,
            "must be a list of goal labels",
        ));
    }
    goals
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawProfile {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_valid_profile() {
        let profile = validate_profile(&raw(json!({
            "weight_kg": 70,
            "height_cm": 175.0,
            "age": 30,
            "gender": "Male",
            "activity_level": "Sedentary",
            "goals": ["Muscle Gain"]
        })))
        .unwrap();
        assert!((profile.weight_kg - 70.0).abs() < f64::EPSILON);
        assert_eq!(profile.age, 30);
        assert_eq!(profile.goals, vec![Goal::MuscleGain]);
    }

    #[test]
    fn test_form_aliases_and_numeric_strings() {
        let profile = validate_profile(&raw(json!({
            "weight": "60.5",
            "height": "165",
            "age": "42",
            "gender": "female",
            "activity_level": "lightly_active"
        })))
        .unwrap();
        assert!((profile.weight_kg - 60.5).abs() < f64::EPSILON);
        assert!((profile.height_cm - 165.0).abs() < f64::EPSILON);
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.activity_level, ActivityLevel::LightlyActive);
        assert!(profile.goals.is_empty());
    }

    #[test]
    fn test_violations_are_aggregated_in_field_order() {
        let err = validate_profile(&raw(json!({
            "weight_kg": -1,
            "age": 0,
            "gender": "robot",
            "activity_level": "Couch Potato",
            "goals": 5
        })))
        .unwrap_err();
        assert_eq!(err.fields(), fields::VALIDATION_ORDER.to_vec());
        assert_eq!(err.violations[1].reason, MISSING_REASON);
    }

    #[test]
    fn test_empty_profile_reports_every_field_in_order() {
        let err = validate_profile(&RawProfile::new()).unwrap_err();
        // goals may be absent, so only the five required fields are reported
        assert_eq!(err.fields(), fields::VALIDATION_ORDER[..5].to_vec());
        assert_eq!(validation_rank(fields::GOALS), 5);
        assert_eq!(validation_rank("name"), fields::VALIDATION_ORDER.len());
    }

    #[test]
    fn test_fractional_age_rejected() {
        let err = validate_profile(&raw(json!({
            "weight_kg": 70,
            "height_cm": 175,
            "age": 30.5,
            "gender": "Male",
            "activity_level": "Sedentary"
        })))
        .unwrap_err();
        assert_eq!(err.fields(), vec!["age"]);
    }

    #[test]
    fn test_null_goals_is_empty() {
        let profile = validate_profile(&raw(json!({
            "weight_kg": 70,
            "height_cm": 175,
            "age": 30,
            "gender": "Other",
            "activity_level": "Super Active",
            "goals": null
        })))
        .unwrap();
        assert!(profile.goals.is_empty());
    }
}
