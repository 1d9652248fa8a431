// ABOUTME: Field-level validation error aggregating every violation found in one pass
// ABOUTME: Converts into AppError with InvalidInput code and the violations as details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

use super::{AppError, ErrorCode};
use crate::constants::validation::MISSING_REASON;

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Name of the offending field (e.g. `weight_kg`)
    pub field: String,
    /// Why the value was rejected
    pub reason: String,
}

impl FieldViolation {
    /// Create a new violation
    #[must_use]
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Validation failure carrying all violations, in the validator's field order.
///
/// Never empty when returned by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Violations in fixed field order
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Build from collected violations
    #[must_use]
    pub const fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Single-violation convenience constructor
    #[must_use]
    pub fn single(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(vec![FieldViolation::new(field, reason)])
    }

    /// First violation (the one a single-error UI should show)
    #[must_use]
    pub fn first(&self) -> Option<&FieldViolation> {
        self.violations.first()
    }

    /// Whether the given field was rejected
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Names of all rejected fields, in order
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "invalid profile: {joined}")
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let code = if error
            .violations
            .iter()
            .all(|v| v.reason == MISSING_REASON)
        {
            ErrorCode::MissingRequiredField
        } else {
            ErrorCode::InvalidInput
        };
        Self::new(code, error.to_string()).with_details(json!({
            "violations": error.violations,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_all_violations() {
        let error = ValidationError::new(vec![
            FieldViolation::new("weight_kg", "must be greater than 0"),
            FieldViolation::new("gender", "must be one of Male, Female, Other"),
        ]);
        assert_eq!(
            error.to_string(),
            "invalid profile: weight_kg: must be greater than 0; gender: must be one of Male, Female, Other"
        );
        assert_eq!(error.fields(), vec!["weight_kg", "gender"]);
    }

    #[test]
    fn test_missing_only_maps_to_missing_field_code() {
        let app: AppError = ValidationError::single("age", MISSING_REASON).into();
        assert_eq!(app.code, ErrorCode::MissingRequiredField);
        assert_eq!(app.details["violations"][0]["field"], "age");
    }

    #[test]
    fn test_mixed_violations_map_to_invalid_input() {
        let app: AppError = ValidationError::new(vec![
            FieldViolation::new("age", MISSING_REASON),
            FieldViolation::new("weight_kg", "must be a number"),
        ])
        .into();
        assert_eq!(app.code, ErrorCode::InvalidInput);
        assert!(app.code.is_user_correctable());
    }
}
