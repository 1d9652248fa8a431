// ABOUTME: Validated profile value objects consumed by the calorie/macro estimator
// ABOUTME: Gender, ActivityLevel and Goal enumerations plus the ProfileInput record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Raw, unvalidated profile attributes as submitted by a form or an agent tool call
pub type RawProfile = Map<String, Value>;

/// Gender used by the BMR formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
    /// Other. Shares the female constant in the BMR formula.
    Other,
}

impl Gender {
    /// Every accepted gender, in form order
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    /// Parse a label case-insensitively
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Self-reported activity level driving the TDEE multiplier.
///
/// `Unrecognized` is never produced by the validator. It exists so a caller that
/// bypasses validation can still hand the estimator an arbitrary label, which then
/// resolves to the sedentary multiplier and is flagged on the estimate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise or physical job
    SuperActive,
    /// Label outside the known table
    Unrecognized(String),
}

impl ActivityLevel {
    /// Every recognized level, in form order
    pub const KNOWN: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::SuperActive,
    ];

    /// Strict parse used by the validator (case-insensitive, accepts `snake_case`)
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase().replace('_', " ");
        match normalized.as_str() {
            "sedentary" => Some(Self::Sedentary),
            "lightly active" => Some(Self::LightlyActive),
            "moderately active" => Some(Self::ModeratelyActive),
            "very active" => Some(Self::VeryActive),
            "super active" => Some(Self::SuperActive),
            _ => None,
        }
    }

    /// Lossy parse that keeps unknown labels as `Unrecognized`
    #[must_use]
    pub fn from_label_lossy(label: &str) -> Self {
        Self::parse(label).unwrap_or_else(|| Self::Unrecognized(label.to_owned()))
    }

    /// Display label
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly Active",
            Self::ModeratelyActive => "Moderately Active",
            Self::VeryActive => "Very Active",
            Self::SuperActive => "Super Active",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Whether the level is one of the five known entries
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for ActivityLevel {
    fn from(label: String) -> Self {
        Self::parse(&label).unwrap_or(Self::Unrecognized(label))
    }
}

impl From<ActivityLevel> for String {
    fn from(level: ActivityLevel) -> Self {
        match level {
            ActivityLevel::Unrecognized(raw) => raw,
            known => known.label().to_owned(),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Nutrition goal, normalized from free-text labels at the validation boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    /// Caloric deficit
    FatLoss,
    /// Caloric surplus
    MuscleGain,
    /// Maintenance ("Stay Active"), also the fallback for unknown labels
    Maintain,
}

impl Goal {
    /// Goal assumed when a profile lists none
    pub const DEFAULT: Self = Self::Maintain;

    /// Normalize a free-text label. Unknown labels map to `Maintain`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "fat loss" => Self::FatLoss,
            "muscle gain" => Self::MuscleGain,
            _ => Self::Maintain,
        }
    }

    /// Title-cased label reported back to callers
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FatLoss => "Fat Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::Maintain => "Stay Active",
        }
    }
}

impl From<String> for Goal {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        goal.label().to_owned()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated profile consumed by the estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Body weight in kilograms (> 0)
    pub weight_kg: f64,
    /// Height in centimeters (> 0)
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Gender for the BMR constant
    pub gender: Gender,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Ordered goals; only the first one is used by the estimator
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl ProfileInput {
    /// The authoritative goal: the first listed, or `Goal::DEFAULT` when empty
    #[must_use]
    pub fn primary_goal(&self) -> Goal {
        self.goals.first().copied().unwrap_or(Goal::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_normalization_is_case_insensitive() {
        assert_eq!(Goal::from_label("FAT LOSS"), Goal::FatLoss);
        assert_eq!(Goal::from_label(" muscle gain "), Goal::MuscleGain);
        assert_eq!(Goal::from_label("Stay Active"), Goal::Maintain);
        assert_eq!(Goal::from_label("bulk season"), Goal::Maintain);
    }

    #[test]
    fn test_activity_level_accepts_snake_case() {
        assert_eq!(
            ActivityLevel::parse("moderately_active"),
            Some(ActivityLevel::ModeratelyActive)
        );
        assert_eq!(ActivityLevel::parse("Couch Potato"), None);
    }

    #[test]
    fn test_activity_level_serde_keeps_unknown_label() {
        let level: ActivityLevel = serde_json::from_str("\"Unknown Value\"").unwrap();
        assert_eq!(level, ActivityLevel::Unrecognized("Unknown Value".to_owned()));
        assert!(!level.is_recognized());
        assert_eq!(serde_json::to_string(&level).unwrap(), "\"Unknown Value\"");

        let known: ActivityLevel = serde_json::from_str("\"Very Active\"").unwrap();
        assert_eq!(known, ActivityLevel::VeryActive);
    }

    #[test]
    fn test_primary_goal_defaults_to_maintain() {
        let mut profile = ProfileInput {
            weight_kg: 70.0,
            height_cm: 175.0,
            age: 30,
            gender: Gender::Male,
            activity_level: ActivityLevel::Sedentary,
            goals: vec![],
        };
        assert_eq!(profile.primary_goal(), Goal::Maintain);

        profile.goals = vec![Goal::FatLoss, Goal::MuscleGain];
        assert_eq!(profile.primary_goal(), Goal::FatLoss);
    }
}
