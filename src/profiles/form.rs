// ABOUTME: Form submission handlers for the personal data and goals forms
// ABOUTME: Validates input, re-estimates nutrition targets and saves only on success
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::Value;
use tracing::{debug, info};

use super::store::{GeneralInfo, ProfileStore, UserProfile, EMPTY_GOALS_MESSAGE};
use crate::config::NutritionConfig;
use crate::errors::AppResult;
use crate::intelligence::{estimate_macros_with_config, validate_profile};
use nutri_core::constants::fields;
use nutri_core::models::{NutritionTargets, RawProfile};

/// Message shown when a personal data field is left blank
pub const INCOMPLETE_FORM_MESSAGE: &str = "Please fill in all of the data!";

/// Form fields that must all be filled in
const PERSONAL_DATA_FIELDS: [&str; 6] = [
    "name",
    fields::AGE,
    fields::WEIGHT_ALIAS,
    fields::HEIGHT_ALIAS,
    fields::GENDER,
    fields::ACTIVITY_LEVEL,
];

/// Result of submitting a form
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// Input accepted and stored
    Saved(Box<UserProfile>),
    /// Input rejected; the stored profile is unchanged
    Warning(String),
}

impl FormOutcome {
    /// Whether the submission was stored
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}

/// A blank form value: missing, null, empty text or zero
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

/// Handlers for the profile forms
#[derive(Debug, Clone)]
pub struct ProfileForm {
    nutrition: NutritionConfig,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new(NutritionConfig::global().clone())
    }
}

impl ProfileForm {
    /// Form handlers estimating with `nutrition`
    #[must_use]
    pub const fn new(nutrition: NutritionConfig) -> Self {
        Self { nutrition }
    }

    /// Save the personal data form
    ///
    /// Every field must be filled in and pass profile validation. On success the
    /// general info and freshly estimated nutrition targets replace the stored ones.
    ///
    /// # Errors
    ///
    /// Returns an error only if storing fails; rejected input is a `Warning`
    pub fn submit_personal_data(
        &self,
        store: &ProfileStore,
        id: &str,
        raw: &RawProfile,
    ) -> AppResult<FormOutcome> {
        if PERSONAL_DATA_FIELDS
            .iter()
            .any(|field| is_blank(raw.get(*field)))
        {
            return Ok(FormOutcome::Warning(INCOMPLETE_FORM_MESSAGE.to_owned()));
        }

        // Goals belong to the goals form; estimate with the stored selection only.
        let existing = store.get_or_create(id);
        let mut candidate = raw.clone();
        candidate.insert(fields::GOALS.to_owned(), Value::from(existing.goals));

        let profile = match validate_profile(&candidate) {
            Ok(profile) => profile,
            Err(error) => {
                debug!(profile_id = id, fields = ?error.fields(), "Personal data rejected");
                return Ok(FormOutcome::Warning(error.to_string()));
            }
        };

        let estimate = estimate_macros_with_config(&profile, &self.nutrition);
        let general = GeneralInfo {
            name: raw
                .get("name")
                .and_then(Value::as_str)
                .map(str::trim)
                .unwrap_or_default()
                .to_owned(),
            age: profile.age,
            weight: profile.weight_kg,
            height: profile.height_cm,
            activity_level: profile.activity_level.label().to_owned(),
            gender: profile.gender.label().to_owned(),
        };

        store.update_general(id, general)?;
        let saved = store.update_nutrition(id, NutritionTargets::from(&estimate))?;
        info!(
            profile_id = id,
            calories = estimate.calories,
            goal = %estimate.goal,
            "Personal data saved"
        );
        Ok(FormOutcome::Saved(Box::new(saved)))
    }

    /// Save the goals form
    ///
    /// An empty selection is rejected. Nutrition targets are re-estimated from the
    /// stored personal data when it validates.
    ///
    /// # Errors
    ///
    /// Returns an error only if storing fails; rejected input is a `Warning`
    pub fn submit_goals(
        &self,
        store: &ProfileStore,
        id: &str,
        goals: &[String],
    ) -> AppResult<FormOutcome> {
        let goals: Vec<String> = goals
            .iter()
            .map(|goal| goal.trim().to_owned())
            .filter(|goal| !goal.is_empty())
            .collect();
        if goals.is_empty() {
            return Ok(FormOutcome::Warning(EMPTY_GOALS_MESSAGE.to_owned()));
        }

        store.get_or_create(id);
        let mut saved = store.update_goals(id, goals)?;

        if let Ok(profile) = validate_profile(&saved.to_raw_profile()) {
            let estimate = estimate_macros_with_config(&profile, &self.nutrition);
            saved = store.update_nutrition(id, NutritionTargets::from(&estimate))?;
        }
        info!(profile_id = id, goals = ?saved.goals, "Goals saved");
        Ok(FormOutcome::Saved(Box::new(saved)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form_input(value: Value) -> RawProfile {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_blank_values() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&json!(""))));
        assert!(is_blank(Some(&json!(0))));
        assert!(!is_blank(Some(&json!(0.5))));
        assert!(!is_blank(Some(&json!("Male"))));
    }

    #[test]
    fn test_missing_name_is_warning() {
        let store = ProfileStore::new();
        let form = ProfileForm::new(NutritionConfig::default());
        let raw = form_input(json!({
            "name": "", "age": 30, "weight": 70, "height": 175,
            "gender": "Male", "activity_level": "Sedentary"
        }));
        let outcome = form.submit_personal_data(&store, "1", &raw).unwrap();
        assert_eq!(outcome, FormOutcome::Warning(INCOMPLETE_FORM_MESSAGE.to_owned()));
        assert!(store.get("1").is_none());
    }

    #[test]
    fn test_goals_in_personal_data_are_ignored() {
        let store = ProfileStore::new();
        let form = ProfileForm::new(NutritionConfig::default());
        let raw = form_input(json!({
            "name": "Sam", "age": 30, "weight": 70, "height": 175,
            "gender": "Male", "activity_level": "Sedentary",
            "goals": ["Fat Loss"]
        }));
        let outcome = form.submit_personal_data(&store, "1", &raw).unwrap();
        assert!(outcome.is_saved());

        // Stored goals stay on the default selection and drive the estimate
        let saved = store.get("1").unwrap();
        assert_eq!(saved.goals, vec!["Muscle Gain".to_owned()]);
        assert_eq!(saved.nutrition.calories, 2279);
    }
}
