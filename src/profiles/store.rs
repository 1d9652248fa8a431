// ABOUTME: In-memory profile and note storage backed by DashMap
// ABOUTME: Default profile document, general info, goals, nutrition targets and timestamped notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::debug;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use nutri_core::constants::fields;
use nutri_core::models::{NutritionTargets, RawProfile};

/// Message shown when a goals update carries no goal
pub const EMPTY_GOALS_MESSAGE: &str = "Please select at least one goal.";

/// Personal data as entered on the profile form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralInfo {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    /// Activity level label
    pub activity_level: String,
    /// Gender label
    pub gender: String,
}

impl Default for GeneralInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 30,
            weight: 60.0,
            height: 165.0,
            activity_level: "Moderately Active".to_owned(),
            gender: "Male".to_owned(),
        }
    }
}

impl GeneralInfo {
    /// Raw profile mapping accepted by the profile validator
    #[must_use]
    pub fn to_raw_profile(&self, goals: &[String]) -> RawProfile {
        let mut raw = Map::new();
        raw.insert(fields::WEIGHT_KG.to_owned(), json!(self.weight));
        raw.insert(fields::HEIGHT_CM.to_owned(), json!(self.height));
        raw.insert(fields::AGE.to_owned(), json!(self.age));
        raw.insert(fields::GENDER.to_owned(), json!(self.gender));
        raw.insert(fields::ACTIVITY_LEVEL.to_owned(), json!(self.activity_level));
        raw.insert(fields::GOALS.to_owned(), json!(goals));
        raw
    }
}

/// A stored profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Profile identifier
    pub id: String,
    /// Personal data
    pub general: GeneralInfo,
    /// Goal labels in priority order
    pub goals: Vec<String>,
    /// Current daily targets
    pub nutrition: NutritionTargets,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// The default document a new profile starts from
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            general: GeneralInfo::default(),
            goals: vec!["Muscle Gain".to_owned()],
            nutrition: NutritionTargets::default(),
            updated_at: Utc::now(),
        }
    }

    /// Raw profile for estimation from the stored general info and goals
    #[must_use]
    pub fn to_raw_profile(&self) -> RawProfile {
        self.general.to_raw_profile(&self.goals)
    }
}

/// A free-text note attached to a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Note identifier
    pub id: Uuid,
    /// Owning profile
    pub profile_id: String,
    /// Note body
    pub text: String,
    /// When the note was stored
    pub ingested_at: DateTime<Utc>,
}

/// Process-local profile and note store
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: DashMap<String, UserProfile>,
    notes: DashMap<Uuid, Note>,
}

impl ProfileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a profile, creating the default document when it does not exist
    pub fn get_or_create(&self, id: &str) -> UserProfile {
        self.profiles
            .entry(id.to_owned())
            .or_insert_with(|| {
                debug!(profile_id = id, "Creating default profile");
                UserProfile::new(id)
            })
            .clone()
    }

    /// Fetch a profile
    #[must_use]
    pub fn get(&self, id: &str) -> Option<UserProfile> {
        self.profiles.get(id).map(|entry| entry.clone())
    }

    /// Number of stored profiles
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether no profile is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    fn modify(&self, id: &str, apply: impl FnOnce(&mut UserProfile)) -> AppResult<UserProfile> {
        let mut entry = self
            .profiles
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(format!("Profile {id}")))?;
        apply(&mut entry);
        entry.updated_at = Utc::now();
        Ok(entry.clone())
    }

    /// Replace the personal data of a profile
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the profile does not exist
    pub fn update_general(&self, id: &str, general: GeneralInfo) -> AppResult<UserProfile> {
        self.modify(id, |profile| profile.general = general)
    }

    /// Replace the goals of a profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty goal list and `ResourceNotFound` if the
    /// profile does not exist
    pub fn update_goals(&self, id: &str, goals: Vec<String>) -> AppResult<UserProfile> {
        if goals.iter().all(|goal| goal.trim().is_empty()) {
            return Err(AppError::invalid_input(EMPTY_GOALS_MESSAGE));
        }
        self.modify(id, |profile| profile.goals = goals)
    }

    /// Replace the nutrition targets of a profile
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the profile does not exist
    pub fn update_nutrition(&self, id: &str, nutrition: NutritionTargets) -> AppResult<UserProfile> {
        self.modify(id, |profile| profile.nutrition = nutrition)
    }

    /// Attach a note to a profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for blank text
    pub fn add_note(&self, profile_id: &str, text: &str) -> AppResult<Note> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::invalid_input("Note text cannot be empty"));
        }
        let note = Note {
            id: Uuid::new_v4(),
            profile_id: profile_id.to_owned(),
            text: text.to_owned(),
            ingested_at: Utc::now(),
        };
        self.notes.insert(note.id, note.clone());
        debug!(profile_id, note_id = %note.id, "Stored note");
        Ok(note)
    }

    /// Notes of a profile, oldest first
    #[must_use]
    pub fn notes_for(&self, profile_id: &str) -> Vec<Note> {
        let mut notes: Vec<Note> = self
            .notes
            .iter()
            .filter(|entry| entry.profile_id == profile_id)
            .map(|entry| entry.value().clone())
            .collect();
        notes.sort_by_key(|note| note.ingested_at);
        notes
    }

    /// Delete a note, returning whether it existed
    pub fn delete_note(&self, note_id: Uuid) -> bool {
        self.notes.remove(&note_id).is_some()
    }

    /// Profile and its notes as one JSON document
    #[must_use]
    pub fn export(&self, id: &str) -> Option<Value> {
        let profile = self.get(id)?;
        Some(json!({
            "profile": profile,
            "notes": self.notes_for(id),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_default_document() {
        let store = ProfileStore::new();
        let profile = store.get_or_create("1");
        assert_eq!(profile.general.age, 30);
        assert_eq!(profile.general.activity_level, "Moderately Active");
        assert_eq!(profile.goals, vec!["Muscle Gain".to_owned()]);
        assert_eq!(profile.nutrition, NutritionTargets::default());

        let again = store.get_or_create("1");
        assert_eq!(again.updated_at, profile.updated_at);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_updates_require_existing_profile() {
        let store = ProfileStore::new();
        let err = store
            .update_nutrition("missing", NutritionTargets::default())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
    }

    #[test]
    fn test_empty_goals_rejected() {
        let store = ProfileStore::new();
        store.get_or_create("1");
        let err = store.update_goals("1", Vec::new()).unwrap_err();
        assert_eq!(err.message, EMPTY_GOALS_MESSAGE);
        assert_eq!(store.get("1").unwrap().goals, vec!["Muscle Gain".to_owned()]);
    }

    #[test]
    fn test_notes_are_scoped_to_profile() {
        let store = ProfileStore::new();
        let first = store.add_note("1", "no dairy").unwrap();
        store.add_note("1", "trains mornings").unwrap();
        store.add_note("2", "other person").unwrap();

        let notes = store.notes_for("1");
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].text, "no dairy");

        assert!(store.delete_note(first.id));
        assert!(!store.delete_note(first.id));
        assert_eq!(store.notes_for("1").len(), 1);
        assert!(store.add_note("1", "   ").is_err());
    }

    #[test]
    fn test_raw_profile_uses_validator_field_names() {
        let raw = UserProfile::new("1").to_raw_profile();
        assert_eq!(raw[fields::WEIGHT_KG], json!(60.0));
        assert_eq!(raw[fields::GOALS], json!(["Muscle Gain"]));
    }
}
