// ABOUTME: Integration tests for the profile store and form handlers
// ABOUTME: Default document, saving personal data and goals, warnings, and notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::raw;
use nutri_advisor::config::NutritionConfig;
use nutri_advisor::profiles::{
    FormOutcome, ProfileForm, ProfileStore, EMPTY_GOALS_MESSAGE, INCOMPLETE_FORM_MESSAGE,
};
use nutri_core::models::NutritionTargets;
use serde_json::json;

fn form() -> ProfileForm {
    common::init_test_logging();
    ProfileForm::new(NutritionConfig::default())
}

fn personal_data() -> serde_json::Value {
    json!({
        "name": "Sam",
        "age": 30,
        "weight": 70.0,
        "height": 175.0,
        "gender": "Male",
        "activity_level": "Sedentary"
    })
}

#[test]
fn test_personal_data_saves_general_info_and_targets() {
    let store = ProfileStore::new();
    let outcome = form()
        .submit_personal_data(&store, "1", &raw(personal_data()))
        .unwrap();

    let FormOutcome::Saved(profile) = outcome else {
        panic!("expected the form to be saved");
    };
    assert_eq!(profile.general.name, "Sam");
    assert_eq!(profile.general.activity_level, "Sedentary");
    // default goals are ["Muscle Gain"]
    assert_eq!(
        profile.nutrition,
        NutritionTargets {
            calories: 2279,
            protein: 171,
            fat: 63,
            carbs: 256
        }
    );
    assert_eq!(store.get("1").unwrap(), *profile);
}

#[test]
fn test_blank_field_leaves_profile_untouched() {
    let store = ProfileStore::new();
    let before = store.get_or_create("1");

    let mut input = personal_data();
    input["height"] = json!(0);
    let outcome = form().submit_personal_data(&store, "1", &raw(input)).unwrap();

    assert_eq!(outcome, FormOutcome::Warning(INCOMPLETE_FORM_MESSAGE.to_owned()));
    assert_eq!(store.get("1").unwrap(), before);
}

#[test]
fn test_invalid_field_warns_with_validation_message() {
    let store = ProfileStore::new();
    let before = store.get_or_create("1");

    let mut input = personal_data();
    input["gender"] = json!("robot");
    let outcome = form().submit_personal_data(&store, "1", &raw(input)).unwrap();

    match outcome {
        FormOutcome::Warning(message) => assert!(message.contains("gender")),
        FormOutcome::Saved(_) => panic!("invalid gender was saved"),
    }
    assert_eq!(store.get("1").unwrap(), before);
}

#[test]
fn test_goals_form_requires_a_goal() {
    let store = ProfileStore::new();
    let outcome = form().submit_goals(&store, "1", &[]).unwrap();
    assert_eq!(outcome, FormOutcome::Warning(EMPTY_GOALS_MESSAGE.to_owned()));

    let outcome = form()
        .submit_goals(&store, "1", &["  ".to_owned()])
        .unwrap();
    assert!(!outcome.is_saved());
}

#[test]
fn test_goals_form_reestimates_targets() {
    let store = ProfileStore::new();
    let form = form();
    form.submit_personal_data(&store, "1", &raw(personal_data()))
        .unwrap();

    let outcome = form
        .submit_goals(&store, "1", &["Fat Loss".to_owned()])
        .unwrap();
    assert!(outcome.is_saved());

    let profile = store.get("1").unwrap();
    assert_eq!(profile.goals, vec!["Fat Loss".to_owned()]);
    assert_eq!(profile.nutrition.calories, 1479);
    assert_eq!(profile.nutrition.protein, 148);
}

#[test]
fn test_notes_round_through_export() {
    let store = ProfileStore::new();
    store.get_or_create("1");
    let note = store.add_note("1", "lactose intolerant").unwrap();

    let export = store.export("1").unwrap();
    assert_eq!(export["notes"][0]["text"], "lactose intolerant");
    assert_eq!(export["profile"]["general"]["age"], 30);

    assert!(store.delete_note(note.id));
    assert!(store.notes_for("1").is_empty());
    assert!(store.export("2").is_none());
}
