// ABOUTME: Profile storage and the form handlers that update it
// ABOUTME: Process-local store of profiles and notes, plus personal data and goals forms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profiles
//!
//! Profiles live in memory for the lifetime of the process.

/// Personal data and goals form handlers
pub mod form;
/// `DashMap`-backed profile and note store
pub mod store;

pub use form::{FormOutcome, ProfileForm, INCOMPLETE_FORM_MESSAGE};
pub use store::{GeneralInfo, Note, ProfileStore, UserProfile, EMPTY_GOALS_MESSAGE};
