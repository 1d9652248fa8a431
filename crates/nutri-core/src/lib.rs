// ABOUTME: Core types and constants for the Nutri Advisor nutrition engine
// ABOUTME: Foundation crate with error handling, profile/nutrition models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutri Core
//!
//! Foundation crate providing shared types and constants for the Nutri Advisor
//! nutrition engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, `ValidationError` and `ToolError`
//! - **constants**: Field names, plausibility ranges, tool names and service names
//! - **models**: Profile and nutrition value objects (`ProfileInput`, `MacroEstimate`, ...)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Profile and nutrition data models
pub mod models;
