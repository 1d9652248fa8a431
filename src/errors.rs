// ABOUTME: Application error surface for the advisor crate
// ABOUTME: Re-exports the shared error types defined in nutri-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Error types live in `nutri-core` so that models and validation errors share one
//! definition. This module re-exports them under the crate's own path.

pub use nutri_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails, FieldViolation,
    ToolError, ValidationError,
};
