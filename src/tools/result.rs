// ABOUTME: Defines ToolResult, the value every tool execution and dispatch returns
// ABOUTME: Successful content or a structured {"error": ...} object flagged as an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Result Types
//!
//! Collaborator failures never escape the tool layer as Rust errors. They come back
//! as an error result whose content carries an `error` key, and callers check
//! [`ToolResult::is_error`] (or the key) before using the content.

use serde::Serialize;
use serde_json::{json, Value};

use crate::errors::AppError;

/// Result returned by tool execution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResult {
    /// The result value returned to the caller
    pub content: Value,
    /// Whether this result represents an error condition
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful result
    #[must_use]
    pub const fn ok(content: Value) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    /// Create an error result
    #[must_use]
    pub const fn error(content: Value) -> Self {
        Self {
            content,
            is_error: true,
        }
    }

    /// Error result from an [`AppError`]: `{"error", "code", "details"?}`
    #[must_use]
    pub fn from_app_error(error: &AppError) -> Self {
        let mut content = json!({
            "error": error.to_string(),
            "code": error.code,
        });
        if !error.details.is_null() {
            content["details"] = error.details.clone();
        }
        Self::error(content)
    }

    /// The `error` message, if this is an error result
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        if self.is_error {
            self.content.get("error").and_then(Value::as_str)
        } else {
            None
        }
    }
}
