// ABOUTME: Defines the McpTool trait and ToolCapabilities for the static tool registry
// ABOUTME: Tools implement this trait to be registered and executed via the ToolRegistry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Trait and Capabilities
//!
//! All tools implement [`McpTool`], which provides:
//! - Tool metadata (name, description, input schema)
//! - Capability flags for filtering
//! - Async execution with context
//!
//! The set of tools is closed: they are compiled in and registered at startup.

use async_trait::async_trait;
use bitflags::bitflags;
use serde_json::Value;

use crate::errors::AppResult;

use super::context::ToolExecutionContext;
use super::result::ToolResult;
use super::schema::JsonSchema;

bitflags! {
    /// Capabilities that tools declare for filtering and discovery.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u8 {
        /// Pure in-process calculation
        const CALCULATION = 0b0000_0001;
        /// Calls a third-party HTTP API
        const EXTERNAL_API = 0b0000_0010;
        /// Needs an API key from the environment
        const REQUIRES_API_KEY = 0b0000_0100;
        /// Reads nutrition reference data
        const READS_DATA = 0b0000_1000;
        /// Produces meal or recipe suggestions
        const MEAL_PLANNING = 0b0001_0000;
    }
}

impl ToolCapabilities {
    /// Check if the tool leaves the process
    #[must_use]
    pub const fn is_external(self) -> bool {
        self.contains(Self::EXTERNAL_API)
    }

    /// Check if the tool needs an API key
    #[must_use]
    pub const fn requires_api_key(self) -> bool {
        self.contains(Self::REQUIRES_API_KEY)
    }

    /// Get a description of all enabled capabilities for logging
    #[must_use]
    pub fn describe(&self) -> String {
        let parts: Vec<&str> = self
            .iter_names()
            .map(|(name, _)| match name {
                "CALCULATION" => "calculation",
                "EXTERNAL_API" => "external_api",
                "REQUIRES_API_KEY" => "requires_api_key",
                "READS_DATA" => "reads_data",
                "MEAL_PLANNING" => "meal_planning",
                other => other,
            })
            .collect();

        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

/// The trait all tools implement.
///
/// - Tools are `Send + Sync` for sharing across async tasks
/// - `name()` returns `&'static str` for zero-allocation lookup
/// - `execute()` is async for I/O-bound tools
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Unique identifier for the tool (e.g., `calculate_calories_and_macros`)
    fn name(&self) -> &'static str;

    /// Description for agent tool selection
    ///
    /// Must say precisely which questions the tool answers so that a selection
    /// policy does not reach for it on unrelated queries.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters
    fn input_schema(&self) -> JsonSchema;

    /// Capability flags for filtering
    fn capabilities(&self) -> ToolCapabilities;

    /// Execute the tool with given arguments and context
    ///
    /// # Errors
    ///
    /// Returns `AppError` for invalid arguments or collaborator failures
    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let caps = ToolCapabilities::EXTERNAL_API | ToolCapabilities::REQUIRES_API_KEY;
        assert_eq!(caps.describe(), "external_api, requires_api_key");
        assert!(caps.is_external());
        assert_eq!(ToolCapabilities::empty().describe(), "none");
    }
}
