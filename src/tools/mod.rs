// ABOUTME: Tool layer exposing the estimator and food collaborators to LLM agents
// ABOUTME: Trait, registry, schemas, results and execution context for compiled-in tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tools
//!
//! Agents see a closed set of tools. Each one declares a name, a description scoped
//! to the questions it answers, a JSON schema for its arguments and capability flags.
//! The [`ToolRegistry`] maps names to handlers and never lets a failure escape
//! [`ToolRegistry::dispatch`] as anything but an `{"error": ...}` result.

/// Execution context and shared resources
pub mod context;
/// Tool implementations by category
pub mod implementations;
/// Name to handler registry
pub mod registry;
/// Tool call results
pub mod result;
/// JSON schema types for tool arguments
pub mod schema;
/// `McpTool` trait and capability flags
pub mod traits;

pub use context::{ToolExecutionContext, ToolResources};
pub use registry::ToolRegistry;
pub use result::ToolResult;
pub use schema::{JsonSchema, PropertySchema, ToolSchema};
pub use traits::{McpTool, ToolCapabilities};
