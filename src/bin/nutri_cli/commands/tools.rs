// ABOUTME: Tool listing and invocation commands for nutri-cli
// ABOUTME: Prints registered tool schemas and dispatches a tool call with JSON arguments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use anyhow::{Context, Result};
use nutri_advisor::tools::{ToolExecutionContext, ToolRegistry, ToolResources};
use serde_json::Value;
use tracing::info;

use crate::helpers::display::print_json;

/// List registered tools
pub fn list(names_only: bool) -> Result<()> {
    let registry = ToolRegistry::with_builtin_tools();
    if names_only {
        for name in registry.tool_names() {
            println!("{name}");
        }
        return Ok(());
    }
    print_json(&registry.list_schemas())
}

/// Dispatch a tool call and print the result
///
/// Tool failures are printed as the `{"error": ...}` result; only malformed
/// arguments or configuration abort the command.
pub async fn call(tool: &str, args: &str) -> Result<()> {
    let args: Value =
        serde_json::from_str(args).with_context(|| format!("Arguments are not valid JSON: {args}"))?;

    let registry = ToolRegistry::with_builtin_tools();
    let resources = ToolResources::from_env()?;
    let context = ToolExecutionContext::new(Arc::new(resources));

    let result = registry.dispatch(tool, args, &context).await;
    info!(tool, is_error = result.is_error, "Tool call finished");
    print_json(&result.content)
}
