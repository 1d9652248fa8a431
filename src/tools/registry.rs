// ABOUTME: Static registry mapping tool names to handlers, with schema listing and dispatch
// ABOUTME: dispatch() turns every failure into a structured {"error": ...} ToolResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Registry
//!
//! Central registry for tools, providing:
//! - Tool registration and lookup
//! - Feature-flag-based conditional registration
//! - Schema generation for tool listing
//! - Execution, either propagating errors ([`ToolRegistry::execute`]) or folding
//!   them into an error result ([`ToolRegistry::dispatch`])
//!
//! The registry is built once at startup and then used immutably.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::{AppResult, ToolError};

use super::context::ToolExecutionContext;
use super::result::ToolResult;
use super::schema::ToolSchema;
use super::traits::{McpTool, ToolCapabilities};

/// Central registry for tools
pub struct ToolRegistry {
    /// Registered tools by name
    tools: BTreeMap<String, Arc<dyn McpTool>>,
    /// Tool categories for organization
    categories: BTreeMap<String, Vec<String>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
            categories: BTreeMap::new(),
        }
    }

    /// Registry with every built-in tool enabled by feature flags
    #[must_use]
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        registry.register_builtin_tools();
        registry
    }

    /// Register a tool in the registry
    ///
    /// # Returns
    ///
    /// `true` if the tool was registered, `false` if a tool with the same name exists
    pub fn register(&mut self, tool: Arc<dyn McpTool>) -> bool {
        let name = tool.name().to_owned();

        if self.tools.contains_key(&name) {
            warn!("Tool '{}' is already registered, skipping", name);
            return false;
        }

        debug!(
            "Registering tool '{}' with capabilities: {}",
            name,
            tool.capabilities().describe()
        );
        self.tools.insert(name, tool);
        true
    }

    /// Register a tool, failing on a duplicate name
    ///
    /// # Errors
    ///
    /// Returns `ToolError::AlreadyRegistered` if the name is taken
    pub fn try_register(&mut self, tool: Arc<dyn McpTool>) -> Result<(), ToolError> {
        let name = tool.name();
        if self.register(tool) {
            Ok(())
        } else {
            Err(ToolError::already_registered(name))
        }
    }

    /// Register a tool and categorize it
    pub fn register_with_category(&mut self, tool: Arc<dyn McpTool>, category: &str) {
        let name = tool.name().to_owned();
        if self.register(tool) {
            self.categories
                .entry(category.to_owned())
                .or_default()
                .push(name);
        }
    }

    /// Get a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn McpTool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Registered tool names, sorted
    #[must_use]
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Tools in a category, in registration order
    #[must_use]
    pub fn tools_in_category(&self, category: &str) -> Vec<&str> {
        self.categories
            .get(category)
            .map(|names| names.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Category names, sorted
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// Schemas of every registered tool, sorted by name
    #[must_use]
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.tools
            .values()
            .map(|tool| ToolSchema {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
                input_schema: tool.input_schema(),
            })
            .collect()
    }

    /// Tools whose capabilities include `required`
    #[must_use]
    pub fn filter_by_capabilities(&self, required: ToolCapabilities) -> Vec<&str> {
        self.tools
            .iter()
            .filter(|(_, tool)| tool.capabilities().contains(required))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Execute a tool by name
    ///
    /// # Errors
    ///
    /// Returns `AppError` if the tool is not found or its execution fails
    pub async fn execute(
        &self,
        name: &str,
        args: Value,
        context: &ToolExecutionContext,
    ) -> AppResult<ToolResult> {
        let tool = self.get(name).ok_or_else(|| ToolError::not_found(name))?;

        debug!(
            tool = name,
            request_id = %context.request_id,
            profile_id = context.profile_id.as_deref(),
            "Executing tool"
        );
        tool.execute(args, context).await
    }

    /// Execute a tool by name, never failing
    ///
    /// Unknown tools, invalid arguments and collaborator failures all come back as
    /// an error result with an `error` key.
    pub async fn dispatch(
        &self,
        name: &str,
        args: Value,
        context: &ToolExecutionContext,
    ) -> ToolResult {
        match self.execute(name, args, context).await {
            Ok(result) => result,
            Err(error) => {
                warn!(
                    tool = name,
                    request_id = %context.request_id,
                    code = ?error.code,
                    "Tool call failed: {}",
                    error
                );
                ToolResult::from_app_error(&error)
            }
        }
    }

    /// Register all built-in tools based on feature flags
    pub fn register_builtin_tools(&mut self) {
        info!("Registering built-in tools...");

        #[cfg(feature = "tools-estimation")]
        self.register_estimation_tools();

        #[cfg(feature = "tools-meal-plan")]
        self.register_meal_plan_tools();

        #[cfg(feature = "tools-food")]
        self.register_food_tools();

        info!("Registered {} built-in tools", self.len());
    }

    /// Register the calorie/macro estimator
    #[cfg(feature = "tools-estimation")]
    fn register_estimation_tools(&mut self) {
        use super::implementations::nutrition::create_nutrition_tools;
        use nutri_core::constants::tool_categories::ESTIMATION;

        for tool in create_nutrition_tools() {
            self.register_with_category(Arc::from(tool), ESTIMATION);
        }
    }

    /// Register meal planning tools
    #[cfg(feature = "tools-meal-plan")]
    fn register_meal_plan_tools(&mut self) {
        use super::implementations::meal_plan::create_meal_plan_tools;
        use nutri_core::constants::tool_categories::MEAL_PLAN;

        for tool in create_meal_plan_tools() {
            self.register_with_category(Arc::from(tool), MEAL_PLAN);
        }
    }

    /// Register food lookup and recognition tools
    #[cfg(feature = "tools-food")]
    fn register_food_tools(&mut self) {
        use super::implementations::food::create_food_tools;
        use nutri_core::constants::tool_categories::FOOD;

        for tool in create_food_tools() {
            self.register_with_category(Arc::from(tool), FOOD);
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_names())
            .field("categories", &self.categories)
            .finish()
    }
}
