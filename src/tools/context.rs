// ABOUTME: Defines ToolExecutionContext and ToolResources shared by every tool execution
// ABOUTME: Request id, optional profile id, configuration and lazily built API clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Execution Context
//!
//! Provides a unified context object for tool execution, containing:
//! - Request tracing information
//! - The profile the request is made on behalf of, when known
//! - Access to shared resources (configuration and external API clients)
//!
//! External clients are built on first use so that tools which never leave the
//! process (the estimator) work without any API key configured.

use std::fmt;
use std::sync::{Arc, OnceLock};

use uuid::Uuid;

use crate::config::{AdvisorConfig, ConfigError, NutritionConfig};
use crate::errors::AppResult;
use crate::external::http_client::initialize_shared_client;
use crate::external::{
    FoodDataSource, RecipeService, SpoonacularClient, SpoonacularClientConfig, UsdaClient,
    UsdaClientConfig,
};

/// Shared resources available to tools
pub struct ToolResources {
    nutrition: NutritionConfig,
    advisor: AdvisorConfig,
    food_source: OnceLock<Arc<dyn FoodDataSource>>,
    recipe_service: OnceLock<Arc<dyn RecipeService>>,
}

impl ToolResources {
    /// Create resources from explicit configuration
    #[must_use]
    pub fn new(nutrition: NutritionConfig, advisor: AdvisorConfig) -> Self {
        Self {
            nutrition,
            advisor,
            food_source: OnceLock::new(),
            recipe_service: OnceLock::new(),
        }
    }

    /// Create resources from the global nutrition config and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP setting in the environment is malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(
            NutritionConfig::global().clone(),
            AdvisorConfig::from_env()?,
        ))
    }

    /// Use a specific food data source instead of the USDA client
    #[must_use]
    pub fn with_food_source(mut self, source: Arc<dyn FoodDataSource>) -> Self {
        self.food_source = OnceLock::from(source);
        self
    }

    /// Use a specific recipe service instead of the Spoonacular client
    #[must_use]
    pub fn with_recipe_service(mut self, service: Arc<dyn RecipeService>) -> Self {
        self.recipe_service = OnceLock::from(service);
        self
    }

    /// Estimator configuration
    #[must_use]
    pub const fn nutrition(&self) -> &NutritionConfig {
        &self.nutrition
    }

    /// Collaborator configuration
    #[must_use]
    pub const fn advisor(&self) -> &AdvisorConfig {
        &self.advisor
    }

    /// Food data source, building the USDA client on first use
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` if no source was injected and `USDA_API_KEY` is not set
    pub fn food_source(&self) -> AppResult<Arc<dyn FoodDataSource>> {
        if let Some(source) = self.food_source.get() {
            return Ok(Arc::clone(source));
        }
        let config = UsdaClientConfig::from_settings(&self.advisor.usda, &self.advisor.http)?;
        initialize_shared_client(self.advisor.http);
        let source = self
            .food_source
            .get_or_init(|| Arc::new(UsdaClient::new(config)) as Arc<dyn FoodDataSource>);
        Ok(Arc::clone(source))
    }

    /// Recipe service, building the Spoonacular client on first use
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` if no service was injected and `SPOONACULAR_API_KEY` is not set
    pub fn recipe_service(&self) -> AppResult<Arc<dyn RecipeService>> {
        if let Some(service) = self.recipe_service.get() {
            return Ok(Arc::clone(service));
        }
        let config =
            SpoonacularClientConfig::from_settings(&self.advisor.spoonacular, &self.advisor.http)?;
        initialize_shared_client(self.advisor.http);
        let service = self
            .recipe_service
            .get_or_init(|| Arc::new(SpoonacularClient::new(config)) as Arc<dyn RecipeService>);
        Ok(Arc::clone(service))
    }
}

impl Default for ToolResources {
    fn default() -> Self {
        Self::new(NutritionConfig::default(), AdvisorConfig::default())
    }
}

impl fmt::Debug for ToolResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolResources")
            .field("nutrition", &self.nutrition)
            .field("food_source_ready", &self.food_source.get().is_some())
            .field("recipe_service_ready", &self.recipe_service.get().is_some())
            .finish_non_exhaustive()
    }
}

/// Context provided to every tool execution.
#[derive(Debug, Clone)]
pub struct ToolExecutionContext {
    /// Request ID for tracing/logging
    pub request_id: Uuid,
    /// Profile the request is made on behalf of
    pub profile_id: Option<String>,
    /// Shared resources
    pub resources: Arc<ToolResources>,
}

impl ToolExecutionContext {
    /// Create a new context with a fresh request id
    #[must_use]
    pub fn new(resources: Arc<ToolResources>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            profile_id: None,
            resources,
        }
    }

    /// Set the profile id
    #[must_use]
    pub fn with_profile(mut self, profile_id: impl Into<String>) -> Self {
        self.profile_id = Some(profile_id.into());
        self
    }
}
