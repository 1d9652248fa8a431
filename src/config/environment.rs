// ABOUTME: Environment-loaded configuration for the advisor's external collaborators
// ABOUTME: API keys and base URLs for USDA and Spoonacular plus shared HTTP client settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use super::error::ConfigError;

/// Default USDA `FoodData` Central base URL
pub const DEFAULT_USDA_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";
/// Default Spoonacular base URL
pub const DEFAULT_SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com";

/// Top-level configuration for everything outside the pure estimator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// USDA `FoodData` Central settings
    pub usda: UsdaApiConfig,
    /// Spoonacular settings
    pub spoonacular: SpoonacularApiConfig,
    /// Shared HTTP client settings
    pub http: HttpClientSettings,
}

impl AdvisorConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            usda: UsdaApiConfig::from_env(),
            spoonacular: SpoonacularApiConfig::from_env(),
            http: HttpClientSettings::from_env()?,
        })
    }
}

/// USDA `FoodData` Central API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsdaApiConfig {
    /// API key (`USDA_API_KEY`)
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL (`USDA_BASE_URL`)
    pub base_url: String,
}

impl Default for UsdaApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_USDA_BASE_URL.to_owned(),
        }
    }
}

impl UsdaApiConfig {
    /// Load USDA configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty_env("USDA_API_KEY"),
            base_url: env_var_or("USDA_BASE_URL", DEFAULT_USDA_BASE_URL),
        }
    }
}

/// Spoonacular API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpoonacularApiConfig {
    /// API key (`SPOONACULAR_API_KEY`)
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL (`SPOONACULAR_BASE_URL`)
    pub base_url: String,
}

impl Default for SpoonacularApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_SPOONACULAR_BASE_URL.to_owned(),
        }
    }
}

impl SpoonacularApiConfig {
    /// Load Spoonacular configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty_env("SPOONACULAR_API_KEY"),
            base_url: env_var_or("SPOONACULAR_BASE_URL", DEFAULT_SPOONACULAR_BASE_URL),
        }
    }
}

/// Timeouts and retry budget shared by all outbound HTTP calls
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HttpClientSettings {
    /// Total request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Retries on transient statuses
    pub max_retries: u32,
}

impl Default for HttpClientSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_retries: 2,
        }
    }
}

impl HttpClientSettings {
    /// Load HTTP settings from environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to something that isn't a number
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            timeout_secs: parse_env_or("HTTP_TIMEOUT_SECS", defaults.timeout_secs)?,
            connect_timeout_secs: parse_env_or(
                "HTTP_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            max_retries: parse_env_or("HTTP_MAX_RETRIES", defaults.max_retries)?,
        })
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Get environment variable, treating blank values as unset
fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env_or<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {key}: {raw}"))),
        Err(_) => Ok(default),
    }
}
