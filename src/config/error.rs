// ABOUTME: Configuration error types for nutrition and environment configuration
// ABOUTME: Defines error variants for invalid ranges, bad weights and env parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use thiserror::Error;

use crate::errors::AppError;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),

    /// Macro split fractions don't sum to 1.0
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
