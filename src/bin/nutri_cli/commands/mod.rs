// ABOUTME: Re-exports command modules for nutri-cli
// ABOUTME: Provides access to the estimate, tools and profile commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod estimate;
pub mod profile;
pub mod tools;
