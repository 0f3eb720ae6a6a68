// ABOUTME: Configuration module for the recipe assistant
// ABOUTME: Re-exports the environment-driven AppConfig and its typed settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables, read once at startup by
//! [`AppConfig::from_env`]. Command-line flags override individual values.

/// Environment-variable configuration
pub mod environment;

pub use environment::{AppConfig, Environment, SpoonacularSettings};
