// ABOUTME: Environment configuration for the recipe assistant
// ABOUTME: Reads data directory, Spoonacular, HTTP, substitution policy and bcrypt settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::{defaults, env_config};
use crate::recipes::SubstitutionPolicy;
use anyhow::{Context, Result};
use recipe_providers::{HttpClientConfig, SpoonacularConfig};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Lowest work factor bcrypt accepts
const MIN_BCRYPT_COST: u32 = 4;
/// Highest work factor bcrypt accepts
const MAX_BCRYPT_COST: u32 = 31;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Installed for real use
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Spoonacular access settings; absent when no API key is configured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpoonacularSettings {
    /// API key sent as the `apiKey` query parameter
    pub api_key: String,
    /// Base URL without trailing slash
    pub base_url: String,
}

impl SpoonacularSettings {
    /// Provider configuration for these settings
    #[must_use]
    pub fn provider_config(&self) -> SpoonacularConfig {
        SpoonacularConfig::new(self.api_key.clone()).with_base_url(self.base_url.clone())
    }
}

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding users, preferences, history, recipes and substitutions
    pub data_dir: PathBuf,
    /// Deployment environment
    pub environment: Environment,
    /// External recipe provider settings
    pub spoonacular: Option<SpoonacularSettings>,
    /// Timeouts for the shared HTTP client
    pub http_client: HttpClientConfig,
    /// Where substitution sits relative to the exclusion check
    pub substitution_policy: SubstitutionPolicy,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(defaults::DATA_DIR),
            environment: Environment::default(),
            spoonacular: None,
            http_client: HttpClientConfig::default(),
            substitution_policy: SubstitutionPolicy::default(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or enumerated variable cannot be parsed,
    /// or if the resulting configuration fails [`AppConfig::validate`]
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(env_config::SPOONACULAR_API_KEY)
            .ok()
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty());

        let spoonacular = match api_key {
            Some(api_key) => Some(SpoonacularSettings {
                api_key,
                base_url: env_var_or(
                    env_config::SPOONACULAR_BASE_URL,
                    defaults::SPOONACULAR_BASE_URL,
                )
                .trim_end_matches('/')
                .to_owned(),
            }),
            None => {
                warn!(
                    "{} is not set; online recipe lookup is disabled",
                    env_config::SPOONACULAR_API_KEY
                );
                None
            }
        };

        let timeout_secs: u64 = env_var_or(
            env_config::HTTP_TIMEOUT_SECS,
            &defaults::HTTP_TIMEOUT_SECS.to_string(),
        )
        .parse()
        .with_context(|| format!("Invalid {} value", env_config::HTTP_TIMEOUT_SECS))?;

        let connect_timeout_secs: u64 = env_var_or(
            env_config::HTTP_CONNECT_TIMEOUT_SECS,
            &defaults::HTTP_CONNECT_TIMEOUT_SECS.to_string(),
        )
        .parse()
        .with_context(|| format!("Invalid {} value", env_config::HTTP_CONNECT_TIMEOUT_SECS))?;

        let substitution_policy = match env::var(env_config::SUBSTITUTION_POLICY) {
            Ok(value) => value.parse().with_context(|| {
                format!("Invalid {} value", env_config::SUBSTITUTION_POLICY)
            })?,
            Err(_) => SubstitutionPolicy::default(),
        };

        let bcrypt_cost = match env::var(env_config::BCRYPT_COST) {
            Ok(value) => value
                .parse()
                .with_context(|| format!("Invalid {} value", env_config::BCRYPT_COST))?,
            Err(_) => default_bcrypt_cost(),
        };

        let config = Self {
            data_dir: PathBuf::from(env_var_or(env_config::DATA_DIR, defaults::DATA_DIR)),
            environment: Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "")),
            spoonacular,
            http_client: HttpClientConfig {
                timeout: Duration::from_secs(timeout_secs),
                connect_timeout: Duration::from_secs(connect_timeout_secs),
            },
            substitution_policy,
            bcrypt_cost,
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Override the data directory (the `--data-dir` flag)
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for a zero timeout or an out-of-range bcrypt cost
    pub fn validate(&self) -> Result<()> {
        if self.http_client.timeout.is_zero() || self.http_client.connect_timeout.is_zero() {
            return Err(anyhow::anyhow!("HTTP timeouts must be greater than zero"));
        }

        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(anyhow::anyhow!(
                "{} must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}, got {}",
                env_config::BCRYPT_COST,
                self.bcrypt_cost
            ));
        }

        if self.http_client.connect_timeout > self.http_client.timeout {
            warn!("HTTP connect timeout exceeds the total request timeout");
        }

        Ok(())
    }

    /// Human-readable configuration summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Assistant Configuration:\n\
             - Data Directory: {}\n\
             - Environment: {}\n\
             - Spoonacular: {}\n\
             - HTTP Timeout: {}s (connect {}s)\n\
             - Substitution Policy: {}\n\
             - bcrypt Cost: {}",
            self.data_dir.display(),
            self.environment,
            self.spoonacular
                .as_ref()
                .map_or("Disabled", |_| "Enabled"),
            self.http_client.timeout.as_secs(),
            self.http_client.connect_timeout.as_secs(),
            self.substitution_policy,
            self.bcrypt_cost,
        )
    }
}

/// Debug builds hash with the minimum cost so registration stays fast
fn default_bcrypt_cost() -> u32 {
    if cfg!(debug_assertions) {
        MIN_BCRYPT_COST
    } else {
        bcrypt::DEFAULT_COST
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
