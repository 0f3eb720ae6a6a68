// ABOUTME: Dietary preferences service backed by preferences.json
// ABOUTME: Unknown users get no restrictions; updates replace the whole configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use tracing::info;

use crate::constants::files;
use crate::errors::AppResult;
use crate::models::{DietMode, DietaryConfiguration};
use crate::storage::JsonStore;

type PreferencesTable = BTreeMap<String, DietaryConfiguration>;

/// Split a comma-separated exclusion list, trimming entries and dropping empty ones
///
/// An empty entry would be a substring of every ingredient name and reject
/// every recipe, so `"onion, ,garlic"` yields `["onion", "garlic"]`.
#[must_use]
pub fn parse_exclusions(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Reads and replaces per-user dietary configuration
#[derive(Debug, Clone)]
pub struct PreferencesService {
    store: JsonStore,
}

impl PreferencesService {
    /// Create a preferences service over `store`
    #[must_use]
    pub const fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Current configuration for `username`, or no restrictions if none was saved
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences file exists but cannot be read
    pub async fn view(&self, username: &str) -> AppResult<DietaryConfiguration> {
        let mut table: PreferencesTable = self.store.load_or_default(files::PREFERENCES).await?;
        Ok(table.remove(username).unwrap_or_default())
    }

    /// Replace the configuration for `username`
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences file cannot be read or written
    pub async fn update(
        &self,
        username: &str,
        diet_mode: DietMode,
        exclusions: Vec<String>,
    ) -> AppResult<DietaryConfiguration> {
        let mut table: PreferencesTable = self.store.load_or_default(files::PREFERENCES).await?;
        let config = DietaryConfiguration::new(diet_mode, exclusions);
        table.insert(username.to_owned(), config.clone());
        self.store.save(files::PREFERENCES, &table).await?;

        info!(
            user.name = %username,
            diet_mode = %config.diet_mode,
            exclusions = config.exclusions.len(),
            "Preferences updated"
        );
        Ok(config)
    }
}
