// ABOUTME: Resolves a dish name to a recipe from the local catalog, then the external provider
// ABOUTME: Provider failures are logged and absorbed so callers only ever see found or not found
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Instant;

use recipe_providers::RecipeProvider;
use tracing::debug;

use super::catalog::RecipeCatalog;
use crate::logging::AppLogger;
use crate::models::Recipe;

/// Dish name to recipe lookup, catalog first
#[derive(Clone)]
pub struct RecipeResolver {
    catalog: RecipeCatalog,
    provider: Arc<dyn RecipeProvider>,
}

impl RecipeResolver {
    /// Create a resolver over a catalog and a fallback provider
    #[must_use]
    pub fn new(catalog: RecipeCatalog, provider: Arc<dyn RecipeProvider>) -> Self {
        Self { catalog, provider }
    }

    /// The local catalog
    #[must_use]
    pub const fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    /// Find a recipe for `dish_name`
    ///
    /// The trimmed, lowercased name is matched as a substring against catalog
    /// dish names. Only on a miss is the provider asked, with the name as the
    /// user typed it. Nothing is cached between calls.
    pub async fn resolve(&self, dish_name: &str) -> Option<Recipe> {
        let query = dish_name.trim().to_lowercase();

        if let Some(recipe) = self.catalog.find(&query) {
            debug!(query = %query, dish = %recipe.dish_name, "Resolved from local catalog");
            return Some(recipe.clone());
        }

        let provider = self.provider.name();
        let started = Instant::now();
        match self.provider.fetch(dish_name).await {
            Ok(found) => {
                let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
                AppLogger::log_provider_call(provider, dish_name, found.is_some(), elapsed);
                found
            }
            Err(e) => {
                AppLogger::log_provider_failure(provider, dish_name, &e);
                None
            }
        }
    }
}
