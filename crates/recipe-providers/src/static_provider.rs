// ABOUTME: In-memory recipe provider keyed by dish name, with a call counter
// ABOUTME: Used for offline runs and to observe provider fallback in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::core::RecipeProvider;
use crate::error::ProviderResult;
use crate::models::Recipe;

/// Provider answering from a fixed map of lowercased dish names
#[derive(Debug, Default)]
pub struct StaticRecipeProvider {
    recipes: HashMap<String, Recipe>,
    calls: AtomicUsize,
}

impl StaticRecipeProvider {
    /// Empty provider: every lookup misses
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a recipe under `dish_name` (matched case-insensitively, exact)
    #[must_use]
    pub fn with_recipe(mut self, dish_name: &str, recipe: Recipe) -> Self {
        self.recipes.insert(dish_name.trim().to_lowercase(), recipe);
        self
    }

    /// Number of `fetch` calls so far
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeProvider for StaticRecipeProvider {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch(&self, dish_name: &str) -> ProviderResult<Option<Recipe>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.recipes.get(&dish_name.trim().to_lowercase()).cloned())
    }
}
