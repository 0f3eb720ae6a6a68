// ABOUTME: Local recipe catalog loaded from recipes.json and shared read-only
// ABOUTME: Also loads the substitution table from substitutions.json
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use recipe_compliance::SubstitutionTable;
use tracing::info;

use crate::constants::files;
use crate::errors::AppResult;
use crate::models::Recipe;
use crate::storage::JsonStore;

/// Recipes available without network access, in file order
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Arc<Vec<Recipe>>,
}

impl RecipeCatalog {
    /// Catalog over an in-memory list
    #[must_use]
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: Arc::new(recipes),
        }
    }

    /// Load `recipes.json`; a missing or unparsable file gives an empty catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read
    pub async fn load(store: &JsonStore) -> AppResult<Self> {
        let recipes: Vec<Recipe> = store.load_or_default(files::RECIPES).await?;
        info!(count = recipes.len(), "Recipe catalog loaded");
        Ok(Self::from_recipes(recipes))
    }

    /// First recipe, in file order, whose lowercased dish name contains `query`
    ///
    /// `query` must already be trimmed and lowercased. Duplicate names are
    /// allowed; only the first is ever returned.
    #[must_use]
    pub fn find(&self, query: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.name_contains(query))
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Load `substitutions.json`; keys are lowercased, a missing file gives an empty table
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read
pub async fn load_substitution_table(store: &JsonStore) -> AppResult<SubstitutionTable> {
    let table: SubstitutionTable = store.load_or_default(files::SUBSTITUTIONS).await?;
    info!(count = table.len(), "Substitution table loaded");
    Ok(table)
}
