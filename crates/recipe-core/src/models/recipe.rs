// ABOUTME: Recipe and Ingredient value types as stored in the catalog and history files
// ABOUTME: Free-text ingredient names are matched by lowercase substring containment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A single recipe ingredient
///
/// `name` is free text and may embed quantity phrases ("2 cups flour").
/// Rule matching always runs against the whole lowercased name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name as displayed to the user
    #[serde(default)]
    pub name: String,
    /// Optional quantity text ("200g", "1 cup"); providers may send an empty string
    #[serde(default)]
    pub quantity: Option<String>,
}

impl Ingredient {
    /// Create an ingredient without a quantity
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
        }
    }

    /// Attach a quantity
    #[must_use]
    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    /// Lowercased name used for rule matching
    #[must_use]
    pub fn match_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A recipe, identified nominally by its dish name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Recipe {
    /// Display name of the dish
    #[serde(default)]
    pub dish_name: String,
    /// Ingredients in recipe order
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Preparation steps in order
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Recipe {
    /// Create a recipe from its parts
    pub fn new(
        dish_name: impl Into<String>,
        ingredients: Vec<Ingredient>,
        steps: Vec<String>,
    ) -> Self {
        Self {
            dish_name: dish_name.into(),
            ingredients,
            steps,
        }
    }

    /// Lowercased ingredient names in recipe order, duplicates kept
    #[must_use]
    pub fn ingredient_keys(&self) -> Vec<String> {
        self.ingredients.iter().map(Ingredient::match_key).collect()
    }

    /// Whether the lowercased dish name contains `query` (already lowercased)
    #[must_use]
    pub fn name_contains(&self, query: &str) -> bool {
        self.dish_name.to_lowercase().contains(query)
    }
}
