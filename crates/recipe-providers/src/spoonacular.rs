// ABOUTME: Spoonacular recipe API client implementing RecipeProvider
// ABOUTME: Two-step lookup: complexSearch for an id, then the recipe information endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Spoonacular Recipe API Client
//!
//! A dish name is resolved with two requests:
//!
//! 1. `GET /recipes/complexSearch?query=<dish>&number=1` picks the best match
//! 2. `GET /recipes/{id}/information` returns title, ingredients and steps
//!
//! Each ingredient's `original` line ("2 cups whole milk") becomes the
//! ingredient name with an empty quantity, so quantity phrases stay visible to
//! substring-based diet rules.
//!
//! # API Reference
//! <https://spoonacular.com/food-api/docs>

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use crate::core::RecipeProvider;
use crate::error::{ProviderError, ProviderResult};
use crate::http_client::shared_client;
use crate::models::{Ingredient, Recipe};
use recipe_core::constants::{defaults, messages, service_names};

/// Spoonacular client configuration
#[derive(Debug, Clone)]
pub struct SpoonacularConfig {
    /// API key from <https://spoonacular.com/food-api/console>
    pub api_key: String,
    /// Base URL (default: <https://api.spoonacular.com>)
    pub base_url: String,
}

impl SpoonacularConfig {
    /// Configuration against the public endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: defaults::SPOONACULAR_BASE_URL.to_owned(),
        }
    }

    /// Override the base URL (trailing slashes are ignored)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    id: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeInformation {
    title: Option<String>,
    #[serde(default)]
    extended_ingredients: Vec<ExtendedIngredient>,
    #[serde(default)]
    analyzed_instructions: Vec<AnalyzedInstruction>,
}

#[derive(Debug, Deserialize)]
struct ExtendedIngredient {
    #[serde(default)]
    original: String,
}

#[derive(Debug, Deserialize)]
struct AnalyzedInstruction {
    #[serde(default)]
    steps: Vec<InstructionStep>,
}

#[derive(Debug, Deserialize)]
struct InstructionStep {
    step: String,
}

impl RecipeInformation {
    fn into_recipe(self, requested: &str) -> Recipe {
        let ingredients = self
            .extended_ingredients
            .into_iter()
            .map(|item| Ingredient::new(item.original).with_quantity(""))
            .collect();

        // Only the first instruction block is used; no block at all gets a placeholder
        let steps = self.analyzed_instructions.into_iter().next().map_or_else(
            || vec![messages::NO_STEPS_AVAILABLE.to_owned()],
            |block| block.steps.into_iter().map(|s| s.step).collect(),
        );

        Recipe::new(
            self.title.unwrap_or_else(|| requested.to_owned()),
            ingredients,
            steps,
        )
    }
}

/// Spoonacular-backed recipe provider
pub struct SpoonacularProvider {
    config: SpoonacularConfig,
    http_client: Client,
}

impl SpoonacularProvider {
    /// Create a provider using the shared HTTP client
    #[must_use]
    pub fn new(config: SpoonacularConfig) -> Self {
        Self::with_client(config, shared_client().clone())
    }

    /// Create a provider with a specific HTTP client
    #[must_use]
    pub fn with_client(config: SpoonacularConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> ProviderResult<T> {
        let url = format!("{}{path}", self.config.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(query)
            .query(&[("apiKey", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|source| ProviderError::Network {
                provider: service_names::SPOONACULAR,
                source,
            })?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ProviderResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Http {
                provider: service_names::SPOONACULAR,
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        response.json().await.map_err(|e| ProviderError::Parse {
            provider: service_names::SPOONACULAR,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularProvider {
    fn name(&self) -> &'static str {
        "spoonacular"
    }

    async fn fetch(&self, dish_name: &str) -> ProviderResult<Option<Recipe>> {
        if self.config.api_key.is_empty() {
            return Err(ProviderError::Config {
                provider: service_names::SPOONACULAR,
                message: "API key is empty".to_owned(),
            });
        }

        info!(dish = %dish_name, "Searching Spoonacular");

        let search: SearchResponse = self
            .get_json(
                "/recipes/complexSearch",
                &[("query", dish_name), ("number", "1")],
            )
            .await?;

        let Some(hit) = search.results.first() else {
            info!(dish = %dish_name, "No recipe found in Spoonacular search results");
            return Ok(None);
        };

        debug!(recipe_id = hit.id, "Fetching Spoonacular recipe information");
        let information: RecipeInformation = self
            .get_json(&format!("/recipes/{}/information", hit.id), &[])
            .await?;

        Ok(Some(information.into_recipe(dish_name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_information_maps_original_lines_and_first_instruction_block() {
        let info: RecipeInformation = serde_json::from_str(
            r#"{
                "title": "Classic Pancakes",
                "extendedIngredients": [
                    {"original": "1 cup whole milk", "name": "milk"},
                    {"original": "2 eggs"}
                ],
                "analyzedInstructions": [
                    {"steps": [{"number": 1, "step": "Mix."}, {"number": 2, "step": "Fry."}]},
                    {"steps": [{"number": 1, "step": "Ignored."}]}
                ]
            }"#,
        )
        .unwrap();

        let recipe = info.into_recipe("pancakes");

        assert_eq!(recipe.dish_name, "Classic Pancakes");
        assert_eq!(recipe.ingredients[0].name, "1 cup whole milk");
        assert_eq!(recipe.ingredients[0].quantity.as_deref(), Some(""));
        assert_eq!(recipe.steps, vec!["Mix.", "Fry."]);
    }

    #[test]
    fn test_missing_title_and_instructions_fall_back() {
        let info: RecipeInformation = serde_json::from_str("{}").unwrap();
        let recipe = info.into_recipe("mystery stew");

        assert_eq!(recipe.dish_name, "mystery stew");
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.steps, vec![messages::NO_STEPS_AVAILABLE]);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = SpoonacularConfig::new("key").with_base_url("http://localhost:9999/");
        assert_eq!(config.base_url, "http://localhost:9999");
    }
}
