// ABOUTME: Core provider trait for looking up a recipe by dish name
// ABOUTME: Defines the contract every external recipe source implements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Provider Contract
//!
//! Providers map a free-text dish name to at most one recipe in the shared
//! [`Recipe`] model. Provider-specific DTOs stay private to each
//! implementation.
//!
//! ```rust
//! use async_trait::async_trait;
//! use recipe_providers::{models::Recipe, RecipeProvider, ProviderResult};
//!
//! struct Cookbook;
//!
//! #[async_trait]
//! impl RecipeProvider for Cookbook {
//!     fn name(&self) -> &'static str {
//!         "cookbook"
//!     }
//!
//!     async fn fetch(&self, _dish_name: &str) -> ProviderResult<Option<Recipe>> {
//!         Ok(None)
//!     }
//! }
//! ```

use async_trait::async_trait;
use tracing::debug;

use crate::error::ProviderResult;
use crate::models::Recipe;

/// A source of recipes outside the local catalog
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &'static str;

    /// Look up a recipe for `dish_name`
    ///
    /// `dish_name` is passed exactly as the user typed it.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider could not be reached or answered with
    /// something that is not a recipe. "Nothing found" is `Ok(None)`.
    async fn fetch(&self, dish_name: &str) -> ProviderResult<Option<Recipe>>;
}

/// Provider used when no external API is configured; never finds anything
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledProvider;

#[async_trait]
impl RecipeProvider for DisabledProvider {
    fn name(&self) -> &'static str {
        "disabled"
    }

    async fn fetch(&self, dish_name: &str) -> ProviderResult<Option<Recipe>> {
        debug!(dish = %dish_name, "External provider disabled, skipping lookup");
        Ok(None)
    }
}
