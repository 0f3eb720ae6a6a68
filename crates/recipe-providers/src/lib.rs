// ABOUTME: External recipe provider implementations for the recipe assistant
// ABOUTME: Core provider trait, shared HTTP client, Spoonacular client and in-memory provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External recipe providers and core abstractions.
//!
//! A provider answers one question: given a dish name, is there a recipe?
//! "No" is `Ok(None)`; transport and decoding failures are `Err` and are
//! absorbed by the resolver in the main crate.

pub use recipe_core::errors;
pub use recipe_core::models;

/// Core provider trait and the disabled provider
pub mod core;
/// Provider error type
pub mod error;
/// Shared HTTP client for provider API calls
pub mod http_client;
/// Spoonacular recipe API client
pub mod spoonacular;
/// In-memory provider for offline use and tests
pub mod static_provider;

pub use crate::core::{DisabledProvider, RecipeProvider};
pub use error::{ProviderError, ProviderResult};
pub use http_client::{initialize_shared_client, shared_client, HttpClientConfig};
pub use spoonacular::{SpoonacularConfig, SpoonacularProvider};
pub use static_provider::StaticRecipeProvider;
