// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, temp data directories, fixture recipes and resource builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `recipe_assistant`

use std::sync::{Arc, Once};

use recipe_assistant::config::AppConfig;
use recipe_assistant::models::{Ingredient, Recipe};
use recipe_assistant::recipes::SubstitutionPolicy;
use recipe_assistant::resources::AppResources;
use recipe_assistant::storage::JsonStore;
use recipe_providers::{RecipeProvider, StaticRecipeProvider};
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

fn ingredient(name: &str, quantity: &str) -> Ingredient {
    Ingredient::new(name).with_quantity(quantity)
}

/// The catalog every pipeline test runs against
pub fn fixture_catalog() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Poutine",
            vec![
                ingredient("french fries", "500g"),
                ingredient("cheese curds", "200g"),
                ingredient("gravy", "1 cup"),
            ],
            vec!["Fry.".into(), "Top.".into()],
        ),
        Recipe::new(
            "Chickpea Salad",
            vec![
                ingredient("chickpeas", "1 can"),
                ingredient("cucumber", "1"),
                ingredient("olive oil", "2 tbsp"),
            ],
            vec!["Toss.".into()],
        ),
        Recipe::new(
            "Potato Salad",
            vec![ingredient("potato", "1 kg"), ingredient("mayonnaise", "1/2 cup")],
            vec!["Boil.".into(), "Mix.".into()],
        ),
        Recipe::new(
            "Chicken Alfredo",
            vec![
                ingredient("fettuccine", "400g"),
                ingredient("chicken breast", "2"),
                ingredient("parmesan cheese", "1 cup"),
            ],
            vec!["Cook.".into()],
        ),
        Recipe::new(
            "Pancakes",
            vec![
                ingredient("flour", "1 cup"),
                ingredient("whole milk", "1 cup"),
                ingredient("egg", "1"),
            ],
            vec!["Whisk.".into(), "Fry.".into()],
        ),
    ]
}

/// A temp data directory holding the fixture catalog and `{milk: oat milk}`
pub async fn seeded_data_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(dir.path());
    store.save("recipes.json", &fixture_catalog()).await.unwrap();

    let mut substitutions = std::collections::BTreeMap::new();
    substitutions.insert("Milk", "oat milk");
    store.save("substitutions.json", &substitutions).await.unwrap();
    dir
}

/// Test configuration: minimum bcrypt cost, no online provider
pub fn test_config(dir: &TempDir, policy: SubstitutionPolicy) -> AppConfig {
    AppConfig {
        substitution_policy: policy,
        bcrypt_cost: 4,
        ..AppConfig::default()
    }
    .with_data_dir(dir.path())
}

/// Resources over `dir` with a counting in-memory provider
pub async fn create_test_resources(
    dir: &TempDir,
    policy: SubstitutionPolicy,
    provider: Arc<StaticRecipeProvider>,
) -> AppResources {
    init_test_logging();
    let provider: Arc<dyn RecipeProvider> = provider;
    AppResources::with_provider(test_config(dir, policy), provider)
        .await
        .unwrap()
}
