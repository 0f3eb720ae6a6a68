// ABOUTME: End-to-end tests for the recipe compliance pipeline
// ABOUTME: Covers catalog and provider resolution, validation failures and both substitution policies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use recipe_assistant::models::{
    DietMode, DietaryConfiguration, Ingredient, Recipe, SubstitutionRecord,
};
use recipe_assistant::recipes::SubstitutionPolicy;
use recipe_providers::{ProviderError, ProviderResult, RecipeProvider, StaticRecipeProvider};

use common::{create_test_resources, init_test_logging, seeded_data_dir, test_config};

fn prefs(diet_mode: DietMode, exclusions: &[&str]) -> DietaryConfiguration {
    DietaryConfiguration::new(
        diet_mode,
        exclusions.iter().map(|e| (*e).to_owned()).collect(),
    )
}

struct FailingProvider;

#[async_trait]
impl RecipeProvider for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn fetch(&self, _dish_name: &str) -> ProviderResult<Option<Recipe>> {
        Err(ProviderError::Parse {
            provider: "failing",
            message: "unexpected body".into(),
        })
    }
}

#[tokio::test]
async fn test_catalog_match_is_case_insensitive_and_skips_provider() {
    let dir = seeded_data_dir().await;
    let provider = Arc::new(StaticRecipeProvider::new().with_recipe(
        "poutine",
        Recipe::new("Online Poutine", vec![], vec![]),
    ));
    let resources =
        create_test_resources(&dir, SubstitutionPolicy::ValidateFirst, provider.clone()).await;

    for query in ["poutine", "  POUTINE  ", "PoUtInE"] {
        let result = resources
            .compliance
            .generate_compliant_recipe(query, &DietaryConfiguration::default())
            .await;

        assert!(result.success);
        assert_eq!(result.recipe.unwrap().dish_name, "Poutine");
        assert!(result.substitutions.is_empty());
        assert!(result.message.is_none());
    }

    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_provider_is_used_on_catalog_miss() {
    let dir = seeded_data_dir().await;
    let ramen = Recipe::new(
        "Shoyu Ramen",
        vec![Ingredient::new("2 cups vegetable broth").with_quantity("")],
        vec!["Simmer.".into()],
    );
    let provider = Arc::new(StaticRecipeProvider::new().with_recipe("Ramen", ramen.clone()));
    let resources =
        create_test_resources(&dir, SubstitutionPolicy::ValidateFirst, provider.clone()).await;

    let result = resources
        .compliance
        .generate_compliant_recipe("Ramen", &prefs(DietMode::Vegan, &[]))
        .await;

    assert!(result.success);
    assert_eq!(result.recipe, Some(ramen));
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_unknown_dish_reports_not_found() {
    let dir = seeded_data_dir().await;
    let provider = Arc::new(StaticRecipeProvider::new());
    let resources =
        create_test_resources(&dir, SubstitutionPolicy::ValidateFirst, provider.clone()).await;

    let result = resources
        .compliance
        .generate_compliant_recipe("beef wellington", &DietaryConfiguration::default())
        .await;

    assert!(!result.success);
    assert!(result.recipe.is_none());
    assert_eq!(
        result.message.as_deref(),
        Some("Could not find a recipe online or locally.")
    );
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_provider_failure_is_absorbed_as_not_found() {
    init_test_logging();
    let dir = seeded_data_dir().await;
    let resources = recipe_assistant::resources::AppResources::with_provider(
        test_config(&dir, SubstitutionPolicy::ValidateFirst),
        Arc::new(FailingProvider),
    )
    .await
    .unwrap();

    let result = resources
        .compliance
        .generate_compliant_recipe("sushi", &DietaryConfiguration::default())
        .await;

    assert!(!result.success);
    assert_eq!(
        result.message.as_deref(),
        Some("Could not find a recipe online or locally.")
    );
}

#[tokio::test]
async fn test_vegan_rejects_chicken_alfredo() {
    let dir = seeded_data_dir().await;
    let resources = create_test_resources(
        &dir,
        SubstitutionPolicy::ValidateFirst,
        Arc::new(StaticRecipeProvider::new()),
    )
    .await;

    let result = resources
        .compliance
        .generate_compliant_recipe("chicken alfredo", &prefs(DietMode::Vegan, &[]))
        .await;

    assert!(!result.success);
    assert_eq!(
        result.message.as_deref(),
        Some("Recipe violates vegan diet (contains: chicken)")
    );
}

#[tokio::test]
async fn test_exclusion_is_checked_before_diet() {
    let dir = seeded_data_dir().await;
    let resources = create_test_resources(
        &dir,
        SubstitutionPolicy::ValidateFirst,
        Arc::new(StaticRecipeProvider::new()),
    )
    .await;

    let result = resources
        .compliance
        .generate_compliant_recipe(
            "potato salad",
            &prefs(DietMode::Vegetarian, &["Potato"]),
        )
        .await;

    assert!(!result.success);
    assert_eq!(
        result.message.as_deref(),
        Some("Contains excluded ingredient: potato")
    );
}

#[tokio::test]
async fn test_compliant_recipe_passes_unchanged() {
    let dir = seeded_data_dir().await;
    let resources = create_test_resources(
        &dir,
        SubstitutionPolicy::ValidateFirst,
        Arc::new(StaticRecipeProvider::new()),
    )
    .await;
    let catalog_entry = common::fixture_catalog()
        .into_iter()
        .find(|r| r.dish_name == "Chickpea Salad")
        .unwrap();

    let result = resources
        .compliance
        .generate_compliant_recipe("chickpea salad", &prefs(DietMode::Vegetarian, &["potato"]))
        .await;

    assert!(result.success);
    assert_eq!(result.recipe, Some(catalog_entry));
    assert!(result.substitutions.is_empty());
}

#[tokio::test]
async fn test_validate_first_rejects_substitutable_exclusion() {
    let dir = seeded_data_dir().await;
    let resources = create_test_resources(
        &dir,
        SubstitutionPolicy::ValidateFirst,
        Arc::new(StaticRecipeProvider::new()),
    )
    .await;

    let result = resources
        .compliance
        .generate_compliant_recipe("pancakes", &prefs(DietMode::None, &["milk"]))
        .await;

    assert!(!result.success);
    assert_eq!(
        result.message.as_deref(),
        Some("Contains excluded ingredient: milk")
    );
}

#[tokio::test]
async fn test_substitute_first_replaces_whole_milk() {
    let dir = seeded_data_dir().await;
    let resources = create_test_resources(
        &dir,
        SubstitutionPolicy::SubstituteFirst,
        Arc::new(StaticRecipeProvider::new()),
    )
    .await;

    let result = resources
        .compliance
        .generate_compliant_recipe("pancakes", &prefs(DietMode::None, &["MILK"]))
        .await;

    assert!(result.success, "unexpected failure: {:?}", result.message);
    let recipe = result.recipe.unwrap();
    let names: Vec<&str> = recipe.ingredients.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["flour", "oat milk", "egg"]);
    assert_eq!(
        recipe.ingredients[1].quantity.as_deref(),
        Some("1 cup"),
        "quantity survives substitution"
    );
    assert_eq!(
        result.substitutions,
        vec![SubstitutionRecord::new("milk", "oat milk")]
    );
}

#[tokio::test]
async fn test_substitute_first_still_rejects_unresolvable_exclusion() {
    let dir = seeded_data_dir().await;
    let resources = create_test_resources(
        &dir,
        SubstitutionPolicy::SubstituteFirst,
        Arc::new(StaticRecipeProvider::new()),
    )
    .await;

    let result = resources
        .compliance
        .generate_compliant_recipe("potato salad", &prefs(DietMode::None, &["milk", "potato"]))
        .await;

    assert!(!result.success);
    assert_eq!(
        result.message.as_deref(),
        Some("Contains excluded ingredient: potato")
    );
}

#[tokio::test]
async fn test_substitute_first_checks_diet_on_substituted_recipe() {
    let dir = seeded_data_dir().await;
    let resources = create_test_resources(
        &dir,
        SubstitutionPolicy::SubstituteFirst,
        Arc::new(StaticRecipeProvider::new()),
    )
    .await;

    let result = resources
        .compliance
        .generate_compliant_recipe("pancakes", &prefs(DietMode::Vegan, &["milk"]))
        .await;

    assert!(!result.success);
    assert_eq!(
        result.message.as_deref(),
        Some("Recipe violates vegan diet (contains: egg)")
    );
}

#[tokio::test]
async fn test_result_serializes_to_plain_structure() {
    let dir = seeded_data_dir().await;
    let resources = create_test_resources(
        &dir,
        SubstitutionPolicy::SubstituteFirst,
        Arc::new(StaticRecipeProvider::new()),
    )
    .await;

    let result = resources
        .compliance
        .generate_compliant_recipe("pancakes", &prefs(DietMode::None, &["milk"]))
        .await;
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["substitutions"], serde_json::json!([["milk", "oat milk"]]));
    assert_eq!(json["recipe"]["dish_name"], "Pancakes");
    assert!(json.get("message").is_none());
}

#[tokio::test]
async fn test_configuration_is_not_modified() {
    let dir = seeded_data_dir().await;
    let resources = create_test_resources(
        &dir,
        SubstitutionPolicy::SubstituteFirst,
        Arc::new(StaticRecipeProvider::new()),
    )
    .await;
    let config = prefs(DietMode::Other("Pescatarian".into()), &["MILK"]);
    let before = config.clone();

    let result = resources
        .compliance
        .generate_compliant_recipe("pancakes", &config)
        .await;

    assert!(result.success);
    assert_eq!(config, before);
}

#[tokio::test]
async fn test_substitute_first_vegan_accepts_substituted_milk() {
    let dir = seeded_data_dir().await;
    let latte = Recipe::new(
        "Latte",
        vec![
            Ingredient::new("whole milk").with_quantity("1 cup"),
            Ingredient::new("espresso").with_quantity("1 shot"),
        ],
        vec!["Steam the milk.".into()],
    );
    let resources = create_test_resources(
        &dir,
        SubstitutionPolicy::SubstituteFirst,
        Arc::new(StaticRecipeProvider::new().with_recipe("latte", latte)),
    )
    .await;

    let result = resources
        .compliance
        .generate_compliant_recipe("latte", &prefs(DietMode::Vegan, &["milk"]))
        .await;

    assert!(result.success, "unexpected failure: {:?}", result.message);
    let names: Vec<String> = result
        .recipe
        .unwrap()
        .ingredients
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(names, vec!["oat milk", "espresso"]);
    assert_eq!(
        result.substitutions,
        vec![SubstitutionRecord::new("milk", "oat milk")]
    );
}

#[tokio::test]
async fn test_substitute_first_vegan_still_rejects_unexcluded_milk() {
    let dir = seeded_data_dir().await;
    let latte = Recipe::new(
        "Latte",
        vec![Ingredient::new("whole milk"), Ingredient::new("espresso")],
        vec![],
    );
    let resources = create_test_resources(
        &dir,
        SubstitutionPolicy::SubstituteFirst,
        Arc::new(StaticRecipeProvider::new().with_recipe("latte", latte)),
    )
    .await;

    let result = resources
        .compliance
        .generate_compliant_recipe("latte", &prefs(DietMode::Vegan, &[]))
        .await;

    assert!(!result.success);
    assert_eq!(
        result.message.as_deref(),
        Some("Recipe violates vegan diet (contains: milk)")
    );
}
