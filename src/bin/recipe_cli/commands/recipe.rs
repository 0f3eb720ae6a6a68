// ABOUTME: Recipe generation command for recipe-cli
// ABOUTME: Runs the compliance pipeline with the user's preferences and saves successes to history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_assistant::errors::AppResult;
use recipe_assistant::logging::AppLogger;
use recipe_assistant::resources::AppResources;
use recipe_assistant::session::Session;

use crate::helpers::display::{display_recipe, display_substitutions};

/// Generate a compliant recipe for `dish_name`
///
/// Returns whether a recipe was produced. Pipeline failures are printed,
/// not returned as errors; only storage failures are.
pub async fn generate(resources: &AppResources, session: &Session, dish_name: &str) -> AppResult<bool> {
    let config = resources.preferences.view(session.username()).await?;

    println!("\nFetching online recipe... please wait...\n");
    let result = resources
        .compliance
        .generate_compliant_recipe(dish_name, &config)
        .await;

    AppLogger::log_recipe_request(
        session.username(),
        dish_name,
        result.success,
        result.substitutions.len(),
        result.message.as_deref(),
    );

    let Some(recipe) = result.recipe.filter(|_| result.success) else {
        println!("Error: {}\n", result.message.as_deref().unwrap_or_default());
        return Ok(false);
    };

    display_recipe("Recipe Found", &recipe);
    display_substitutions(&result.substitutions);

    println!("\nSaving to history...\n");
    resources.history.add_entry(session.username(), recipe).await?;
    println!("Saved!\n");

    Ok(true)
}
