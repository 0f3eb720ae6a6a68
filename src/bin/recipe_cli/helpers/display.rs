// ABOUTME: Output formatting helpers for recipe-cli
// ABOUTME: Prints recipes, substitutions, preferences and history in one consistent layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_assistant::models::{DietaryConfiguration, Recipe, SubstitutionRecord};
use recipe_assistant::services::HistoryEntry;

/// Print a recipe's name, ingredients and numbered steps
pub fn display_recipe(title: &str, recipe: &Recipe) {
    println!("=== {title} ===");
    println!("Dish: {}", recipe.dish_name);

    println!("\nIngredients:");
    for ingredient in &recipe.ingredients {
        match ingredient.quantity.as_deref() {
            Some(quantity) if !quantity.is_empty() => {
                println!(" • {} ({quantity})", ingredient.name);
            }
            _ => println!(" • {}", ingredient.name),
        }
    }

    println!("\nSteps:");
    for (i, step) in recipe.steps.iter().enumerate() {
        println!(" {}. {step}", i + 1);
    }
}

/// Print applied substitutions, if any
pub fn display_substitutions(substitutions: &[SubstitutionRecord]) {
    if substitutions.is_empty() {
        return;
    }

    println!("\nApplied substitutions:");
    for record in substitutions {
        println!(
            " - Replaced '{}' with '{}'",
            record.original, record.replacement
        );
    }
}

/// Print the diet mode and exclusions
pub fn display_preferences(config: &DietaryConfiguration) {
    println!("Diet mode: {}", config.diet_mode);
    println!("Exclusions: {}", format_exclusions(&config.exclusions));
}

/// Comma-joined exclusions, or "None"
pub fn format_exclusions(exclusions: &[String]) -> String {
    if exclusions.is_empty() {
        "None".to_owned()
    } else {
        exclusions.join(", ")
    }
}

/// Print a numbered list of saved dish names
pub fn display_history_list(entries: &[HistoryEntry]) {
    for (i, entry) in entries.iter().enumerate() {
        let name = if entry.recipe.dish_name.is_empty() {
            "Unknown Dish"
        } else {
            entry.recipe.dish_name.as_str()
        };
        match entry.saved_at {
            Some(saved_at) => println!("{}) {name}  [{}]", i + 1, saved_at.format("%Y-%m-%d %H:%M")),
            None => println!("{}) {name}", i + 1),
        }
    }
}
