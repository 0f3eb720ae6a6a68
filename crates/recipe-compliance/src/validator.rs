// ABOUTME: Diet and exclusion feasibility checks over a recipe's ingredient names
// ABOUTME: Exclusions are checked before diet rules; the first failing term is reported
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::models::{DietMode, DietaryConfiguration, FeasibilityOutcome, Recipe, Violation};
use tracing::debug;

use crate::rules::banned_terms;

/// Check a recipe against both the exclusion list and the active diet
///
/// Exclusions run first, so a recipe that breaks both is reported as an
/// exclusion violation. The check reads the recipe only; calling it twice on
/// the same inputs yields the same outcome.
#[must_use]
pub fn check_feasibility(recipe: &Recipe, config: &DietaryConfiguration) -> FeasibilityOutcome {
    let names = recipe.ingredient_keys();
    let exclusions = config.normalized_exclusions();

    let violation = first_excluded(&names, &exclusions)
        .or_else(|| first_diet_violation(&names, &config.diet_mode, &[]));

    if let Some(violation) = &violation {
        debug!(dish = %recipe.dish_name, reason = %violation, "Recipe is not feasible");
    }

    violation.into()
}

/// Exclusion stage only
///
/// `exclusions` may be in any case; they are lowercased before matching.
#[must_use]
pub fn check_exclusions(recipe: &Recipe, exclusions: &[String]) -> FeasibilityOutcome {
    let exclusions: Vec<String> = exclusions.iter().map(|e| e.to_lowercase()).collect();
    first_excluded(&recipe.ingredient_keys(), &exclusions).into()
}

/// Diet-rule stage only
#[must_use]
pub fn check_diet(recipe: &Recipe, diet: &DietMode) -> FeasibilityOutcome {
    first_diet_violation(&recipe.ingredient_keys(), diet, &[]).into()
}

/// Diet-rule stage, skipping banned terms listed in `resolved`
///
/// Used after substitution: a replacement such as "oat milk" still contains
/// the banned term it replaced, so terms already substituted away are not
/// checked again. Other banned terms, including ones introduced by a
/// replacement, still fail.
#[must_use]
pub fn check_diet_ignoring(
    recipe: &Recipe,
    diet: &DietMode,
    resolved: &[String],
) -> FeasibilityOutcome {
    let resolved: Vec<String> = resolved.iter().map(|t| t.to_lowercase()).collect();
    first_diet_violation(&recipe.ingredient_keys(), diet, &resolved).into()
}

/// Exclusion terms are the outer loop: the first term in configuration order
/// that appears in any ingredient wins, regardless of ingredient position.
fn first_excluded(names: &[String], exclusions: &[String]) -> Option<Violation> {
    exclusions
        .iter()
        .find(|term| names.iter().any(|name| name.contains(term.as_str())))
        .map(|term| Violation::ExcludedIngredient { term: term.clone() })
}

fn first_diet_violation(
    names: &[String],
    diet: &DietMode,
    skipped: &[String],
) -> Option<Violation> {
    banned_terms(diet)
        .iter()
        .filter(|term| !skipped.iter().any(|s| s == **term))
        .find(|term| names.iter().any(|name| name.contains(**term)))
        .map(|term| Violation::Diet {
            diet: diet.clone(),
            term: (*term).to_owned(),
        })
}
