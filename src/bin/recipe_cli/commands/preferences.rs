// ABOUTME: Preference commands for recipe-cli
// ABOUTME: Shows and updates diet mode and exclusions, keeping unspecified fields unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_assistant::errors::AppResult;
use recipe_assistant::models::DietMode;
use recipe_assistant::resources::AppResources;
use recipe_assistant::services::parse_exclusions;
use recipe_assistant::session::Session;

use crate::helpers::display::display_preferences;

/// Print the current preferences
pub async fn show(resources: &AppResources, session: &Session) -> AppResult<()> {
    let config = resources.preferences.view(session.username()).await?;
    println!("\n--- Current Preferences ---");
    display_preferences(&config);
    Ok(())
}

/// Update preferences; `None` keeps the stored value
pub async fn set(
    resources: &AppResources,
    session: &Session,
    diet: Option<&str>,
    exclude: Option<&str>,
) -> AppResult<()> {
    let current = resources.preferences.view(session.username()).await?;

    let diet_mode = diet.map_or(current.diet_mode, |d| DietMode::parse(d.trim()));
    let exclusions = exclude.map_or(current.exclusions, parse_exclusions);

    let updated = resources
        .preferences
        .update(session.username(), diet_mode, exclusions)
        .await?;

    println!("\nPreferences updated!\n");
    display_preferences(&updated);
    Ok(())
}
