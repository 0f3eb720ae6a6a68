// ABOUTME: History command for recipe-cli
// ABOUTME: Prints every saved recipe for the logged-in user in the order they were saved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_assistant::errors::AppResult;
use recipe_assistant::resources::AppResources;
use recipe_assistant::session::Session;

use crate::helpers::display::{display_history_list, display_recipe};

/// Print the history list followed by each entry's details
pub async fn show(resources: &AppResources, session: &Session, detailed: bool) -> AppResult<()> {
    let entries = resources.history.get_history(session.username()).await?;

    println!("\n--- Your History ---");
    if entries.is_empty() {
        println!("No history yet.\n");
        return Ok(());
    }

    display_history_list(&entries);

    if detailed {
        for entry in &entries {
            println!();
            display_recipe("Saved Recipe Details", &entry.recipe);
        }
    }

    Ok(())
}
