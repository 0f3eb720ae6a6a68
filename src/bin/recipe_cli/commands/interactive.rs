// ABOUTME: Interactive menus for recipe-cli: login screen, dashboard, preferences and history
// ABOUTME: The session returned by login is passed explicitly to every dashboard action
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_assistant::errors::{AppError, AppResult, ErrorCode};
use recipe_assistant::models::DietMode;
use recipe_assistant::resources::AppResources;
use recipe_assistant::services::parse_exclusions;
use recipe_assistant::session::Session;
use tracing::error;

use super::{account, preferences, recipe};
use crate::helpers::display::{
    display_history_list, display_preferences, display_recipe, format_exclusions,
};
use crate::helpers::prompt::Prompt;

/// Run the login screen, then the dashboard until logout
pub async fn run(resources: &AppResources) -> AppResult<()> {
    let mut prompt = Prompt::stdin();

    let Some(session) = login_menu(resources, &mut prompt).await? else {
        println!("Goodbye!");
        return Ok(());
    };

    dashboard(resources, &mut prompt, &session).await
}

/// Print a user-facing failure; storage and internal errors are also logged
fn report(err: &AppError) {
    if matches!(
        err.code,
        ErrorCode::StorageError | ErrorCode::SerializationError | ErrorCode::InternalError
    ) {
        error!(error = %err, "Command failed");
    }
    println!("{err}\n");
}

async fn login_menu(resources: &AppResources, prompt: &mut Prompt) -> AppResult<Option<Session>> {
    loop {
        println!("========================================");
        println!("Recipe Generation System (CLI)");
        println!("1) Register");
        println!("2) Login");
        println!("0) Quit");

        let Some(choice) = prompt.ask("Choose: ").await? else {
            return Ok(None);
        };

        match choice.trim() {
            "1" => {
                println!("\n--- Register ---");
                let Some((username, password)) = ask_credentials(prompt).await? else {
                    return Ok(None);
                };
                match account::register(resources, &username, &password).await {
                    Ok(()) => println!(),
                    Err(e) => report(&e),
                }
            }
            "2" => {
                println!("\n--- Login ---");
                let Some((username, password)) = ask_credentials(prompt).await? else {
                    return Ok(None);
                };
                match account::login(resources, &username, &password).await {
                    Ok(session) => {
                        println!();
                        return Ok(Some(session));
                    }
                    Err(e) => report(&e),
                }
            }
            "0" => return Ok(None),
            _ => println!("Invalid choice.\n"),
        }
    }
}

async fn ask_credentials(prompt: &mut Prompt) -> AppResult<Option<(String, String)>> {
    let Some(username) = prompt.ask("Username: ").await? else {
        return Ok(None);
    };
    let Some(password) = prompt.ask("Password: ").await? else {
        return Ok(None);
    };
    Ok(Some((username, password)))
}

async fn dashboard(resources: &AppResources, prompt: &mut Prompt, session: &Session) -> AppResult<()> {
    loop {
        println!("\n--- Dashboard ---");
        println!("1) Generate recipe");
        println!("2) Manage preferences");
        println!("3) View history");
        println!("0) Logout");

        let Some(choice) = prompt.ask("Choose: ").await? else {
            return Ok(());
        };

        let outcome = match choice.trim() {
            "1" => generate(resources, prompt, session).await,
            "2" => manage_preferences(resources, prompt, session).await,
            "3" => show_history(resources, prompt, session).await,
            "0" => {
                println!("Logging out...\n");
                return Ok(());
            }
            _ => {
                println!("Invalid choice.\n");
                Ok(())
            }
        };

        if let Err(e) = outcome {
            report(&e);
        }
    }
}

async fn generate(resources: &AppResources, prompt: &mut Prompt, session: &Session) -> AppResult<()> {
    let Some(dish) = prompt.ask("\nEnter dish name: ").await? else {
        return Ok(());
    };
    recipe::generate(resources, session, &dish).await?;
    Ok(())
}

async fn manage_preferences(
    resources: &AppResources,
    prompt: &mut Prompt,
    session: &Session,
) -> AppResult<()> {
    loop {
        println!("\n--- Manage Preferences ---");
        println!("1) View preferences");
        println!("2) Edit preferences");
        println!("0) Back to dashboard");

        let Some(choice) = prompt.ask("Choose: ").await? else {
            return Ok(());
        };

        match choice.trim() {
            "1" => {
                preferences::show(resources, session).await?;
                prompt
                    .pause("\nPress Enter to return to the dashboard...")
                    .await?;
            }
            "2" => edit_preferences(resources, prompt, session).await?,
            "0" => return Ok(()),
            _ => println!("Invalid choice.\n"),
        }
    }
}

async fn edit_preferences(
    resources: &AppResources,
    prompt: &mut Prompt,
    session: &Session,
) -> AppResult<()> {
    let current = resources.preferences.view(session.username()).await?;

    println!("\n--- Preferences ---");
    println!("Current diet mode: {}", current.diet_mode);
    println!(
        "Current exclusions: {}",
        format_exclusions(&current.exclusions)
    );

    println!("\nDiet options:");
    println!("1) none");
    println!("2) vegetarian");
    println!("3) vegan");

    let mode_choice = prompt.ask("Select diet mode: ").await?.unwrap_or_default();
    let diet_mode = match mode_choice.trim() {
        "1" => DietMode::None,
        "2" => DietMode::Vegetarian,
        "3" => DietMode::Vegan,
        _ => current.diet_mode,
    };

    let exclude = prompt
        .ask("Enter exclusions (comma-separated): ")
        .await?
        .unwrap_or_default();

    let updated = resources
        .preferences
        .update(session.username(), diet_mode, parse_exclusions(&exclude))
        .await?;

    println!("\nPreferences updated!\n");
    display_preferences(&updated);
    Ok(())
}

async fn show_history(resources: &AppResources, prompt: &mut Prompt, session: &Session) -> AppResult<()> {
    println!("\n--- Your History ---");
    let entries = resources.history.get_history(session.username()).await?;

    if entries.is_empty() {
        println!("No history yet.\n");
        return Ok(());
    }

    display_history_list(&entries);

    println!("\nEnter a number to view details, or press Enter to go back.");
    let choice = prompt.ask("Choose: ").await?.unwrap_or_default();
    let choice = choice.trim();
    if choice.is_empty() {
        return Ok(());
    }

    let Ok(number) = choice.parse::<usize>() else {
        println!("Invalid choice. Must be a number.\n");
        return Ok(());
    };

    let Some(entry) = number.checked_sub(1).and_then(|i| entries.get(i)) else {
        println!("Selection out of range.\n");
        return Ok(());
    };

    println!();
    display_recipe("Saved Recipe Details", &entry.recipe);
    prompt.pause("\nPress Enter to return.").await
}
