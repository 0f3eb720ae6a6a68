// ABOUTME: Account commands for recipe-cli
// ABOUTME: Registration and login, printing the same messages in one-shot and interactive modes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_assistant::constants::messages;
use recipe_assistant::errors::AppResult;
use recipe_assistant::resources::AppResources;
use recipe_assistant::session::Session;

/// Register an account and print the outcome message
pub async fn register(resources: &AppResources, username: &str, password: &str) -> AppResult<()> {
    let message = resources.auth.register(username, password).await?;
    println!("{message}");
    Ok(())
}

/// Verify credentials, print the outcome message and return the session
pub async fn login(resources: &AppResources, username: &str, password: &str) -> AppResult<Session> {
    let session = resources.auth.authenticate(username, password).await?;
    println!("{}", messages::LOGIN_OK);
    Ok(session)
}
