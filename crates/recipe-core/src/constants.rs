// ABOUTME: Constants module with domain-separated organization
// ABOUTME: User-facing messages, data file names, and environment variable keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain.

/// Messages produced by the compliance pipeline and the account services
pub mod messages {
    /// Neither the catalog nor the external provider produced a recipe
    pub const RECIPE_NOT_FOUND: &str = "Could not find a recipe online or locally.";
    /// Prefix of an exclusion violation reason
    pub const EXCLUDED_INGREDIENT_PREFIX: &str = "Contains excluded ingredient: ";
    /// Placeholder step when the provider returns no instructions
    pub const NO_STEPS_AVAILABLE: &str = "No steps available from API.";
    /// Registration with an empty username or password
    pub const EMPTY_CREDENTIALS: &str = "Username / Password cannot be empty.";
    /// Registration with a username that is already taken
    pub const USERNAME_TAKEN: &str = "Username already exists.";
    /// Registration succeeded
    pub const REGISTRATION_OK: &str = "Registration successful.";
    /// Login with an unknown username
    pub const UNKNOWN_USER: &str = "User does not exist.";
    /// Login with the wrong password
    pub const WRONG_PASSWORD: &str = "Incorrect password.";
    /// Login succeeded
    pub const LOGIN_OK: &str = "Login successful.";
}

/// Flat files kept in the data directory
pub mod files {
    /// Registered users and their password hashes
    pub const USERS: &str = "users.json";
    /// Per-user dietary preferences
    pub const PREFERENCES: &str = "preferences.json";
    /// Per-user recipe history
    pub const HISTORY: &str = "history.json";
    /// Local recipe catalog
    pub const RECIPES: &str = "recipes.json";
    /// Banned term to replacement mapping
    pub const SUBSTITUTIONS: &str = "substitutions.json";
}

/// Environment variable names read by `AppConfig::from_env`
pub mod env_config {
    /// Directory holding the JSON data files
    pub const DATA_DIR: &str = "RECIPE_DATA_DIR";
    /// Spoonacular API key; the provider is disabled when unset
    pub const SPOONACULAR_API_KEY: &str = "SPOONACULAR_API_KEY";
    /// Spoonacular base URL override
    pub const SPOONACULAR_BASE_URL: &str = "SPOONACULAR_BASE_URL";
    /// Total HTTP request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "RECIPE_HTTP_TIMEOUT_SECS";
    /// HTTP connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "RECIPE_HTTP_CONNECT_TIMEOUT_SECS";
    /// `validate_first` or `substitute_first`
    pub const SUBSTITUTION_POLICY: &str = "RECIPE_SUBSTITUTION_POLICY";
    /// bcrypt work factor for new password hashes
    pub const BCRYPT_COST: &str = "RECIPE_BCRYPT_COST";
}

/// Default configuration values
pub mod defaults {
    /// Default data directory, relative to the working directory
    pub const DATA_DIR: &str = "./data";
    /// Public Spoonacular API endpoint
    pub const SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com";
    /// Default request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Service names used in structured logs
pub mod service_names {
    /// The command-line application
    pub const RECIPE_CLI: &str = "recipe-cli";
    /// Spoonacular recipe API
    pub const SPOONACULAR: &str = "Spoonacular API";
}
