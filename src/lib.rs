// ABOUTME: Main library entry point for the diet-aware recipe assistant
// ABOUTME: Wires accounts, preferences, history and persistence around the compliance pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Assistant
//!
//! A command-line recipe assistant. A logged-in user asks for a dish; the
//! assistant finds a recipe in the local catalog or online, checks it against
//! the user's diet and exclusions, substitutes banned ingredients where a
//! replacement is known, and records the result in the user's history.
//!
//! ## Architecture
//!
//! - **`recipe-core`**: shared models, constants and the `AppError` type
//! - **`recipe-compliance`**: pure feasibility rules and substitution
//! - **`recipe-providers`**: external recipe lookup (Spoonacular)
//! - **This crate**: configuration, logging, flat-file storage, accounts,
//!   preferences, history and the pipeline orchestrator
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_assistant::config::AppConfig;
//! use recipe_assistant::resources::AppResources;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let resources = AppResources::initialize(AppConfig::from_env()?).await?;
//!     let session = resources.auth.authenticate("alice", "secret").await?;
//!     let prefs = resources.preferences.view(session.username()).await?;
//!
//!     let result = resources
//!         .compliance
//!         .generate_compliant_recipe("poutine", &prefs)
//!         .await;
//!     println!("{}", serde_json::to_string_pretty(&result)?);
//!     Ok(())
//! }
//! ```

pub use recipe_core::{constants, errors, models};

/// Registration and password authentication
pub mod auth;

/// Environment-driven configuration
pub mod config;

/// Structured logging setup and event helpers
pub mod logging;

/// Catalog, resolver and compliance orchestrator
pub mod recipes;

/// Resource container built at startup
pub mod resources;

/// Preferences and history services
pub mod services;

/// Explicit login session
pub mod session;

/// Flat-file JSON persistence
pub mod storage;
