// ABOUTME: Recipe pipeline wiring: local catalog, resolver and compliance orchestrator
// ABOUTME: Connects the pure compliance rules to catalog data and external providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Pipeline
//!
//! ```text
//! dish name ──► RecipeResolver ──► validator ──► substitution ──► ComplianceResult
//!                 │        │
//!           catalog     provider
//! ```
//!
//! Every stage except the provider fallback is a pure function of its inputs.

/// Local recipe catalog and substitution table loading
pub mod catalog;

/// Compliance orchestrator and substitution policy
pub mod orchestrator;

/// Dish name to recipe resolution
pub mod resolver;

pub use catalog::{load_substitution_table, RecipeCatalog};
pub use orchestrator::{ComplianceService, SubstitutionPolicy};
pub use resolver::RecipeResolver;
