// ABOUTME: Recipe feasibility and compliance rules for diet-aware recipe generation
// ABOUTME: Exclusion and diet validation plus table-driven ingredient substitution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Compliance
//!
//! Pure decision logic of the recipe pipeline. Nothing in this crate performs
//! I/O or mutates its inputs.
//!
//! - [`validator`] decides whether a recipe is usable under a
//!   [`DietaryConfiguration`](recipe_core::models::DietaryConfiguration)
//! - [`substitution`] rewrites banned ingredient names using a
//!   [`SubstitutionTable`] and returns a new recipe
//! - [`rules`] holds the fixed diet to banned-term mapping
//!
//! ## Example
//!
//! ```rust
//! use recipe_compliance::{check_feasibility, SubstitutionTable};
//! use recipe_core::models::{DietMode, DietaryConfiguration, Ingredient, Recipe};
//!
//! let recipe = Recipe::new("Omelette", vec![Ingredient::new("2 eggs")], vec![]);
//! let config = DietaryConfiguration::new(DietMode::Vegan, vec![]);
//!
//! let outcome = check_feasibility(&recipe, &config);
//! assert!(!outcome.feasible);
//! assert_eq!(
//!     outcome.reason.as_deref(),
//!     Some("Recipe violates vegan diet (contains: egg)")
//! );
//!
//! let table = SubstitutionTable::from_pairs([("egg", "flax egg")]);
//! assert_eq!(table.replacement_for("egg"), Some("flax egg"));
//! ```

/// Fixed diet to banned-term mapping
pub mod rules;

/// Table-driven ingredient substitution
pub mod substitution;

/// Exclusion and diet feasibility checks
pub mod validator;

pub use rules::banned_terms;
pub use substitution::{apply_substitutions, Substituted, SubstitutionTable};
pub use validator::{check_diet, check_diet_ignoring, check_exclusions, check_feasibility};
