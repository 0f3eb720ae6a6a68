// ABOUTME: Core data models shared by the compliance pipeline and its collaborators
// ABOUTME: Re-exports recipe, dietary configuration, and compliance outcome types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Recipe and ingredient value types
pub mod recipe;

/// Diet modes and per-request dietary configuration
pub mod dietary;

/// Feasibility outcomes, substitution records and the final compliance result
pub mod compliance;

pub use compliance::{
    ComplianceFailure, ComplianceResult, FeasibilityOutcome, SubstitutionRecord, Violation,
};
pub use dietary::{DietMode, DietaryConfiguration};
pub use recipe::{Ingredient, Recipe};
