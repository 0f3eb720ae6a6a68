// ABOUTME: Outcome types of the compliance pipeline (feasibility, substitutions, final result)
// ABOUTME: Every pipeline failure is a value here; nothing is raised across the core boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use super::dietary::DietMode;
use super::recipe::Recipe;
use crate::constants::messages;

/// One applied ingredient replacement
///
/// Serialized as a two-element array `["milk", "oat milk"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct SubstitutionRecord {
    /// Banned term that triggered the replacement
    pub original: String,
    /// Replacement ingredient name
    pub replacement: String,
}

impl SubstitutionRecord {
    /// Create a record
    pub fn new(original: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            replacement: replacement.into(),
        }
    }
}

impl From<(String, String)> for SubstitutionRecord {
    fn from((original, replacement): (String, String)) -> Self {
        Self {
            original,
            replacement,
        }
    }
}

impl From<SubstitutionRecord> for (String, String) {
    fn from(record: SubstitutionRecord) -> Self {
        (record.original, record.replacement)
    }
}

/// Why a recipe failed the feasibility check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// An ingredient contains a user exclusion term
    ExcludedIngredient {
        /// The matching exclusion term, lowercased
        term: String,
    },
    /// An ingredient contains a term banned by the active diet
    Diet {
        /// Active diet mode
        diet: DietMode,
        /// The banned term that matched
        term: String,
    },
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExcludedIngredient { term } => {
                write!(f, "{}{term}", messages::EXCLUDED_INGREDIENT_PREFIX)
            }
            Self::Diet { diet, term } => {
                write!(f, "Recipe violates {diet} diet (contains: {term})")
            }
        }
    }
}

/// Result of checking a recipe against a dietary configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeasibilityOutcome {
    /// Whether the recipe passed both the exclusion and diet checks
    pub feasible: bool,
    /// Human-readable failure reason; `None` when feasible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Typed failure; `None` when feasible
    #[serde(skip)]
    pub violation: Option<Violation>,
}

impl FeasibilityOutcome {
    /// Outcome for a recipe that passed every check
    #[must_use]
    pub const fn feasible() -> Self {
        Self {
            feasible: true,
            reason: None,
            violation: None,
        }
    }

    /// Outcome for a recipe that failed a check
    #[must_use]
    pub fn infeasible(violation: Violation) -> Self {
        Self {
            feasible: false,
            reason: Some(violation.to_string()),
            violation: Some(violation),
        }
    }
}

impl From<Option<Violation>> for FeasibilityOutcome {
    fn from(violation: Option<Violation>) -> Self {
        violation.map_or_else(Self::feasible, Self::infeasible)
    }
}

/// Terminal failure of a compliance request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplianceFailure {
    /// Neither the catalog nor the external provider produced a recipe
    NotFound,
    /// The resolved recipe failed the feasibility check
    Infeasible(Violation),
}

impl Display for ComplianceFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str(messages::RECIPE_NOT_FOUND),
            Self::Infeasible(violation) => violation.fmt(f),
        }
    }
}

/// Final, binary outcome of a compliance request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// Whether a compliant recipe was produced
    pub success: bool,
    /// The compliant recipe, after substitution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Recipe>,
    /// Substitutions applied, in application order
    #[serde(default)]
    pub substitutions: Vec<SubstitutionRecord>,
    /// Failure message; `None` on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ComplianceResult {
    /// Successful result carrying the compliant recipe
    #[must_use]
    pub fn succeeded(recipe: Recipe, substitutions: Vec<SubstitutionRecord>) -> Self {
        Self {
            success: true,
            recipe: Some(recipe),
            substitutions,
            message: None,
        }
    }

    /// Failed result carrying the user-facing message
    #[must_use]
    pub fn failed(failure: &ComplianceFailure) -> Self {
        Self {
            success: false,
            recipe: None,
            substitutions: Vec::new(),
            message: Some(failure.to_string()),
        }
    }
}
