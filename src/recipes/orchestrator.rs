// ABOUTME: Compliance orchestrator running resolve, validate and substitute for one request
// ABOUTME: Produces a binary ComplianceResult; the substitution policy fixes the stage order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Compliance Orchestrator
//!
//! One request moves through `Resolving → Validating → Substituting → Done`,
//! stopping at the first failure. Failures are returned as values inside a
//! [`ComplianceResult`]; nothing here returns `Err`.
//!
//! ## Policies
//!
//! - [`SubstitutionPolicy::ValidateFirst`] validates the resolved recipe
//!   against exclusions and diet, then substitutes. Because validation has
//!   already rejected any recipe containing an exclusion term, substitution
//!   never finds a match in this mode.
//! - [`SubstitutionPolicy::SubstituteFirst`] treats exclusion terms with a
//!   table entry as resolvable. Only the unresolvable terms are checked
//!   against the resolved recipe; substitution then runs over every exclusion
//!   term, and the diet rules are checked on the substituted recipe. Banned
//!   terms that a substitution already replaced are skipped in that check,
//!   since replacements like "oat milk" still contain them.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use recipe_compliance::{
    apply_substitutions, check_diet_ignoring, check_exclusions, check_feasibility,
    SubstitutionTable,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::resolver::RecipeResolver;
use crate::errors::AppError;
use crate::models::{
    ComplianceFailure, ComplianceResult, DietaryConfiguration, FeasibilityOutcome, Recipe,
};

/// Placement of substitution relative to the exclusion check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionPolicy {
    /// Validate the resolved recipe, then substitute
    #[default]
    ValidateFirst,
    /// Substitute resolvable exclusions, then validate what remains
    SubstituteFirst,
}

impl SubstitutionPolicy {
    /// Configuration name of the policy
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidateFirst => "validate_first",
            Self::SubstituteFirst => "substitute_first",
        }
    }
}

impl fmt::Display for SubstitutionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubstitutionPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "validate_first" => Ok(Self::ValidateFirst),
            "substitute_first" => Ok(Self::SubstituteFirst),
            other => Err(AppError::config(format!(
                "Unknown substitution policy '{other}' (expected validate_first or substitute_first)"
            ))),
        }
    }
}

/// Runs the compliance pipeline for one dish at a time
#[derive(Clone)]
pub struct ComplianceService {
    resolver: RecipeResolver,
    substitutions: Arc<SubstitutionTable>,
    policy: SubstitutionPolicy,
}

impl ComplianceService {
    /// Create an orchestrator with the given resolver, table and policy
    #[must_use]
    pub fn new(
        resolver: RecipeResolver,
        substitutions: Arc<SubstitutionTable>,
        policy: SubstitutionPolicy,
    ) -> Self {
        Self {
            resolver,
            substitutions,
            policy,
        }
    }

    /// Active policy
    #[must_use]
    pub const fn policy(&self) -> SubstitutionPolicy {
        self.policy
    }

    /// Resolve `dish_name` and make it compliant with `config`
    ///
    /// `config` is read, never modified. The caller decides whether to record
    /// a successful result in history.
    pub async fn generate_compliant_recipe(
        &self,
        dish_name: &str,
        config: &DietaryConfiguration,
    ) -> ComplianceResult {
        let Some(recipe) = self.resolver.resolve(dish_name).await else {
            info!(dish = %dish_name, "No recipe found");
            return ComplianceResult::failed(&ComplianceFailure::NotFound);
        };

        let result = match self.policy {
            SubstitutionPolicy::ValidateFirst => self.validate_then_substitute(&recipe, config),
            SubstitutionPolicy::SubstituteFirst => self.substitute_then_validate(&recipe, config),
        };

        debug!(
            dish = %dish_name,
            policy = %self.policy,
            success = result.success,
            substitutions = result.substitutions.len(),
            "Compliance pipeline finished"
        );
        result
    }

    fn validate_then_substitute(
        &self,
        recipe: &Recipe,
        config: &DietaryConfiguration,
    ) -> ComplianceResult {
        if let Some(failure) = rejection(check_feasibility(recipe, config)) {
            return ComplianceResult::failed(&failure);
        }

        let substituted = apply_substitutions(
            recipe,
            &config.normalized_exclusions(),
            &self.substitutions,
        );
        ComplianceResult::succeeded(substituted.recipe, substituted.records)
    }

    fn substitute_then_validate(
        &self,
        recipe: &Recipe,
        config: &DietaryConfiguration,
    ) -> ComplianceResult {
        let exclusions = config.normalized_exclusions();
        let unresolvable: Vec<String> = exclusions
            .iter()
            .filter(|term| self.substitutions.replacement_for(term).is_none())
            .cloned()
            .collect();

        if let Some(failure) = rejection(check_exclusions(recipe, &unresolvable)) {
            return ComplianceResult::failed(&failure);
        }

        let substituted = apply_substitutions(recipe, &exclusions, &self.substitutions);

        let resolved: Vec<String> = substituted
            .records
            .iter()
            .map(|record| record.original.clone())
            .collect();
        if let Some(failure) = rejection(check_diet_ignoring(
            &substituted.recipe,
            &config.diet_mode,
            &resolved,
        )) {
            return ComplianceResult::failed(&failure);
        }

        ComplianceResult::succeeded(substituted.recipe, substituted.records)
    }
}

fn rejection(outcome: FeasibilityOutcome) -> Option<ComplianceFailure> {
    outcome.violation.map(ComplianceFailure::Infeasible)
}
