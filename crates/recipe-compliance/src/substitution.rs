// ABOUTME: Table-driven ingredient substitution producing a new recipe plus an audit trail
// ABOUTME: Whole ingredient names are replaced when they contain a banned term with a table entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use recipe_core::models::{Recipe, SubstitutionRecord};
use serde::Deserialize;
use tracing::debug;

/// Mapping from a lowercased banned term to its replacement ingredient name
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, String>")]
pub struct SubstitutionTable {
    entries: HashMap<String, String>,
}

impl SubstitutionTable {
    /// Build a table from `(banned, replacement)` pairs; keys are lowercased
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(banned, replacement)| (banned.as_ref().to_lowercase(), replacement.into()))
                .collect(),
        }
    }

    /// Replacement for a lowercased banned term
    #[must_use]
    pub fn replacement_for(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, String>> for SubstitutionTable {
    fn from(entries: HashMap<String, String>) -> Self {
        Self::from_pairs(entries)
    }
}

/// A recipe after substitution, with the replacements that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substituted {
    /// The rewritten recipe
    pub recipe: Recipe,
    /// Replacements in application order, one per replacement, not deduplicated
    pub records: Vec<SubstitutionRecord>,
}

/// Rewrite ingredient names that contain a banned term with a table entry
///
/// Ingredients are visited in order and, for each, terms in the given order.
/// Each term is matched against the ingredient's lowercased name as it was
/// before this call; every match overwrites the name with that term's
/// replacement, so when several terms match the last one determines the
/// final name and each match still yields its own record.
///
/// Terms without a table entry are ignored. Diet rules are not consulted.
/// The input recipe is left untouched.
#[must_use]
pub fn apply_substitutions(
    recipe: &Recipe,
    terms: &[String],
    table: &SubstitutionTable,
) -> Substituted {
    let terms: Vec<String> = terms.iter().map(|t| t.to_lowercase()).collect();
    let mut rewritten = recipe.clone();
    let mut records = Vec::new();

    for ingredient in &mut rewritten.ingredients {
        let key = ingredient.match_key();
        for term in &terms {
            if !key.contains(term.as_str()) {
                continue;
            }
            if let Some(replacement) = table.replacement_for(term) {
                debug!(
                    ingredient = %ingredient.name,
                    term = %term,
                    replacement = %replacement,
                    "Substituting ingredient"
                );
                replacement.clone_into(&mut ingredient.name);
                records.push(SubstitutionRecord::new(term.clone(), replacement));
            }
        }
    }

    Substituted {
        recipe: rewritten,
        records,
    }
}
