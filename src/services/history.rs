// ABOUTME: Per-user recipe history backed by history.json
// ABOUTME: Appends successful recipes in order and resets the legacy top-level list layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::constants::files;
use crate::errors::AppResult;
use crate::models::Recipe;
use crate::storage::JsonStore;

/// One saved recipe
///
/// Serialized as the recipe's own fields plus an optional `saved_at`, so
/// entries written without a timestamp still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The recipe as it was shown to the user
    #[serde(flatten)]
    pub recipe: Recipe,
    /// When the entry was appended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

type HistoryTable = BTreeMap<String, Vec<HistoryEntry>>;

/// Appends to and lists per-user recipe history
#[derive(Debug, Clone)]
pub struct HistoryService {
    store: JsonStore,
}

impl HistoryService {
    /// Create a history service over `store`
    #[must_use]
    pub const fn new(store: JsonStore) -> Self {
        Self { store }
    }

    async fn load(&self) -> AppResult<HistoryTable> {
        let raw: Value = self.store.load_or_default(files::HISTORY).await?;
        match raw {
            Value::Null => Ok(HistoryTable::new()),
            Value::Array(_) => {
                // Old layout kept a single list shared by all users
                info!("Resetting legacy history list to per-user layout");
                let table = HistoryTable::new();
                self.store.save(files::HISTORY, &table).await?;
                Ok(table)
            }
            Value::Object(users) => Ok(users
                .into_iter()
                .filter_map(|(username, entries)| {
                    parse_user_entries(&username, entries).map(|parsed| (username, parsed))
                })
                .collect()),
            other => {
                warn!(kind = %value_kind(&other), "Unexpected history layout, starting empty");
                Ok(HistoryTable::new())
            }
        }
    }

    /// Append `recipe` to the end of `username`'s history
    ///
    /// # Errors
    ///
    /// Returns an error if the history file cannot be read or written
    pub async fn add_entry(&self, username: &str, recipe: Recipe) -> AppResult<HistoryEntry> {
        let mut table = self.load().await?;
        let entry = HistoryEntry {
            recipe,
            saved_at: Some(Utc::now()),
        };
        table
            .entry(username.to_owned())
            .or_default()
            .push(entry.clone());
        self.store.save(files::HISTORY, &table).await?;

        info!(user.name = %username, dish = %entry.recipe.dish_name, "History entry added");
        Ok(entry)
    }

    /// All entries for `username` in insertion order; empty for unknown users
    ///
    /// # Errors
    ///
    /// Returns an error if the history file cannot be read
    pub async fn get_history(&self, username: &str) -> AppResult<Vec<HistoryEntry>> {
        let mut table = self.load().await?;
        Ok(table.remove(username).unwrap_or_default())
    }
}

/// Parse one user's entries, dropping the ones that do not decode
///
/// A malformed entry costs only itself; the rest of the user's history and
/// every other user's history are kept and written back on the next save.
fn parse_user_entries(username: &str, entries: Value) -> Option<Vec<HistoryEntry>> {
    let Value::Array(items) = entries else {
        warn!(user.name = %username, "History for user is not a list, skipping");
        return None;
    };

    let parsed = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(user.name = %username, index, error = %e, "Skipping unreadable history entry");
                None
            }
        })
        .collect();
    Some(parsed)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    #[test]
    fn test_entry_without_timestamp_deserializes() {
        let entry: HistoryEntry = serde_json::from_str(
            r#"{"dish_name": "Poutine", "ingredients": [{"name": "fries", "quantity": "1 lb"}], "steps": ["Fry."]}"#,
        )
        .unwrap();

        assert_eq!(entry.recipe.dish_name, "Poutine");
        assert_eq!(entry.recipe.ingredients, vec![Ingredient::new("fries").with_quantity("1 lb")]);
        assert!(entry.saved_at.is_none());
    }

    #[test]
    fn test_entry_serializes_flat() {
        let entry = HistoryEntry {
            recipe: Recipe::new("Toast", vec![Ingredient::new("bread")], vec![]),
            saved_at: None,
        };
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["dish_name"], "Toast");
        assert!(value.get("recipe").is_none());
        assert!(value.get("saved_at").is_none());
    }
}
