// ABOUTME: Integration tests for the dietary preferences service
// ABOUTME: Covers defaults for unknown users, replacement semantics and the on-disk layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use recipe_assistant::models::{DietMode, DietaryConfiguration};
use recipe_assistant::services::{parse_exclusions, PreferencesService};
use recipe_assistant::storage::JsonStore;
use serde_json::json;

fn preferences_service(dir: &tempfile::TempDir) -> PreferencesService {
    common::init_test_logging();
    PreferencesService::new(JsonStore::new(dir.path()))
}

#[tokio::test]
async fn test_unknown_user_has_no_restrictions() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = preferences_service(&dir).view("nobody").await.unwrap();

    assert_eq!(prefs, DietaryConfiguration::default());
    assert_eq!(prefs.diet_mode, DietMode::None);
    assert!(prefs.exclusions.is_empty());
}

#[tokio::test]
async fn test_update_replaces_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let service = preferences_service(&dir);

    service
        .update("alice", DietMode::Vegan, parse_exclusions("onion, garlic"))
        .await
        .unwrap();
    service
        .update("alice", DietMode::Vegetarian, vec![])
        .await
        .unwrap();
    service
        .update("bob", DietMode::Other("keto".into()), vec!["Sugar".into()])
        .await
        .unwrap();

    let alice = preferences_service(&dir).view("alice").await.unwrap();
    assert_eq!(alice.diet_mode, DietMode::Vegetarian);
    assert!(alice.exclusions.is_empty());

    let raw: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("preferences.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(
        raw,
        json!({
            "alice": {"diet_mode": "vegetarian", "exclusions": []},
            "bob": {"diet_mode": "keto", "exclusions": ["Sugar"]}
        })
    );
}

#[tokio::test]
async fn test_partial_entries_fill_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("preferences.json"),
        r#"{"carol": {"exclusions": ["nuts"]}}"#,
    )
    .unwrap();

    let carol = preferences_service(&dir).view("carol").await.unwrap();
    assert_eq!(carol.diet_mode, DietMode::None);
    assert_eq!(carol.exclusions, vec!["nuts"]);
}
