// ABOUTME: Integration tests for account registration and login
// ABOUTME: Validates messages, error codes, bcrypt storage and the returned session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use recipe_assistant::auth::AuthService;
use recipe_assistant::errors::ErrorCode;
use recipe_assistant::storage::JsonStore;
use serde_json::Value;

fn auth_service(dir: &tempfile::TempDir) -> AuthService {
    common::init_test_logging();
    AuthService::new(JsonStore::new(dir.path()), 4)
}

#[tokio::test]
async fn test_register_then_login() {
    let dir = tempfile::tempdir().unwrap();
    let auth = auth_service(&dir);

    let message = auth.register("alice", "s3cret").await.unwrap();
    assert_eq!(message, "Registration successful.");

    let session = auth.authenticate("alice", "s3cret").await.unwrap();
    assert_eq!(session.username(), "alice");
}

#[tokio::test]
async fn test_password_is_stored_as_bcrypt_hash() {
    let dir = tempfile::tempdir().unwrap();
    let auth = auth_service(&dir);
    auth.register("alice", "s3cret").await.unwrap();

    let raw: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("users.json")).unwrap())
            .unwrap();
    let hash = raw["alice"]["password_hash"].as_str().unwrap();

    assert_ne!(hash, "s3cret");
    assert!(hash.starts_with("$2"));
    assert!(raw["alice"].get("password").is_none());
}

#[tokio::test]
async fn test_empty_credentials_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let auth = auth_service(&dir);

    for (username, password) in [("", "pw"), ("bob", ""), ("   ", "pw")] {
        let err = auth.register(username, password).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.to_string(), "Username / Password cannot be empty.");
    }
    assert!(!dir.path().join("users.json").exists());
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let auth = auth_service(&dir);
    auth.register("alice", "one").await.unwrap();

    let err = auth.register("alice", "two").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(err.to_string(), "Username already exists.");

    // The original password still works
    assert!(auth.authenticate("alice", "one").await.is_ok());
}

#[tokio::test]
async fn test_usernames_are_trimmed_on_register_and_login() {
    let dir = tempfile::tempdir().unwrap();
    let auth = auth_service(&dir);
    auth.register(" alice ", "pw").await.unwrap();

    let session = auth.authenticate("alice", "pw").await.unwrap();
    assert_eq!(session.username(), "alice");
    let session = auth.authenticate("  alice\t", "pw").await.unwrap();
    assert_eq!(session.username(), "alice");

    let err = auth.register("alice", "other").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);

    let raw: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("users.json")).unwrap())
            .unwrap();
    assert!(raw.get("alice").is_some());
    assert!(raw.get(" alice ").is_none());
}

#[tokio::test]
async fn test_unknown_user_and_wrong_password() {
    let dir = tempfile::tempdir().unwrap();
    let auth = auth_service(&dir);
    auth.register("alice", "right").await.unwrap();

    let err = auth.authenticate("mallory", "right").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::AuthInvalid);
    assert_eq!(err.to_string(), "User does not exist.");

    let err = auth.authenticate("alice", "wrong").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::AuthInvalid);
    assert_eq!(err.to_string(), "Incorrect password.");
}

#[tokio::test]
async fn test_accounts_survive_a_new_service_instance() {
    let dir = tempfile::tempdir().unwrap();
    auth_service(&dir).register("alice", "pw").await.unwrap();

    let session = auth_service(&dir).authenticate("alice", "pw").await.unwrap();
    assert_eq!(session.username(), "alice");
}

#[tokio::test]
async fn test_corrupt_hash_counts_as_wrong_password() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("users.json"),
        r#"{"legacy": {"password_hash": "plaintext"}}"#,
    )
    .unwrap();

    let err = auth_service(&dir)
        .authenticate("legacy", "plaintext")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Incorrect password.");
}
