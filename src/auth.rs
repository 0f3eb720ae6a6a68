// ABOUTME: Account registration and password authentication backed by users.json
// ABOUTME: Passwords are bcrypt-hashed; hashing and verification run on the blocking pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Authentication
//!
//! Users are stored as `{username: {password_hash, created_at}}`, keyed by the
//! trimmed username. A successful
//! [`AuthService::authenticate`] returns a [`Session`], which is the only proof
//! of login the rest of the application accepts.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::{files, messages};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::session::Session;
use crate::storage::JsonStore;

/// Stored account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Registration time, absent for accounts created before it was recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

type UserTable = BTreeMap<String, UserRecord>;

/// Registers users and verifies their credentials
#[derive(Debug, Clone)]
pub struct AuthService {
    store: JsonStore,
    bcrypt_cost: u32,
}

impl AuthService {
    /// Create an auth service over `store`, hashing new passwords with `bcrypt_cost`
    #[must_use]
    pub const fn new(store: JsonStore, bcrypt_cost: u32) -> Self {
        Self { store, bcrypt_cost }
    }

    /// Register a new account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Username or password is empty
    /// - The username is already registered
    /// - Hashing or persisting the account fails
    pub async fn register(&self, username: &str, password: &str) -> AppResult<&'static str> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            AppLogger::log_auth_event(username, "register", false, Some("empty credentials"));
            return Err(AppError::invalid_input(messages::EMPTY_CREDENTIALS));
        }

        let mut users: UserTable = self.store.load_or_default(files::USERS).await?;
        if users.contains_key(username) {
            AppLogger::log_auth_event(username, "register", false, Some("duplicate username"));
            return Err(AppError::already_exists(messages::USERNAME_TAKEN));
        }

        let password_hash = hash_password(password, self.bcrypt_cost).await?;
        users.insert(
            username.to_owned(),
            UserRecord {
                password_hash,
                created_at: Some(Utc::now()),
            },
        );
        self.store.save(files::USERS, &users).await?;

        info!(user.name = %username, "User registered");
        AppLogger::log_auth_event(username, "register", true, None);
        Ok(messages::REGISTRATION_OK)
    }

    /// Verify credentials and open a session
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The username is not registered
    /// - The password does not match
    /// - The users file cannot be read
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<Session> {
        let username = username.trim();
        let users: UserTable = self.store.load_or_default(files::USERS).await?;

        let Some(record) = users.get(username) else {
            AppLogger::log_auth_event(username, "login", false, Some("unknown user"));
            return Err(AppError::auth_invalid(messages::UNKNOWN_USER));
        };

        if !verify_password(password, &record.password_hash).await {
            warn!(user.name = %username, "Incorrect password");
            AppLogger::log_auth_event(username, "login", false, Some("incorrect password"));
            return Err(AppError::auth_invalid(messages::WRONG_PASSWORD));
        }

        AppLogger::log_auth_event(username, "login", true, None);
        Ok(Session::new(username))
    }
}

/// Hash a password with bcrypt on the blocking pool
async fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let password = password.to_owned();

    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")).with_source(e))
}

/// Verify a password against its bcrypt hash on the blocking pool
///
/// Malformed hashes count as a mismatch.
async fn verify_password(password: &str, hash: &str) -> bool {
    let password = password.to_owned();
    let hash = hash.to_owned();

    tokio::task::spawn_blocking(move || bcrypt::verify(&password, &hash).unwrap_or(false))
        .await
        .unwrap_or(false)
}
