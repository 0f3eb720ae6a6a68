// ABOUTME: Explicit session value identifying the logged-in user
// ABOUTME: Returned by AuthService::authenticate and passed to every per-user operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The authenticated user for one CLI run
///
/// Only [`crate::auth::AuthService`] creates sessions; services take a
/// `&Session` instead of consulting any process-wide "current user".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    username: String,
    authenticated_at: DateTime<Utc>,
}

impl Session {
    pub(crate) fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            authenticated_at: Utc::now(),
        }
    }

    /// Name of the logged-in user
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// When the credentials were verified
    #[must_use]
    pub const fn authenticated_at(&self) -> DateTime<Utc> {
        self.authenticated_at
    }
}
