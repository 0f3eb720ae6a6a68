// ABOUTME: Shared HTTP client with connection pooling for recipe provider calls
// ABOUTME: Built once from HttpClientConfig; falls back to default timeouts if never configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

use recipe_core::constants::defaults::{HTTP_CONNECT_TIMEOUT_SECS, HTTP_TIMEOUT_SECS};

/// Timeouts and identification for outbound provider requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Total request timeout
    pub timeout: Duration,
    /// TCP/TLS connect timeout
    pub connect_timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS),
        }
    }
}

static CLIENT_CONFIG: OnceLock<HttpClientConfig> = OnceLock::new();

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Record the client configuration
///
/// Only the first call has an effect, and only if it happens before the first
/// `shared_client()` call.
pub fn initialize_shared_client(config: HttpClientConfig) {
    let _ = CLIENT_CONFIG.set(config);
}

/// Get the shared HTTP client for provider API calls
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let config = CLIENT_CONFIG.get().copied().unwrap_or_default();

        ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("recipe-assistant/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
