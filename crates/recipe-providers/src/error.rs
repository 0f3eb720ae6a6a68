// ABOUTME: Structured error type for external recipe provider calls
// ABOUTME: Converts into the workspace AppError at the crate boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

use crate::errors::AppError;

/// Failure talking to an external recipe provider
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request never produced a response (DNS, connect, timeout)
    #[error("{provider} request failed: {source}")]
    Network {
        /// Provider name
        provider: &'static str,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status
    #[error("{provider} returned HTTP {status}: {body}")]
    Http {
        /// Provider name
        provider: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The response body was not the expected JSON shape
    #[error("{provider} response could not be parsed: {message}")]
    Parse {
        /// Provider name
        provider: &'static str,
        /// Decoder message
        message: String,
    },

    /// The provider is misconfigured (e.g. missing API key)
    #[error("{provider} is not configured: {message}")]
    Config {
        /// Provider name
        provider: &'static str,
        /// What is missing
        message: String,
    },
}

impl ProviderError {
    /// Name of the provider that failed
    #[must_use]
    pub const fn provider(&self) -> &'static str {
        match self {
            Self::Network { provider, .. }
            | Self::Http { provider, .. }
            | Self::Parse { provider, .. }
            | Self::Config { provider, .. } => provider,
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        let provider = error.provider();
        let message = error.to_string();
        match error {
            ProviderError::Network { .. } => {
                Self::external_unavailable(provider, message).with_source(error)
            }
            ProviderError::Config { .. } => Self::config(message),
            ProviderError::Http { .. } | ProviderError::Parse { .. } => {
                Self::external_service(provider, message).with_source(error)
            }
        }
    }
}

/// Result alias for provider calls
pub type ProviderResult<T> = Result<T, ProviderError>;
