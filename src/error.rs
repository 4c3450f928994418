// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for botstats
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for botstats operations
#[derive(Error, Debug)]
pub enum BotStatsError {
    /// API-related errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// API-specific error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// No usable API key was configured
    #[error("API key not set: {0}")]
    MissingApiKey(String),

    /// Authentication failed (invalid or expired API key)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Invalid response from API
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// API returned an error
    #[error("API error ({status}): {message}")]
    ServerError { status: u16, message: String },
}

impl BotStatsError {
    /// Whether the error comes from a rejected credential
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, BotStatsError::Api(ApiError::AuthenticationFailed(_)))
    }
}

/// Result type alias for botstats operations
pub type Result<T> = std::result::Result<T, BotStatsError>;
