// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! LLM module for botstats
//!
//! The Q&A front end: one prompt in, one displayable string out. Failures
//! are rendered as text for the user rather than raised; nothing is retried.

pub mod gemini;
pub mod mock_provider;
pub mod provider;

pub use gemini::GeminiProvider;
pub use mock_provider::{MockProvider, MockResponse};
pub use provider::*;

use crate::config::Settings;
use crate::error::{ApiError, BotStatsError, Result};

/// Build the Gemini provider from settings, honoring a custom base URL
pub fn provider_from_settings(settings: &Settings) -> Result<GeminiProvider> {
    let api_key = settings
        .get_gemini_api_key()
        .ok_or_else(|| ApiError::MissingApiKey(settings.gemini.api_key_env.clone()))?;

    Ok(match &settings.gemini.base_url {
        Some(url) => GeminiProvider::with_base_url(api_key, url),
        None => GeminiProvider::new(api_key),
    })
}

/// Render a failed request the way the front end shows it
pub fn failure_message(error: &BotStatsError) -> String {
    if error.is_auth_failure() {
        format!("API FAILURE: Invalid/Expired Key. Details: {}", error)
    } else {
        format!("AN UNEXPECTED ERROR OCCURRED: {}", error)
    }
}

/// Ask once and return either the answer or a displayable error string
pub async fn answer(provider: &dyn LlmProvider, request: CompletionRequest) -> String {
    match provider.complete(request).await {
        Ok(response) => response.text,
        Err(e) => {
            tracing::warn!(provider = provider.name(), error = %e, "completion failed");
            failure_message(&e)
        }
    }
}

/// One status line about the configured key, without calling the API
pub fn key_status(settings: &Settings) -> String {
    if settings.get_gemini_api_key().is_some() {
        format!("{} detected and loaded.", settings.gemini.api_key_env)
    } else {
        format!(
            "{} not found. Please ensure it is set in your environment.",
            settings.gemini.api_key_env
        )
    }
}
