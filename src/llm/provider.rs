// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! LLM Provider trait and related types
//!
//! Single-prompt completions only: no conversation state, no streaming.

use async_trait::async_trait;

use crate::config::GeminiConfig;
use crate::error::Result;

/// Main trait for LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "gemini")
    fn name(&self) -> &str;

    /// Non-streaming completion
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;
}

/// Request for completion
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Model to use
    pub model: String,

    /// The user's question
    pub prompt: String,

    /// Temperature for sampling
    pub temperature: f32,

    /// Maximum tokens in response
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Build a request for `prompt` using configured model and sampling defaults
    pub fn from_config(prompt: impl Into<String>, config: &GeminiConfig) -> Self {
        Self {
            model: config.default_model.clone(),
            prompt: prompt.into(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Response from completion
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    /// Model that produced the answer
    pub model: String,

    /// Answer text
    pub text: String,
}
