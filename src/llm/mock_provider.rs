// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Mock LLM provider for testing
//!
//! Provides a configurable mock implementation of the LlmProvider trait
//! that can be used in unit tests without making real API calls.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{ApiError, BotStatsError, Result};
use crate::llm::provider::{CompletionRequest, CompletionResponse, LlmProvider};

/// What the mock returns for one call
#[derive(Clone, Debug)]
pub enum MockResponse {
    Text(String),
    AuthFailure(String),
    ServerError { status: u16, message: String },
}

impl Default for MockResponse {
    fn default() -> Self {
        MockResponse::Text("Mock response".to_string())
    }
}

/// A mock LLM provider for testing
#[derive(Clone)]
pub struct MockProvider {
    /// Configured responses
    responses: Arc<Mutex<Vec<MockResponse>>>,
    /// Call counter
    call_count: Arc<AtomicUsize>,
    /// Recorded requests
    recorded_requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("Mock provider lock was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

impl MockProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(vec![MockResponse::default()])),
            call_count: Arc::new(AtomicUsize::new(0)),
            recorded_requests: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Set the text response
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.with_outcome(MockResponse::Text(text.into()))
    }

    /// Set an arbitrary outcome
    pub fn with_outcome(self, outcome: MockResponse) -> Self {
        {
            let mut responses = lock(&self.responses);
            responses.clear();
            responses.push(outcome);
        }
        self
    }

    /// Get the number of times complete() was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Get the last request made
    pub fn last_request(&self) -> Option<CompletionRequest> {
        lock(&self.recorded_requests).last().cloned()
    }

    /// Get the next response
    fn next_response(&self) -> MockResponse {
        let count = self.call_count.fetch_add(1, Ordering::SeqCst);
        let responses = lock(&self.responses);
        if responses.is_empty() {
            MockResponse::default()
        } else {
            responses[count.min(responses.len() - 1)].clone()
        }
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        lock(&self.recorded_requests).push(request.clone());

        match self.next_response() {
            MockResponse::Text(text) => Ok(CompletionResponse {
                model: request.model,
                text,
            }),
            MockResponse::AuthFailure(message) => {
                Err(BotStatsError::Api(ApiError::AuthenticationFailed(message)))
            }
            MockResponse::ServerError { status, message } => {
                Err(BotStatsError::Api(ApiError::ServerError { status, message }))
            }
        }
    }
}
