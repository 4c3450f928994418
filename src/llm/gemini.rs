// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Google Gemini API provider implementation
//!
//! Implements the LlmProvider trait against the `generateContent` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, BotStatsError, Result};
use crate::llm::provider::{CompletionRequest, CompletionResponse, LlmProvider};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini provider
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, GEMINI_API_URL)
    }

    /// Create with a custom base URL
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    fn build_request(request: &CompletionRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
            },
        }
    }

    /// Parse an error response into the appropriate error type
    fn parse_error(status: u16, body: &str) -> BotStatsError {
        let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(body) else {
            return BotStatsError::Api(ApiError::ServerError {
                status,
                message: body.to_string(),
            });
        };

        let message = error_response.error.message;
        let key_rejected = matches!(status, 401 | 403)
            || (error_response.error.status.as_deref() == Some("INVALID_ARGUMENT")
                && message.contains("API key"));

        if key_rejected {
            BotStatsError::Api(ApiError::AuthenticationFailed(message))
        } else {
            BotStatsError::Api(ApiError::ServerError { status, message })
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let body = Self::build_request(&request);
        tracing::debug!(model = %request.model, max_tokens = request.max_tokens, "sending Gemini request");

        let response = self
            .client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::parse_error(status, &body));
        }

        let api_response: GeminiResponse = response.json().await?;

        let candidate = api_response.candidates.into_iter().next().ok_or_else(|| {
            BotStatsError::Api(ApiError::InvalidResponse(
                "response contained no candidates".to_string(),
            ))
        })?;

        let text: String = candidate
            .content
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(BotStatsError::Api(ApiError::InvalidResponse(format!(
                "empty answer (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            ))));
        }

        Ok(CompletionResponse {
            model: api_response.model_version.unwrap_or(request.model),
            text,
        })
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
    status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ENDPOINT: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "gemini-2.5-flash".to_string(),
            prompt: "What is Rust?".to_string(),
            temperature: 0.5,
            max_tokens: 500,
        }
    }

    #[test]
    fn test_build_request_shape() {
        let body = serde_json::to_value(GeminiProvider::build_request(&request())).unwrap();
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "What is Rust?");
        assert_eq!(body["generationConfig"]["temperature"], 0.5);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 500);
    }

    #[test]
    fn test_parse_error_invalid_key() {
        let body = json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })
        .to_string();
        assert!(GeminiProvider::parse_error(400, &body).is_auth_failure());
    }

    #[test]
    fn test_parse_error_other_invalid_argument() {
        let body = json!({
            "error": { "code": 400, "message": "bad temperature", "status": "INVALID_ARGUMENT" }
        })
        .to_string();
        let err = GeminiProvider::parse_error(400, &body);
        assert!(matches!(
            err,
            BotStatsError::Api(ApiError::ServerError { status: 400, .. })
        ));
    }

    #[test]
    fn test_parse_error_unstructured_body() {
        let err = GeminiProvider::parse_error(502, "Bad Gateway");
        assert!(err.to_string().contains("Bad Gateway"));
    }

    #[tokio::test]
    async fn test_complete_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "generationConfig": { "maxOutputTokens": 500 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{ "text": "A systems " }, { "text": "language." }]
                    },
                    "finishReason": "STOP"
                }],
                "modelVersion": "gemini-2.5-flash-001"
            })))
            .mount(&mock_server)
            .await;

        let provider = GeminiProvider::with_base_url("test-key", mock_server.uri());
        let response = provider.complete(request()).await.unwrap();

        assert_eq!(response.text, "A systems language.");
        assert_eq!(response.model, "gemini-2.5-flash-001");
    }

    #[tokio::test]
    async fn test_complete_rejected_key() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "code": 400,
                    "message": "API key expired. Please renew the API key.",
                    "status": "INVALID_ARGUMENT"
                }
            })))
            .mount(&mock_server)
            .await;

        let provider = GeminiProvider::with_base_url("old-key", mock_server.uri());
        let err = provider.complete(request()).await.unwrap_err();
        assert!(err.is_auth_failure());
    }

    #[tokio::test]
    async fn test_complete_no_candidates() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&mock_server)
            .await;

        let provider = GeminiProvider::with_base_url("test-key", mock_server.uri());
        let err = provider.complete(request()).await.unwrap_err();
        assert!(matches!(
            err,
            BotStatsError::Api(ApiError::InvalidResponse(_))
        ));
    }
}
