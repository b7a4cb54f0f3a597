//! OpenRouterApiAgent - Direct REST API implementation for OpenRouter.
//!
//! Issues a single synchronous chat-completion request per call: one
//! system instruction plus the latest user utterance, a fixed temperature
//! and an output-length cap. No streaming, no retries.
//! Configuration priority: ~/.config/rolelens/secret.json > environment variables

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;

use crate::config;
use crate::error::GenerationError;

const DEFAULT_MODEL: &str = "mistralai/mixtral-8x7b-instruct";
const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_TEMPERATURE: f32 = 0.3;
const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Agent that talks to an OpenRouter-compatible chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct OpenRouterApiAgent {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenRouterApiAgent {
    /// Creates a new agent with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Loads configuration from ~/.config/rolelens/secret.json or environment variables.
    ///
    /// Priority:
    /// 1. ~/.config/rolelens/secret.json
    /// 2. Environment variables (OPENROUTER_API_KEY, OPENROUTER_MODEL_NAME)
    ///
    /// Model name defaults to `mistralai/mixtral-8x7b-instruct` if not specified.
    ///
    /// Returns `None` when no credential is configured anywhere; callers
    /// treat that as the offline-fallback case, not as an error.
    pub fn try_from_env() -> Option<Self> {
        if let Ok(secret_config) = config::load_secret_config() {
            if let Some(openrouter) = secret_config.openrouter {
                let model = openrouter.model_name.unwrap_or_else(|| DEFAULT_MODEL.into());
                return Some(Self::new(openrouter.api_key, model));
            }
        }

        let api_key = env::var("OPENROUTER_API_KEY").ok()?;
        let model = env::var("OPENROUTER_MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL.into());
        Some(Self::new(api_key, model))
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Overrides the output-length cap.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Points the agent at a different OpenRouter-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The model identifier this agent requests.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Requests one completion for a system + user message pair.
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String, GenerationError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_text.to_string(),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        self.send_request(&request).await
    }

    async fn send_request(
        &self,
        body: &ChatCompletionRequest,
    ) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(model = %body.model, "requesting completion");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| GenerationError::MalformedResponse(err.to_string()))?;

        extract_text_response(parsed)
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String, GenerationError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(GenerationError::EmptyCompletion)
}

fn map_http_error(status: StatusCode, body: String) -> GenerationError {
    // Prefer the service's structured error message when the body has one.
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or(body);

    GenerationError::Http {
        status: status.as_u16(),
        message,
    }
}
