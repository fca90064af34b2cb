//! Completion endpoint client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue, RETRY_AFTER};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{ApiConfig, AppError};
use crate::ports::{Completion, CompletionClient, CompletionRequest};

/// Environment variable holding the completion API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const DEFAULT_STATUS_MESSAGE: &str = "Completion request failed";

/// HTTP transport for the completion endpoint.
///
/// This client performs a single request per call. Retry behavior is
/// implemented by a dedicated retry wrapper adapter.
#[derive(Clone)]
pub struct HttpCompletionClient {
    api_key: String,
    api_url: Url,
    model: String,
    temperature: f32,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCompletionClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::CompletionApi {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            client,
        })
    }

    /// Create from the `OPENAI_API_KEY` environment variable.
    ///
    /// A missing credential is fatal before any prompt is issued.
    pub fn from_env(config: &ApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AppError::EnvironmentVariableMissing(API_KEY_ENV.into()))?;

        Self::new(api_key, config)
    }

    fn send_request(&self, request: &ApiRequest) -> Result<Completion, AppError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::CompletionApi {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let retry_after_ms = response.headers().get(RETRY_AFTER).and_then(parse_retry_after_ms);
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ApiResponse =
                serde_json::from_str(&body_text).map_err(|e| AppError::CompletionApi {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                })?;

            let text = api_response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .map(|content| content.trim().to_string())
                .unwrap_or_default();

            if text.is_empty() {
                return Err(AppError::CompletionApi {
                    message: "Empty completion in response".into(),
                    status: Some(status.as_u16()),
                });
            }

            return Ok(Completion { text });
        }

        let mut message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        if let Some(value) = retry_after_ms {
            message.push_str(&format!(" (retry_after_ms={})", value));
        }

        Err(AppError::CompletionApi { message, status: Some(status.as_u16()) })
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

fn parse_retry_after_ms(value: &HeaderValue) -> Option<u64> {
    let raw = value.to_str().ok()?.trim();
    let seconds = raw.parse::<u64>().ok()?;
    Some(seconds.saturating_mul(1000))
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, request: CompletionRequest) -> Result<Completion, AppError> {
        let api_request = ApiRequest {
            model: self.model.clone(),
            messages: vec![Message { role: "user", content: request.prompt }],
            temperature: self.temperature,
        };

        self.send_request(&api_request)
    }
}
