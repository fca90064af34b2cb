//! Completion API configuration.

use serde::Deserialize;
use url::Url;

/// Settings for the hosted completion endpoint.
///
/// Every field has a default so a missing or partial `terragen.toml` still
/// yields a working configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Chat-completions endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature; kept low so output stays close to the templates.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Maximum attempts per file, including the first.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base delay between retry attempts in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions")
        .expect("default endpoint URL is valid")
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_temperature() -> f32 {
    0.1
}

fn default_timeout() -> u64 {
    60
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    500
}
