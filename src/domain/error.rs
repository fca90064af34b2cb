use std::io;

use thiserror::Error;

/// Library-wide error type for terragen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Required environment variable is not set.
    #[error("Missing environment variable: {0}. Export {0}=<your-api-key> before running.")]
    EnvironmentVariableMissing(String),

    /// Configuration file or value issue.
    #[error("{0}")]
    Configuration(String),

    /// Completion endpoint failure (transport error, HTTP status, or empty reply).
    #[error("Completion API error: {message}")]
    CompletionApi { message: String, status: Option<u16> },

    /// User input rejected before any work was done.
    #[error("{0}")]
    Validation(String),

    /// Prompt template failed to render.
    #[error("Failed to render prompt template '{template}': {reason}")]
    PromptRender { template: String, reason: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}
