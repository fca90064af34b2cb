//! Completion endpoint port definition.

use crate::domain::AppError;

/// Request for one text completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// The natural-language prompt to send.
    pub prompt: String,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into() }
    }
}

/// Trimmed text returned by the completion endpoint.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
}

/// Port for the hosted text-completion endpoint.
///
/// One call per file; failure of one call must never abort sibling calls.
pub trait CompletionClient {
    fn complete(&self, request: CompletionRequest) -> Result<Completion, AppError>;
}
