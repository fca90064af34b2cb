//! Single-shot refinement of one generated file.

use crate::domain::prompts::build_refinement_prompt;
use crate::domain::{AppError, GenerationRequest};
use crate::ports::{CompletionClient, CompletionRequest};

/// Produce one revision of `existing_code` from one piece of feedback.
///
/// Exactly one completion call per invocation; the existing content is left
/// untouched and the revision is returned to the caller to display, store,
/// or write out.
pub fn refine_file(
    feedback: &str,
    existing_code: &str,
    request: &GenerationRequest,
    client: &dyn CompletionClient,
) -> Result<String, AppError> {
    let prompt = build_refinement_prompt(feedback, existing_code, request)?;
    let completion = client.complete(CompletionRequest::new(prompt))?;
    Ok(completion.text)
}
