//! File Set generation: one completion call per planned file.

use crate::domain::prompts::build_prompt_plan;
use crate::domain::{AppError, FileOutcome, FileSet, GenerationRequest};
use crate::ports::{CompletionClient, CompletionRequest};

/// Result of one generation run.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub files: FileSet,
}

impl GenerateOutcome {
    pub fn generated_count(&self) -> usize {
        self.files.len() - self.files.failed_count()
    }

    pub fn all_failed(&self) -> bool {
        self.files.all_failed()
    }
}

/// Generate every file in the request's plan.
///
/// Each file is one independent completion call. A failed call is recorded as
/// an explicit failure marker in the set and never prevents the remaining
/// files from being attempted, so the returned set always covers the full
/// plan.
pub fn generate_file_set(
    request: &GenerationRequest,
    client: &dyn CompletionClient,
) -> Result<GenerateOutcome, AppError> {
    let plan = build_prompt_plan(request)?;
    let mut files = FileSet::new();

    for (key, prompt) in plan {
        println!("⏳ Generating {}...", key.file_name());
        match client.complete(CompletionRequest::new(prompt)) {
            Ok(completion) => {
                println!("✅ {} ready", key.file_name());
                files.insert(key, FileOutcome::Generated(completion.text));
            }
            Err(error) => {
                println!("❌ {} failed: {}", key.file_name(), error);
                files.insert(key, FileOutcome::Failed(error.to_string()));
            }
        }
    }

    Ok(GenerateOutcome { files })
}
