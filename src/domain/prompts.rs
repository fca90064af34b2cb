//! Prompt Builder: fixed natural-language templates rendered per file key.
//!
//! The prompt plan is deterministic for a given request: the same provider,
//! service, and toggles always produce the same ordered set of prompts.

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, FileKey, GenerationRequest};

const PROVIDER_TEMPLATE: &str = "\
Create a Terraform `provider.tf` file for {{ service }} on {{ provider }}.
Ensure the provider block follows best practices with dynamic region and authentication details.
";

const VARIABLES_TEMPLATE: &str = "\
Create a Terraform `variables.tf` file for {{ service }} on {{ provider }}.
Include key variables like region, instance type, and scaling configurations.
Follow naming conventions and add meaningful descriptions for all variables.
Do NOT include any resource blocks here.
";

const MAIN_TEMPLATE: &str = "\
Create a Terraform `main.tf` file for {{ service }} on {{ provider }}.
Reference variables from `variables.tf` instead of defining them here.
Exclude the provider block (which belongs in `provider.tf`).
Include clear resource blocks with appropriate tags, encryption settings, and IAM roles.
Follow best practices for modularization, security, and scalability.
";

const BACKEND_TEMPLATE: &str = "\
Create a Terraform `backend.tf` file for {{ service }} on {{ provider }}.
Include recommended configurations for remote state storage such as AWS S3 with DynamoDB for state locking.
Ensure best practices for secure storage and state integrity are followed.
";

const OUTPUTS_TEMPLATE: &str = "\
Create a Terraform `outputs.tf` file for {{ service }} on {{ provider }}.
Define meaningful output variables such as `public_ip`, `instance_id`, or `service_url` to simplify integrations.
";

const MODULES_TEMPLATE: &str = "\
Create a Terraform `module` structure for {{ service }} on {{ provider }}.
Include reusable module files such as `main.tf`, `variables.tf`, and `outputs.tf`.
Follow best practices for scalability and maintainability.
";

const REGO_TEMPLATE: &str = "\
Create OPA (Open Policy Agent) `rego` policies for {{ service }} on {{ provider }}.
Ensure the policies enforce best practices for security, data protection, and resource usage.
Include sample rules for IAM roles, resource tagging, and encryption enforcement.
";

const INSTRUCTIONS_TEMPLATE: &str = "\
Provide clear instructions for deploying the generated Terraform files for {{ service }} on {{ provider }}.
Include steps for `terraform init`, `terraform plan`, and `terraform apply`.
Add best practices for securing state files and backend setup.
";

const REFINEMENT_TEMPLATE: &str = "\
Refine the following Terraform configuration for {{ service }} on {{ provider }} based on this user feedback:

Feedback: {{ feedback }}

Configuration:
{{ existing_code }}

Ensure the output remains structured, clean, and easy to read.
Ensure variables are defined only in `variables.tf` and referenced in `main.tf`.
Keep the provider block isolated in `provider.tf`.
Improve security, efficiency, maintainability, and follow best practices.
Output only the updated configuration.
";

fn template_for(key: FileKey) -> &'static str {
    match key {
        FileKey::Provider => PROVIDER_TEMPLATE,
        FileKey::Variables => VARIABLES_TEMPLATE,
        FileKey::Main => MAIN_TEMPLATE,
        FileKey::Backend => BACKEND_TEMPLATE,
        FileKey::Outputs => OUTPUTS_TEMPLATE,
        FileKey::Modules => MODULES_TEMPLATE,
        FileKey::RegoPolicies => REGO_TEMPLATE,
        FileKey::Instructions => INSTRUCTIONS_TEMPLATE,
    }
}

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env
}

fn render(env: &Environment<'_>, name: &str, template: &str, ctx: minijinja::Value) -> Result<String, AppError> {
    env.render_str(template, ctx)
        .map_err(|err| AppError::PromptRender { template: name.to_string(), reason: err.to_string() })
}

/// Build the ordered prompt plan for one generation request.
///
/// Always {provider, variables, main, backend, outputs, instructions}; the
/// `modules` and `rego_policies` entries are inserted before `instructions`
/// when the corresponding toggle is set.
pub fn build_prompt_plan(request: &GenerationRequest) -> Result<Vec<(FileKey, String)>, AppError> {
    let mut keys = vec![
        FileKey::Provider,
        FileKey::Variables,
        FileKey::Main,
        FileKey::Backend,
        FileKey::Outputs,
    ];
    if request.include_modules {
        keys.push(FileKey::Modules);
    }
    if request.include_rego {
        keys.push(FileKey::RegoPolicies);
    }
    keys.push(FileKey::Instructions);

    let env = environment();
    let ctx = context! {
        provider => request.provider.name(),
        service => request.service.as_str(),
    };

    keys.into_iter()
        .map(|key| {
            render(&env, key.as_str(), template_for(key), ctx.clone()).map(|prompt| (key, prompt))
        })
        .collect()
}

/// Build the single revision prompt for one feedback submission.
///
/// Pure function of its inputs; the existing code is embedded verbatim and
/// never mutated.
pub fn build_refinement_prompt(
    feedback: &str,
    existing_code: &str,
    request: &GenerationRequest,
) -> Result<String, AppError> {
    let trimmed = feedback.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Feedback must not be empty".to_string()));
    }

    let env = environment();
    let ctx = context! {
        provider => request.provider.name(),
        service => request.service.as_str(),
        feedback => trimmed,
        existing_code => existing_code,
    };

    render(&env, "refinement", REFINEMENT_TEMPLATE, ctx)
}
