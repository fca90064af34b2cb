//! Generation request value types.

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Cloud platform the generated files target.
///
/// The three known platforms are enumerated; anything else the user types is
/// carried through verbatim as `Other` so custom platforms work end to end.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CloudProvider {
    Aws,
    Azure,
    Gcp,
    Other(String),
}

impl CloudProvider {
    /// The three built-in providers, in menu order.
    pub const KNOWN: [CloudProvider; 3] =
        [CloudProvider::Aws, CloudProvider::Azure, CloudProvider::Gcp];

    /// Display name used in prompts and menus.
    pub fn name(&self) -> &str {
        match self {
            CloudProvider::Aws => "AWS",
            CloudProvider::Azure => "Azure",
            CloudProvider::Gcp => "GCP",
            CloudProvider::Other(name) => name.as_str(),
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CloudProvider {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("Cloud provider must not be empty".to_string()));
        }

        Ok(match trimmed.to_ascii_lowercase().as_str() {
            "aws" => CloudProvider::Aws,
            "azure" => CloudProvider::Azure,
            "gcp" => CloudProvider::Gcp,
            _ => CloudProvider::Other(trimmed.to_string()),
        })
    }
}

/// A single user-submitted request for one File Set.
///
/// Immutable once constructed; the constructor enforces the only validation
/// the contract requires (non-empty service).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub provider: CloudProvider,
    pub service: String,
    pub include_modules: bool,
    pub include_rego: bool,
}

impl GenerationRequest {
    pub fn new(
        provider: CloudProvider,
        service: impl Into<String>,
        include_modules: bool,
        include_rego: bool,
    ) -> Result<Self, AppError> {
        let service = service.into().trim().to_string();
        if service.is_empty() {
            return Err(AppError::Validation(
                "Select a cloud provider and service before generating".to_string(),
            ));
        }

        Ok(Self { provider, service, include_modules, include_rego })
    }
}
