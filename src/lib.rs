//! terragen: Generate Terraform and OPA Rego scaffolding from a hosted completion API.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

pub use app::commands::generate::{GenerateOutcome, generate_file_set};
pub use app::commands::refine::refine_file;
pub use domain::{
    AppError, CloudProvider, FileKey, FileOutcome, FileSet, GenerationRequest, ServiceCatalog,
};
