//! Domain model for prompt-driven file generation.

mod catalog;
mod config;
mod error;
mod file_set;
pub mod prompts;
mod request;

pub use catalog::ServiceCatalog;
pub use config::ApiConfig;
pub use error::AppError;
pub use file_set::{FileKey, FileOutcome, FileSet};
pub use request::{CloudProvider, GenerationRequest};
