//! Adapters: concrete implementations behind the ports.

mod completion_http;
mod completion_retrying;
mod exporter_filesystem;

pub use completion_http::HttpCompletionClient;
pub use completion_retrying::RetryingCompletionClient;
pub use exporter_filesystem::FilesystemExporter;
