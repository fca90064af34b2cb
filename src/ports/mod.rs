//! Ports: trait seams between the application and the outside world.

mod completion;

pub use completion::{Completion, CompletionClient, CompletionRequest};
