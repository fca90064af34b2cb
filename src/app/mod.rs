//! Application layer: configuration, commands, and the CLI adapter.

pub mod cli;
pub mod commands;
pub mod config;
