//! Command implementations shared by the CLI subcommands and the wizard.

pub mod generate;
pub mod refine;
