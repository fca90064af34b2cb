//! Command-line interface.

mod output;
mod wizard;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use crate::adapters::{HttpCompletionClient, RetryingCompletionClient};
use crate::app::commands::{generate, refine};
use crate::app::config::AppConfig;
use crate::domain::{ApiConfig, AppError, CloudProvider, GenerationRequest, ServiceCatalog};
use crate::ports::CompletionClient;

#[derive(Parser)]
#[command(
    name = "terragen",
    version,
    about = "Generate Terraform and OPA Rego scaffolding from a hosted completion API"
)]
struct Cli {
    /// Path to a config file (defaults to ./terragen.toml when present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the full set of Terraform files for a provider and service.
    Generate {
        /// Cloud provider: aws, azure, gcp, or a custom name.
        #[arg(long)]
        provider: String,
        /// Service to scaffold, e.g. "EC2" or "Cloud SQL".
        #[arg(long)]
        service: String,
        /// Also generate a reusable module structure.
        #[arg(long)]
        modules: bool,
        /// Also generate OPA Rego policies.
        #[arg(long)]
        rego: bool,
        /// Directory to export the generated files into.
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Refine an exported file once based on feedback.
    Refine {
        /// Path to the file to refine.
        file: PathBuf,
        /// Feedback describing the desired change.
        #[arg(long)]
        feedback: String,
        /// Cloud provider the file targets.
        #[arg(long)]
        provider: String,
        /// Service the file targets.
        #[arg(long)]
        service: String,
        /// Overwrite the input file with the refined content.
        #[arg(long)]
        write: bool,
    },
    /// List the services available per provider.
    Services {
        /// Limit the listing to one provider.
        #[arg(long)]
        provider: Option<String>,
    },
    /// Pick provider, service, and options interactively.
    Wizard,
}

pub fn run() {
    let cli = Cli::parse();
    match execute(cli) {
        Ok(code) => {
            if code != 0 {
                process::exit(code);
            }
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

fn execute(cli: Cli) -> Result<i32, AppError> {
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Generate { provider, service, modules, rego, out } => {
            run_generate(&config, &provider, &service, modules, rego, out)
        }
        Command::Refine { file, feedback, provider, service, write } => {
            run_refine(&config, &file, &feedback, &provider, &service, write)
        }
        Command::Services { provider } => run_services(provider.as_deref()),
        Command::Wizard => wizard::run_wizard(&config),
    }
}

/// Build the completion client stack: HTTP transport wrapped with retries.
///
/// Fails fast when the API key environment variable is missing, before any
/// prompt is built.
fn completion_client(config: &ApiConfig) -> Result<Box<dyn CompletionClient>, AppError> {
    let http = HttpCompletionClient::from_env(config)?;
    Ok(Box::new(RetryingCompletionClient::from_config(Box::new(http), config)))
}

fn run_generate(
    config: &AppConfig,
    provider: &str,
    service: &str,
    modules: bool,
    rego: bool,
    out: Option<PathBuf>,
) -> Result<i32, AppError> {
    let provider: CloudProvider = provider.parse()?;
    let request = GenerationRequest::new(provider, service, modules, rego)?;
    let client = completion_client(&config.api)?;

    println!("Generating Terraform files for {} on {}...", request.service, request.provider);
    let outcome = generate::generate_file_set(&request, client.as_ref())?;

    output::print_file_set(&outcome.files);
    output::print_summary(&outcome.files);

    if let Some(dir) = out {
        output::export_file_set(&outcome.files, &dir)?;
    }

    Ok(if outcome.all_failed() { 1 } else { 0 })
}

fn run_refine(
    config: &AppConfig,
    file: &Path,
    feedback: &str,
    provider: &str,
    service: &str,
    write: bool,
) -> Result<i32, AppError> {
    let provider: CloudProvider = provider.parse()?;
    let request = GenerationRequest::new(provider, service, false, false)?;
    let existing = fs::read_to_string(file)?;
    let client = completion_client(&config.api)?;

    let refined = refine::refine_file(feedback, &existing, &request, client.as_ref())?;

    if write {
        fs::write(file, refined.as_bytes())?;
        println!("✅ Updated {}", file.display());
    } else {
        println!("{}", refined);
    }

    Ok(0)
}

fn run_services(provider: Option<&str>) -> Result<i32, AppError> {
    let catalog = ServiceCatalog::new();
    let providers: Vec<CloudProvider> = match provider {
        Some(name) => vec![name.parse()?],
        None => CloudProvider::KNOWN.to_vec(),
    };

    for provider in providers {
        println!("{}:", provider.name());
        let services = catalog.services_for(&provider);
        if services.is_empty() {
            println!("  (no built-in services; add your own in the wizard)");
        }
        for service in services {
            println!("  - {}", service);
        }
    }

    Ok(0)
}
