//! Interactive session: provider and service selection, generation,
//! refinement, and export in one loop.
//!
//! The custom service registry and the last generated file set live only in
//! this loop; quitting the wizard discards both.

use std::path::Path;

use dialoguer::{Confirm, Input, Select};

use crate::app::commands::{generate, refine};
use crate::app::config::AppConfig;
use crate::domain::{
    AppError, CloudProvider, FileKey, FileOutcome, FileSet, GenerationRequest, ServiceCatalog,
};
use crate::ports::CompletionClient;

use super::output;

const ADD_CUSTOM_SERVICE: &str = "[add custom service]";

const MENU_GENERATE: &str = "Generate configuration";
const MENU_ADD_SERVICE: &str = "Add custom service";
const MENU_REFINE: &str = "Refine a generated file";
const MENU_EXPORT: &str = "Export generated files";
const MENU_QUIT: &str = "Quit";

pub(super) fn run_wizard(config: &AppConfig) -> Result<i32, AppError> {
    // Build the client up front so a missing API key fails before any
    // interaction.
    let client = super::completion_client(&config.api)?;

    let mut catalog = ServiceCatalog::new();
    let mut last: Option<(GenerationRequest, FileSet)> = None;

    println!("Terraform scaffolding wizard. Press Esc at any menu to go back.");
    loop {
        let mut items = vec![MENU_GENERATE, MENU_ADD_SERVICE];
        if last.is_some() {
            items.push(MENU_REFINE);
            items.push(MENU_EXPORT);
        }
        items.push(MENU_QUIT);

        let Some(index) = select("What next?", &items)? else {
            return Ok(0);
        };

        match items[index] {
            MENU_GENERATE => {
                if let Some(session) = generate_flow(&mut catalog, client.as_ref())? {
                    last = Some(session);
                }
            }
            MENU_ADD_SERVICE => add_custom_flow(&mut catalog)?,
            MENU_REFINE => {
                if let Some((request, files)) = last.as_mut() {
                    refine_flow(request, files, client.as_ref())?;
                }
            }
            MENU_EXPORT => {
                if let Some((_, files)) = last.as_ref() {
                    export_flow(files)?;
                }
            }
            _ => return Ok(0),
        }
    }
}

fn generate_flow(
    catalog: &mut ServiceCatalog,
    client: &dyn CompletionClient,
) -> Result<Option<(GenerationRequest, FileSet)>, AppError> {
    let Some(provider) = select_provider()? else {
        return Ok(None);
    };
    let Some(service) = select_service(catalog, &provider)? else {
        return Ok(None);
    };
    let modules = confirm("Include Terraform modules?")?;
    let rego = confirm("Include OPA Rego policies?")?;

    let request = GenerationRequest::new(provider, service, modules, rego)?;
    println!("Generating Terraform files for {} on {}...", request.service, request.provider);

    let outcome = generate::generate_file_set(&request, client)?;
    output::print_file_set(&outcome.files);
    output::print_summary(&outcome.files);

    Ok(Some((request, outcome.files)))
}

fn add_custom_flow(catalog: &mut ServiceCatalog) -> Result<(), AppError> {
    let Some(provider) = select_provider()? else {
        return Ok(());
    };
    let name = input("Custom service name")?;

    match catalog.add_custom(&provider, &name) {
        Ok(added) => println!("✅ Added '{}' for {}.", added, provider),
        Err(error) => println!("⚠️ {}", error),
    }

    Ok(())
}

fn refine_flow(
    request: &GenerationRequest,
    files: &mut FileSet,
    client: &dyn CompletionClient,
) -> Result<(), AppError> {
    let generated: Vec<FileKey> =
        files.iter().filter(|(_, outcome)| !outcome.is_failed()).map(|(key, _)| key).collect();
    if generated.is_empty() {
        println!("⚠️ No successfully generated files to refine.");
        return Ok(());
    }

    let items: Vec<String> = generated.iter().map(|key| key.file_name()).collect();
    let Some(index) = select("Which file should be refined?", &items)? else {
        return Ok(());
    };
    let key = generated[index];

    let feedback = input("Feedback")?;
    if feedback.trim().is_empty() {
        println!("⚠️ Feedback was empty; nothing to refine.");
        return Ok(());
    }

    let existing =
        files.get(key).and_then(FileOutcome::content).unwrap_or_default().to_string();

    // One feedback submission, one revision. On failure the stored content is
    // left as it was.
    match refine::refine_file(&feedback, &existing, request, client) {
        Ok(refined) => {
            println!();
            println!("===== {} (refined) =====", key.file_name());
            println!("{}", refined);
            files.insert(key, FileOutcome::Generated(refined));
            println!("✅ Updated the stored copy of {}.", key.file_name());
        }
        Err(error) => println!("❌ Refinement failed: {}", error),
    }

    Ok(())
}

fn export_flow(files: &FileSet) -> Result<(), AppError> {
    let dir: String = Input::new()
        .with_prompt("Output directory")
        .default("./terraform".to_string())
        .interact_text()
        .map_err(|err| AppError::Validation(format!("Failed to read input: {}", err)))?;

    output::export_file_set(files, Path::new(dir.trim()))
}

fn select_provider() -> Result<Option<CloudProvider>, AppError> {
    let items: Vec<String> =
        CloudProvider::KNOWN.iter().map(|provider| provider.name().to_string()).collect();
    let selection = select("Select a cloud provider", &items)?;
    Ok(selection.map(|index| CloudProvider::KNOWN[index].clone()))
}

fn select_service(
    catalog: &mut ServiceCatalog,
    provider: &CloudProvider,
) -> Result<Option<String>, AppError> {
    loop {
        let mut items = catalog.services_for(provider);
        items.push(ADD_CUSTOM_SERVICE.to_string());

        let Some(index) = select(&format!("Select a {} service", provider), &items)? else {
            return Ok(None);
        };

        if items[index] == ADD_CUSTOM_SERVICE {
            let name = input("Custom service name")?;
            match catalog.add_custom(provider, &name) {
                Ok(added) => return Ok(Some(added)),
                Err(error) => println!("⚠️ {}", error),
            }
            continue;
        }

        return Ok(Some(items[index].clone()));
    }
}

fn select<T: ToString>(prompt: &str, items: &[T]) -> Result<Option<usize>, AppError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Validation(format!("Failed to read selection: {}", err)))
}

fn input(prompt: &str) -> Result<String, AppError> {
    Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|err| AppError::Validation(format!("Failed to read input: {}", err)))
}

fn confirm(prompt: &str) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|err| AppError::Validation(format!("Failed to read confirmation: {}", err)))
}
