//! Service catalog: built-in service lists plus the per-session custom registry.

use std::collections::HashMap;

use crate::domain::{AppError, CloudProvider};

/// Built-in and user-added services per provider.
///
/// Custom entries live only for the lifetime of one session and are appended
/// after the defaults in the order they were added. Adding a service to one
/// provider never affects another provider's list.
#[derive(Debug, Clone, Default)]
pub struct ServiceCatalog {
    custom: HashMap<CloudProvider, Vec<String>>,
}

impl ServiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in service names for a provider. Custom providers start empty.
    pub fn defaults_for(provider: &CloudProvider) -> &'static [&'static str] {
        match provider {
            CloudProvider::Aws => &["EC2", "S3", "RDS", "EKS", "Load Balancer", "Firewall"],
            CloudProvider::Azure => {
                &["Virtual Machines", "AKS", "Blob Storage", "SQL Database", "Firewall"]
            }
            CloudProvider::Gcp => {
                &["Compute Engine", "GKE", "Cloud Storage", "Cloud SQL", "Firewall"]
            }
            CloudProvider::Other(_) => &[],
        }
    }

    /// Full service list for a provider: defaults followed by custom entries.
    pub fn services_for(&self, provider: &CloudProvider) -> Vec<String> {
        let mut services: Vec<String> =
            Self::defaults_for(provider).iter().map(|name| name.to_string()).collect();
        if let Some(custom) = self.custom.get(provider) {
            services.extend(custom.iter().cloned());
        }
        services
    }

    /// Register a custom service under one provider.
    ///
    /// Blank names are rejected without mutating the registry; duplicates of
    /// an existing entry are rejected so the selector never shows the same
    /// name twice.
    pub fn add_custom(
        &mut self,
        provider: &CloudProvider,
        service: &str,
    ) -> Result<String, AppError> {
        let name = service.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Custom service name must not be empty".to_string()));
        }

        if self.services_for(provider).iter().any(|existing| existing == name) {
            return Err(AppError::Validation(format!(
                "Service '{}' already exists for {}",
                name, provider
            )));
        }

        self.custom.entry(provider.clone()).or_default().push(name.to_string());
        Ok(name.to_string())
    }

    /// Custom entries registered for a provider, in insertion order.
    pub fn custom_for(&self, provider: &CloudProvider) -> &[String] {
        self.custom.get(provider).map(Vec::as_slice).unwrap_or(&[])
    }
}
