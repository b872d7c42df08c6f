//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access. Content is
//! rendered on every read, so it always reflects the current settings.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::domains::tools::SettingsResolver;

/// Renders the content of one resource.
pub type RenderFn = fn(&SettingsResolver) -> Result<String, ResourceError>;

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content renderer for this resource.
    pub render: RenderFn,
}

/// Service for managing and accessing resources.
#[derive(Debug)]
pub struct ResourceService {
    /// Settings sources the resources report on.
    resolver: SettingsResolver,

    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: BTreeMap<String, ResourceEntry>,
}

impl ResourceService {
    /// Create a new ResourceService reading through `resolver`.
    pub fn new(resolver: SettingsResolver) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            resolver,
            resources: BTreeMap::new(),
        };
        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let text = (entry.render)(&self.resolver)?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> ResourceService {
        ResourceService::new(SettingsResolver::new(
            "LEXICON_TEST_SERVICE_BASE_URL",
            "LEXICON_TEST_SERVICE_TOKEN",
            None,
        ))
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let resources = test_service().list_resources().await;
        assert_eq!(resources.len(), 1);
    }

    #[tokio::test]
    async fn test_read_existing_resource() {
        let result = test_service().read_resource("config://settings").await.unwrap();
        assert_eq!(result.contents.len(), 1);
        match &result.contents[0] {
            ResourceContents::TextResourceContents { uri, text, .. } => {
                assert_eq!(uri, "config://settings");
                assert!(text.contains("\"base_url\": null"));
            }
            other => panic!("Expected text contents, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let result = test_service().read_resource("config://missing").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
