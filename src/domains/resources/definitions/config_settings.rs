//! Current API settings resource definition.

use serde::Serialize;

use super::ResourceDefinition;
use crate::domains::resources::error::ResourceError;
use crate::domains::tools::SettingsResolver;

/// Shown in place of a configured token.
const TOKEN_MASK: &str = "***";

/// Resolved API settings, with the token masked.
pub struct ConfigSettingsResource;

#[derive(Debug, Serialize)]
struct SettingsView<'a> {
    base_url: Option<&'a str>,
    bearer_token: Option<&'static str>,
}

impl ResourceDefinition for ConfigSettingsResource {
    const URI: &'static str = "config://settings";
    const NAME: &'static str = "Configuration Settings";
    const DESCRIPTION: &'static str = "Get current configuration settings.";
    const MIME_TYPE: &'static str = "application/json";

    fn render(resolver: &SettingsResolver) -> Result<String, ResourceError> {
        let settings = resolver.resolve();
        let view = SettingsView {
            base_url: settings.base_url.as_deref(),
            bearer_token: settings.bearer_token.as_ref().map(|_| TOKEN_MASK),
        };

        serde_json::to_string_pretty(&view).map_err(|e| ResourceError::internal(e.to_string()))
    }
}
