//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! ## Tool Architecture
//!
//! Tools are static definitions in `domains/tools/definitions/`. They all
//! run through one `ToolPipeline`, shared by the rmcp router and the
//! registry. The ToolRouter is built from the catalogue in
//! `domains/tools/router.rs`, so adding a tool does not touch this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    resources::{ResourceError, ResourceService},
    tools::{
        RequestExecutor, ReqwestExecutor, SettingsResolver, ToolPipeline, ToolRegistry,
        build_tool_router, pipeline::TransportFailure,
    },
};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between different domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Lookup and blocking dispatch of tools.
    registry: ToolRegistry,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        Self::with_executor(config, Arc::new(ReqwestExecutor::new()))
    }

    /// Create a server performing requests through `executor`.
    pub fn with_executor(config: Config, executor: Arc<dyn RequestExecutor>) -> Self {
        let config = Arc::new(config);
        let resolver = SettingsResolver::from_config(&config.api);

        let pipeline = Arc::new(ToolPipeline::new(resolver.clone(), executor));
        let resource_service = Arc::new(ResourceService::new(resolver));

        Self {
            tool_router: build_tool_router::<Self>(pipeline.clone()),
            registry: ToolRegistry::new(pipeline),
            config,
            resource_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Number of tools served.
    pub fn tool_count(&self) -> usize {
        self.tool_router.list_all().len()
    }

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Call a tool by name and return its text.
    ///
    /// Runs on the blocking thread pool. Tool failures, panics included, are
    /// part of the returned text; only an unknown tool or malformed arguments
    /// yield `Err`.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> crate::Result<String> {
        let registry = self.registry.clone();
        let name = name.to_string();

        match tokio::task::spawn_blocking(move || registry.call_tool(&name, arguments)).await {
            Ok(result) => Ok(result?),
            Err(e) => Ok(TransportFailure::unexpected(e).message()),
        }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resource_service.list_resources().await
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> crate::Result<ReadResourceResult> {
        Ok(self.resource_service.read_resource(uri).await?)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo {
            instructions: Some(
                "Lexical data tools: definitions, examples, pronunciations, etymologies, \
                 related words and word search. Every tool returns a single text result. \
                 Read config://settings to check which API settings are in effect."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        };
        info.server_info.name = self.name().to_string();
        info.server_info.version = self.version().to_string();
        info
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| match e {
                ResourceError::NotFound(_) => McpError::resource_not_found(e.to_string(), None),
                ResourceError::Internal(_) => McpError::internal_error(e.to_string(), None),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiSourcesConfig;
    use crate::core::error::Error;
    use crate::domains::tools::ToolError;
    use crate::domains::tools::pipeline::MISSING_CONFIG_MESSAGE;
    use crate::domains::tools::pipeline::test_support::{MockExecutor, PanickingExecutor};
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn test_config(config_file: Option<std::path::PathBuf>) -> Config {
        let mut config = Config::default();
        config.api = ApiSourcesConfig {
            base_url_env: "LEXICON_TEST_SERVER_BASE_URL".to_string(),
            bearer_token_env: "LEXICON_TEST_SERVER_TOKEN".to_string(),
            config_file,
        };
        config
    }

    #[test]
    fn test_server_identity_and_tools() {
        let server = McpServer::new(test_config(None));
        assert_eq!(server.name(), "lexicon-mcp-server");
        assert_eq!(server.tool_count(), 16);

        let info = server.get_info();
        assert_eq!(info.server_info.name, "lexicon-mcp-server");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_list_tools_matches_registry() {
        let server = McpServer::new(test_config(None));
        let mut listed: Vec<_> = server
            .list_tools()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        let mut registered: Vec<_> = ToolRegistry::get_all_tools()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        listed.sort();
        registered.sort();
        assert_eq!(listed, registered);
    }

    #[tokio::test]
    async fn test_call_tool_without_config() {
        let mock = Arc::new(MockExecutor::responding(200, "{}"));
        let server = McpServer::with_executor(test_config(None), mock.clone());

        let text = server
            .call_tool("get_word_json_word_definitions", json!({"word": "cat"}))
            .await
            .unwrap();
        assert_eq!(text, MISSING_CONFIG_MESSAGE);
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_call_tool_panic_is_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"baseURL": "https://api.example.com", "bearerToken": "file-token"}"#,
        )
        .unwrap();
        let server = McpServer::with_executor(test_config(Some(path)), Arc::new(PanickingExecutor));

        let text = server
            .call_tool("get_word_json_word_audio", json!({"word": "cat"}))
            .await
            .unwrap();
        assert_eq!(text, "Unexpected error: boom");
    }

    #[tokio::test]
    async fn test_call_tool_unknown() {
        let server = McpServer::new(test_config(None));
        let result = server.call_tool("fs_delete", json!({})).await;
        assert!(matches!(result, Err(Error::Tool(ToolError::NotFound(_)))));
    }

    #[tokio::test]
    async fn test_call_tool_with_file_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"baseURL": "https://api.example.com", "bearerToken": "file-token"}"#,
        )
        .unwrap();
        let mock = Arc::new(MockExecutor::responding(200, r#"{"id":1,"word":"cat"}"#));
        let server = McpServer::with_executor(test_config(Some(path)), mock.clone());

        let text = server
            .call_tool("get_words_json_word_of_the_day", json!({"date": "2024-01-01"}))
            .await
            .unwrap();
        assert_eq!(text, "{\n  \"id\": 1,\n  \"word\": \"cat\"\n}");

        let requests = mock.requests();
        assert_eq!(requests[0].query.get("date"), Some("2024-01-01"));
        assert_eq!(requests[0].authorization(), "Bearer file-token");
    }

    #[tokio::test]
    async fn test_read_settings_resource() {
        let server = McpServer::new(test_config(None));
        let resources = server.list_resources().await;
        assert_eq!(resources.len(), 1);

        let result = server.read_resource("config://settings").await.unwrap();
        assert_eq!(result.contents.len(), 1);

        let missing = server.read_resource("config://other").await;
        assert!(matches!(missing, Err(Error::Resource(_))));
    }
}
