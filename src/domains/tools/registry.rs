//! Tool Registry - central lookup and dispatch for all tools.
//!
//! This module provides:
//! - Tool metadata for listing
//! - Lookup of a definition by name
//! - Blocking dispatch of a call through the shared pipeline

use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

use rmcp::model::Tool;

use super::ToolError;
use super::definitions::{self, CATALOGUE, ToolDefinition};
use super::pipeline::ToolPipeline;

/// Tool registry - manages all available tools.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    pipeline: Arc<ToolPipeline>,
}

impl ToolRegistry {
    /// Create a new tool registry dispatching through `pipeline`.
    pub fn new(pipeline: Arc<ToolPipeline>) -> Self {
        Self { pipeline }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        CATALOGUE.iter().map(|tool| tool.name).collect()
    }

    /// Get a tool definition by name.
    pub fn get(&self, name: &str) -> Option<&'static ToolDefinition> {
        definitions::find(name)
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        CATALOGUE.iter().map(|tool| tool.to_tool()).collect()
    }

    /// Call a tool by name and return its rendered text. Blocks on network I/O.
    ///
    /// Only an unknown name or a non-object argument value is an error; every
    /// outcome of a known tool, failures included, is returned as `Ok` text.
    pub fn call_tool(&self, name: &str, arguments: Value) -> Result<String, ToolError> {
        let Some(tool) = self.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        let arguments = match arguments {
            Value::Object(map) => map,
            Value::Null => Default::default(),
            _ => return Err(ToolError::invalid_arguments("Invalid arguments object")),
        };

        Ok(self.pipeline.invoke(tool, &arguments))
    }
}
