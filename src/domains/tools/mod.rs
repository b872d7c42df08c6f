//! Tools domain module.
//!
//! Tools are the lexical operations MCP clients can call. They differ only
//! in name, parameters and target path; all of them run through the same
//! pipeline and return a single text result.
//!
//! ## Architecture
//!
//! - `definitions/` - Static tool catalogue (`word`, `words`)
//! - `pipeline/` - Settings, query building, request execution, outcomes
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool registry and blocking dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a `ToolDefinition` static in `definitions/word.rs` or `words.rs`
//! 2. List it in `definitions::CATALOGUE`
//!
//! The router and the registry both read the catalogue, so nothing else
//! changes.

pub mod definitions;
mod error;
pub mod pipeline;
mod registry;
pub mod router;

pub use definitions::{CATALOGUE, ParamSpec, ToolDefinition};
pub use error::ToolError;
pub use pipeline::{RequestExecutor, ReqwestExecutor, SettingsResolver, ToolPipeline};
pub use registry::ToolRegistry;
pub use router::build_tool_router;
