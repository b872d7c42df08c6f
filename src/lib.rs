//! Lexicon MCP Server Library
//!
//! This crate exposes a remote lexical-data HTTP service (definitions,
//! examples, etymologies, word search, ...) as a catalogue of MCP tools.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, the main server
//!   and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: The tool catalogue and the request pipeline shared by every tool
//!   - **resources**: Read-only resources (the resolved API settings)
//!
//! Every tool runs the same pipeline: resolve settings, build the query,
//! call the remote service once, and normalize the response into a single
//! text result.
//!
//! # Example
//!
//! ```rust,no_run
//! use lexicon_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
