//! Transport layer for the MCP server.
//!
//! - **STDIO**: Standard input/output (default for MCP) - feature: `stdio`
//! - **TCP**: one MCP session per accepted socket - feature: `tcp`
//!
//! The session protocol is the one implemented by `rmcp`; this module only
//! owns the connection lifecycle.

mod config;
mod error;

use tracing::info;
#[cfg(feature = "tcp")]
use tracing::warn;

use rmcp::ServiceExt;

use crate::core::McpServer;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

/// Transport service - runs the MCP server on the configured transport.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Start the transport with the given MCP server.
    ///
    /// This method blocks until the transport is shut down.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description());

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => run_stdio(server).await,
            #[cfg(feature = "tcp")]
            TransportConfig::Tcp(cfg) => run_tcp(cfg, server).await,
        }
    }
}

#[cfg(feature = "stdio")]
async fn run_stdio(server: McpServer) -> TransportResult<()> {
    info!("Ready - communicating via stdin/stdout");

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| TransportError::init(e.to_string()))?;

    service
        .waiting()
        .await
        .map_err(|e| TransportError::service(e.to_string()))?;

    info!("STDIO transport finished");
    Ok(())
}

#[cfg(feature = "tcp")]
async fn run_tcp(config: TcpConfig, server: McpServer) -> TransportResult<()> {
    use tokio::net::TcpListener;

    let addr = config.address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| TransportError::bind(&addr, e))?;

    info!("Ready - listening on {}", addr);

    loop {
        let (stream, peer_addr) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Failed to accept connection: {}", e);
                tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                continue;
            }
        };

        if let Err(e) = stream.set_nodelay(true) {
            warn!("Failed to set TCP_NODELAY for {}: {}", peer_addr, e);
        }

        let server = server.clone();
        tokio::spawn(async move {
            let service = match server.serve(stream).await {
                Ok(service) => service,
                Err(e) => {
                    warn!("Failed to initialize session for {}: {}", peer_addr, e);
                    return;
                }
            };
            info!("Client {} connected", peer_addr);

            match service.waiting().await {
                Ok(_) => info!("Client {} disconnected", peer_addr),
                Err(e) => warn!("Session with {} ended with error: {}", peer_addr, e),
            }
        });
    }
}
