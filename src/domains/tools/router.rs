//! Tool Router - builds the rmcp ToolRouter from the catalogue.
//!
//! Each definition knows how to create its own route; every route shares
//! the same pipeline.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::CATALOGUE;
use super::pipeline::ToolPipeline;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(pipeline: Arc<ToolPipeline>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    CATALOGUE.iter().fold(ToolRouter::new(), |router, tool| {
        router.with_route(tool.create_route(pipeline.clone()))
    })
}
