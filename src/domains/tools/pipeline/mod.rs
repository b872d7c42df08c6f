//! The shared tool execution pipeline.
//!
//! Every tool runs the same steps:
//!
//! 1. `settings` resolves the base URL and token (fresh per call);
//! 2. `params` builds the query from the caller's arguments;
//! 3. `request` prepares the GET request for the tool's target path;
//! 4. `executor` performs it;
//! 5. `outcome` classifies the result and renders the text returned.
//!
//! Failures at any step become an [`Outcome`] too, so a call always ends
//! with a single string.

mod executor;
mod outcome;
mod params;
mod request;
mod settings;

#[cfg(test)]
pub(crate) mod test_support;

pub use executor::{RequestExecutor, ReqwestExecutor};
pub use outcome::{
    API_ERROR_PREFIX, ApiErrorBody, FailureKind, MISSING_CONFIG_MESSAGE, Outcome, RawResponse,
    TransportFailure,
};
pub use params::QueryParams;
pub use request::ApiRequest;
pub use settings::{ApiSettings, SettingsResolver};

use rmcp::model::JsonObject;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::definitions::ToolDefinition;

/// Runs tool invocations end to end.
#[derive(Clone)]
pub struct ToolPipeline {
    resolver: SettingsResolver,
    executor: Arc<dyn RequestExecutor>,
}

impl ToolPipeline {
    /// Create a pipeline with the given settings sources and executor.
    pub fn new(resolver: SettingsResolver, executor: Arc<dyn RequestExecutor>) -> Self {
        Self { resolver, executor }
    }

    /// Run one invocation and classify its result. Blocks on network I/O.
    #[instrument(skip_all, fields(tool = %tool.name))]
    pub fn run(&self, tool: &ToolDefinition, arguments: &JsonObject) -> Outcome {
        let settings = self.resolver.resolve();
        let Some((base_url, token)) = settings.credentials() else {
            warn!("API settings incomplete, missing {:?}", settings.missing_fields());
            return Outcome::MissingConfig;
        };

        let query = QueryParams::build(arguments, tool.params);
        let target_path = settings
            .path_override(tool.name)
            .unwrap_or(tool.target_path);
        debug!("Target path {}, query {:?}", target_path, query.names());

        let request = match ApiRequest::prepare(base_url, token, target_path, query) {
            Ok(request) => request,
            Err(e) => {
                warn!("Cannot prepare request: {}", e);
                return Outcome::InvalidArguments(invalid_arguments_message(e));
            }
        };

        match self.executor.execute(&request) {
            Ok(response) => Outcome::from_response(response),
            Err(failure) => {
                warn!("{}", failure);
                failure.into()
            }
        }
    }

    /// Run one invocation and render the text returned to the caller.
    ///
    /// A panic during the call is rendered as an unexpected error.
    pub fn invoke(&self, tool: &ToolDefinition, arguments: &JsonObject) -> String {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.run(tool, arguments)))
            .unwrap_or_else(|payload| TransportFailure::unexpected(panic_detail(payload)).into());
        info!("Tool {} finished: {}", tool.name, outcome.label());
        outcome.render()
    }

    /// [`invoke`](Self::invoke) on the blocking thread pool.
    pub async fn invoke_async(
        self: Arc<Self>,
        tool: &'static ToolDefinition,
        arguments: JsonObject,
    ) -> String {
        tokio::task::spawn_blocking(move || self.invoke(tool, &arguments))
            .await
            .unwrap_or_else(|e| TransportFailure::unexpected(e).message())
    }
}

impl std::fmt::Debug for ToolPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolPipeline")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

fn panic_detail(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "tool call panicked".to_string()
    }
}

fn invalid_arguments_message(error: super::ToolError) -> String {
    match error {
        super::ToolError::InvalidArguments(message) => message,
        other => other.to_string(),
    }
}
