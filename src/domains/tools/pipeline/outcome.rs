//! Classification and rendering of tool call outcomes.
//!
//! Every branch renders to plain text; callers cannot tell success from
//! failure by type, only by content.

use serde_json::Value;
use thiserror::Error;

/// Message returned when the base URL or the token is missing.
pub const MISSING_CONFIG_MESSAGE: &str = "Error: Missing API configuration. Please set API_BASE_URL and API_BEARER_TOKEN environment variables.";

/// Prefix for bodies returned with a status of 400 or above.
pub const API_ERROR_PREFIX: &str = "Failed to format JSON: ";

/// Status code and body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the remote service reported an error.
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}

/// Why a call did not produce a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// DNS failure, refused or reset connection.
    Connection,
    /// No response within the client's deadline.
    Timeout,
    /// Any other error raised by the HTTP client.
    Request,
    /// Anything else that went wrong during the call.
    Unexpected,
}

/// A call that never completed, with the underlying detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub struct TransportFailure {
    pub kind: FailureKind,
    pub detail: String,
}

impl TransportFailure {
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn unexpected(detail: impl std::fmt::Display) -> Self {
        Self::new(FailureKind::Unexpected, detail.to_string())
    }

    /// User-facing message, combining the kind and the detail.
    pub fn message(&self) -> String {
        match self.kind {
            FailureKind::Connection => {
                format!("Request failed: Connection error - {}", self.detail)
            }
            FailureKind::Timeout => format!("Request failed: Request timeout - {}", self.detail),
            FailureKind::Request => format!("Request failed: {}", self.detail),
            FailureKind::Unexpected => format!("Unexpected error: {}", self.detail),
        }
    }
}

/// Classifies client errors: connection, then timeout, then the rest.
///
/// The detail carries the whole source chain, so a refused connection and a
/// failed DNS lookup stay distinguishable.
impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_connect() {
            FailureKind::Connection
        } else if err.is_timeout() {
            FailureKind::Timeout
        } else {
            FailureKind::Request
        };
        Self::new(kind, format!("{:#}", anyhow::Error::from(err)))
    }
}

/// Body of an error response.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiErrorBody {
    Json(Value),
    Text(String),
}

/// Result of one tool invocation, before rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Status below 400 with a JSON body.
    Json(Value),
    /// Status below 400 with a non-JSON body.
    Text(String),
    /// Status 400 or above.
    ApiError(ApiErrorBody),
    /// The exchange did not complete.
    Transport(TransportFailure),
    /// Base URL or token missing; nothing was sent.
    MissingConfig,
    /// The arguments cannot form a request; nothing was sent.
    InvalidArguments(String),
}

impl Outcome {
    /// Classify a completed exchange.
    pub fn from_response(response: RawResponse) -> Self {
        let parsed = serde_json::from_str::<Value>(&response.body);

        match (response.is_error(), parsed) {
            (true, Ok(value)) => Self::ApiError(ApiErrorBody::Json(value)),
            (true, Err(_)) => Self::ApiError(ApiErrorBody::Text(response.body)),
            (false, Ok(value)) => Self::Json(value),
            (false, Err(_)) => Self::Text(response.body),
        }
    }

    /// Render the final text returned to the caller.
    pub fn render(self) -> String {
        match self {
            Self::Json(value) => pretty(&value),
            Self::Text(raw) => raw,
            Self::ApiError(ApiErrorBody::Json(value)) => {
                format!("{}{}", API_ERROR_PREFIX, pretty(&value))
            }
            Self::ApiError(ApiErrorBody::Text(raw)) => format!("{}{}", API_ERROR_PREFIX, raw),
            Self::Transport(failure) => failure.message(),
            Self::MissingConfig => MISSING_CONFIG_MESSAGE.to_string(),
            Self::InvalidArguments(message) => format!("Error: {}", message),
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::Text(_) => "text",
            Self::ApiError(_) => "api_error",
            Self::Transport(_) => "transport_error",
            Self::MissingConfig => "missing_config",
            Self::InvalidArguments(_) => "invalid_arguments",
        }
    }
}

impl From<TransportFailure> for Outcome {
    fn from(failure: TransportFailure) -> Self {
        Self::Transport(failure)
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| TransportFailure::unexpected(e).message())
}
