//! Outbound HTTP execution.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;
use tracing::debug;

use super::outcome::{RawResponse, TransportFailure};
use super::request::ApiRequest;

const JSON_MIME: &str = "application/json";

/// Performs one request against the remote service.
///
/// Implementations block; the pipeline runs them off the async runtime.
pub trait RequestExecutor: Send + Sync {
    fn execute(&self, request: &ApiRequest) -> Result<RawResponse, TransportFailure>;
}

/// [`RequestExecutor`] backed by a blocking `reqwest` client.
///
/// A client is built for each call, on the calling thread.
#[derive(Debug, Clone, Default)]
pub struct ReqwestExecutor {
    timeout: Option<Duration>,
}

impl ReqwestExecutor {
    /// Executor using the client's default deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor with an explicit per-request deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    fn client(&self) -> Result<Client, TransportFailure> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}

impl RequestExecutor for ReqwestExecutor {
    fn execute(&self, request: &ApiRequest) -> Result<RawResponse, TransportFailure> {
        let url = request.url().map_err(TransportFailure::unexpected)?;
        debug!("GET {}", request.endpoint);

        let response = self
            .client()?
            .get(url)
            .header(AUTHORIZATION, request.authorization())
            .header(ACCEPT, JSON_MIME)
            .header(CONTENT_TYPE, JSON_MIME)
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        debug!("Response status {} ({} bytes)", status, body.len());

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::ParamSpec;
    use crate::domains::tools::pipeline::outcome::FailureKind;
    use crate::domains::tools::pipeline::params::QueryParams;
    use crate::domains::tools::pipeline::test_support::{refused_base_url, serve_once, silent_server};
    use serde_json::json;

    const SPECS: &[ParamSpec] = &[
        ParamSpec::optional("word", "Word"),
        ParamSpec::optional("limit", "Limit"),
    ];

    fn request(base_url: &str, args: serde_json::Value) -> ApiRequest {
        let query = QueryParams::build(args.as_object().unwrap(), SPECS);
        ApiRequest::prepare(base_url, "test-token", "/api/unknown", query).unwrap()
    }

    #[test]
    fn test_headers_and_query_reach_server() {
        let server = serve_once(200, "application/json", r#"{"ok":true}"#);

        let response = ReqwestExecutor::new()
            .execute(&request(&server.base_url, json!({"word": "cat", "limit": 0})))
            .unwrap();
        assert_eq!(response, RawResponse::new(200, r#"{"ok":true}"#));

        let raw = server.request();
        let lower = raw.to_ascii_lowercase();
        assert!(raw.starts_with("GET /api/unknown?word=cat&limit=0 HTTP/1.1"));
        assert!(lower.contains("authorization: bearer test-token"));
        assert!(lower.contains("accept: application/json"));
        assert!(lower.contains("content-type: application/json"));
    }

    #[test]
    fn test_error_status_is_a_response() {
        let server = serve_once(404, "application/json", r#"{"error":"not found"}"#);

        let response = ReqwestExecutor::new()
            .execute(&request(&server.base_url, json!({})))
            .unwrap();
        assert_eq!(response.status, 404);
        assert!(response.is_error());
    }

    #[test]
    fn test_connection_refused() {
        let base_url = refused_base_url();

        let failure = ReqwestExecutor::new()
            .execute(&request(&base_url, json!({"word": "cat"})))
            .unwrap_err();
        assert_eq!(failure.kind, FailureKind::Connection);
        let message = failure.message();
        assert!(message.starts_with("Request failed: Connection error - error sending request"));
        assert!(
            message.to_lowercase().contains("connection refused"),
            "cause missing from {message}"
        );
    }

    #[test]
    fn test_timeout() {
        let server = silent_server();

        let failure = ReqwestExecutor::with_timeout(Duration::from_millis(200))
            .execute(&request(&server.base_url, json!({"word": "cat"})))
            .unwrap_err();
        assert_eq!(failure.kind, FailureKind::Timeout);
        assert!(
            failure
                .message()
                .starts_with("Request failed: Request timeout - ")
        );
    }

    #[test]
    fn test_invalid_base_url_is_a_request_failure() {
        let failure = ReqwestExecutor::new()
            .execute(&request("not a url", json!({})))
            .unwrap_err();
        assert_eq!(failure.kind, FailureKind::Request);
        assert!(failure.message().starts_with("Request failed: "));
    }
}
