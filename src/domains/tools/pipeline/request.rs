//! Outbound request description.

use super::params::QueryParams;
use crate::domains::tools::ToolError;

/// A fully prepared GET request against the remote service.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// `base_url` and target path, concatenated verbatim.
    pub endpoint: String,

    /// Bearer credential.
    pub bearer_token: String,

    /// Query parameters.
    pub query: QueryParams,
}

impl ApiRequest {
    /// Prepare a request for `target_path`.
    ///
    /// `{name}` segments in the path are filled with the percent-encoded
    /// argument of the same name, which is then removed from the query.
    /// No slash normalization happens between `base_url` and the path.
    pub fn prepare(
        base_url: &str,
        bearer_token: &str,
        target_path: &str,
        mut query: QueryParams,
    ) -> Result<Self, ToolError> {
        let path = expand_path(target_path, &mut query)?;

        Ok(Self {
            endpoint: format!("{}{}", base_url, path),
            bearer_token: bearer_token.to_string(),
            query,
        })
    }

    /// Full URL including the encoded query string.
    pub fn url(&self) -> Result<String, serde_urlencoded::ser::Error> {
        if self.query.is_empty() {
            return Ok(self.endpoint.clone());
        }
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        Ok(format!("{}{}{}", self.endpoint, separator, self.query.encode()?))
    }

    /// Value of the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.bearer_token)
    }
}

impl std::fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiRequest")
            .field("endpoint", &self.endpoint)
            .field("bearer_token", &"[REDACTED]")
            .field("query", &self.query)
            .finish()
    }
}

fn expand_path(template: &str, query: &mut QueryParams) -> Result<String, ToolError> {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|i| open + i) else {
            break;
        };
        let name = &rest[open + 1..close];
        let value = query.take(name).ok_or_else(|| {
            ToolError::invalid_arguments(format!("Missing required path parameter: {}", name))
        })?;

        path.push_str(&rest[..open]);
        path.push_str(&urlencoding::encode(&value));
        rest = &rest[close + 1..];
    }
    path.push_str(rest);

    Ok(path)
}
