//! Client for the remote AIFAIS processing API.
//!
//! One tool call maps to exactly one POST. There are no retries: the calling
//! agent decides whether to try again, possibly after paying again.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rmcp::model::JsonObject;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{McpError, McpResult};

/// Default base URL of the AIFAIS API.
pub const DEFAULT_API_BASE_URL: &str = "https://aifais.com/api";

/// Prefix of transport error messages returned to callers.
pub const TRANSPORT_ERROR_PREFIX: &str = "API Error: ";

/// Result of a single call to the remote API.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayOutcome {
    /// 2xx response with a JSON body.
    Success(Value),

    /// Non-2xx response with a JSON body.
    ApplicationError {
        /// HTTP status code.
        status: u16,
        /// Parsed error body.
        body: Value,
    },

    /// The call did not complete, or the body was not JSON.
    TransportError(String),
}

impl GatewayOutcome {
    /// True unless the outcome is [`GatewayOutcome::Success`].
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Success(_))
    }
}

/// Outbound side of a tool call.
///
/// Abstracts the remote API so the dispatcher can be driven by a mock in tests.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// POST `body` to `endpoint` (a path under the API base URL).
    async fn call(&self, endpoint: &str, body: &JsonObject) -> GatewayOutcome;
}

/// reqwest-backed [`Gateway`].
#[derive(Clone)]
pub struct HttpGateway {
    /// HTTP client
    client: Client,
    /// Base URL of the API, without trailing slash
    base_url: String,
}

impl HttpGateway {
    /// Create a new gateway for `base_url`.
    ///
    /// No timeout is applied unless one is given.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> McpResult<Self> {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(McpError::InvalidBaseUrl(base_url.to_string()));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn call(&self, endpoint: &str, body: &JsonObject) -> GatewayOutcome {
        let url = self.url_for(endpoint);
        debug!(url = %url, "Forwarding tool call to API");

        let response = match self.client.post(&url).json(body).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(url = %url, error = %e, "API request failed");
                return GatewayOutcome::TransportError(e.to_string());
            }
        };

        let status = response.status();
        let body: Value = match response.json().await {
            Ok(v) => v,
            Err(e) => {
                warn!(url = %url, status = %status, error = %e, "API returned a non-JSON body");
                return GatewayOutcome::TransportError(e.to_string());
            }
        };

        if status.is_success() {
            debug!(url = %url, status = %status, "API call succeeded");
            GatewayOutcome::Success(body)
        } else {
            warn!(url = %url, status = %status, "API returned an error");
            GatewayOutcome::ApplicationError {
                status: status.as_u16(),
                body,
            }
        }
    }
}

impl std::fmt::Debug for HttpGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGateway")
            .field("base_url", &self.base_url)
            .finish()
    }
}
