//! Error types for the MCP server.
//!
//! These cover server construction only. Failures while handling a tool
//! call are reported to the caller as error results, never as `McpError`.

use aifais_x402::X402Error;
use thiserror::Error;

/// Result type for MCP operations.
pub type McpResult<T> = Result<T, McpError>;

/// Error types for MCP server operations.
#[derive(Debug, Error)]
pub enum McpError {
    /// The outbound HTTP client could not be built.
    #[error("failed to create HTTP client: {0}")]
    HttpClient(String),

    /// Invalid API base URL.
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// Payment configuration error from aifais-x402.
    #[error("payment configuration error: {0}")]
    Payment(#[from] X402Error),
}

impl From<reqwest::Error> for McpError {
    fn from(e: reqwest::Error) -> Self {
        Self::HttpClient(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = McpError::InvalidBaseUrl("ftp://nope".into());
        assert_eq!(err.to_string(), "invalid API base URL: ftp://nope");

        let err: McpError = X402Error::MissingWallet.into();
        assert!(err.to_string().contains("wallet"));
    }
}
