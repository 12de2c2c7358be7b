//! Serve command implementation.
//!
//! Starts the MCP server on stdio for AI assistant integration.

use aifais_mcp::run_server;
use tracing::info;

use crate::config::{CliConfig, ServeOverrides};
use crate::error::{CliError, CliResult};

/// Start the MCP server.
///
/// Blocks until the client disconnects. Returns no output: stdout belongs
/// to the MCP transport.
pub async fn serve(config: CliConfig, overrides: ServeOverrides) -> CliResult<String> {
    let server_config = config.server_config(overrides);

    info!(
        api_base_url = %server_config.api_base_url,
        wallet = %server_config.x402.wallet,
        "Starting MCP server"
    );

    run_server(server_config)
        .await
        .map_err(|e| CliError::user(format!("MCP server error: {}", e)))?;

    Ok(String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serve_empty_wallet_uses_default() {
        // The bad base URL stops startup before stdio is touched; the error
        // must be about the URL, not a missing wallet.
        let result = serve(
            CliConfig::default(),
            ServeOverrides {
                wallet: Some(String::new()),
                api_base: Some("ftp://aifais.com".to_string()),
                timeout_secs: None,
            },
        )
        .await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("ftp://aifais.com"), "{}", err);
        assert!(!err.to_string().contains("wallet"), "{}", err);
    }
}
