//! MCP server implementation for AIFAIS.
//!
//! Uses the RMCP SDK to expose the AIFAIS document tools to AI assistants.
//! Tools are listed and dispatched by hand rather than through the
//! `#[tool_router]` macros so that unknown and planned tools get the exact
//! error texts callers expect.

use std::sync::Arc;
use std::time::Duration;

use aifais_x402::{PaymentGate, X402Config};
use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, Implementation, JsonObject, ListToolsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    ErrorData,
};
use tracing::info;

use crate::dispatch::{Dispatcher, Invocation};
use crate::error::McpResult;
use crate::gateway::{Gateway, HttpGateway, DEFAULT_API_BASE_URL};

/// Name the server reports to MCP clients.
pub const SERVER_NAME: &str = "aifais";

/// Version the server reports to MCP clients.
pub const SERVER_VERSION: &str = "1.0.0";

/// Configuration for the MCP server.
#[derive(Debug, Clone)]
pub struct McpServerConfig {
    /// Base URL of the AIFAIS API.
    pub api_base_url: String,
    /// Optional timeout for API calls. `None` leaves reqwest's default (no timeout).
    pub request_timeout: Option<Duration>,
    /// Payment challenge configuration.
    pub x402: X402Config,
}

impl Default for McpServerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: None,
            x402: X402Config::default(),
        }
    }
}

/// AIFAIS MCP Server.
///
/// Implements the MCP server handler with `scan_invoice`,
/// `analyze_contract` and `verify_business` tools.
#[derive(Clone)]
pub struct AifaisMcpServer {
    /// Tool call dispatcher.
    dispatcher: Arc<Dispatcher>,
}

impl AifaisMcpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: McpServerConfig) -> McpResult<Self> {
        config.x402.validate()?;
        let gateway = HttpGateway::new(&config.api_base_url, config.request_timeout)?;

        info!(
            api_base_url = %gateway.base_url(),
            wallet = %config.x402.wallet,
            network = %config.x402.network,
            timeout_secs = ?config.request_timeout.map(|t| t.as_secs()),
            "AIFAIS MCP server configured"
        );

        Ok(Self::with_gateway(config.x402, Arc::new(gateway)))
    }

    /// Create a server that forwards paid calls to `gateway`.
    pub fn with_gateway(x402: X402Config, gateway: Arc<dyn Gateway>) -> Self {
        Self {
            dispatcher: Arc::new(Dispatcher::new(PaymentGate::new(x402), gateway)),
        }
    }

    /// Tool definitions, in listing order.
    pub fn tools(&self) -> Vec<rmcp::model::Tool> {
        self.dispatcher.registry().mcp_tools()
    }

    /// Handle a tool call by name.
    pub async fn invoke(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        let invocation = Invocation::new(name, arguments.unwrap_or_default());
        self.dispatcher
            .handle(invocation)
            .await
            .into_call_tool_result()
    }
}

impl rmcp::ServerHandler for AifaisMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: SERVER_VERSION.into(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "AIFAIS document intelligence. Call `scan_invoice` without `signature` to receive \
                 a 402 payment challenge (wallet, amount, memo). Pay in SOL, then retry the call \
                 with the transaction signature in `signature`. `analyze_contract` and \
                 `verify_business` are coming soon."
                    .into(),
            ),
        }
    }

    #[allow(clippy::manual_async_fn)]
    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, ErrorData>> + Send + '_ {
        async move {
            Ok(ListToolsResult {
                tools: self.tools(),
                next_cursor: None,
            })
        }
    }

    #[allow(clippy::manual_async_fn)]
    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, ErrorData>> + Send + '_ {
        async move { Ok(self.invoke(&request.name, request.arguments).await) }
    }
}

/// Run the MCP server on stdio transport.
pub async fn run_server(
    config: McpServerConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use rmcp::{transport::stdio, ServiceExt};

    let server = AifaisMcpServer::new(config)?;

    // Serve on stdio. If the transport fails (e.g., stdin already closed),
    // treat it as a clean exit rather than an error.
    let service = match server.serve(stdio()).await {
        Ok(s) => s,
        Err(e) => {
            info!("MCP transport closed during setup: {}", e);
            return Ok(());
        }
    };
    info!("AIFAIS MCP Server running on stdio");

    // Connection close (client disconnect, stdin EOF) is not an error.
    if let Err(e) = service.waiting().await {
        info!("MCP transport closed: {}", e);
    }

    info!("AIFAIS MCP server stopped");
    Ok(())
}
