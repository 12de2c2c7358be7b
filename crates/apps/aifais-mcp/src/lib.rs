//! MCP (Model Context Protocol) server for AIFAIS document intelligence.
//!
//! This crate lets AI assistants call the AIFAIS document APIs as MCP tools
//! and pay for each call in SOL. The server does no document processing
//! itself; it checks which tool was called, asks for payment when no proof
//! was supplied, and otherwise forwards the call to `https://aifais.com/api`.
//!
//! # Tools
//!
//! - **scan_invoice**: extract structured data from invoices (0.001 SOL)
//! - **analyze_contract**: contract risk analysis (coming soon)
//! - **verify_business**: Dutch KvK business verification (coming soon)
//!
//! # Payment Flow
//!
//! 1. Call `scan_invoice` without `signature`: the result is an error whose
//!    text is a JSON `402 Payment Required` body with wallet, amount and memo.
//! 2. Pay, then call again with the transaction signature in `signature`.
//!    The call is forwarded and the API response is relayed as text.
//!
//! # Usage
//!
//! Typically started via the CLI and configured in Claude Desktop:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "aifais": {
//!       "command": "aifais",
//!       "args": ["serve"]
//!     }
//!   }
//! }
//! ```

pub mod dispatch;
pub mod error;
pub mod gateway;
pub mod pricing;
pub mod server;
pub mod tools;

pub use dispatch::{Dispatcher, Invocation, ResponseEnvelope};
pub use error::{McpError, McpResult};
pub use gateway::{Gateway, GatewayOutcome, HttpGateway};
pub use server::{run_server, AifaisMcpServer, McpServerConfig};
pub use tools::{Availability, OperationDescriptor, Tool, ToolRegistry};
