//! Command-line launcher for the AIFAIS MCP server.
//!
//! This crate provides the `aifais` binary:
//!
//! - **serve**: run the MCP server on stdio
//! - **tools**: show the tool catalog with prices and availability
//!
//! # Quick Start
//!
//! ```bash
//! # Run the server (what MCP clients launch)
//! aifais serve
//!
//! # Pay into a different wallet
//! AIFAIS_WALLET=YourWallet111 aifais serve
//!
//! # Inspect the tools
//! aifais tools --format json
//! ```
//!
//! # Configuration
//!
//! Loaded from `config.toml` in the platform config directory. Override the
//! path with `--config`. Flags and `AIFAIS_*` environment variables win over
//! the file.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Commands, OutputFormatArg};
pub use config::CliConfig;
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Render};
