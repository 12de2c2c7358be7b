//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// AIFAIS MCP server CLI.
#[derive(Parser, Debug)]
#[command(name = "aifais")]
#[command(version)]
#[command(about = "AIFAIS document intelligence tools over MCP, paid per call in SOL")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human or json).
    #[arg(short, long, global = true, default_value = "human")]
    pub format: OutputFormatArg,

    /// Enable verbose logging (to stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormatArg {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the MCP server on stdio.
    ///
    /// This is the command MCP clients such as Claude Desktop launch.
    Serve {
        /// Wallet address that receives tool payments.
        #[arg(long, env = "AIFAIS_WALLET")]
        wallet: Option<String>,

        /// Base URL of the AIFAIS API.
        #[arg(long, env = "AIFAIS_API_BASE")]
        api_base: Option<String>,

        /// Timeout for API calls in seconds (no timeout when unset).
        #[arg(long, env = "AIFAIS_TIMEOUT_SECS")]
        timeout_secs: Option<u64>,
    },

    /// List the available tools with their prices.
    Tools,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "aifais",
            "serve",
            "--wallet",
            "Wallet111",
            "--api-base",
            "http://localhost:3000/api",
            "--timeout-secs",
            "30",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve {
                wallet,
                api_base,
                timeout_secs,
            } => {
                assert_eq!(wallet.as_deref(), Some("Wallet111"));
                assert_eq!(api_base.as_deref(), Some("http://localhost:3000/api"));
                assert_eq!(timeout_secs, Some(30));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_tools_json() {
        let cli = Cli::try_parse_from(["aifais", "tools", "--format", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::Tools));
        assert!(matches!(cli.format, OutputFormatArg::Json));
        assert!(!cli.verbose);
    }
}
