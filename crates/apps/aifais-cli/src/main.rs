//! AIFAIS CLI entry point.

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use aifais_cli::{
    cli::{Cli, Commands},
    commands,
    config::{default_config_path, CliConfig, ServeOverrides},
    error::{CliError, CliResult},
    output::OutputFormat,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // stdout carries the MCP transport; logs go to stderr.
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if cli.verbose || has_rust_log {
        let filter = if cli.verbose {
            EnvFilter::from_default_env().add_directive("aifais=debug".parse().unwrap())
        } else {
            EnvFilter::from_default_env()
        };
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    if let Err(e) = run(cli).await {
        print_error(&e);
        std::process::exit(e.exit_code());
    }
}

fn print_error(e: &CliError) {
    eprintln!("{}: {}", "Error".red().bold(), e);

    if let Some(suggestion) = e.suggestion() {
        eprintln!("{}: {}", "Hint".cyan(), suggestion);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let config = CliConfig::load(&config_path)?;

    let format: OutputFormat = cli.format.into();

    let output = match cli.command {
        Commands::Serve {
            wallet,
            api_base,
            timeout_secs,
        } => {
            let overrides = ServeOverrides {
                wallet,
                api_base,
                timeout_secs,
            };
            commands::serve(config, overrides).await?
        }

        Commands::Tools => commands::tools(config, format)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
