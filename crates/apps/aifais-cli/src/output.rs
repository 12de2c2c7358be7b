//! Output formatting for CLI.

use colored::Colorize;
use serde::Serialize;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Trait for renderable output.
pub trait Render {
    /// Render as human-readable string.
    fn render_human(&self) -> String;

    /// Render as JSON string.
    fn render_json(&self) -> String;

    /// Render in the specified format.
    fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Human => self.render_human(),
            OutputFormat::Json => self.render_json(),
        }
    }
}

// =============================================================================
// Output Types
// =============================================================================

/// One row of the tool catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ToolRow {
    pub name: String,
    pub available: bool,
    /// Remote endpoint, for available tools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    pub price: f64,
    pub currency: String,
    pub description: String,
}

/// Output for the tools command.
#[derive(Debug, Clone, Serialize)]
pub struct ToolsOutput {
    pub wallet: String,
    pub network: String,
    pub tools: Vec<ToolRow>,
}

impl Render for ToolsOutput {
    fn render_human(&self) -> String {
        let mut lines = vec![format!("{}", "Tools:".bold())];
        for tool in &self.tools {
            let status = if tool.available {
                "available".green()
            } else {
                "coming soon".yellow()
            };
            lines.push(format!(
                "  {:<18} {:>7} {}  [{}]",
                tool.name.bold(),
                tool.price,
                tool.currency,
                status
            ));
            lines.push(format!("      {}", tool.description.dimmed()));
        }
        lines.push(String::new());
        lines.push(format!("{} {}", "Pay to:".bold(), self.wallet));
        lines.push(format!("{} {}", "Network:".bold(), self.network));
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
