//! List tools command.

use aifais_mcp::pricing::pricing_table;
use aifais_mcp::{Availability, ToolRegistry};

use crate::config::{CliConfig, ServeOverrides};
use crate::error::CliResult;
use crate::output::{OutputFormat, Render, ToolRow, ToolsOutput};

/// Execute the tools command.
pub fn tools(config: CliConfig, format: OutputFormat) -> CliResult<String> {
    let server_config = config.server_config(ServeOverrides::default());
    let registry = ToolRegistry::new();
    let prices = pricing_table();

    let rows = registry
        .list()
        .iter()
        .filter_map(|descriptor| {
            let price = prices
                .iter()
                .find(|entry| entry.tool.name() == descriptor.name)?
                .price;
            let endpoint = match descriptor.availability {
                Availability::Available { endpoint } => Some(endpoint.to_string()),
                Availability::Planned => None,
            };
            Some(ToolRow {
                name: descriptor.name.to_string(),
                available: descriptor.availability.is_available(),
                endpoint,
                price: price.amount,
                currency: price.currency.to_string(),
                description: descriptor.description.to_string(),
            })
        })
        .collect();

    let output = ToolsOutput {
        wallet: server_config.x402.wallet,
        network: server_config.x402.network,
        tools: rows,
    };

    Ok(output.render(format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aifais_mcp::Tool;

    #[test]
    fn test_tools_json() {
        let out = tools(CliConfig::default(), OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        let names: Vec<&str> = json["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["scan_invoice", "analyze_contract", "verify_business"]);
        assert_eq!(json["tools"][0]["available"], true);
        assert_eq!(json["tools"][0]["price"], 0.001);
        assert_eq!(json["tools"][1]["price"], 0.05);
        assert_eq!(json["tools"][2]["currency"], "SOL");
        assert_eq!(json["wallet"], aifais_x402::DEFAULT_WALLET);
    }

    #[test]
    fn test_tools_prices_match_each_tool() {
        let out = tools(CliConfig::default(), OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        for row in json["tools"].as_array().unwrap() {
            let tool = Tool::from_name(row["name"].as_str().unwrap()).unwrap();
            assert_eq!(row["price"], tool.price().amount);
            assert_eq!(row["currency"], tool.price().currency.to_string());
        }
    }

    #[test]
    fn test_tools_uses_configured_wallet() {
        let mut config = CliConfig::default();
        config.payment.wallet = "ConfiguredWallet".to_string();
        let out = tools(config, OutputFormat::Json).unwrap();
        assert!(out.contains("ConfiguredWallet"));
    }

    #[test]
    fn test_tools_human() {
        let out = tools(CliConfig::default(), OutputFormat::Human).unwrap();
        assert!(out.contains("verify_business"));
    }
}
