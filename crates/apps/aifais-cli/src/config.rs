//! CLI configuration.
//!
//! Precedence: command-line flag or `AIFAIS_*` environment variable, then
//! the TOML file, then built-in defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use aifais_mcp::gateway::DEFAULT_API_BASE_URL;
use aifais_mcp::McpServerConfig;
use aifais_x402::{X402Config, DEFAULT_WALLET, NETWORK_SOLANA_MAINNET};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// Expand environment variables in a string.
/// Supports `${VAR_NAME}` syntax; unset variables are left as written.
fn expand_env_vars(input: &str) -> String {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("static regex is valid");
    re.replace_all(input, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
    })
    .to_string()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// CLI configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Remote API configuration.
    pub api: ApiConfig,
    /// Payment configuration.
    pub payment: PaymentConfig,
}

/// Remote API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the AIFAIS API.
    pub base_url: String,
    /// Timeout for API calls in seconds. No timeout when absent.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Payment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    /// Wallet address that receives payments.
    pub wallet: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            wallet: DEFAULT_WALLET.to_string(),
        }
    }
}

/// Values given on the command line (or via their environment variables).
#[derive(Debug, Clone, Default)]
pub struct ServeOverrides {
    pub wallet: Option<String>,
    pub api_base: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl CliConfig {
    /// Load configuration from a file.
    /// A missing file yields the defaults. `${VAR}` references are expanded.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&contents)?;

        config.api.base_url = expand_env_vars(&config.api.base_url);
        config.payment.wallet = expand_env_vars(&config.payment.wallet);

        Ok(config)
    }

    /// Build the server configuration, applying command-line overrides.
    ///
    /// Blank values (an empty `AIFAIS_WALLET`, an empty `wallet = ""`) count
    /// as unset and fall through to the next source.
    pub fn server_config(&self, overrides: ServeOverrides) -> McpServerConfig {
        let wallet = non_blank(overrides.wallet)
            .or_else(|| non_blank(Some(self.payment.wallet.clone())))
            .unwrap_or_else(|| DEFAULT_WALLET.to_string());
        let api_base_url = non_blank(overrides.api_base)
            .or_else(|| non_blank(Some(self.api.base_url.clone())))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let timeout_secs = overrides.timeout_secs.or(self.api.timeout_secs);

        McpServerConfig {
            api_base_url,
            request_timeout: timeout_secs.map(Duration::from_secs),
            x402: X402Config {
                wallet,
                network: NETWORK_SOLANA_MAINNET.to_string(),
            },
        }
    }
}

/// Get the default config file path.
pub fn default_config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "aifais", "aifais")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            std::env::var("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(".aifais")
                .join("config.toml")
        })
}
