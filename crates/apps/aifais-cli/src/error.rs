//! CLI error types.

use thiserror::Error;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error enum wrapping all crate errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// MCP server error.
    #[error("{0}")]
    Server(#[from] aifais_mcp::McpError),

    /// IO error.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// User-facing error with actionable message.
    #[error("{0}")]
    User(String),
}

impl CliError {
    /// Create a user-facing error.
    pub fn user(msg: impl Into<String>) -> Self {
        Self::User(msg.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::User(_) => 1,
            Self::Toml(_) => 3,
            Self::Server(_) => 5,
            Self::Io(_) => 9,
        }
    }

    /// Recovery hint shown under the error, if any.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::Toml(_) => Some("Check the config file or pass --config"),
            Self::Server(aifais_mcp::McpError::Payment(e)) => Some(e.suggestion()),
            Self::Server(aifais_mcp::McpError::InvalidBaseUrl(_)) => {
                Some("Use an http:// or https:// URL for --api-base")
            }
            _ => None,
        }
    }
}
