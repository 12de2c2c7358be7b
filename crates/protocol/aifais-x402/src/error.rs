//! Error types for x402 payment challenges.

use thiserror::Error;

/// Result type for x402 operations.
pub type X402Result<T> = Result<T, X402Error>;

/// Errors that can occur while building or reading payment challenges.
#[derive(Debug, Error)]
pub enum X402Error {
    /// The configured wallet address is empty.
    #[error("payment wallet is not configured")]
    MissingWallet,

    /// A challenge memo does not follow the `aifais_<tool>_<millis>` shape.
    #[error("malformed payment memo: {memo}")]
    MalformedMemo {
        /// The memo that failed to parse
        memo: String,
    },

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl X402Error {
    /// Returns a user-friendly suggestion for recovering from this error.
    pub fn suggestion(&self) -> &str {
        match self {
            Self::MissingWallet => "Set AIFAIS_WALLET or [payment] wallet in the config file",
            Self::MalformedMemo { .. } => "Use the memo exactly as returned in the 402 response",
            Self::Serialization(_) => "This is an internal error; please report it",
        }
    }
}
