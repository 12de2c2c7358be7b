//! Payment challenge wire types.
//!
//! The `PaymentRequired` body is consumed by existing agents, so field names,
//! field order and the literal strings below must not change.

use serde::{Deserialize, Serialize};

use crate::error::{X402Error, X402Result};

/// Status code carried in the challenge body.
pub const PAYMENT_REQUIRED_CODE: u16 = 402;

/// Value of the `error` field in the challenge body.
pub const PAYMENT_REQUIRED_ERROR: &str = "Payment Required";

/// Solana network identifier used in challenges.
pub const NETWORK_SOLANA_MAINNET: &str = "solana-mainnet";

/// Prefix of every challenge memo.
pub const MEMO_PREFIX: &str = "aifais";

/// Wallet used when none is configured.
pub const DEFAULT_WALLET: &str = "Bqpo3emFG46VGLX4korYoeta3a317pWbR2DMbWnFpZ8c";

/// Retry instructions shown to the caller.
pub const PAYMENT_INSTRUCTIONS: &str = r#"Transfer the specified amount to the wallet address with the memo. Then retry this tool call with the transaction signature in the "signature" parameter."#;

// =============================================================================
// Pricing
// =============================================================================

/// Currencies accepted for tool payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Native Solana token.
    #[serde(rename = "SOL")]
    Sol,
}

impl Currency {
    /// Ticker symbol as it appears on the wire.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Sol => "SOL",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Price of a single tool call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in whole units of `currency` (always positive).
    pub amount: f64,
    /// Currency the amount is denominated in.
    pub currency: Currency,
}

impl Price {
    /// Create a new price.
    pub const fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

// =============================================================================
// Challenge Body
// =============================================================================

/// Payment details of a challenge: how much, where, and which memo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentChallenge {
    /// Amount to transfer.
    pub amount: f64,

    /// Currency of the transfer.
    pub currency: Currency,

    /// Destination wallet address.
    pub wallet: String,

    /// Network the transfer must happen on.
    pub network: String,

    /// Correlation memo, `aifais_<tool>_<unix millis>`.
    pub memo: String,
}

impl PaymentChallenge {
    /// Build the memo for a tool at the given unix timestamp (milliseconds).
    pub fn memo_for(operation: &str, timestamp_millis: i64) -> String {
        format!("{}_{}_{}", MEMO_PREFIX, operation, timestamp_millis)
    }

    /// Split a memo into its tool name and timestamp.
    ///
    /// Tool names may themselves contain underscores, so the timestamp is
    /// taken from the last segment.
    pub fn parse_memo(memo: &str) -> X402Result<(&str, i64)> {
        let malformed = || X402Error::MalformedMemo {
            memo: memo.to_string(),
        };

        let rest = memo
            .strip_prefix(MEMO_PREFIX)
            .and_then(|r| r.strip_prefix('_'))
            .ok_or_else(malformed)?;
        let (operation, millis) = rest.rsplit_once('_').ok_or_else(malformed)?;
        if operation.is_empty() {
            return Err(malformed());
        }
        let millis = millis.parse::<i64>().map_err(|_| malformed())?;

        Ok((operation, millis))
    }
}

/// The full `402 Payment Required` body returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequired {
    /// Always `"Payment Required"`.
    pub error: String,

    /// Always `402`.
    pub code: u16,

    /// What to pay.
    pub payment: PaymentChallenge,

    /// Human-readable retry instructions.
    pub instructions: String,
}

impl PaymentRequired {
    /// Wrap payment details into a challenge body.
    pub fn new(payment: PaymentChallenge) -> Self {
        Self {
            error: PAYMENT_REQUIRED_ERROR.to_string(),
            code: PAYMENT_REQUIRED_CODE,
            payment,
            instructions: PAYMENT_INSTRUCTIONS.to_string(),
        }
    }

    /// Serialize to the compact JSON text sent to callers.
    pub fn to_payload(&self) -> X402Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for issuing payment challenges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct X402Config {
    /// Wallet address that receives payments.
    pub wallet: String,

    /// Network identifier advertised in challenges.
    pub network: String,
}

impl Default for X402Config {
    fn default() -> Self {
        Self {
            wallet: DEFAULT_WALLET.to_string(),
            network: NETWORK_SOLANA_MAINNET.to_string(),
        }
    }
}

impl X402Config {
    /// Mainnet configuration paying into `wallet`.
    pub fn mainnet(wallet: &str) -> Self {
        Self {
            wallet: wallet.to_string(),
            network: NETWORK_SOLANA_MAINNET.to_string(),
        }
    }

    /// Check that the configuration can issue challenges.
    pub fn validate(&self) -> X402Result<()> {
        if self.wallet.trim().is_empty() {
            return Err(X402Error::MissingWallet);
        }
        Ok(())
    }
}
