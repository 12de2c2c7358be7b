//! Payment gate for paid AIFAIS tools.
//!
//! The gate is stateless: it keeps no record of issued challenges, so a memo
//! cannot be tied back to a later payment proof. Memos are unique per
//! millisecond only; two challenges for the same tool issued within the same
//! clock tick carry the same memo.

use chrono::Utc;
use tracing::debug;

use crate::types::{PaymentChallenge, PaymentRequired, Price, X402Config};

/// Builds `402 Payment Required` challenges from configuration.
#[derive(Debug, Clone)]
pub struct PaymentGate {
    /// x402 configuration.
    config: X402Config,
}

impl PaymentGate {
    /// Create a new payment gate from configuration.
    pub fn new(config: X402Config) -> Self {
        Self { config }
    }

    /// Generate a challenge for `operation` at the current time.
    pub fn payment_required(&self, operation: &str, price: Price) -> PaymentRequired {
        self.payment_required_at(operation, price, Utc::now().timestamp_millis())
    }

    /// Generate a challenge for `operation` at a fixed timestamp (milliseconds).
    pub fn payment_required_at(
        &self,
        operation: &str,
        price: Price,
        timestamp_millis: i64,
    ) -> PaymentRequired {
        let memo = PaymentChallenge::memo_for(operation, timestamp_millis);
        debug!(operation = %operation, memo = %memo, price = %price, "Building payment challenge");

        PaymentRequired::new(PaymentChallenge {
            amount: price.amount,
            currency: price.currency,
            wallet: self.config.wallet.clone(),
            network: self.config.network.clone(),
            memo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Currency, PAYMENT_REQUIRED_CODE};

    const PRICE: Price = Price::new(0.05, Currency::Sol);

    #[test]
    fn test_payment_required_uses_config() {
        let gate = PaymentGate::new(X402Config::mainnet("Wallet111"));
        let pr = gate.payment_required_at("analyze_contract", PRICE, 1234);

        assert_eq!(pr.code, PAYMENT_REQUIRED_CODE);
        assert_eq!(pr.payment.wallet, "Wallet111");
        assert_eq!(pr.payment.network, "solana-mainnet");
        assert_eq!(pr.payment.amount, 0.05);
        assert_eq!(pr.payment.currency, Currency::Sol);
        assert_eq!(pr.payment.memo, "aifais_analyze_contract_1234");
    }

    #[test]
    fn test_payment_required_memo_uses_clock() {
        let gate = PaymentGate::new(X402Config::default());
        let before = Utc::now().timestamp_millis();
        let pr = gate.payment_required("scan_invoice", PRICE);
        let after = Utc::now().timestamp_millis();

        let (op, millis) = PaymentChallenge::parse_memo(&pr.payment.memo).unwrap();
        assert_eq!(op, "scan_invoice");
        assert!(millis >= before && millis <= after);
    }

    #[test]
    fn test_back_to_back_challenges_parse() {
        let gate = PaymentGate::new(X402Config::default());
        for _ in 0..2 {
            let text = gate.payment_required("scan_invoice", PRICE).to_payload().unwrap();
            let json: serde_json::Value = serde_json::from_str(&text).unwrap();
            for field in ["amount", "currency", "wallet", "network", "memo"] {
                assert!(json["payment"].get(field).is_some(), "missing {field}");
            }
        }
    }
}
