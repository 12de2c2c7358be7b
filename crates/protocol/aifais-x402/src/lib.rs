//! x402-style payment challenges for AIFAIS tools.
//!
//! AIFAIS tools are paid per call in SOL. A caller that invokes a paid tool
//! without a payment proof receives a `402 Payment Required` body describing
//! where to send the funds and which memo to attach. The caller then retries
//! the tool call with the Solana transaction signature.
//!
//! ```text
//! ┌─────────────┐   scan_invoice (no sig)   ┌──────────────┐
//! │  AI Agent    │ ────────────────────────→ │  AIFAIS MCP  │
//! │              │ ←──────────────────────── │  Server      │
//! │              │   402 + wallet + memo     │              │
//! │              │                           │              │
//! │   pays SOL   │   scan_invoice (+sig)     │              │
//! │              │ ────────────────────────→ │  ──→ API     │
//! └─────────────┘                           └──────────────┘
//! ```
//!
//! # Components
//!
//! - **[`types`]**: wire types for the challenge body, prices and configuration
//! - **[`gate`]**: [`PaymentGate`], which builds challenges from configuration
//! - **[`error`]**: error types
//!
//! # Usage
//!
//! ```rust
//! use aifais_x402::{Currency, PaymentGate, Price, X402Config};
//!
//! let gate = PaymentGate::new(X402Config::default());
//! let challenge = gate.payment_required("scan_invoice", Price::new(0.001, Currency::Sol));
//!
//! assert_eq!(challenge.code, 402);
//! assert!(challenge.payment.memo.starts_with("aifais_scan_invoice_"));
//! ```
//!
//! The gate never verifies signatures. Verification is the remote API's job.

pub mod error;
pub mod gate;
pub mod types;

pub use error::{X402Error, X402Result};
pub use gate::PaymentGate;
pub use types::{
    Currency, PaymentChallenge, PaymentRequired, Price, X402Config, DEFAULT_WALLET,
    MEMO_PREFIX, NETWORK_SOLANA_MAINNET, PAYMENT_INSTRUCTIONS, PAYMENT_REQUIRED_CODE,
    PAYMENT_REQUIRED_ERROR,
};
