//! Per-call tool prices.

use aifais_x402::{Currency, Price};

use crate::tools::Tool;

/// A tool and what one call of it costs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingEntry {
    /// Priced tool.
    pub tool: Tool,
    /// Price of one call.
    pub price: Price,
}

impl Tool {
    /// Price of one call of this tool.
    pub fn price(&self) -> Price {
        match self {
            Self::ScanInvoice => Price::new(0.001, Currency::Sol),
            Self::AnalyzeContract => Price::new(0.05, Currency::Sol),
            Self::VerifyBusiness => Price::new(0.001, Currency::Sol),
        }
    }
}

/// The full pricing table, in tool listing order.
pub fn pricing_table() -> Vec<PricingEntry> {
    Tool::ALL
        .into_iter()
        .map(|tool| PricingEntry {
            tool,
            price: tool.price(),
        })
        .collect()
}
