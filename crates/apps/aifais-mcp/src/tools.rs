//! Tool registry.
//!
//! The set of tools is closed: adding a tool means adding a `Tool` variant,
//! and every `match` on it (availability, pricing, schema) must follow.

use std::sync::Arc;

use rmcp::model::JsonObject;
use serde_json::{json, Value};

/// Argument carrying the Solana transaction signature used as payment proof.
pub const SIGNATURE_ARG: &str = "signature";

/// A tool exposed to MCP callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Invoice data extraction.
    ScanInvoice,
    /// Contract risk analysis.
    AnalyzeContract,
    /// Dutch business registry verification.
    VerifyBusiness,
}

/// Whether a tool can be called yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Callable; requests are forwarded to `endpoint` under the API base URL.
    Available {
        /// Path of the remote endpoint, e.g. `/agent/scan`.
        endpoint: &'static str,
    },
    /// Listed but not callable yet.
    Planned,
}

impl Availability {
    /// True for [`Availability::Available`].
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}

impl Tool {
    /// All tools, in listing order.
    pub const ALL: [Tool; 3] = [Tool::ScanInvoice, Tool::AnalyzeContract, Tool::VerifyBusiness];

    /// Stable tool name used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ScanInvoice => "scan_invoice",
            Self::AnalyzeContract => "analyze_contract",
            Self::VerifyBusiness => "verify_business",
        }
    }

    /// Resolve a tool by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Human description shown to the calling agent.
    pub fn description(&self) -> &'static str {
        match self {
            Self::ScanInvoice => {
                "Extract structured data from invoices (PDF, JPG, PNG). Returns vendor, amounts, \
                 VAT, line items, and KvK numbers. Requires 0.001 SOL payment via X402."
            }
            Self::AnalyzeContract => {
                "[COMING SOON] Analyze contracts for risks and unfavorable clauses. Requires \
                 0.05 SOL payment via X402."
            }
            Self::VerifyBusiness => {
                "[COMING SOON] Verify Dutch businesses via KvK registry. Requires 0.001 SOL \
                 payment via X402."
            }
        }
    }

    /// Whether the tool is callable and where it is forwarded.
    pub fn availability(&self) -> Availability {
        match self {
            Self::ScanInvoice => Availability::Available {
                endpoint: "/agent/scan",
            },
            Self::AnalyzeContract | Self::VerifyBusiness => Availability::Planned,
        }
    }

    /// JSON schema of the accepted arguments.
    ///
    /// Advisory only; arguments are not checked against it before forwarding.
    pub fn input_schema(&self) -> JsonObject {
        let schema = match self {
            Self::ScanInvoice => json!({
                "type": "object",
                "properties": {
                    "invoiceBase64": {
                        "type": "string",
                        "description": "Base64 encoded invoice file",
                    },
                    "mimeType": {
                        "type": "string",
                        "enum": ["image/jpeg", "image/png", "application/pdf"],
                        "description": "MIME type of the file",
                    },
                    "signature": {
                        "type": "string",
                        "description": "Solana transaction signature as payment proof. If not provided, returns 402 with payment instructions.",
                    },
                },
                "required": ["invoiceBase64", "mimeType"],
            }),
            Self::AnalyzeContract => json!({
                "type": "object",
                "properties": {
                    "fileBase64": {
                        "type": "string",
                        "description": "Base64 encoded contract PDF",
                    },
                    "contractType": {
                        "type": "string",
                        "enum": ["nda", "employment", "supplier", "lease", "general"],
                        "description": "Type of contract",
                    },
                    "signature": {
                        "type": "string",
                        "description": "Solana transaction signature as payment proof",
                    },
                },
                "required": ["fileBase64"],
            }),
            Self::VerifyBusiness => json!({
                "type": "object",
                "properties": {
                    "kvkNumber": {
                        "type": "string",
                        "pattern": "^[0-9]{8}$",
                        "description": "8-digit KvK number",
                    },
                    "checks": {
                        "type": "array",
                        "items": { "type": "string", "enum": ["kvk", "btw", "bankruptcy"] },
                        "description": "Which registries to check",
                    },
                    "signature": {
                        "type": "string",
                        "description": "Solana transaction signature as payment proof",
                    },
                },
                "required": ["kvkNumber"],
            }),
        };

        match schema {
            Value::Object(map) => map,
            _ => JsonObject::new(),
        }
    }

    /// Full descriptor for this tool.
    pub fn descriptor(&self) -> OperationDescriptor {
        OperationDescriptor {
            name: self.name(),
            description: self.description(),
            input_schema: Arc::new(self.input_schema()),
            availability: self.availability(),
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable description of a tool, built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDescriptor {
    /// Stable tool name.
    pub name: &'static str,
    /// Human description.
    pub description: &'static str,
    /// Accepted arguments.
    pub input_schema: Arc<JsonObject>,
    /// Availability of the tool.
    pub availability: Availability,
}

impl From<&OperationDescriptor> for rmcp::model::Tool {
    fn from(descriptor: &OperationDescriptor) -> Self {
        rmcp::model::Tool::new(
            descriptor.name,
            descriptor.description,
            descriptor.input_schema.clone(),
        )
    }
}

/// Read-only catalog of tool descriptors.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    descriptors: Vec<OperationDescriptor>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    /// Build the registry of all known tools.
    pub fn new() -> Self {
        Self {
            descriptors: Tool::ALL.iter().map(Tool::descriptor).collect(),
        }
    }

    /// All descriptors, in listing order.
    pub fn list(&self) -> &[OperationDescriptor] {
        &self.descriptors
    }

    /// Resolve a tool by name.
    pub fn resolve(&self, name: &str) -> Option<Tool> {
        Tool::from_name(name)
    }

    /// Descriptors as MCP tool definitions.
    pub fn mcp_tools(&self) -> Vec<rmcp::model::Tool> {
        self.descriptors.iter().map(rmcp::model::Tool::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_order() {
        let registry = ToolRegistry::new();
        let names: Vec<_> = registry.list().iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["scan_invoice", "analyze_contract", "verify_business"]);
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let registry = ToolRegistry::new();
        assert_eq!(registry.resolve("scan_invoice"), Some(Tool::ScanInvoice));
        assert_eq!(registry.resolve("verify_business"), Some(Tool::VerifyBusiness));
        assert_eq!(registry.resolve("unknown_tool"), None);
        assert_eq!(registry.resolve("Scan_Invoice"), None);
        assert_eq!(registry.resolve(""), None);
    }

    #[test]
    fn test_name_roundtrip() {
        for tool in Tool::ALL {
            assert_eq!(Tool::from_name(tool.name()), Some(tool));
            assert_eq!(tool.to_string(), tool.name());
        }
    }

    #[test]
    fn test_availability() {
        assert_eq!(
            Tool::ScanInvoice.availability(),
            Availability::Available {
                endpoint: "/agent/scan"
            }
        );
        assert!(!Tool::AnalyzeContract.availability().is_available());
        assert!(!Tool::VerifyBusiness.availability().is_available());
    }

    #[test]
    fn test_scan_invoice_schema() {
        let schema = Tool::ScanInvoice.input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["invoiceBase64", "mimeType"]));
        assert_eq!(
            schema["properties"]["mimeType"]["enum"],
            json!(["image/jpeg", "image/png", "application/pdf"])
        );
        assert!(schema["properties"].get(SIGNATURE_ARG).is_some());
    }

    #[test]
    fn test_verify_business_schema() {
        let schema = Tool::VerifyBusiness.input_schema();
        assert_eq!(schema["properties"]["kvkNumber"]["pattern"], "^[0-9]{8}$");
        assert_eq!(schema["properties"]["checks"]["type"], "array");
        assert_eq!(schema["required"], json!(["kvkNumber"]));
    }

    #[test]
    fn test_mcp_tool_conversion() {
        let tools = ToolRegistry::new().mcp_tools();
        assert_eq!(tools.len(), 3);
        assert_eq!(tools[0].name, "scan_invoice");
        assert!(tools[1]
            .description
            .as_deref()
            .unwrap_or_default()
            .starts_with("[COMING SOON]"));
        assert_eq!(tools[2].input_schema["required"], json!(["kvkNumber"]));
    }
}
