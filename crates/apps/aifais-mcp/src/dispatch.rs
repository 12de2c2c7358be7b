//! Tool call dispatch.
//!
//! Every invocation produces exactly one [`ResponseEnvelope`]:
//!
//! 1. Unknown tool: error, `Unknown tool: <name>`.
//! 2. Planned tool: error, fixed "coming soon" text (payment is not consulted).
//! 3. Available tool without payment proof: error whose text is the JSON
//!    `402 Payment Required` body. MCP has no payment status, so the
//!    challenge travels on the error channel.
//! 4. Available tool with payment proof: forwarded once to the API and the
//!    outcome relayed.
//!
//! The dispatcher holds no mutable state; concurrent calls do not interact.

use std::sync::Arc;

use aifais_x402::PaymentGate;
use rmcp::model::{CallToolResult, Content, JsonObject};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::gateway::{Gateway, GatewayOutcome, TRANSPORT_ERROR_PREFIX};
use crate::tools::{Availability, Tool, ToolRegistry, SIGNATURE_ARG};

/// Text returned for a tool name that is not in the registry.
pub fn unknown_tool_message(name: &str) -> String {
    format!("Unknown tool: {}", name)
}

/// Text returned for a planned tool.
pub fn coming_soon_message(name: &str) -> String {
    format!(
        "Tool \"{}\" is coming soon. Check https://aifais.com/tools for availability.",
        name
    )
}

/// A single tool call as received from the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Requested tool name (not yet resolved).
    pub operation: String,
    /// Call arguments, including `signature` when present.
    pub arguments: JsonObject,
    /// Payment proof: the `signature` argument when it is a non-empty string.
    pub payment_proof: Option<String>,
}

impl Invocation {
    /// Build an invocation, extracting the payment proof from `arguments`.
    pub fn new(operation: impl Into<String>, arguments: JsonObject) -> Self {
        let payment_proof = arguments
            .get(SIGNATURE_ARG)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            operation: operation.into(),
            arguments,
            payment_proof,
        }
    }
}

/// Uniform `{payload, is_error}` result of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope {
    /// Text payload; JSON payloads are carried as serialized text.
    pub payload: String,
    /// Whether the call failed (payment required counts as failed).
    pub is_error: bool,
}

impl ResponseEnvelope {
    /// Successful envelope.
    pub fn success(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            is_error: false,
        }
    }

    /// Error envelope.
    pub fn error(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            is_error: true,
        }
    }

    /// Convert into an MCP tool result with a single text item.
    pub fn into_call_tool_result(self) -> CallToolResult {
        let content = vec![Content::text(self.payload)];
        if self.is_error {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }
}

impl From<GatewayOutcome> for ResponseEnvelope {
    fn from(outcome: GatewayOutcome) -> Self {
        match outcome {
            GatewayOutcome::Success(body) => {
                let text = serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string());
                Self::success(text)
            }
            GatewayOutcome::ApplicationError { body, .. } => Self::error(body.to_string()),
            GatewayOutcome::TransportError(message) => {
                Self::error(format!("{}{}", TRANSPORT_ERROR_PREFIX, message))
            }
        }
    }
}

/// Routes invocations to the payment gate or the remote API.
#[derive(Clone)]
pub struct Dispatcher {
    /// Tool catalog.
    registry: ToolRegistry,
    /// Challenge builder.
    gate: PaymentGate,
    /// Remote API client.
    gateway: Arc<dyn Gateway>,
}

impl Dispatcher {
    /// Create a dispatcher.
    pub fn new(gate: PaymentGate, gateway: Arc<dyn Gateway>) -> Self {
        Self {
            registry: ToolRegistry::new(),
            gate,
            gateway,
        }
    }

    /// The tool catalog.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handle one invocation.
    pub async fn handle(&self, invocation: Invocation) -> ResponseEnvelope {
        debug!(tool = %invocation.operation, paid = invocation.payment_proof.is_some(), "Dispatching tool call");

        let Some(tool) = self.registry.resolve(&invocation.operation) else {
            warn!(tool = %invocation.operation, "Unknown tool requested");
            return ResponseEnvelope::error(unknown_tool_message(&invocation.operation));
        };

        let endpoint = match tool.availability() {
            Availability::Planned => {
                debug!(tool = %tool, "Planned tool requested");
                return ResponseEnvelope::error(coming_soon_message(tool.name()));
            }
            Availability::Available { endpoint } => endpoint,
        };

        if invocation.payment_proof.is_none() {
            return self.payment_required(tool);
        }

        info!(tool = %tool, endpoint = %endpoint, "Forwarding paid tool call");
        let outcome = self.gateway.call(endpoint, &invocation.arguments).await;
        if outcome.is_error() {
            warn!(tool = %tool, outcome = ?outcome, "Tool call failed upstream");
        }
        outcome.into()
    }

    /// Error envelope carrying a fresh payment challenge for `tool`.
    pub fn payment_required(&self, tool: Tool) -> ResponseEnvelope {
        let challenge = self.gate.payment_required(tool.name(), tool.price());
        info!(
            tool = %tool,
            amount = challenge.payment.amount,
            memo = %challenge.payment.memo,
            "Returning payment required"
        );

        match challenge.to_payload() {
            Ok(text) => ResponseEnvelope::error(text),
            Err(e) => {
                warn!(tool = %tool, error = %e, "Failed to serialize payment challenge");
                ResponseEnvelope::error(format!("Internal error: {}", e))
            }
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aifais_x402::X402Config;
    use async_trait::async_trait;
    use rmcp::model::{RawContent, RawTextContent};
    use serde_json::json;
    use std::sync::Mutex;

    /// Gateway that records calls and replays a fixed outcome.
    struct FixedGateway {
        outcome: GatewayOutcome,
        calls: Mutex<Vec<(String, JsonObject)>>,
    }

    impl FixedGateway {
        fn new(outcome: GatewayOutcome) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(String, JsonObject)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Gateway for FixedGateway {
        async fn call(&self, endpoint: &str, body: &JsonObject) -> GatewayOutcome {
            self.calls
                .lock()
                .unwrap()
                .push((endpoint.to_string(), body.clone()));
            self.outcome.clone()
        }
    }

    fn args(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn dispatcher(gateway: Arc<FixedGateway>) -> Dispatcher {
        Dispatcher::new(PaymentGate::new(X402Config::default()), gateway)
    }

    #[test]
    fn test_invocation_extracts_signature() {
        let inv = Invocation::new("scan_invoice", args(json!({"signature": "abc"})));
        assert_eq!(inv.payment_proof.as_deref(), Some("abc"));

        let inv = Invocation::new("scan_invoice", args(json!({"signature": ""})));
        assert!(inv.payment_proof.is_none());

        let inv = Invocation::new("scan_invoice", args(json!({"signature": 42})));
        assert!(inv.payment_proof.is_none());

        let inv = Invocation::new("scan_invoice", JsonObject::new());
        assert!(inv.payment_proof.is_none());
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let gateway = FixedGateway::new(GatewayOutcome::Success(json!({})));
        let d = dispatcher(gateway.clone());

        let env = d.handle(Invocation::new("unknown_tool", JsonObject::new())).await;
        assert_eq!(env, ResponseEnvelope::error("Unknown tool: unknown_tool"));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_planned_tool_ignores_payment() {
        let gateway = FixedGateway::new(GatewayOutcome::Success(json!({})));
        let d = dispatcher(gateway.clone());

        let env = d
            .handle(Invocation::new(
                "analyze_contract",
                args(json!({"fileBase64": "x", "signature": "paid"})),
            ))
            .await;
        assert!(env.is_error);
        assert_eq!(
            env.payload,
            "Tool \"analyze_contract\" is coming soon. Check https://aifais.com/tools for availability."
        );
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_signature_returns_challenge() {
        let gateway = FixedGateway::new(GatewayOutcome::Success(json!({})));
        let d = dispatcher(gateway.clone());

        let env = d
            .handle(Invocation::new(
                "scan_invoice",
                args(json!({"invoiceBase64": "aGVsbG8=", "mimeType": "image/png"})),
            ))
            .await;

        assert!(env.is_error);
        assert!(env.payload.contains(r#""amount":0.001,"currency":"SOL""#));
        let json: Value = serde_json::from_str(&env.payload).unwrap();
        assert_eq!(json["code"], 402);
        assert_eq!(json["error"], "Payment Required");
        assert!(json["payment"]["memo"]
            .as_str()
            .unwrap()
            .starts_with("aifais_scan_invoice_"));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_paid_call_forwards_arguments() {
        let gateway = FixedGateway::new(GatewayOutcome::Success(json!({"vendor": "ACME"})));
        let d = dispatcher(gateway.clone());

        let arguments = args(json!({
            "invoiceBase64": "aGVsbG8=",
            "mimeType": "image/png",
            "signature": "5xSig",
        }));
        let env = d
            .handle(Invocation::new("scan_invoice", arguments.clone()))
            .await;

        assert_eq!(env, ResponseEnvelope::success("{\n  \"vendor\": \"ACME\"\n}"));
        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "/agent/scan");
        assert_eq!(calls[0].1, arguments);
    }

    #[tokio::test]
    async fn test_application_error_relayed_compact() {
        let gateway = FixedGateway::new(GatewayOutcome::ApplicationError {
            status: 400,
            body: json!({"error": "Invalid file"}),
        });
        let d = dispatcher(gateway);

        let env = d
            .handle(Invocation::new("scan_invoice", args(json!({"signature": "s"}))))
            .await;
        assert_eq!(env, ResponseEnvelope::error(r#"{"error":"Invalid file"}"#));
    }

    #[tokio::test]
    async fn test_transport_error_prefixed() {
        let gateway = FixedGateway::new(GatewayOutcome::TransportError("connection refused".into()));
        let d = dispatcher(gateway);

        let env = d
            .handle(Invocation::new("scan_invoice", args(json!({"signature": "s"}))))
            .await;
        assert_eq!(env, ResponseEnvelope::error("API Error: connection refused"));
    }

    #[test]
    fn test_envelope_into_call_tool_result() {
        let result = ResponseEnvelope::error("boom").into_call_tool_result();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
        match &result.content[0].raw {
            RawContent::Text(RawTextContent { text, .. }) => assert_eq!(text, "boom"),
            _ => panic!("Expected text content"),
        }

        let result = ResponseEnvelope::success("ok").into_call_tool_result();
        assert!(!result.is_error.unwrap_or(false));
    }
}
