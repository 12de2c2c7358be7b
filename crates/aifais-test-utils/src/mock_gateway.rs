//! Mock implementation of the `Gateway` trait for testing.
//!
//! Records every outbound call and answers with a scripted outcome.

use std::sync::{Arc, RwLock};

use aifais_mcp::{Gateway, GatewayOutcome};
use async_trait::async_trait;
use rmcp::model::JsonObject;
use serde_json::{json, Value};

/// One call received by the mock.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Endpoint path the call was sent to.
    pub endpoint: String,
    /// Request body.
    pub body: JsonObject,
}

struct MockGatewayInner {
    outcome: GatewayOutcome,
    calls: Vec<RecordedCall>,
}

/// In-memory [`Gateway`].
///
/// Uses `Arc<RwLock<...>>` internally, so it is cheap to clone and all
/// clones share the same state.
#[derive(Clone)]
pub struct MockGateway {
    inner: Arc<RwLock<MockGatewayInner>>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGateway {
    /// Create a mock answering `{"success": true}`.
    pub fn new() -> Self {
        Self::with_outcome(GatewayOutcome::Success(json!({ "success": true })))
    }

    /// Create a mock answering with `outcome`.
    pub fn with_outcome(outcome: GatewayOutcome) -> Self {
        Self {
            inner: Arc::new(RwLock::new(MockGatewayInner {
                outcome,
                calls: Vec::new(),
            })),
        }
    }

    /// Answer with a successful JSON body.
    pub fn succeeding(body: Value) -> Self {
        Self::with_outcome(GatewayOutcome::Success(body))
    }

    /// Answer with an application error.
    pub fn failing(status: u16, body: Value) -> Self {
        Self::with_outcome(GatewayOutcome::ApplicationError { status, body })
    }

    /// Answer with a transport error.
    pub fn unreachable(message: &str) -> Self {
        Self::with_outcome(GatewayOutcome::TransportError(message.to_string()))
    }

    /// Replace the scripted outcome.
    pub fn set_outcome(&self, outcome: GatewayOutcome) {
        self.inner.write().unwrap().outcome = outcome;
    }

    /// All calls received so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.read().unwrap().calls.clone()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.inner.read().unwrap().calls.len()
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn call(&self, endpoint: &str, body: &JsonObject) -> GatewayOutcome {
        let mut inner = self.inner.write().unwrap();
        inner.calls.push(RecordedCall {
            endpoint: endpoint.to_string(),
            body: body.clone(),
        });
        inner.outcome.clone()
    }
}
