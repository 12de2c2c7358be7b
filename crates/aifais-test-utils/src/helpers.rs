//! Small builders for tool call arguments.

use rmcp::model::JsonObject;
use serde_json::{json, Value};

/// Base64 of a tiny PNG-looking payload.
pub const SAMPLE_INVOICE_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

/// Convert a JSON object literal into an argument map.
///
/// Panics if `value` is not an object.
pub fn json_args(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        other => panic!("expected JSON object, got {}", other),
    }
}

/// `scan_invoice` arguments, with an optional signature.
pub fn scan_invoice_args(signature: Option<&str>) -> JsonObject {
    let mut args = json_args(json!({
        "invoiceBase64": SAMPLE_INVOICE_BASE64,
        "mimeType": "image/png",
    }));
    if let Some(sig) = signature {
        args.insert("signature".to_string(), Value::String(sig.to_string()));
    }
    args
}
