//! Helpers for emulating a JSON-RPC node in tests.

use serde::Serialize;

/// Returns the body of a successful JSON-RPC response.
pub fn success_body(id: u64, result: impl Serialize) -> String {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
    .to_string()
}

/// Returns the body of a failed JSON-RPC response.
pub fn error_body(id: u64, code: i64, message: &str) -> String {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message,
        },
    })
    .to_string()
}

/// Returns a body matcher for requests invoking the provided method.
pub fn method_body(method: &str) -> serde_json::Value {
    serde_json::json!({ "method": method })
}
