//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC communication
//! and tool result construction.

use crate::list::models::ShoppingItem;
use serde_json::{json, Value};

/// Builds the `tools/call` result for a list operation.
///
/// The text entry is what a chat client shows; `structuredContent` carries the
/// list id and the items as they stand after the call.
pub fn tool_result(list_id: &str, message: impl Into<String>, items: &[ShoppingItem]) -> Value {
    json!({
        "content": [{ "type": "text", "text": message.into() }],
        "structuredContent": {
            "listId": list_id,
            "items": items,
        }
    })
}

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}
