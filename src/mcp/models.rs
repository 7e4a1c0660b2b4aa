//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

pub const LIST_ITEMS_TOOL: &str = "list_items";
pub const GET_ITEM_TOOL: &str = "get_item";
pub const ADD_ITEM_TOOL: &str = "add_item";
pub const UPDATE_ITEM_TOOL: &str = "update_item";
pub const DELETE_ITEM_TOOL: &str = "delete_item";
pub const SEARCH_ITEMS_TOOL: &str = "search_items";
pub const TOGGLE_PURCHASED_TOOL: &str = "toggle_purchased";
pub const CLEAR_PURCHASED_TOOL: &str = "clear_purchased";
pub const REORDER_ITEMS_TOOL: &str = "reorder_items";

/// Server identifier
pub const SERVER_NAME: &str = "shopping-list-rust";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// JSON-RPC error codes
pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}
