//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the Model Context Protocol handlers for the shopping list.
//! It exports `handle_tool_call` publicly to make it accessible for tests.

use super::{helpers::*, models::*};
use crate::error::ApiError;
use crate::list::{helpers::*, models::*, state::*};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse))
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            tracing::warn!(error = %e.body_text(), "unparseable JSON-RPC request");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    tracing::info!(method = method_name, id = ?id, "MCP call");

    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match handle_tool_call(&state, tool_name, args) {
                Ok(result) => rpc_success(id, result),
                Err(e) => {
                    tracing::warn!(tool = tool_name, error = %e, "tool call failed");
                    rpc_error(id, INVALID_PARAMS, e.to_string())
                }
            }
        }
        "ping" => rpc_success(id, json!({})),
        _ => {
            tracing::warn!(method = method_name, "unknown method");
            rpc_error(id, METHOD_NOT_FOUND, "Method not found")
        }
    };

    Json(response_body).into_response()
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": true }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

/// Describes one tool; every tool takes an optional `listId`.
fn tool(name: &str, title: &str, description: &str, properties: Value, required: &[&str]) -> Value {
    let mut properties = properties;
    properties["listId"] = json!({ "type": "string" });
    json!({
        "name": name,
        "title": title,
        "description": description,
        "inputSchema": {
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false
        }
    })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> Value {
    let id = json!({ "type": "string" });
    let item_fields = json!({
        "name": { "type": "string" },
        "quantity": { "type": "integer", "default": 1 },
        "notes": { "type": "string" }
    });
    let update_fields = json!({
        "id": id,
        "name": { "type": "string" },
        "quantity": { "type": "integer" },
        "notes": { "type": "string" }
    });

    json!({
        "tools": [
            tool(LIST_ITEMS_TOOL, "List items",
                "Returns every item on the list in its current order.",
                json!({}), &[]),
            tool(GET_ITEM_TOOL, "Get item",
                "Returns a single item by id.",
                json!({ "id": id }), &["id"]),
            tool(ADD_ITEM_TOOL, "Add item",
                "Appends a new, unpurchased item to the list.",
                item_fields, &["name"]),
            tool(UPDATE_ITEM_TOOL, "Update item",
                "Replaces the name, quantity and notes of an item. The purchased flag is kept.",
                update_fields, &["id", "name", "quantity"]),
            tool(DELETE_ITEM_TOOL, "Delete item",
                "Removes an item from the list.",
                json!({ "id": id }), &["id"]),
            tool(SEARCH_ITEMS_TOOL, "Search items",
                "Case-insensitive match on item names and notes. An empty query returns everything.",
                json!({ "query": { "type": "string" } }), &[]),
            tool(TOGGLE_PURCHASED_TOOL, "Toggle purchased",
                "Marks an item as bought, or un-marks it.",
                json!({ "id": id }), &["id"]),
            tool(CLEAR_PURCHASED_TOOL, "Clear purchased",
                "Removes every purchased item from the list.",
                json!({}), &[]),
            tool(REORDER_ITEMS_TOOL, "Reorder items",
                "Puts the list in the given order. Must name every item exactly once.",
                json!({ "ids": { "type": "array", "items": { "type": "string" } } }), &["ids"]),
        ]
    })
}

/// Handles `tools/call` request (Business Logic).
pub fn handle_tool_call(state: &AppState, name: &str, args: Value) -> Result<Value, ApiError> {
    match name {
        LIST_ITEMS_TOOL => handle_list_items_tool(state, args),
        GET_ITEM_TOOL => handle_get_item_tool(state, args),
        ADD_ITEM_TOOL => handle_add_item_tool(state, args),
        UPDATE_ITEM_TOOL => handle_update_item_tool(state, args),
        DELETE_ITEM_TOOL => handle_delete_item_tool(state, args),
        SEARCH_ITEMS_TOOL => handle_search_items_tool(state, args),
        TOGGLE_PURCHASED_TOOL => handle_toggle_purchased_tool(state, args),
        CLEAR_PURCHASED_TOOL => handle_clear_purchased_tool(state, args),
        REORDER_ITEMS_TOOL => handle_reorder_items_tool(state, args),
        _ => Err(ApiError::UnknownTool(name.to_string())),
    }
}

/// Missing `arguments` are treated as an empty object.
fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ApiError> {
    let args = if args.is_null() { json!({}) } else { args };
    Ok(serde_json::from_value(args)?)
}

fn handle_list_items_tool(state: &AppState, args: Value) -> Result<Value, ApiError> {
    let input: ListRefInput = parse_args(args)?;
    let list_id = get_or_default_list_id(input.list_id);
    let items = state.items(&list_id);
    Ok(tool_result(&list_id, format_item_summary(&items), &items))
}

fn handle_get_item_tool(state: &AppState, args: Value) -> Result<Value, ApiError> {
    let input: ItemRefInput = parse_args(args)?;
    let list_id = get_or_default_list_id(input.list_id);

    let item = state
        .read_list(&list_id, |list| list.get_by_id(&input.id).cloned())
        .flatten()
        .ok_or_else(|| ApiError::NotFound(input.id.clone()))?;

    let message = format!("{}x {}", item.quantity, item.name);
    let mut result = tool_result(&list_id, message, std::slice::from_ref(&item));
    result["structuredContent"]["item"] = json!(item);
    Ok(result)
}

fn handle_add_item_tool(state: &AppState, args: Value) -> Result<Value, ApiError> {
    let input: AddItemInput = parse_args(args)?;
    let list_id = get_or_default_list_id(input.list_id);

    let (item, items) = state.write_list(&list_id, |list| {
        let item = list.add(input.name, input.quantity, input.notes).clone();
        (item, list.get_all().to_vec())
    });
    tracing::info!(%list_id, item_id = %item.id, "item added via MCP");

    let message = format!("List {} now has {} item(s).", list_id, items.len());
    let mut result = tool_result(&list_id, message, &items);
    result["structuredContent"]["item"] = json!(item);
    Ok(result)
}

fn handle_update_item_tool(state: &AppState, args: Value) -> Result<Value, ApiError> {
    let input: UpdateItemInput = parse_args(args)?;
    let list_id = get_or_default_list_id(input.list_id);
    let id = input
        .id
        .ok_or_else(|| ApiError::InvalidArguments("missing field `id`".to_string()))?;

    let (item, items) = state
        .modify_list(&list_id, |list| {
            let item = list
                .update(&id, input.name, input.quantity, input.notes)
                .cloned()?;
            Some((item, list.get_all().to_vec()))
        })
        .flatten()
        .ok_or_else(|| ApiError::NotFound(id.clone()))?;
    tracing::info!(%list_id, item_id = %id, "item updated via MCP");

    let mut result = tool_result(&list_id, format!("Updated {}.", item.name), &items);
    result["structuredContent"]["item"] = json!(item);
    Ok(result)
}

fn handle_delete_item_tool(state: &AppState, args: Value) -> Result<Value, ApiError> {
    let input: ItemRefInput = parse_args(args)?;
    let list_id = get_or_default_list_id(input.list_id);

    let items = state
        .modify_list(&list_id, |list| {
            list.delete(&input.id).then(|| list.get_all().to_vec())
        })
        .flatten()
        .ok_or_else(|| ApiError::NotFound(input.id.clone()))?;
    tracing::info!(%list_id, item_id = %input.id, "item deleted via MCP");

    let message = format!("List {} now has {} item(s).", list_id, items.len());
    Ok(tool_result(&list_id, message, &items))
}

fn handle_search_items_tool(state: &AppState, args: Value) -> Result<Value, ApiError> {
    let input: SearchInput = parse_args(args)?;
    let list_id = get_or_default_list_id(input.list_id);

    let hits: Vec<ShoppingItem> = state
        .read_list(&list_id, |list| {
            list.search(input.q.as_deref()).into_iter().cloned().collect()
        })
        .unwrap_or_default();

    let message = format!("Found {} item(s).", hits.len());
    Ok(tool_result(&list_id, message, &hits))
}

fn handle_toggle_purchased_tool(state: &AppState, args: Value) -> Result<Value, ApiError> {
    let input: ItemRefInput = parse_args(args)?;
    let list_id = get_or_default_list_id(input.list_id);

    let items = state
        .modify_list(&list_id, |list| {
            list.toggle_purchased(&input.id)
                .then(|| list.get_all().to_vec())
        })
        .flatten()
        .ok_or_else(|| ApiError::NotFound(input.id.clone()))?;
    tracing::info!(%list_id, item_id = %input.id, "item toggled via MCP");

    Ok(tool_result(&list_id, format_item_summary(&items), &items))
}

fn handle_clear_purchased_tool(state: &AppState, args: Value) -> Result<Value, ApiError> {
    let input: ListRefInput = parse_args(args)?;
    let list_id = get_or_default_list_id(input.list_id);

    let (removed, items) = state.modify_list_or_empty(&list_id, |list| {
        let removed = list.clear_purchased();
        (removed, list.get_all().to_vec())
    });
    tracing::info!(%list_id, removed, "purchased items cleared via MCP");

    let mut result = tool_result(
        &list_id,
        format!("Removed {} purchased item(s).", removed),
        &items,
    );
    result["structuredContent"]["removed"] = json!(removed);
    Ok(result)
}

fn handle_reorder_items_tool(state: &AppState, args: Value) -> Result<Value, ApiError> {
    let input: ReorderInput = parse_args(args)?;
    let list_id = get_or_default_list_id(input.list_id);

    let items = state.modify_list_or_empty(&list_id, |list| {
        list.reorder(&input.ids).map(|()| list.get_all().to_vec())
    })?;
    tracing::info!(%list_id, "list reordered via MCP");

    Ok(tool_result(&list_id, format_item_summary(&items), &items))
}
