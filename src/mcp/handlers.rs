//! MCP (Model Context Protocol) route handlers
//!
//! Exposes the shared cart as MCP tools over JSON-RPC. `handle_tool_call` is
//! public so tests can drive the tools without going through HTTP.

use super::{helpers::*, models::*};
use crate::cart::{helpers::format_item_summary, models::*, state::*};
use crate::error::CartError;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
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
            tracing::warn!("JSON parse error: {}", e.body_text());
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

    tracing::info!("MCP call: {} (id: {})", method_name, id);

    let response_body = match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list()),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(json!({}));

            match handle_tool_call(&state, tool_name, args) {
                Ok(result) => rpc_success(id, result),
                Err(err) => {
                    tracing::warn!("Tool call {} failed: {}", tool_name, err);
                    rpc_error(id, INVALID_PARAMS, err.to_string())
                }
            }
        }
        "ping" => rpc_success(id, json!({})),
        _ => {
            tracing::warn!("Unknown method: {}", method_name);
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

/// Handles `tools/list` request.
fn handle_tools_list() -> Value {
    json!({
        "tools": [
            {
                "name": ADD_ITEM_TOOL,
                "title": "Add item",
                "description": "Appends an item to the shared cart and returns its contents.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer", "minimum": 0 },
                        "label": { "type": "string" },
                        "cost": { "type": "number", "minimum": 0 }
                    },
                    "required": ["id", "label", "cost"],
                    "additionalProperties": false
                }
            },
            {
                "name": REMOVE_ITEM_TOOL,
                "title": "Remove item",
                "description": "Removes every item with the given id from the shared cart.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer", "minimum": 0 }
                    },
                    "required": ["id"],
                    "additionalProperties": false
                }
            },
            {
                "name": LIST_ITEMS_TOOL,
                "title": "List items",
                "description": "Returns the items in the shared cart in insertion order.",
                "inputSchema": {
                    "type": "object",
                    "properties": {},
                    "additionalProperties": false
                }
            }
        ]
    })
}

/// Handles `tools/call` request.
pub fn handle_tool_call(state: &AppState, name: &str, args: Value) -> Result<Value, CartError> {
    match name {
        ADD_ITEM_TOOL => handle_add_item_tool(state, args),
        REMOVE_ITEM_TOOL => handle_remove_item_tool(state, args),
        LIST_ITEMS_TOOL => Ok(handle_list_items_tool(state)),
        _ => Err(CartError::UnknownTool(name.to_string())),
    }
}

fn handle_add_item_tool(state: &AppState, args: Value) -> Result<Value, CartError> {
    let input: AddItemInput = serde_json::from_value(args)?;
    state.cart.add_item(input.into_item()?);

    let cart_id = state.cart.id();
    let items = state.cart.items();
    let message = format!("Cart {} now has {} item(s).", cart_id, items.len());

    Ok(tool_result(
        message,
        json!({ "cartId": cart_id, "items": items }),
    ))
}

fn handle_remove_item_tool(state: &AppState, args: Value) -> Result<Value, CartError> {
    let input: RemoveItemInput = serde_json::from_value(args)?;
    let removed = state.cart.remove_item_by_id(input.id);

    let message = format!("Removed {} item(s) with id {}.", removed, input.id);

    Ok(tool_result(
        message,
        json!({
            "cartId": state.cart.id(),
            "removed": removed,
            "items": state.cart.items()
        }),
    ))
}

fn handle_list_items_tool(state: &AppState) -> Value {
    let items = state.cart.items();
    tool_result(
        format_item_summary(&items),
        json!({ "cartId": state.cart.id(), "items": items }),
    )
}
