//! MCP (Model Context Protocol) tool surface

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;
use serde_json::Value;
use tracing::info;
use tracing::warn;

use super::handlers::AppState;
use super::tools;
use crate::api::types::McpToolResult;
use crate::models::ProfileCategory;

/// MCP server information
#[derive(Debug, Serialize)]
pub struct McpServerInfo {
    pub message: String,
    pub status: String,
    pub name: String,
    pub version: String,
}

/// MCP tool definition
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct McpTool {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// MCP tool call request
#[derive(Debug, Deserialize)]
pub struct McpToolCallRequest {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// Method-dispatched request (`tools/list`, `tools/call`)
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

/// Descriptors for every tool this server exposes
pub fn tool_definitions() -> Vec<McpTool> {
    vec![
        McpTool {
            name: "askAboutProfile".to_string(),
            description: "Ask the digital twin about professional profile information"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "question": {
                        "type": "string",
                        "description": "Your question about the profile"
                    }
                },
                "required": ["question"]
            }),
        },
        McpTool {
            name: "searchProfile".to_string(),
            description: "Search for specific information within the profile".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search keywords"
                    },
                    "category": {
                        "type": "string",
                        "enum": ProfileCategory::names(),
                        "description": "Optional category filter"
                    }
                },
                "required": ["query"]
            }),
        },
        McpTool {
            name: "listProfileSections".to_string(),
            description: "Get an overview of available profile sections".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
    ]
}

fn string_arg<'a>(arguments: &'a Value, key: &str) -> Option<&'a str> {
    arguments.get(key).and_then(Value::as_str)
}

/// Run one tool by name; `None` when the tool does not exist
pub async fn dispatch_tool(
    state: &AppState,
    name: &str,
    arguments: &Value,
) -> Option<McpToolResult> {
    info!("MCP tool call: {}", name);

    let result = match name {
        "askAboutProfile" => {
            let question = string_arg(arguments, "question").unwrap_or_default();
            tools::ask_about_profile(&state.rag, question).await
        }
        "searchProfile" => {
            let query = string_arg(arguments, "query").unwrap_or_default();
            let category = string_arg(arguments, "category");
            tools::search_profile(&state.rag, query, category).await
        }
        "listProfileSections" => tools::list_profile_sections(&state.rag).await,
        _ => {
            warn!("Unknown MCP tool: {}", name);
            return None;
        }
    };

    Some(result)
}

/// Get MCP server information
async fn get_server_info(State(state): State<AppState>) -> Json<McpServerInfo> {
    Json(McpServerInfo {
        message: "Digital Twin MCP Server".to_string(),
        status: "running".to_string(),
        name: state.server.name.clone(),
        version: state.server.version.clone(),
    })
}

/// List available tools
async fn list_tools() -> Json<Value> {
    Json(json!({ "tools": tool_definitions() }))
}

/// Call a tool
async fn call_tool(State(state): State<AppState>, Json(req): Json<McpToolCallRequest>) -> Response {
    match dispatch_tool(&state, &req.name, &req.arguments).await {
        Some(result) => Json(result).into_response(),
        None => bad_request("Unknown tool"),
    }
}

/// Method-dispatched endpoint (POST /mcp)
async fn handle_request(State(state): State<AppState>, Json(req): Json<McpRequest>) -> Response {
    match req.method.as_str() {
        "tools/list" => list_tools().await.into_response(),
        "tools/call" => {
            let Some(name) = req.params.get("name").and_then(Value::as_str) else {
                return bad_request("Missing tool name");
            };
            let arguments = req.params.get("arguments").cloned().unwrap_or(Value::Null);
            match dispatch_tool(&state, name, &arguments).await {
                Some(result) => Json(result).into_response(),
                None => bad_request("Unknown tool"),
            }
        }
        other => {
            warn!("Unknown MCP method: {}", other);
            bad_request("Unknown method")
        }
    }
}

/// Create MCP router
pub fn mcp_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_server_info).post(handle_request))
        .route("/tools", get(list_tools))
        .route("/tools/call", post(call_tool))
        .with_state(state)
}
