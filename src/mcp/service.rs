//! MCP Service - Core JSON-RPC 2.0 request handler.
//!
//! Shared by the stdio and HTTP transports so both advertise and dispatch the
//! same catalog.

use std::sync::Arc;

use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::gamma::GammaApi;
use crate::mcp::dispatcher::Dispatcher;
use crate::mcp::rpc::{OutboundResponse, RpcRequest};
use crate::mcp::tools::ToolDescriptor;

pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Core MCP request handler.
#[derive(Clone)]
pub struct McpService {
    dispatcher: Arc<Dispatcher>,
}

impl McpService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    pub fn with_api(api: Arc<dyn GammaApi>) -> Self {
        Self::new(Dispatcher::new(api))
    }

    pub fn tool_count(&self) -> usize {
        self.dispatcher.registry().list_tools().len()
    }

    /// Handle one request. Notifications yield `None`.
    pub async fn handle_request(&self, request: RpcRequest) -> Option<OutboundResponse> {
        if request.jsonrpc != "2.0" {
            warn!("received unsupported jsonrpc version: {}", request.jsonrpc);
            return Some(OutboundResponse::invalid_request(
                request.id,
                "Unsupported jsonrpc version (expected 2.0)",
            ));
        }

        let RpcRequest {
            method, params, id, ..
        } = request;
        info!("Received MCP request: {}", method);

        // Requests without an id are notifications and never get a response.
        let Some(id) = id else {
            if method.starts_with("notifications/") {
                info!("received client notification: {}", method);
            } else {
                warn!("ignoring {} sent without an id", method);
            }
            return None;
        };
        let id = Some(id);

        match method.as_str() {
            "initialize" => Some(self.handle_initialize(id, params)),
            "tools/list" => Some(self.handle_list_tools(id)),
            "tools/call" => Some(self.handle_call_tool(id, params).await),
            "resources/list" => Some(respond(id, &json!({ "resources": [] }))),
            "prompts/list" => Some(respond(id, &json!({ "prompts": [] }))),
            "ping" => Some(OutboundResponse::success(id, json!({}))),
            method if method.starts_with("notifications/") => {
                info!("received client notification: {}", method);
                None
            }
            other => Some(OutboundResponse::method_not_found(id, other)),
        }
    }

    fn handle_initialize(&self, id: Option<Value>, params: Option<Value>) -> OutboundResponse {
        let parsed: InitializeParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return OutboundResponse::invalid_params(id, message),
        };

        if let Some(client) = parsed.client_info {
            info!(
                "client requested initialization: {} v{}",
                client.name,
                client.version.unwrap_or_else(|| "unknown".into())
            );
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            server_info: ImplementationInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("Gamma MCP Server".to_string()),
            },
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
        };

        respond(id, &result)
    }

    fn handle_list_tools(&self, id: Option<Value>) -> OutboundResponse {
        let payload = ListToolsResult {
            tools: self.dispatcher.registry().list_tools(),
        };
        respond(id, &payload)
    }

    async fn handle_call_tool(&self, id: Option<Value>, params: Option<Value>) -> OutboundResponse {
        let parsed: CallToolParams = match parse_params(params) {
            Ok(value) => value,
            Err(message) => return OutboundResponse::invalid_params(id, message),
        };

        info!("tool call: {}", parsed.name);
        let result = self
            .dispatcher
            .call_tool(&parsed.name, parsed.arguments)
            .await;
        respond(id, &result)
    }
}

fn respond<T: Serialize>(id: Option<Value>, payload: &T) -> OutboundResponse {
    match serde_json::to_value(payload) {
        Ok(value) => OutboundResponse::success(id, value),
        Err(err) => OutboundResponse::internal_error(id, format!("failed to encode result: {err}")),
    }
}

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
struct InitializeParams {
    #[serde(rename = "clientInfo", default)]
    client_info: Option<ClientInfo>,
}

#[derive(Debug, Deserialize)]
struct ClientInfo {
    name: String,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Debug, Serialize)]
struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    protocol_version: String,
    #[serde(rename = "serverInfo")]
    server_info: ImplementationInfo,
    capabilities: ServerCapabilities,
}

#[derive(Debug, Serialize)]
struct ImplementationInfo {
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

#[derive(Debug, Serialize)]
struct ServerCapabilities {
    tools: ToolsCapability,
}

#[derive(Debug, Serialize)]
struct ToolsCapability {
    #[serde(rename = "listChanged")]
    list_changed: bool,
}

#[derive(Debug, Serialize)]
struct ListToolsResult<'a> {
    tools: &'a [ToolDescriptor],
}

#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

/// Absent params are read as an empty object.
fn parse_params<T: DeserializeOwned>(params: Option<Value>) -> Result<T, String> {
    let value = match params {
        Some(Value::Null) | None => json!({}),
        Some(value) => value,
    };
    serde_json::from_value(value).map_err(|err| err.to_string())
}
