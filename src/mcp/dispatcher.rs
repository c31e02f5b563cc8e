//! Dispatcher - the single path from a tool call to a Gamma API request.
//!
//! Every failure below this point (unknown tool, invalid arguments, remote
//! errors) is turned into an error `ToolResult`; nothing propagates to the
//! transport.

use std::sync::Arc;

use log::{info, warn};
use serde_json::Value;
use thiserror::Error;

use crate::gamma::{GammaApi, GammaError};
use crate::mcp::content::ToolResult;
use crate::mcp::tools::{ToolCall, ToolRegistry, ValidationErrors};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown tool: '{name}'. Available tools: {available}")]
    UnknownTool { name: String, available: String },
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Remote(#[from] GammaError),
    #[error("failed to encode tool result: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Executes tool calls against an injected Gamma API implementation.
#[derive(Clone)]
pub struct Dispatcher {
    registry: ToolRegistry,
    api: Arc<dyn GammaApi>,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn GammaApi>) -> Self {
        Self {
            registry: ToolRegistry::new(),
            api,
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Call a tool by name with raw JSON arguments.
    pub async fn call_tool(&self, name: &str, arguments: Option<Value>) -> ToolResult {
        match self.try_call_tool(name, arguments).await {
            Ok(payload) => {
                info!("tool {} succeeded", name);
                ToolResult::success_json(&payload)
            }
            Err(err) => {
                warn!("tool {} failed: {}", name, err);
                ToolResult::error(err.to_string())
            }
        }
    }

    async fn try_call_tool(
        &self,
        name: &str,
        arguments: Option<Value>,
    ) -> Result<Value, DispatchError> {
        let call = self.registry.parse_call(name, arguments)?;
        self.execute(call).await
    }

    /// Run an already validated call.
    pub async fn execute(&self, call: ToolCall) -> Result<Value, DispatchError> {
        let payload = match call {
            ToolCall::Generate(request) => serde_json::to_value(self.api.generate(&request).await?),
            ToolCall::CreateFromTemplate(request) => {
                serde_json::to_value(self.api.create_from_template(&request).await?)
            }
            ToolCall::GetGeneration { generation_id } => {
                serde_json::to_value(self.api.get_generation(&generation_id).await?)
            }
            ToolCall::ListThemes(query) => serde_json::to_value(self.api.list_themes(&query).await?),
            ToolCall::ListFolders(query) => {
                serde_json::to_value(self.api.list_folders(&query).await?)
            }
        };
        Ok(payload?)
    }
}
