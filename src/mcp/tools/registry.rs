//! Tool registry - the catalog advertised by every transport.
//!
//! The registry owns the descriptors and turns a `(name, arguments)` pair into
//! a typed [`ToolCall`]. Arguments always go through the descriptor's schema
//! first, so nothing undeclared reaches the Gamma client.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::gamma::{CreateFromTemplateRequest, GenerateRequest, ListQuery};
use crate::mcp::dispatcher::DispatchError;

use super::create_from_template;
use super::generate;
use super::get_generation::{self, GetGenerationRequest};
use super::listings;
use super::schema::coerce_arguments;
use super::validation::{ValidationError, ValidationErrors};

/// Tool descriptor as advertised by `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// A validated tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    Generate(GenerateRequest),
    CreateFromTemplate(CreateFromTemplateRequest),
    GetGeneration { generation_id: String },
    ListThemes(ListQuery),
    ListFolders(ListQuery),
}

/// Central registry for all MCP tools.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: vec![
                generate::descriptor(),
                create_from_template::descriptor(),
                get_generation::descriptor(),
                listings::list_themes_descriptor(),
                listings::list_folders_descriptor(),
            ],
        }
    }

    /// All tools, in catalog order.
    pub fn list_tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    pub fn find(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|tool| tool.name == name)
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name.as_str()).collect()
    }

    /// Resolve `name` and coerce `arguments` against its schema.
    pub fn parse_call(&self, name: &str, arguments: Option<Value>) -> Result<ToolCall, DispatchError> {
        let descriptor = self.find(name).ok_or_else(|| DispatchError::UnknownTool {
            name: name.to_string(),
            available: self.tool_names().join(", "),
        })?;

        let arguments = if name == generate::TOOL_NAME {
            generate::upgrade_legacy_arguments(arguments)
        } else {
            arguments
        };
        let coerced = coerce_arguments(&descriptor.input_schema, arguments)?;

        let call = match name {
            generate::TOOL_NAME => ToolCall::Generate(from_coerced(coerced)?),
            create_from_template::TOOL_NAME => ToolCall::CreateFromTemplate(from_coerced(coerced)?),
            get_generation::TOOL_NAME => {
                let request: GetGenerationRequest = from_coerced(coerced)?;
                ToolCall::GetGeneration {
                    generation_id: request.generation_id,
                }
            }
            listings::LIST_THEMES_TOOL => ToolCall::ListThemes(from_coerced(coerced)?),
            listings::LIST_FOLDERS_TOOL => ToolCall::ListFolders(from_coerced(coerced)?),
            other => {
                return Err(DispatchError::UnknownTool {
                    name: other.to_string(),
                    available: self.tool_names().join(", "),
                })
            }
        };
        Ok(call)
    }
}

fn from_coerced<T: DeserializeOwned>(value: Value) -> Result<T, ValidationErrors> {
    serde_json::from_value(value)
        .map_err(|err| ValidationError::new("arguments", err.to_string()).into())
}
