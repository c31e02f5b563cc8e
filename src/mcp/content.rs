//! Tool result envelope returned by every tool call.

use serde::{Deserialize, Serialize};

/// Content item in a tool result. Only text blocks are produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl ContentItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: "text".to_string(),
            text: text.into(),
        }
    }
}

/// Result of a tool call as defined by MCP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ContentItem>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResult {
    pub fn success_text(message: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(message)],
            is_error: false,
        }
    }

    /// Pretty-printed JSON in a single text block.
    pub fn success_json<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_string_pretty(payload) {
            Ok(text) => Self::success_text(text),
            Err(err) => Self::error(format!("Failed to serialize tool result: {err}")),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(message)],
            is_error: true,
        }
    }

    /// Text of the first content block.
    pub fn text(&self) -> &str {
        self.content
            .first()
            .map(|item| item.text.as_str())
            .unwrap_or_default()
    }
}
