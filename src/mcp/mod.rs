//! MCP (Model Context Protocol) Module
//!
//! Provides JSON-RPC 2.0 over stdio and HTTP. Both transports share one
//! `McpService`, which owns the tool catalog and dispatcher.

pub mod content;
pub mod dispatcher;
pub mod handlers;
pub mod rpc;
pub mod service;
pub mod stdio;
pub mod tools;

pub use content::{ContentItem, ToolResult};
pub use dispatcher::{DispatchError, Dispatcher};
pub use handlers::{config, McpState};
pub use service::McpService;
