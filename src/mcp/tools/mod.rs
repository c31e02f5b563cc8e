//! MCP Tools module - defines tools exposed via JSON-RPC.
//!
//! Each tool provides:
//! - Tool descriptor (name, description, input schema)
//! - Argument coercion through its schema into a typed `ToolCall`

pub mod create_from_template;
pub mod generate;
pub mod get_generation;
pub mod listings;
pub mod registry;
pub mod schema;
pub mod validation;

pub use registry::{ToolCall, ToolDescriptor, ToolRegistry};
pub use validation::{ValidationError, ValidationErrors};
