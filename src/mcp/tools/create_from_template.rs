//! Tool definition for `gamma_create_from_template`.

use serde_json::{json, Value};

use super::generate::sharing_options_schema;
use super::registry::ToolDescriptor;

pub const TOOL_NAME: &str = "gamma_create_from_template";

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: concat!(
            "Create a new gamma based on an existing template gamma. ",
            "Adapts the template to new content while preserving its structure. ",
            "Returns a generation ID to poll with gamma_get_generation."
        )
        .to_string(),
        input_schema: input_schema(),
    }
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "gammaId": {
                "type": "string",
                "description": "ID of the template gamma to base this on"
            },
            "prompt": {
                "type": "string",
                "description": "Text content, image URLs, and instructions for adapting the template"
            },
            "themeId": {
                "type": "string",
                "description": "Override the template theme"
            },
            "folderIds": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Folder IDs to store the gamma in"
            },
            "exportAs": {
                "type": "string",
                "enum": ["pdf", "pptx"]
            },
            "imageOptions": {
                "type": "object",
                "properties": {
                    "model": { "type": "string" },
                    "style": { "type": "string" }
                }
            },
            "sharingOptions": sharing_options_schema()
        },
        "required": ["gammaId", "prompt"]
    })
}
