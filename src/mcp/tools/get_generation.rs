//! Tool definition for `gamma_get_generation`.

use serde::Deserialize;
use serde_json::{json, Value};

use super::registry::ToolDescriptor;

pub const TOOL_NAME: &str = "gamma_get_generation";

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: concat!(
            "Get the status and URL of a previously started generation. ",
            "Returns a single snapshot; call again until status is \"completed\"."
        )
        .to_string(),
        input_schema: input_schema(),
    }
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "generationId": {
                "type": "string",
                "description": "Generation ID returned from gamma_generate or gamma_create_from_template"
            }
        },
        "required": ["generationId"]
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetGenerationRequest {
    pub generation_id: String,
}
