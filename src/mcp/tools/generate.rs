//! Tool definition for `gamma_generate`.

use log::warn;
use serde_json::{json, Map, Value};

use super::registry::ToolDescriptor;

pub const TOOL_NAME: &str = "gamma_generate";

/// Flat argument names accepted by earlier releases of this server.
const LEGACY_TEXT_FIELDS: [(&str, &str); 4] = [
    ("textTone", "tone"),
    ("textAudience", "audience"),
    ("textLanguage", "language"),
    ("textAmount", "amount"),
];

pub fn descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME.to_string(),
        description: concat!(
            "Generate a new Gamma presentation, document, webpage, or social post. ",
            "Returns a generation ID; poll gamma_get_generation with it until the status ",
            "is \"completed\" to get the final URL."
        )
        .to_string(),
        input_schema: input_schema(),
    }
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "inputText": {
                "type": "string",
                "description": "Content for the gamma. Can be a brief prompt or detailed text with image URLs.",
                "maxLength": 100000
            },
            "textMode": {
                "type": "string",
                "enum": ["generate", "condense", "preserve"],
                "description": "How to modify inputText: generate (expand), condense (summarize), preserve (keep as-is). Defaults to generate when omitted"
            },
            "format": {
                "type": "string",
                "enum": ["presentation", "document", "webpage", "social"],
                "default": "presentation",
                "description": "Type of artifact to create (default: presentation)"
            },
            "themeId": {
                "type": "string",
                "description": "Theme ID (use gamma_list_themes to get available themes)"
            },
            "numCards": {
                "type": "integer",
                "minimum": 1,
                "maximum": 75,
                "description": "Number of cards (1-60 on Pro, 1-75 on Ultra)"
            },
            "cardSplit": {
                "type": "string",
                "enum": ["auto", "inputTextBreaks"],
                "description": "How to divide content into cards"
            },
            "additionalInstructions": {
                "type": "string",
                "minLength": 1,
                "maxLength": 2000,
                "description": "Extra specifications (1-2000 chars)"
            },
            "folderIds": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Folder IDs to store the gamma in (use gamma_list_folders)"
            },
            "exportAs": {
                "type": "string",
                "enum": ["pdf", "pptx"],
                "description": "Export format in addition to the gamma URL"
            },
            "textOptions": {
                "type": "object",
                "properties": {
                    "amount": {
                        "type": "string",
                        "enum": ["brief", "medium", "detailed", "extensive"]
                    },
                    "tone": { "type": "string", "description": "e.g. professional, inspiring" },
                    "audience": { "type": "string", "description": "e.g. tech investors" },
                    "language": { "type": "string", "description": "Language code, e.g. en, sv" }
                }
            },
            "imageOptions": {
                "type": "object",
                "properties": {
                    "source": {
                        "type": "string",
                        "enum": [
                            "aiGenerated", "pictographic", "unsplash", "webAllImages",
                            "webFreeToUse", "webFreeToUseCommercially", "giphy",
                            "placeholder", "noImages"
                        ]
                    },
                    "model": { "type": "string", "description": "e.g. flux-1-pro, imagen-4-pro" },
                    "style": { "type": "string", "description": "e.g. photorealistic, minimal lineart" }
                }
            },
            "cardOptions": {
                "type": "object",
                "properties": {
                    "dimensions": {
                        "type": "string",
                        "enum": ["fluid", "16x9", "4x3", "pageless", "letter", "a4", "1x1", "4x5", "9x16"]
                    },
                    "headerFooter": header_footer_schema()
                }
            },
            "sharingOptions": sharing_options_schema()
        },
        "required": ["inputText", "textMode"]
    })
}

fn header_footer_schema() -> Value {
    let element = json!({
        "type": "object",
        "properties": {
            "type": { "type": "string", "enum": ["cardNumber", "image", "text"] },
            "value": { "type": "string", "description": "Text to show when type is text" },
            "source": { "type": "string", "enum": ["themeLogo", "custom"] },
            "src": { "type": "string", "description": "Image URL when source is custom" },
            "size": { "type": "string", "enum": ["sm", "md", "lg", "xl"] }
        },
        "required": ["type"]
    });

    json!({
        "type": "object",
        "properties": {
            "topLeft": element.clone(),
            "topCenter": element.clone(),
            "topRight": element.clone(),
            "bottomLeft": element.clone(),
            "bottomCenter": element.clone(),
            "bottomRight": element,
            "hideFromFirstCard": { "type": "boolean" },
            "hideFromLastCard": { "type": "boolean" }
        }
    })
}

/// Sharing options accepted by both generation tools.
pub(super) fn sharing_options_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "workspaceAccess": {
                "type": "string",
                "enum": ["noAccess", "view", "comment", "edit", "fullAccess"]
            },
            "externalAccess": {
                "type": "string",
                "enum": ["noAccess", "view", "comment", "edit"]
            },
            "emailOptions": {
                "type": "object",
                "properties": {
                    "recipients": { "type": "array", "items": { "type": "string" } },
                    "access": {
                        "type": "string",
                        "enum": ["view", "comment", "edit", "fullAccess"]
                    }
                }
            }
        }
    })
}

/// Rewrite the deprecated flat argument shape into the nested one.
///
/// A missing `textMode` becomes `generate`. `textTone`, `textAudience`,
/// `textLanguage` and `textAmount` move into `textOptions` (without
/// overriding values already given there). `themeName` has no equivalent and
/// is dropped.
pub fn upgrade_legacy_arguments(arguments: Option<Value>) -> Option<Value> {
    let mut args = match arguments {
        Some(Value::Object(args)) => args,
        other => return other,
    };

    if args.get("textMode").map_or(true, Value::is_null) {
        args.insert("textMode".to_string(), Value::String("generate".to_string()));
    }

    let has_legacy = LEGACY_TEXT_FIELDS
        .iter()
        .any(|(legacy, _)| args.contains_key(*legacy))
        || args.contains_key("themeName");
    if !has_legacy {
        return Some(Value::Object(args));
    }

    warn!("{TOOL_NAME} called with deprecated flat arguments; use textOptions instead");

    let mut text_options = match args.remove("textOptions") {
        Some(Value::Object(existing)) => existing,
        _ => Map::new(),
    };
    for (legacy, nested) in LEGACY_TEXT_FIELDS {
        if let Some(value) = args.remove(legacy) {
            let value = if nested == "amount" {
                legacy_amount(value)
            } else {
                value
            };
            text_options.entry(nested).or_insert(value);
        }
    }
    if !text_options.is_empty() {
        args.insert("textOptions".to_string(), Value::Object(text_options));
    }

    if args.remove("themeName").is_some() {
        warn!("themeName is not supported by the Gamma API; pass themeId from gamma_list_themes");
    }

    Some(Value::Object(args))
}

fn legacy_amount(value: Value) -> Value {
    match value.as_str() {
        Some("short") => Value::String("brief".to_string()),
        Some("long") => Value::String("detailed".to_string()),
        _ => value,
    }
}
