//! Tool definitions for the cursor-paginated workspace listings.
//!
//! Themes and folders share one argument shape: an optional name filter, a
//! page size and the opaque `after` cursor taken from a previous `nextCursor`.

use serde_json::{json, Value};

use super::registry::ToolDescriptor;

pub const LIST_THEMES_TOOL: &str = "gamma_list_themes";
pub const LIST_FOLDERS_TOOL: &str = "gamma_list_folders";

pub fn list_themes_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: LIST_THEMES_TOOL.to_string(),
        description: concat!(
            "List themes available in the Gamma workspace. ",
            "Use the returned theme IDs as themeId in gamma_generate. ",
            "When hasMore is true, pass nextCursor as after to get the next page."
        )
        .to_string(),
        input_schema: input_schema("Search themes by name (case-insensitive)"),
    }
}

pub fn list_folders_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: LIST_FOLDERS_TOOL.to_string(),
        description: concat!(
            "List folders in the Gamma workspace. ",
            "Use folder IDs as folderIds to organize generated gammas. ",
            "When hasMore is true, pass nextCursor as after to get the next page."
        )
        .to_string(),
        input_schema: input_schema("Search folders by name"),
    }
}

fn input_schema(query_description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "description": query_description
            },
            "limit": {
                "type": "integer",
                "minimum": 1,
                "maximum": 50,
                "description": "Number of items to return (max 50)"
            },
            "after": {
                "type": "string",
                "description": "Cursor for pagination (nextCursor of the previous page)"
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_descriptors_share_arguments() {
        let themes = list_themes_descriptor();
        let folders = list_folders_descriptor();
        assert_eq!(themes.name, LIST_THEMES_TOOL);
        assert_eq!(folders.name, LIST_FOLDERS_TOOL);

        let keys = |d: &ToolDescriptor| {
            d.input_schema["properties"]
                .as_object()
                .unwrap()
                .keys()
                .cloned()
                .collect::<Vec<_>>()
        };
        assert_eq!(keys(&themes), keys(&folders));
        assert!(themes.input_schema.get("required").is_none());
    }
}
