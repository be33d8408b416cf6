//! Tool definitions for the navigator's named actions.
//!
//! A dispatch layer (MCP server, agent framework, CLI help) advertises
//! these definitions and routes invocations to
//! [`NavigatorSession::invoke`](crate::NavigatorSession::invoke).

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Summary of a tool for index listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSummary {
    /// Tool name (unique identifier).
    pub name: String,
    /// One-line description.
    pub description: String,
}

/// Full definition of a tool including its parameter schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name (unique identifier).
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// JSON Schema for the tool's parameters.
    #[serde(default)]
    pub parameters: serde_json::Value,
}

impl ToolDefinition {
    /// Create a new tool definition.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// Create a tool definition with no parameters.
    pub fn no_params(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    /// Get a summary of this tool.
    pub fn summary(&self) -> ToolSummary {
        ToolSummary {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// Definitions for every named action a [`NavigatorSession`] understands.
///
/// [`NavigatorSession`]: crate::NavigatorSession
pub fn navigation_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "descend",
            "Move into a direct child directory of the current working directory. \
             Symbolic links and anything that is not a direct child are refused.",
            json!({
                "type": "object",
                "properties": {
                    "target": {
                        "type": "string",
                        "description": "Name of a direct child directory"
                    }
                },
                "required": ["target"]
            }),
        ),
        ToolDefinition::no_params(
            "ascend",
            "Move back to the parent directory. At the top-level directory this \
             changes nothing and says so.",
        ),
        ToolDefinition::no_params(
            "current_trail",
            "Show the path taken from the top-level directory to the current one.",
        ),
        ToolDefinition::no_params(
            "list",
            "List every file, directory and link in the current working directory \
             with its size.",
        ),
        ToolDefinition::new(
            "create_file",
            "Create an empty file in the current working directory.",
            json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "File name, without any directory part"
                    }
                },
                "required": ["name"]
            }),
        ),
        ToolDefinition::new(
            "remove_file",
            "Delete a file from the current working directory. Directories are \
             never deleted.",
            json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "File name, without any directory part"
                    }
                },
                "required": ["name"]
            }),
        ),
        ToolDefinition::new(
            "rename_file",
            "Rename a file within the current working directory.",
            json!({
                "type": "object",
                "properties": {
                    "old": {
                        "type": "string",
                        "description": "Current file name"
                    },
                    "new": {
                        "type": "string",
                        "description": "New file name"
                    }
                },
                "required": ["old", "new"]
            }),
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definition_new() {
        let tool = ToolDefinition::new("probe", "A probe", json!({"type": "object"}));
        assert_eq!(tool.name, "probe");
        assert_eq!(tool.description, "A probe");
        assert_eq!(tool.parameters, json!({"type": "object"}));
    }

    #[test]
    fn test_tool_definition_no_params() {
        let tool = ToolDefinition::no_params("simple", "A simple tool");
        assert!(tool.parameters["properties"].is_object());
        assert!(tool.parameters["required"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_summary() {
        let tool = ToolDefinition::no_params("probe", "A probe");
        let summary = tool.summary();
        assert_eq!(summary.name, "probe");
        assert_eq!(summary.description, "A probe");
    }

    #[test]
    fn test_navigation_tools_cover_every_action() {
        let names: Vec<_> = navigation_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "descend",
                "ascend",
                "current_trail",
                "list",
                "create_file",
                "remove_file",
                "rename_file",
            ]
        );
    }

    #[test]
    fn test_parameterized_tools_require_their_arguments() {
        let tools = navigation_tools();
        let descend = tools.iter().find(|t| t.name == "descend").unwrap();
        assert_eq!(descend.parameters["required"], json!(["target"]));

        let rename = tools.iter().find(|t| t.name == "rename_file").unwrap();
        assert_eq!(rename.parameters["required"], json!(["old", "new"]));
    }

    #[test]
    fn test_tool_definition_serialization() {
        let tool = ToolDefinition::new("probe", "A probe", json!({"type": "object"}));
        let json = serde_json::to_string(&tool).unwrap();
        let parsed: ToolDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, tool.name);
        assert_eq!(parsed.parameters, tool.parameters);
    }
}
