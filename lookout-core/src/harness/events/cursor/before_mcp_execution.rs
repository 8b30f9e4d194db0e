use serde::{Deserialize, Serialize};

use super::common::CommonCursorData;

/// Cursor's beforeMCPExecution hook event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeforeMcpExecutionPayload {
    #[serde(flatten)]
    pub common: CommonCursorData,

    /// Name of the MCP tool being invoked
    pub tool_name: String,

    /// JSON parameters passed to the tool
    #[serde(default)]
    pub tool_input: serde_json::Value,

    /// Server URL, for URL-based MCP servers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Command string, for command-based MCP servers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}
