use serde::{Deserialize, Serialize};

use super::common::CommonCursorData;

/// Cursor's afterMCPExecution hook event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AfterMcpExecutionPayload {
    #[serde(flatten)]
    pub common: CommonCursorData,

    /// Name of the MCP tool that was executed
    pub tool_name: String,

    /// JSON params string passed to the tool
    #[serde(default)]
    pub tool_input: Option<String>,

    /// JSON string of the tool response
    #[serde(default)]
    pub result_json: Option<String>,

    /// Milliseconds spent executing (excludes approval wait time)
    #[serde(default)]
    pub duration: Option<u64>,
}
