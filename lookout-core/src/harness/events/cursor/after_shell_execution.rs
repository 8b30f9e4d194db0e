use serde::{Deserialize, Serialize};

use super::common::CommonCursorData;

/// Cursor's afterShellExecution hook event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AfterShellExecutionPayload {
    #[serde(flatten)]
    pub common: CommonCursorData,

    /// The terminal command that was executed
    pub command: String,

    /// Output captured from the terminal
    #[serde(default)]
    pub output: Option<String>,

    /// Milliseconds spent executing (excludes approval wait time)
    #[serde(default)]
    pub duration: Option<u64>,
}
