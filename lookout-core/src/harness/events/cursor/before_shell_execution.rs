use serde::{Deserialize, Serialize};

use super::common::CommonCursorData;

/// Cursor's beforeShellExecution hook event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeforeShellExecutionPayload {
    #[serde(flatten)]
    pub common: CommonCursorData,

    /// The full shell command about to run
    pub command: String,

    /// Working directory for the command
    #[serde(default)]
    pub cwd: Option<String>,
}
