use serde::{Deserialize, Serialize};

use super::common::CommonCursorData;

/// Cursor's afterAgentThought hook event
///
/// Fired after the agent completes a thinking block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AfterAgentThoughtPayload {
    #[serde(flatten)]
    pub common: CommonCursorData,

    /// Fully aggregated thinking text for the completed block
    pub text: String,

    /// Milliseconds spent in the thinking block, when Cursor reports it
    #[serde(default)]
    pub duration_ms: Option<u64>,
}
