use serde::{Deserialize, Serialize};

use super::common::CommonCursorData;

/// Cursor's afterAgentResponse hook event
///
/// Fired once the agent has completed an assistant message. The text is
/// recorded as the trace output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AfterAgentResponsePayload {
    #[serde(flatten)]
    pub common: CommonCursorData,

    /// The assistant's final text response
    pub text: String,
}
