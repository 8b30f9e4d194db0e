use serde::{Deserialize, Serialize};

use super::common::CommonCursorData;

/// Cursor's stop hook event
///
/// Fired when the agent loop ends. The terminal event of a run: it carries
/// the run status and is answered with an empty object rather than the
/// usual continue acknowledgment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopPayload {
    #[serde(flatten)]
    pub common: CommonCursorData,

    /// Final status of the agent loop: "completed", "aborted", or "error"
    #[serde(default)]
    pub status: String,
}
