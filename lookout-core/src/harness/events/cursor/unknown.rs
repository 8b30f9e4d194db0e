use serde::{Deserialize, Serialize};

use super::common::CommonCursorData;

/// Fallback payload for hook kinds this build does not recognize.
///
/// Built by the harness when tagged decoding fails; keeps whatever common
/// fields the event carried so the trace lifecycle still works, and any
/// free-form text fields so the name policy can still see a prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnknownPayload {
    /// The kind name as Cursor sent it
    #[serde(rename = "hook_event_name", default, skip_serializing)]
    pub kind: String,

    #[serde(flatten)]
    pub common: CommonCursorData,

    /// Prompt text, if the unknown kind carries one
    #[serde(default)]
    pub prompt: Option<String>,

    /// Alternate text field some kinds use instead of `prompt`
    #[serde(default)]
    pub input: Option<String>,
}
