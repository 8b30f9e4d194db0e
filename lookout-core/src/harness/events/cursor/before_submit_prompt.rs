use serde::{Deserialize, Serialize};

use super::common::CommonCursorData;

/// File or rule attachment included with a prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptAttachment {
    #[serde(rename = "type")]
    pub attachment_type: String, // "file" or "rule"

    #[serde(rename = "filePath")]
    pub file_path: String,
}

/// Cursor's beforeSubmitPrompt hook event
///
/// Fired right after the user hits send, before the backend request. This
/// is the originating event of a run and usually its most information-dense
/// payload: the prompt becomes the trace input and, when present, the trace
/// name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeforeSubmitPromptPayload {
    #[serde(flatten)]
    pub common: CommonCursorData,

    /// The user's prompt text
    pub prompt: String,

    /// Any file or rule attachments
    #[serde(default)]
    pub attachments: Vec<PromptAttachment>,
}
