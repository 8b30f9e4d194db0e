use serde::{Deserialize, Serialize};

use super::common::CommonCursorData;

/// Attachment included with a read-file event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadAttachment {
    #[serde(rename = "type")]
    pub attachment_type: String, // "file" or "rule"

    pub file_path: String,
}

/// Cursor's beforeReadFile hook event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeforeReadFilePayload {
    #[serde(flatten)]
    pub common: CommonCursorData,

    /// Absolute path to the file being read
    pub file_path: String,

    /// File content about to be attached
    #[serde(default)]
    pub content: Option<String>,

    /// Rules or files being included alongside
    #[serde(default)]
    pub attachments: Vec<ReadAttachment>,
}
