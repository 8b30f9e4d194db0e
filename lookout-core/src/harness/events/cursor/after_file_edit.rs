use serde::{Deserialize, Serialize};

use super::common::CommonCursorData;

/// A single search/replace edit operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileEdit {
    #[serde(default)]
    pub old_string: String,

    #[serde(default)]
    pub new_string: String,
}

/// Cursor's afterFileEdit hook event
///
/// Fired after the agent edits a file. The edit list is optional: some
/// Cursor builds omit it entirely, and the edit statistics degrade to zero
/// rather than rejecting the event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AfterFileEditPayload {
    #[serde(flatten)]
    pub common: CommonCursorData,

    /// Absolute path to the file that was edited
    pub file_path: String,

    /// Edit operations performed, if reported
    #[serde(default)]
    pub edits: Option<Vec<FileEdit>>,
}
