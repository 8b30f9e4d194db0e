use serde::{Deserialize, Serialize};

use super::after_file_edit::FileEdit;
use super::common::CommonCursorData;

/// Cursor's afterTabFileEdit hook event
///
/// Fired after a Tab (autocomplete) edit lands. Carries the same shape as
/// [`super::AfterFileEditPayload`] but originates from the Tab feature, so
/// traces for it pick up the feature tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AfterTabFileEditPayload {
    #[serde(flatten)]
    pub common: CommonCursorData,

    /// Absolute path to the file that was edited
    pub file_path: String,

    /// Edit operations performed, if reported
    #[serde(default)]
    pub edits: Option<Vec<FileEdit>>,
}
