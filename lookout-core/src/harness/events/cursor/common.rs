use serde::{Deserialize, Serialize};

/// Fields shared by every Cursor hook event.
///
/// `hook_event_name` is the enum tag on [`super::CursorEvent`] and therefore
/// not repeated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonCursorData {
    /// Identifier for the whole conversation (groups many generations)
    pub conversation_id: String,

    /// Identifier for this specific generation; the correlation key that
    /// groups all events of one agent run onto one trace
    pub generation_id: String,

    /// Workspace root paths open in the editor
    #[serde(default)]
    pub workspace_roots: Vec<String>,

    /// Model configured for this generation (e.g. "claude-4.5-sonnet")
    #[serde(default)]
    pub model: Option<String>,

    /// Cursor application version (e.g. "1.7.2")
    #[serde(default)]
    pub cursor_version: Option<String>,

    /// Email address of the authenticated user, if available
    #[serde(default)]
    pub user_email: Option<String>,

    /// Human-chosen title of the chat, when the user named it
    #[serde(default)]
    pub chat_title: Option<String>,

    /// Alternative title field some Cursor builds emit instead
    #[serde(default)]
    pub conversation_title: Option<String>,

    /// Free-form metadata bag; older builds tuck the title in here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl CommonCursorData {
    /// Best available human-readable title for this chat.
    ///
    /// Checks the dedicated fields first, then the metadata bag, matching
    /// the places different Cursor builds have put it.
    pub fn chat_title(&self) -> Option<&str> {
        fn present(s: Option<&str>) -> Option<&str> {
            s.filter(|s| !s.is_empty())
        }

        present(self.chat_title.as_deref())
            .or_else(|| present(self.conversation_title.as_deref()))
            .or_else(|| {
                present(
                    self.metadata
                        .as_ref()
                        .and_then(|m| m.get("title"))
                        .and_then(|t| t.as_str()),
                )
            })
    }
}
