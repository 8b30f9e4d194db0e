//! Acknowledgment shapes sent back to Cursor.
//!
//! Cursor reads exactly one JSON object from the hook's stdout. For an
//! observability hook the vocabulary is tiny: `{"continue": true}` lets the
//! run proceed, and the stop event is answered with `{}`. Nothing this
//! relay does may ever block the editor, so there is no deny shape at all.

use serde::{Deserialize, Serialize};

/// Acknowledgment returned to Cursor for a hook event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookResponse {
    /// Whether the agent run should proceed. Omitted entirely for terminal
    /// events, which expect an empty object.
    #[serde(
        rename = "continue",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub should_continue: Option<bool>,
}

impl HookResponse {
    /// The default acknowledgment: let the run proceed
    pub fn proceed() -> Self {
        Self {
            should_continue: Some(true),
        }
    }

    /// The terminal acknowledgment: an empty object
    pub fn empty() -> Self {
        Self {
            should_continue: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proceed_serializes_continue_true() {
        let json = serde_json::to_string(&HookResponse::proceed()).unwrap();
        assert_eq!(json, r#"{"continue":true}"#);
    }

    #[test]
    fn test_empty_serializes_empty_object() {
        let json = serde_json::to_string(&HookResponse::empty()).unwrap();
        assert_eq!(json, "{}");
    }
}
