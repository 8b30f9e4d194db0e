//! Harness layer: the boundary between the agent runtime and the relay.
//!
//! Cursor spawns one process per hook event, writes the event as JSON to
//! stdin, and reads a single JSON acknowledgment from stdout. This module
//! owns both directions of that exchange: typed decoding of the incoming
//! event and the acknowledgment shape going back.

pub mod events;
pub mod response;

use anyhow::{Context, Result};
use events::cursor::{CursorEvent, UnknownPayload};
use serde::Deserialize;
use tracing::debug;

/// The CursorHarness - a pure translator for Cursor events
pub struct CursorHarness;

impl CursorHarness {
    /// Parse the raw hook event from stdin.
    ///
    /// Recognized kinds decode into their typed payloads. A kind this build
    /// does not know (or whose payload has drifted from the schema we
    /// expect) degrades to [`CursorEvent::Unknown`] as long as the common
    /// fields are present; only input that lacks even those is an error.
    pub fn parse_event(input: &str) -> Result<CursorEvent> {
        let raw: serde_json::Value =
            serde_json::from_str(input).context("hook event is not valid JSON")?;

        match CursorEvent::deserialize(&raw) {
            Ok(event) => Ok(event),
            Err(err) => {
                let fallback: UnknownPayload = serde_json::from_value(raw)
                    .context("hook event is missing the common Cursor fields")?;
                debug!(
                    kind = %fallback.kind,
                    error = %err,
                    "event did not match a known kind, degrading to unknown"
                );
                Ok(CursorEvent::Unknown(fallback))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_event() {
        let json = r#"{
            "hook_event_name": "afterAgentResponse",
            "conversation_id": "conv-1",
            "generation_id": "gen-1",
            "text": "done"
        }"#;

        let event = CursorHarness::parse_event(json).unwrap();
        assert_eq!(event.event_name(), "afterAgentResponse");
    }

    #[test]
    fn test_parse_unknown_kind_degrades() {
        let json = r#"{
            "hook_event_name": "afterSomethingNew",
            "conversation_id": "conv-1",
            "generation_id": "gen-1"
        }"#;

        let event = CursorHarness::parse_event(json).unwrap();
        assert_eq!(event.event_name(), "afterSomethingNew");
        assert!(matches!(event, CursorEvent::Unknown(_)));
    }

    #[test]
    fn test_parse_schema_drift_degrades() {
        // A known kind whose payload no longer matches: edits as an object
        let json = r#"{
            "hook_event_name": "afterFileEdit",
            "conversation_id": "conv-1",
            "generation_id": "gen-1",
            "file_path": "/p",
            "edits": {"not": "a list"}
        }"#;

        let event = CursorHarness::parse_event(json).unwrap();
        assert!(matches!(event, CursorEvent::Unknown(_)));
        assert_eq!(event.generation_id(), "gen-1");
    }

    #[test]
    fn test_parse_garbage_is_an_error() {
        assert!(CursorHarness::parse_event("not json").is_err());
        assert!(CursorHarness::parse_event(r#"{"hook_event_name": "stop"}"#).is_err());
    }
}
