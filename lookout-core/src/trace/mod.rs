//! Trace identity and lifecycle.
//!
//! One agent run (one generation id) maps to exactly one backend trace.
//! This module decides which event creates the trace, which events merge
//! into it, and when the trace may be named. All backend failure modes
//! collapse into the degraded handle here; nothing past this point can
//! fail the host event.

pub mod cache;
pub mod name;
pub mod session;

pub use cache::{TraceCache, TraceEntry};

use serde_json::json;
use tracing::warn;

use crate::backend::{LangfuseClient, SessionProperties, TraceBody, TraceHandle};
use crate::harness::events::cursor::CursorEvent;

/// Resolve the trace handle for an event's generation.
///
/// First sight of a generation id creates the trace and caches its handle;
/// later events merge their session/user/tag metadata through that same
/// handle. The display name is attached only when the naming policy says
/// so. Every failure path (no client, trace creation failure) borrows
/// the degraded handle instead of surfacing an error, and never mutates
/// the cache.
pub fn get_or_create_trace<'a>(
    client: Option<&LangfuseClient>,
    cache: &'a mut TraceCache,
    event: &CursorEvent,
) -> &'a TraceHandle {
    static DEGRADED: TraceHandle = TraceHandle::Degraded;

    let Some(client) = client else {
        return &DEGRADED;
    };

    let common = event.common();
    let generation_id = common.generation_id.clone();
    let chat_title = common.chat_title();

    let has_prompt = event.prompt_text().is_some();
    let assign_name = name::should_assign_name(
        cache.get(&generation_id),
        has_prompt,
        event.is_continuation(),
    );

    let mut metadata = serde_json::Map::new();
    if let Some(version) = &common.cursor_version {
        metadata.insert("cursor_version".into(), json!(version));
    }
    if let Some(model) = &common.model {
        metadata.insert("model".into(), json!(model));
    }
    metadata.insert("hook".into(), json!(event.event_name()));

    let body = TraceBody {
        name: assign_name.then(|| name::trace_name(event)),
        session_id: Some(session::session_key(
            &common.workspace_roots,
            &common.conversation_id,
            chat_title,
        )),
        session_properties: chat_title.map(|title| SessionProperties {
            name: title.to_string(),
        }),
        user_id: common.user_email.clone(),
        metadata: Some(metadata.into()),
        tags: Some(session::derive_tags(
            event.event_name(),
            common.model.as_deref(),
        )),
        ..Default::default()
    };

    if cache.get(&generation_id).is_none() {
        return match client.trace(&generation_id, body) {
            Ok(handle) => {
                let entry = cache.insert(generation_id, handle, assign_name);
                &entry.handle
            }
            Err(err) => {
                warn!("trace creation failed, continuing without telemetry: {err:#}");
                &DEGRADED
            }
        };
    }

    // Known generation: merge through the one handle it already owns
    if assign_name {
        cache.mark_name_assigned(&generation_id);
    }
    match cache.get(&generation_id) {
        Some(entry) => {
            entry.handle.update(body);
            &entry.handle
        }
        // Unreachable single-threaded; degrade rather than panic
        None => &DEGRADED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::CursorHarness;

    fn prompt_event(generation: &str, prompt: &str) -> CursorEvent {
        CursorHarness::parse_event(&format!(
            r#"{{
                "hook_event_name": "beforeSubmitPrompt",
                "conversation_id": "conv-1",
                "generation_id": "{generation}",
                "workspace_roots": ["/home/dev/demo"],
                "model": "claude-4.5-sonnet",
                "prompt": "{prompt}"
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_no_client_degrades_without_caching() {
        let mut cache = TraceCache::new();
        let event = prompt_event("gen-1", "hello");

        let handle = get_or_create_trace(None, &mut cache, &event);
        assert!(handle.is_degraded());
        assert!(cache.is_empty());
    }
}
