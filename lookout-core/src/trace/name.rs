//! Trace naming policy.
//!
//! The first event of a run is usually the most information-dense one (the
//! human's request); everything after it is an artifact of the run. The
//! policy therefore writes a name eagerly when real text is available,
//! falls back to a system label only for events that start a run, and once
//! a name is assigned never overwrites it. A continuation event may still
//! supply the name later if the only earlier events were name-less system
//! artifacts.

use crate::harness::events::cursor::CursorEvent;
use crate::trace::cache::TraceEntry;

/// Prompts are clipped to this many characters before the ellipsis marker
const MAX_NAME_LEN: usize = 60;

/// Decide whether this event should (re)write the trace's display name.
///
/// Rules, in order:
/// 1. First event for the generation: name it if it carries prompt text,
///    or if its kind can start a run.
/// 2. Name already assigned: never again.
/// 3. Known generation, still unnamed: name it once prompt text shows up.
pub fn should_assign_name(
    cached: Option<&TraceEntry>,
    has_prompt: bool,
    is_continuation: bool,
) -> bool {
    match cached {
        None => has_prompt || !is_continuation,
        Some(entry) if entry.name_assigned => false,
        Some(_) => has_prompt,
    }
}

/// Derive the display name for a trace from an event.
///
/// Prompt text wins: internal whitespace runs collapse to single spaces
/// and the result is clipped to 60 characters plus an ellipsis marker.
/// Events without text get a bracketed system label instead.
pub fn trace_name(event: &CursorEvent) -> String {
    match event.prompt_text() {
        Some(prompt) => {
            let cleaned = prompt.split_whitespace().collect::<Vec<_>>().join(" ");
            truncate(&cleaned, MAX_NAME_LEN)
        }
        None => format!("[SYSTEM] {}", event.event_name()),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max_chars).collect();
    clipped.push_str("...");
    clipped
}
