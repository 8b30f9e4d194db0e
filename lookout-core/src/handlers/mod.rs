//! Per-kind event handlers.
//!
//! Each handler records one event's content onto the resolved trace, as
//! a trace update, a child span, or a child generation, and may
//! override the acknowledgment sent back to Cursor. `None` means the
//! default `{"continue": true}` stands.
//!
//! Kinds without a handler arm (shell, MCP, read-file, tab edits, unknown
//! kinds) still participate in the trace lifecycle (they can create or
//! merge the trace) but record nothing of their own.

mod after_agent_response;
mod after_agent_thought;
mod after_file_edit;
mod before_submit_prompt;
mod stop;

pub use after_file_edit::{calculate_edit_stats, EditStats};

use crate::backend::TraceHandle;
use crate::harness::events::cursor::CursorEvent;
use crate::harness::response::HookResponse;

/// Dispatch an event to its handler.
///
/// Exhaustive over the event vocabulary; the pass-through arm is a
/// deliberate decision per kind, not a missing-key fallback.
pub fn route_event(event: &CursorEvent, trace: &TraceHandle) -> Option<HookResponse> {
    match event {
        CursorEvent::BeforeSubmitPrompt(payload) => before_submit_prompt::handle(trace, payload),
        CursorEvent::AfterAgentResponse(payload) => after_agent_response::handle(trace, payload),
        CursorEvent::AfterAgentThought(payload) => after_agent_thought::handle(trace, payload),
        CursorEvent::AfterFileEdit(payload) => after_file_edit::handle(trace, payload),
        CursorEvent::Stop(payload) => stop::handle(trace, payload),
        CursorEvent::AfterTabFileEdit(_)
        | CursorEvent::BeforeShellExecution(_)
        | CursorEvent::AfterShellExecution(_)
        | CursorEvent::BeforeMCPExecution(_)
        | CursorEvent::AfterMCPExecution(_)
        | CursorEvent::BeforeReadFile(_)
        | CursorEvent::Unknown(_) => None,
    }
}

/// Render a millisecond count the way humans read durations
pub(crate) fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{:.1}s", ms as f64 / 1000.0)
    }
}
