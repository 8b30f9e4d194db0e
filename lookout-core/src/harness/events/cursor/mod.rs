//! Cursor hook events
//!
//! Event structures for Cursor's hooks system. Field names use snake_case
//! to match Cursor's JSON format exactly; the `hook_event_name` field is
//! the enum tag.
//!
//! Unlike a policy engine, an observability relay must accept every event
//! the editor can emit, including kinds added after this build shipped.
//! Kinds that fail typed decoding are degraded to [`CursorEvent::Unknown`]
//! by the harness instead of rejecting the input.

mod after_agent_response;
mod after_agent_thought;
mod after_file_edit;
mod after_mcp_execution;
mod after_shell_execution;
mod after_tab_file_edit;
mod before_mcp_execution;
mod before_read_file;
mod before_shell_execution;
mod before_submit_prompt;
mod common;
mod stop;
mod unknown;

pub use after_agent_response::AfterAgentResponsePayload;
pub use after_agent_thought::AfterAgentThoughtPayload;
pub use after_file_edit::{AfterFileEditPayload, FileEdit};
pub use after_mcp_execution::AfterMcpExecutionPayload;
pub use after_shell_execution::AfterShellExecutionPayload;
pub use after_tab_file_edit::AfterTabFileEditPayload;
pub use before_mcp_execution::BeforeMcpExecutionPayload;
pub use before_read_file::{BeforeReadFilePayload, ReadAttachment};
pub use before_shell_execution::BeforeShellExecutionPayload;
pub use before_submit_prompt::{BeforeSubmitPromptPayload, PromptAttachment};
pub use common::CommonCursorData;
pub use stop::StopPayload;
pub use unknown::UnknownPayload;

use serde::{Deserialize, Serialize};

/// All Cursor hook events this relay understands, plus a fallback for the
/// ones it does not
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "hook_event_name", rename_all = "camelCase")]
pub enum CursorEvent {
    BeforeSubmitPrompt(BeforeSubmitPromptPayload),
    AfterAgentResponse(AfterAgentResponsePayload),
    AfterAgentThought(AfterAgentThoughtPayload),
    AfterFileEdit(AfterFileEditPayload),
    AfterTabFileEdit(AfterTabFileEditPayload),
    BeforeShellExecution(BeforeShellExecutionPayload),
    AfterShellExecution(AfterShellExecutionPayload),
    BeforeMCPExecution(BeforeMcpExecutionPayload),
    AfterMCPExecution(AfterMcpExecutionPayload),
    BeforeReadFile(BeforeReadFilePayload),
    Stop(StopPayload),
    /// Any kind this build does not recognize; produced by the harness
    /// fallback, never by the tagged decoder itself
    Unknown(UnknownPayload),
}

impl CursorEvent {
    /// The event kind as Cursor spells it
    pub fn event_name(&self) -> &str {
        match self {
            CursorEvent::BeforeSubmitPrompt(_) => "beforeSubmitPrompt",
            CursorEvent::AfterAgentResponse(_) => "afterAgentResponse",
            CursorEvent::AfterAgentThought(_) => "afterAgentThought",
            CursorEvent::AfterFileEdit(_) => "afterFileEdit",
            CursorEvent::AfterTabFileEdit(_) => "afterTabFileEdit",
            CursorEvent::BeforeShellExecution(_) => "beforeShellExecution",
            CursorEvent::AfterShellExecution(_) => "afterShellExecution",
            CursorEvent::BeforeMCPExecution(_) => "beforeMCPExecution",
            CursorEvent::AfterMCPExecution(_) => "afterMCPExecution",
            CursorEvent::BeforeReadFile(_) => "beforeReadFile",
            CursorEvent::Stop(_) => "stop",
            CursorEvent::Unknown(p) => &p.kind,
        }
    }

    /// Fields shared by every event kind
    pub fn common(&self) -> &CommonCursorData {
        match self {
            CursorEvent::BeforeSubmitPrompt(p) => &p.common,
            CursorEvent::AfterAgentResponse(p) => &p.common,
            CursorEvent::AfterAgentThought(p) => &p.common,
            CursorEvent::AfterFileEdit(p) => &p.common,
            CursorEvent::AfterTabFileEdit(p) => &p.common,
            CursorEvent::BeforeShellExecution(p) => &p.common,
            CursorEvent::AfterShellExecution(p) => &p.common,
            CursorEvent::BeforeMCPExecution(p) => &p.common,
            CursorEvent::AfterMCPExecution(p) => &p.common,
            CursorEvent::BeforeReadFile(p) => &p.common,
            CursorEvent::Stop(p) => &p.common,
            CursorEvent::Unknown(p) => &p.common,
        }
    }

    /// The correlation key grouping all events of one agent run
    pub fn generation_id(&self) -> &str {
        &self.common().generation_id
    }

    /// Human-originated prompt text, when this event carries any.
    ///
    /// Empty strings do not count: a name derived from them would be
    /// worthless, and the name policy treats "no text" and "blank text"
    /// the same way.
    pub fn prompt_text(&self) -> Option<&str> {
        let text = match self {
            CursorEvent::BeforeSubmitPrompt(p) => Some(p.prompt.as_str()),
            CursorEvent::Unknown(p) => p.prompt.as_deref().or(p.input.as_deref()),
            _ => None,
        };
        text.filter(|t| !t.is_empty())
    }

    /// Whether this kind follows an originating event rather than starting
    /// a run. Continuation kinds never name a trace on their own.
    pub fn is_continuation(&self) -> bool {
        matches!(
            self,
            CursorEvent::AfterAgentThought(_)
                | CursorEvent::AfterAgentResponse(_)
                | CursorEvent::AfterFileEdit(_)
                | CursorEvent::AfterMCPExecution(_)
                | CursorEvent::AfterShellExecution(_)
                | CursorEvent::AfterTabFileEdit(_)
                | CursorEvent::Stop(_)
        )
    }
}
