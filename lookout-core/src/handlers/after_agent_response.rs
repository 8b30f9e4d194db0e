use serde_json::json;

use crate::backend::{TraceBody, TraceHandle};
use crate::harness::events::cursor::AfterAgentResponsePayload;
use crate::harness::response::HookResponse;

/// The assistant's final message becomes the trace output.
pub(super) fn handle(
    trace: &TraceHandle,
    payload: &AfterAgentResponsePayload,
) -> Option<HookResponse> {
    trace.update(TraceBody {
        output: Some(json!(payload.text)),
        ..Default::default()
    });
    None
}
