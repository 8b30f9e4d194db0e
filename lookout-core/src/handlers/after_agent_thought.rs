use serde_json::json;

use super::format_duration;
use crate::backend::{ObservationBody, TraceHandle};
use crate::harness::events::cursor::AfterAgentThoughtPayload;
use crate::harness::response::HookResponse;

/// A completed thinking block: recorded as an immediately closed span with
/// the thought text as output.
pub(super) fn handle(
    trace: &TraceHandle,
    payload: &AfterAgentThoughtPayload,
) -> Option<HookResponse> {
    let metadata = payload
        .duration_ms
        .map(|ms| json!({ "duration": format_duration(ms) }));

    trace
        .open_span(ObservationBody {
            name: "Thinking".into(),
            output: Some(json!(payload.text)),
            metadata,
            ..Default::default()
        })
        .end();

    None
}
