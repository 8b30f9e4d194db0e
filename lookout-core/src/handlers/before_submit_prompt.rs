use serde_json::json;

use crate::backend::{ObservationBody, TraceBody, TraceHandle};
use crate::harness::events::cursor::BeforeSubmitPromptPayload;
use crate::harness::response::HookResponse;

/// The originating event of a run: the prompt becomes the trace input and
/// a child generation records the request to the model. The generation is
/// left open; the model's answer arrives in a later process.
pub(super) fn handle(
    trace: &TraceHandle,
    payload: &BeforeSubmitPromptPayload,
) -> Option<HookResponse> {
    trace.update(TraceBody {
        input: Some(json!(payload.prompt)),
        ..Default::default()
    });

    trace.open_generation(ObservationBody {
        name: "User Prompt".into(),
        input: Some(json!(payload.prompt)),
        model: payload.common.model.clone(),
        ..Default::default()
    });

    Some(HookResponse::proceed())
}
