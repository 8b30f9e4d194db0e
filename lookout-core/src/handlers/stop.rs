use crate::backend::{ScoreBody, TraceHandle};
use crate::harness::events::cursor::StopPayload;
use crate::harness::response::HookResponse;

const SCORE_NAME: &str = "completion_status";

/// The terminal event: score the run by its final status and answer with
/// the empty object Cursor expects for stop.
pub(super) fn handle(trace: &TraceHandle, payload: &StopPayload) -> Option<HookResponse> {
    trace.record_score(ScoreBody {
        name: SCORE_NAME.into(),
        value: completion_score(&payload.status),
        comment: Some(format!("Status: {}", payload.status)),
    });

    Some(HookResponse::empty())
}

/// Fixed status → score table; anything unrecognized lands in the middle
fn completion_score(status: &str) -> f64 {
    match status {
        "completed" => 1.0,
        "aborted" => 0.5,
        "error" => 0.0,
        _ => 0.5,
    }
}
