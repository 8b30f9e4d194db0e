//! Telemetry backend layer.
//!
//! The relay talks to Langfuse through a deliberately small capability set:
//! create-or-update a trace, open child spans and generations, record a
//! score, flush. Everything is buffered in process memory and leaves the
//! process only when [`langfuse::LangfuseClient::flush`] runs, after the
//! acknowledgment has already been written to stdout.
//!
//! Backend failure is a first-class state, not an exception path: a handle
//! is either `Live` (writes ingestion events into the client's buffer) or
//! `Degraded` (every operation succeeds silently and produces nothing). A
//! telemetry outage must never block or fail the host event.

pub mod config;
pub mod langfuse;

pub use config::{ConfigError, LangfuseConfig};
pub use langfuse::{HttpTransport, IngestionTransport, LangfuseClient};

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

/// One entry in an ingestion batch, as Langfuse's ingestion API expects it
#[derive(Debug, Clone, Serialize)]
pub struct IngestionEvent {
    /// Unique id of the ingestion event itself (not of the trace)
    pub id: String,

    #[serde(rename = "type")]
    pub event_type: &'static str,

    /// RFC3339 time at which the event was recorded locally
    pub timestamp: String,

    pub body: Value,
}

/// Buffer shared between the client and every live handle it hands out
pub(crate) type EventQueue = Arc<Mutex<Vec<IngestionEvent>>>;

/// Push one ingestion event onto the shared buffer.
///
/// Fails only when the buffer mutex is poisoned; callers in handle methods
/// absorb that with a log line rather than propagating.
pub(crate) fn enqueue(queue: &EventQueue, event_type: &'static str, body: Value) -> Result<()> {
    let event = IngestionEvent {
        id: Uuid::now_v7().to_string(),
        event_type,
        timestamp: Utc::now().to_rfc3339(),
        body,
    };
    let mut buffer = queue
        .lock()
        .map_err(|_| anyhow!("telemetry buffer poisoned"))?;
    buffer.push(event);
    Ok(())
}

fn body_json<T: Serialize>(body: &T) -> Result<Value> {
    serde_json::to_value(body).context("failed to serialize ingestion body")
}

fn absorb(op: &'static str, result: Result<()>) {
    if let Err(err) = result {
        warn!("dropping {op} telemetry: {err:#}");
    }
}

// ============================================================================
// Ingestion bodies
// ============================================================================

/// Display properties of the session a trace belongs to
#[derive(Debug, Clone, Serialize)]
pub struct SessionProperties {
    pub name: String,
}

/// Body of a trace create-or-update. All fields optional; Langfuse merges
/// events sharing a trace id, so repeated events of one run accumulate
/// into one trace.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_properties: Option<SessionProperties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Body shared by span and generation records
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationBody {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Body of a score record attached to a trace
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBody {
    pub name: String,

    pub value: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

// ============================================================================
// Handles
// ============================================================================

/// Capability to mutate one remote trace.
///
/// Owned by exactly one identity-cache entry and borrowed out per event;
/// never cloned. The `Degraded` variant stands in whenever the backend is
/// unavailable, so callers write telemetry unconditionally and outages
/// disappear here instead of propagating.
#[derive(Debug)]
pub enum TraceHandle {
    Live(LiveTrace),
    Degraded,
}

/// A handle bound to the client's shared buffer
#[derive(Debug)]
pub struct LiveTrace {
    queue: EventQueue,
    trace_id: String,
}

impl TraceHandle {
    pub(crate) fn live(queue: EventQueue, trace_id: String) -> Self {
        TraceHandle::Live(LiveTrace { queue, trace_id })
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, TraceHandle::Degraded)
    }

    /// Merge fields into the trace record
    pub fn update(&self, body: TraceBody) {
        let TraceHandle::Live(live) = self else {
            return;
        };
        absorb("trace-update", live.write_trace(&body));
    }

    /// Open a child generation (a model request/response exchange).
    ///
    /// The record is buffered immediately; call [`Observation::end`] to
    /// stamp an end time, or drop the observation to leave it open-ended.
    pub fn open_generation(&self, body: ObservationBody) -> Observation {
        self.open_observation(ObservationKind::Generation, body)
    }

    /// Open a child span (a discrete timed unit of work)
    pub fn open_span(&self, body: ObservationBody) -> Observation {
        self.open_observation(ObservationKind::Span, body)
    }

    /// Attach a score to the trace
    pub fn record_score(&self, score: ScoreBody) {
        let TraceHandle::Live(live) = self else {
            return;
        };
        absorb("score", live.write_score(&score));
    }

    fn open_observation(&self, kind: ObservationKind, body: ObservationBody) -> Observation {
        let TraceHandle::Live(live) = self else {
            return Observation::Degraded;
        };
        let id = Uuid::now_v7().to_string();
        absorb(kind.create_type(), live.write_observation(kind, &id, &body));
        Observation::Live(LiveObservation {
            queue: live.queue.clone(),
            id,
            kind,
        })
    }
}

impl LiveTrace {
    fn write_trace(&self, body: &TraceBody) -> Result<()> {
        let mut value = body_json(body)?;
        value["id"] = Value::String(self.trace_id.clone());
        value["timestamp"] = Value::String(Utc::now().to_rfc3339());
        enqueue(&self.queue, "trace-create", value)
    }

    fn write_observation(
        &self,
        kind: ObservationKind,
        id: &str,
        body: &ObservationBody,
    ) -> Result<()> {
        let mut value = body_json(body)?;
        value["id"] = Value::String(id.to_string());
        value["traceId"] = Value::String(self.trace_id.clone());
        value["startTime"] = Value::String(Utc::now().to_rfc3339());
        enqueue(&self.queue, kind.create_type(), value)
    }

    fn write_score(&self, score: &ScoreBody) -> Result<()> {
        let mut value = body_json(score)?;
        value["id"] = Value::String(Uuid::now_v7().to_string());
        value["traceId"] = Value::String(self.trace_id.clone());
        enqueue(&self.queue, "score-create", value)
    }
}

/// The two observation flavors Langfuse distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservationKind {
    Span,
    Generation,
}

impl ObservationKind {
    fn create_type(self) -> &'static str {
        match self {
            ObservationKind::Span => "span-create",
            ObservationKind::Generation => "generation-create",
        }
    }

    fn update_type(self) -> &'static str {
        match self {
            ObservationKind::Span => "span-update",
            ObservationKind::Generation => "generation-update",
        }
    }
}

/// A closable child record under a trace
#[derive(Debug)]
pub enum Observation {
    Live(LiveObservation),
    Degraded,
}

/// An open span or generation bound to the client's shared buffer
#[derive(Debug)]
pub struct LiveObservation {
    queue: EventQueue,
    id: String,
    kind: ObservationKind,
}

impl Observation {
    /// Close the observation, stamping its end time
    pub fn end(self) {
        let Observation::Live(live) = self else {
            return;
        };
        let body = serde_json::json!({
            "id": live.id,
            "endTime": Utc::now().to_rfc3339(),
        });
        absorb(
            live.kind.update_type(),
            enqueue(&live.queue, live.kind.update_type(), body),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue() -> EventQueue {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn drain(queue: &EventQueue) -> Vec<IngestionEvent> {
        std::mem::take(&mut *queue.lock().unwrap())
    }

    #[test]
    fn test_live_handle_buffers_updates() {
        let q = queue();
        let handle = TraceHandle::live(q.clone(), "trace-1".into());

        handle.update(TraceBody {
            input: Some(serde_json::json!("hello")),
            ..Default::default()
        });

        let events = drain(&q);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "trace-create");
        assert_eq!(events[0].body["id"], "trace-1");
        assert_eq!(events[0].body["input"], "hello");
    }

    #[test]
    fn test_span_open_and_end() {
        let q = queue();
        let handle = TraceHandle::live(q.clone(), "trace-1".into());

        let span = handle.open_span(ObservationBody {
            name: "Thinking".into(),
            output: Some(serde_json::json!("...")),
            ..Default::default()
        });
        span.end();

        let events = drain(&q);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, "span-create");
        assert_eq!(events[0].body["traceId"], "trace-1");
        assert!(events[0].body["startTime"].is_string());
        assert_eq!(events[1].event_type, "span-update");
        assert_eq!(events[1].body["id"], events[0].body["id"]);
        assert!(events[1].body["endTime"].is_string());
    }

    #[test]
    fn test_generation_left_open_has_no_update() {
        let q = queue();
        let handle = TraceHandle::live(q.clone(), "trace-1".into());

        let _generation = handle.open_generation(ObservationBody {
            name: "User Prompt".into(),
            model: Some("claude-4.5-sonnet".into()),
            ..Default::default()
        });

        let events = drain(&q);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "generation-create");
        assert_eq!(events[0].body["model"], "claude-4.5-sonnet");
    }

    #[test]
    fn test_degraded_handle_is_silent() {
        let handle = TraceHandle::Degraded;
        assert!(handle.is_degraded());

        handle.update(TraceBody::default());
        let span = handle.open_span(ObservationBody::default());
        span.end();
        handle.record_score(ScoreBody {
            name: "completion_status".into(),
            value: 1.0,
            comment: None,
        });
        // Nothing observable: no buffer exists to inspect, and none of the
        // calls may panic or error.
    }

    #[test]
    fn test_score_carries_trace_id() {
        let q = queue();
        let handle = TraceHandle::live(q.clone(), "trace-9".into());

        handle.record_score(ScoreBody {
            name: "completion_status".into(),
            value: 0.5,
            comment: Some("Status: aborted".into()),
        });

        let events = drain(&q);
        assert_eq!(events[0].event_type, "score-create");
        assert_eq!(events[0].body["traceId"], "trace-9");
        assert_eq!(events[0].body["value"], 0.5);
    }
}
