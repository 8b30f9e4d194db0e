//! Shared helpers for lookout-core integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use lookout_core::backend::{IngestionEvent, IngestionTransport, LangfuseClient};
use lookout_core::harness::events::cursor::CursorEvent;
use lookout_core::harness::CursorHarness;

/// Batches a recording transport has delivered
pub type SentBatches = Arc<Mutex<Vec<Vec<IngestionEvent>>>>;

/// Transport double that records every batch it is handed
pub struct RecordingTransport {
    batches: SentBatches,
}

#[async_trait]
impl IngestionTransport for RecordingTransport {
    async fn send(&self, batch: &[IngestionEvent]) -> Result<()> {
        self.batches.lock().unwrap().push(batch.to_vec());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// A client whose delivered batches can be inspected afterwards
pub fn recording_client() -> (LangfuseClient, SentBatches) {
    let batches: SentBatches = Arc::new(Mutex::new(Vec::new()));
    let client = LangfuseClient::with_transport(Box::new(RecordingTransport {
        batches: batches.clone(),
    }));
    (client, batches)
}

/// Transport double whose send never settles
pub struct StallingTransport;

#[async_trait]
impl IngestionTransport for StallingTransport {
    async fn send(&self, _batch: &[IngestionEvent]) -> Result<()> {
        std::future::pending::<Result<()>>().await
    }

    fn name(&self) -> &'static str {
        "stalling"
    }
}

/// Transport double that rejects every batch
pub struct FailingTransport;

#[async_trait]
impl IngestionTransport for FailingTransport {
    async fn send(&self, _batch: &[IngestionEvent]) -> Result<()> {
        anyhow::bail!("ingestion endpoint returned 503")
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

pub fn parse(json: &str) -> CursorEvent {
    CursorHarness::parse_event(json).expect("test event must parse")
}

pub fn prompt_event(generation_id: &str, prompt: &str) -> CursorEvent {
    parse(&format!(
        r#"{{
            "hook_event_name": "beforeSubmitPrompt",
            "conversation_id": "conv-test",
            "generation_id": "{generation_id}",
            "workspace_roots": ["/home/dev/demo"],
            "model": "claude-4.5-sonnet",
            "cursor_version": "1.7.2",
            "prompt": "{prompt}"
        }}"#
    ))
}

pub fn thought_event(generation_id: &str, text: &str) -> CursorEvent {
    parse(&format!(
        r#"{{
            "hook_event_name": "afterAgentThought",
            "conversation_id": "conv-test",
            "generation_id": "{generation_id}",
            "text": "{text}",
            "duration_ms": 1500
        }}"#
    ))
}

pub fn response_event(generation_id: &str, text: &str) -> CursorEvent {
    parse(&format!(
        r#"{{
            "hook_event_name": "afterAgentResponse",
            "conversation_id": "conv-test",
            "generation_id": "{generation_id}",
            "text": "{text}"
        }}"#
    ))
}

pub fn stop_event(generation_id: &str, status: &str) -> CursorEvent {
    parse(&format!(
        r#"{{
            "hook_event_name": "stop",
            "conversation_id": "conv-test",
            "generation_id": "{generation_id}",
            "status": "{status}"
        }}"#
    ))
}

/// All trace-create bodies across every delivered batch, in send order
pub fn trace_bodies(batches: &SentBatches) -> Vec<serde_json::Value> {
    batches
        .lock()
        .unwrap()
        .iter()
        .flatten()
        .filter(|event| event.event_type == "trace-create")
        .map(|event| event.body.clone())
        .collect()
}

/// All event types across every delivered batch, in send order
pub fn event_types(batches: &SentBatches) -> Vec<String> {
    batches
        .lock()
        .unwrap()
        .iter()
        .flatten()
        .map(|event| event.event_type.to_string())
        .collect()
}
