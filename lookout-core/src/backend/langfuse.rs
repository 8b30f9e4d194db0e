//! Buffered Langfuse ingestion client.
//!
//! Mirrors the posture of Langfuse's own SDKs: every trace, span,
//! generation, and score mutation is appended to an in-memory buffer and
//! the network is touched exactly once, when `flush()` posts the whole
//! batch to the ingestion endpoint. Delivery is best-effort: a failed
//! batch is logged and dropped, never retried, because the process is
//! about to exit anyway.
//!
//! The wire format is the public ingestion API: `POST
//! /api/public/ingestion` with basic auth (public key as username, secret
//! key as password) and a `{batch: [...], metadata: {...}}` payload. A 207
//! response reports per-event failures without failing the batch.

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::config::LangfuseConfig;
use super::{enqueue, EventQueue, IngestionEvent, TraceBody, TraceHandle};

/// Transport seam between the buffered client and the actual network.
///
/// Production uses [`HttpTransport`]; tests swap in recording or stalling
/// doubles to observe batches and exercise the flush deadline.
#[async_trait]
pub trait IngestionTransport: Send + Sync {
    /// Deliver one batch of ingestion events
    async fn send(&self, batch: &[IngestionEvent]) -> Result<()>;

    /// Transport identifier for logging
    fn name(&self) -> &'static str;
}

/// HTTP transport against a real Langfuse instance
pub struct HttpTransport {
    http: reqwest::Client,
    config: LangfuseConfig,
}

impl HttpTransport {
    pub fn new(config: LangfuseConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("failed to create HTTP client")?;
        Ok(Self { http, config })
    }

    /// Probe the instance's health endpoint. Used by `lookout check`,
    /// never on the hook path.
    pub async fn health_check(&self) -> Result<String> {
        let response = self
            .http
            .get(self.config.health_url())
            .send()
            .await
            .context("health request failed")?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(anyhow!("health endpoint returned {status}: {body}"));
        }
        Ok(body)
    }
}

#[async_trait]
impl IngestionTransport for HttpTransport {
    async fn send(&self, batch: &[IngestionEvent]) -> Result<()> {
        let payload = json!({
            "batch": batch,
            "metadata": {
                "sdk_name": "lookout",
                "sdk_version": env!("CARGO_PKG_VERSION"),
            },
        });

        let response = self
            .http
            .post(self.config.ingestion_url())
            .basic_auth(&self.config.public_key, Some(&self.config.secret_key))
            .json(&payload)
            .send()
            .await
            .context("failed to send ingestion batch")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("ingestion endpoint returned {status}: {body}"));
        }

        // 207: the batch was accepted but individual events may have been
        // rejected; surface those in the log and move on.
        if status == reqwest::StatusCode::MULTI_STATUS {
            if let Ok(body) = response.json::<Value>().await {
                if let Some(errors) = body.get("errors").and_then(|e| e.as_array()) {
                    if !errors.is_empty() {
                        warn!("ingestion rejected {} event(s): {errors:?}", errors.len());
                    }
                }
            }
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "langfuse-http"
    }
}

/// Buffered client for one Langfuse project.
///
/// Constructed at most once per process. Handles returned by [`trace`]
/// share its buffer; nothing leaves the process until [`flush`].
///
/// [`trace`]: LangfuseClient::trace
/// [`flush`]: LangfuseClient::flush
pub struct LangfuseClient {
    transport: Box<dyn IngestionTransport>,
    queue: EventQueue,
}

impl LangfuseClient {
    /// Build a client from environment configuration
    pub fn from_env() -> Result<Self> {
        let config = LangfuseConfig::from_env()?;
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(Box::new(transport)))
    }

    /// Build a client over an arbitrary transport
    pub fn with_transport(transport: Box<dyn IngestionTransport>) -> Self {
        Self {
            transport,
            queue: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create-or-update the trace with the given id and hand out a live
    /// handle bound to this client's buffer
    pub fn trace(&self, trace_id: &str, body: TraceBody) -> Result<TraceHandle> {
        let mut value =
            serde_json::to_value(&body).context("failed to serialize trace body")?;
        value["id"] = Value::String(trace_id.to_string());
        value["timestamp"] = Value::String(chrono::Utc::now().to_rfc3339());
        enqueue(&self.queue, "trace-create", value)?;
        Ok(TraceHandle::live(self.queue.clone(), trace_id.to_string()))
    }

    /// Number of ingestion events waiting for the next flush
    pub fn pending(&self) -> usize {
        self.queue.lock().map(|q| q.len()).unwrap_or(0)
    }

    /// Drain the buffer and deliver it as one batch.
    ///
    /// An empty buffer sends nothing. Errors propagate to the flush
    /// coordinator, which logs them; the drained events are gone either
    /// way (best-effort delivery, no retry).
    pub async fn flush(&self) -> Result<()> {
        let batch = {
            let mut buffer = self
                .queue
                .lock()
                .map_err(|_| anyhow!("telemetry buffer poisoned"))?;
            std::mem::take(&mut *buffer)
        };

        if batch.is_empty() {
            debug!("nothing buffered, skipping flush");
            return Ok(());
        }

        debug!(
            "flushing {} ingestion event(s) via {}",
            batch.len(),
            self.transport.name()
        );
        self.transport.send(&batch).await
    }
}
