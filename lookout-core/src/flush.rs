//! Deadline-bounded telemetry flush.
//!
//! Runs strictly after the acknowledgment has been written to stdout. The
//! backend flush races a fixed deadline; whichever settles first wins, and
//! the deadline elapsing is a bounded-wait policy, not an error. The
//! identity cache is cleared unconditionally afterwards, so the outcome of
//! delivery can never leak state into a later event.

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, warn};

use crate::backend::LangfuseClient;
use crate::trace::TraceCache;

/// Longest the process will wait for buffered telemetry to leave
pub const FLUSH_DEADLINE: Duration = Duration::from_secs(5);

/// Pause between flush settling and process exit, letting in-flight writes
/// clear the network stack
pub const EXIT_GRACE: Duration = Duration::from_millis(200);

/// How the flush race settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushOutcome {
    /// The backend accepted the batch (or there was nothing to send)
    Completed,
    /// The backend rejected the batch; logged and abandoned
    Failed,
    /// The deadline won the race; delivery abandoned, not retried
    DeadlineElapsed,
}

/// Race a flush future against a deadline.
pub async fn flush_with_deadline(
    flush: impl Future<Output = Result<()>>,
    deadline: Duration,
) -> FlushOutcome {
    match tokio::time::timeout(deadline, flush).await {
        Ok(Ok(())) => {
            debug!("telemetry flush completed");
            FlushOutcome::Completed
        }
        Ok(Err(err)) => {
            warn!("telemetry flush failed: {err:#}");
            FlushOutcome::Failed
        }
        Err(_) => {
            warn!("telemetry flush still pending after {deadline:?}, abandoning delivery");
            FlushOutcome::DeadlineElapsed
        }
    }
}

/// Flush buffered telemetry under the standard deadline, then clear the
/// identity cache regardless of how delivery went.
pub async fn flush_and_reset(
    client: Option<&LangfuseClient>,
    cache: &mut TraceCache,
) -> FlushOutcome {
    let outcome = match client {
        Some(client) => flush_with_deadline(client.flush(), FLUSH_DEADLINE).await,
        None => FlushOutcome::Completed,
    };
    cache.clear();
    outcome
}
