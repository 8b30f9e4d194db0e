//! Per-process session context.
//!
//! Owns the two pieces of state the trace lifecycle needs, the backend
//! client and the identity cache, and threads them into the factory,
//! router, and flush coordinator. Constructed once by the process entry
//! point; there are no module-level singletons anywhere in this crate.

use tracing::warn;

use crate::backend::{LangfuseClient, TraceHandle};
use crate::flush::{self, FlushOutcome};
use crate::handlers;
use crate::harness::events::cursor::CursorEvent;
use crate::harness::response::HookResponse;
use crate::trace::{self, TraceCache};

pub struct HookContext {
    client: Option<LangfuseClient>,
    cache: TraceCache,
}

impl HookContext {
    /// Build the context, constructing the backend client at most once.
    ///
    /// A client that cannot be built (missing keys, HTTP client setup
    /// failure) leaves the whole process in degraded mode: every event
    /// still gets its acknowledgment, and the failure exists only in the
    /// logs.
    pub fn initialize() -> Self {
        let client = match LangfuseClient::from_env() {
            Ok(client) => Some(client),
            Err(err) => {
                warn!("telemetry disabled for this process: {err:#}");
                None
            }
        };
        Self::with_client(client)
    }

    /// Build the context around an explicit client (or none, for a
    /// deliberately degraded context)
    pub fn with_client(client: Option<LangfuseClient>) -> Self {
        Self {
            client,
            cache: TraceCache::new(),
        }
    }

    /// Whether this process runs without a backend
    pub fn is_degraded(&self) -> bool {
        self.client.is_none()
    }

    pub fn cached_traces(&self) -> usize {
        self.cache.len()
    }

    /// Resolve the trace handle for an event (creating the trace on first
    /// sight of its generation id)
    pub fn resolve_trace(&mut self, event: &CursorEvent) -> &TraceHandle {
        trace::get_or_create_trace(self.client.as_ref(), &mut self.cache, event)
    }

    /// Process one event end to end: resolve its trace, run its handler,
    /// and produce the acknowledgment for the caller. Telemetry trouble
    /// never surfaces here; only a handler can override the default.
    pub fn handle_event(&mut self, event: &CursorEvent) -> HookResponse {
        let handle = self.resolve_trace(event);
        handlers::route_event(event, handle).unwrap_or_else(HookResponse::proceed)
    }

    /// Flush buffered telemetry under the standard deadline and clear the
    /// identity cache. Call only after the acknowledgment has been
    /// emitted.
    pub async fn flush_and_reset(&mut self) -> FlushOutcome {
        flush::flush_and_reset(self.client.as_ref(), &mut self.cache).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::CursorHarness;

    fn event(json: &str) -> CursorEvent {
        CursorHarness::parse_event(json).unwrap()
    }

    #[test]
    fn test_degraded_context_still_acknowledges() {
        let mut ctx = HookContext::with_client(None);
        assert!(ctx.is_degraded());

        let prompt = event(
            r#"{
                "hook_event_name": "beforeSubmitPrompt",
                "conversation_id": "c",
                "generation_id": "g",
                "prompt": "hello"
            }"#,
        );
        assert_eq!(ctx.handle_event(&prompt), HookResponse::proceed());

        let stop = event(
            r#"{
                "hook_event_name": "stop",
                "conversation_id": "c",
                "generation_id": "g",
                "status": "completed"
            }"#,
        );
        assert_eq!(ctx.handle_event(&stop), HookResponse::empty());

        // Degraded resolution caches nothing
        assert_eq!(ctx.cached_traces(), 0);
    }
}
