//! Trace naming lifecycle across event sequences sharing one generation.
//!
//! The property under test: name assignment is monotonic. A trace is named
//! at most once per informative transition: an originating prompt names
//! it immediately, system artifacts name it only when they start the run,
//! and once named it stays named no matter what arrives later.

mod common;

use common::{prompt_event, recording_client, response_event, stop_event, thought_event};
use lookout_core::context::HookContext;

fn named_bodies(bodies: &[serde_json::Value]) -> Vec<String> {
    bodies
        .iter()
        .filter_map(|body| body.get("name"))
        .filter_map(|name| name.as_str())
        .map(String::from)
        .collect()
}

#[tokio::test]
async fn prompt_names_once_and_later_events_never_rename() {
    let (client, batches) = recording_client();
    let mut ctx = HookContext::with_client(Some(client));

    ctx.handle_event(&prompt_event("gen-1", "fix the login bug"));
    ctx.handle_event(&thought_event("gen-1", "hmm"));
    ctx.handle_event(&response_event("gen-1", "done"));
    ctx.handle_event(&stop_event("gen-1", "completed"));
    ctx.flush_and_reset().await;

    let bodies = common::trace_bodies(&batches);
    // Every event touched the same trace
    assert!(bodies.iter().all(|b| b["id"] == "gen-1"));

    let names = named_bodies(&bodies);
    assert_eq!(names, vec!["fix the login bug"]);
}

#[tokio::test]
async fn late_prompt_fills_name_left_open_by_artifacts() {
    let (client, batches) = recording_client();
    let mut ctx = HookContext::with_client(Some(client));

    // A continuation artifact arrives first: no name yet
    ctx.handle_event(&thought_event("gen-2", "warming up"));
    // The prompt shows up late and supplies the missing name
    ctx.handle_event(&prompt_event("gen-2", "add dark mode"));
    // A second prompt must not rename
    ctx.handle_event(&prompt_event("gen-2", "completely different"));
    ctx.flush_and_reset().await;

    let names = named_bodies(&common::trace_bodies(&batches));
    assert_eq!(names, vec!["add dark mode"]);
}

#[tokio::test]
async fn run_starting_artifact_gets_a_system_name() {
    let (client, batches) = recording_client();
    let mut ctx = HookContext::with_client(Some(client));

    let shell = common::parse(
        r#"{
            "hook_event_name": "beforeShellExecution",
            "conversation_id": "conv-test",
            "generation_id": "gen-3",
            "command": "cargo build"
        }"#,
    );
    ctx.handle_event(&shell);
    ctx.flush_and_reset().await;

    let names = named_bodies(&common::trace_bodies(&batches));
    assert_eq!(names, vec!["[SYSTEM] beforeShellExecution"]);
}

#[tokio::test]
async fn whitespace_collapses_and_long_prompts_truncate() {
    let (client, batches) = recording_client();
    let mut ctx = HookContext::with_client(Some(client));

    let padded = format!("fix \n\t the   bug {}", "x".repeat(120));
    ctx.handle_event(&prompt_event("gen-4", &padded.replace('\n', "\\n").replace('\t', "\\t")));
    ctx.flush_and_reset().await;

    let names = named_bodies(&common::trace_bodies(&batches));
    assert_eq!(names.len(), 1);
    let name = &names[0];
    assert!(name.starts_with("fix the bug x"));
    assert!(name.ends_with("..."));
    assert_eq!(name.chars().count(), 63);
}

#[tokio::test]
async fn distinct_generations_get_distinct_traces() {
    let (client, batches) = recording_client();
    let mut ctx = HookContext::with_client(Some(client));

    ctx.handle_event(&prompt_event("gen-a", "first run"));
    ctx.handle_event(&prompt_event("gen-b", "second run"));
    assert_eq!(ctx.cached_traces(), 2);
    ctx.flush_and_reset().await;

    let names = named_bodies(&common::trace_bodies(&batches));
    assert_eq!(names, vec!["first run", "second run"]);
}
