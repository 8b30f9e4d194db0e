//! Session key and tag derivation.
//!
//! Pure functions of the event's fields; the same inputs must produce the
//! same strings on every invocation, because many short-lived hook
//! processes independently derive the key that groups their traces into
//! one backend session.

use std::collections::BTreeSet;

/// Fallback project component when no workspace root is known
const UNKNOWN_PROJECT: &str = "unknown-project";

/// Tag present on every trace this relay produces
const SOURCE_TAG: &str = "cursor";

/// Kinds whose name contains this substring get the feature tag
const TAB_FEATURE: &str = "tab";

/// Derive the session key grouping this run's trace with its siblings.
///
/// Shape: `{project} | {chat}` where project is the basename of the first
/// workspace root and chat is the human title when one exists, else a
/// truncated conversation id.
pub fn session_key(
    workspace_roots: &[String],
    conversation_id: &str,
    chat_title: Option<&str>,
) -> String {
    let project = workspace_roots
        .first()
        .map(|root| project_name(root))
        .unwrap_or(UNKNOWN_PROJECT);

    let chat = match chat_title {
        Some(title) => title.to_string(),
        None => format!("chat:{}", conversation_id.chars().take(8).collect::<String>()),
    };

    format!("{project} | {chat}")
}

/// Last non-empty path segment, tolerating both separator styles
fn project_name(root: &str) -> &str {
    root.rsplit(['/', '\\'])
        .find(|segment| !segment.is_empty())
        .unwrap_or(UNKNOWN_PROJECT)
}

/// Derive the tag set for a trace: the fixed source tag, a normalized
/// model tag, and a feature tag for Tab-originated kinds. Set semantics:
/// duplicate-free, order not significant (kept stable for tests).
pub fn derive_tags(event_name: &str, model: Option<&str>) -> Vec<String> {
    let mut tags = BTreeSet::new();
    tags.insert(SOURCE_TAG.to_string());

    if let Some(model) = model {
        tags.insert(normalize_model_tag(model));
    }

    if event_name.to_lowercase().contains(TAB_FEATURE) {
        tags.insert("tab-feature".to_string());
    }

    tags.into_iter().collect()
}

/// Lowercase, with every character outside `[a-z0-9-]` replaced by `-`
fn normalize_model_tag(model: &str) -> String {
    model
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
