use serde::Serialize;
use serde_json::json;

use crate::backend::{ObservationBody, TraceHandle};
use crate::harness::events::cursor::{AfterFileEditPayload, FileEdit};
use crate::harness::response::HookResponse;

/// Aggregate line statistics for one file-edit event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditStats {
    pub edit_count: usize,
    pub lines_added: u64,
    pub lines_removed: u64,
}

/// Sum the per-edit line-count deltas.
///
/// Growth accumulates into `lines_added`, shrinkage into `lines_removed`;
/// an edit that keeps the line count even contributes to neither. A
/// missing edit list yields the zero stats rather than an error.
pub fn calculate_edit_stats(edits: Option<&[FileEdit]>) -> EditStats {
    let Some(edits) = edits else {
        return EditStats::default();
    };

    let mut stats = EditStats {
        edit_count: edits.len(),
        ..Default::default()
    };

    for edit in edits {
        let old_lines = edit.old_string.split('\n').count() as u64;
        let new_lines = edit.new_string.split('\n').count() as u64;
        if new_lines > old_lines {
            stats.lines_added += new_lines - old_lines;
        } else {
            stats.lines_removed += old_lines - new_lines;
        }
    }

    stats
}

/// Record the edit as a closed span named for the file, with the path as
/// input and the line statistics as output.
pub(super) fn handle(trace: &TraceHandle, payload: &AfterFileEditPayload) -> Option<HookResponse> {
    let stats = calculate_edit_stats(payload.edits.as_deref());
    let file_name = basename(&payload.file_path);

    trace
        .open_span(ObservationBody {
            name: format!("File Edit: {file_name}"),
            input: Some(json!({ "file": payload.file_path })),
            output: serde_json::to_value(stats).ok(),
            ..Default::default()
        })
        .end();

    None
}

fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn edit(old: &str, new: &str) -> FileEdit {
        FileEdit {
            old_string: old.into(),
            new_string: new.into(),
        }
    }

    #[test]
    fn test_missing_and_empty_edit_lists_are_zero() {
        assert_eq!(calculate_edit_stats(None), EditStats::default());
        assert_eq!(calculate_edit_stats(Some(&[])), EditStats::default());
    }

    #[test]
    fn test_single_added_line() {
        let edits = [edit("a\nb", "a\nb\nc")];
        assert_eq!(
            calculate_edit_stats(Some(&edits)),
            EditStats {
                edit_count: 1,
                lines_added: 1,
                lines_removed: 0,
            }
        );
    }

    #[test]
    fn test_removals_and_additions_accumulate_separately() {
        let edits = [
            edit("a\nb\nc", "a"),       // two removed
            edit("x", "x\ny\nz"),       // two added
            edit("same", "rewritten"),  // even swap, counts nowhere
        ];
        assert_eq!(
            calculate_edit_stats(Some(&edits)),
            EditStats {
                edit_count: 3,
                lines_added: 2,
                lines_removed: 2,
            }
        );
    }

    #[test]
    fn test_empty_strings_count_as_one_line() {
        // An empty string is one (empty) line, so "" -> "a\nb" adds one
        let edits = [edit("", "a\nb")];
        assert_eq!(
            calculate_edit_stats(Some(&edits)),
            EditStats {
                edit_count: 1,
                lines_added: 1,
                lines_removed: 0,
            }
        );
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("/home/dev/src/main.rs"), "main.rs");
        assert_eq!(basename(r"C:\dev\src\main.rs"), "main.rs");
        assert_eq!(basename("main.rs"), "main.rs");
    }
}
