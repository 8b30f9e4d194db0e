//! Per-process trace identity cache.
//!
//! Maps a generation id to the trace handle created for it and remembers
//! whether the trace has been given a display name yet. One entry per
//! generation id, ever: the cache is the only way to reach a handle, so a
//! run can never end up with two competing handles. Entries live until the
//! flush coordinator clears the whole cache at end of batch; there is no
//! per-event eviction.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::backend::TraceHandle;

/// What the process knows about one generation's trace
#[derive(Debug)]
pub struct TraceEntry {
    pub handle: TraceHandle,

    /// Flips false to true at most once; a named trace is never renamed
    pub name_assigned: bool,
}

/// Generation id → [`TraceEntry`]
#[derive(Debug, Default)]
pub struct TraceCache {
    entries: HashMap<String, TraceEntry>,
}

impl TraceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, generation_id: &str) -> Option<&TraceEntry> {
        self.entries.get(generation_id)
    }

    /// Insert the entry for a generation seen for the first time and
    /// return a borrow of it
    pub fn insert(
        &mut self,
        generation_id: String,
        handle: TraceHandle,
        name_assigned: bool,
    ) -> &TraceEntry {
        let entry = TraceEntry {
            handle,
            name_assigned,
        };
        match self.entries.entry(generation_id) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(entry);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(entry),
        }
    }

    /// Record that the generation's trace now carries a display name
    pub fn mark_name_assigned(&mut self, generation_id: &str) {
        if let Some(entry) = self.entries.get_mut(generation_id) {
            entry.name_assigned = true;
        }
    }

    /// Drop every entry. Called by the flush coordinator only.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
