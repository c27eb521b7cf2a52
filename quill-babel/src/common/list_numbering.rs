//! Outline-style numbering for ordered list items.
//!
//! Counters are scoped to `(list id, nesting level)`. Advancing a level drops every
//! counter deeper than it, so returning to a deeper level afterwards starts again at 1.
//! One tracker lives for one traversal scope: the document body gets one, and every
//! table cell gets its own.

use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Default, Clone)]
pub struct ListTracker {
    counters: HashMap<String, BTreeMap<usize, usize>>,
}

impl ListTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next ordinal for an item of `list_id` at `nesting_level`.
    pub fn next(&mut self, list_id: &str, nesting_level: usize) -> usize {
        let levels = self.counters.entry(list_id.to_string()).or_default();
        levels.retain(|&level, _| level <= nesting_level);

        let counter = levels.entry(nesting_level).or_insert(0);
        *counter += 1;
        *counter
    }

    /// Forget all counters. Called whenever a non-list paragraph ends the current list run.
    pub fn reset(&mut self) {
        self.counters.clear();
    }
}
