//! Thread-safe deduplicating result set.
//!
//! Suggestions are keyed by their trimmed text using exact string
//! equality. The first task to report a suggestion owns its provenance;
//! later reports of the same text are ignored. Entries are never removed.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::types::{Source, Suggestion};

#[derive(Debug, Clone)]
struct Provenance {
    source: Source,
    seed: String,
}

/// Accumulates unique suggestions across all workers of a run.
#[derive(Debug, Default)]
pub struct Aggregator {
    entries: Mutex<HashMap<String, Provenance>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert each suggestion not already present.
    ///
    /// Items are trimmed first; items that are empty after trimming are
    /// dropped. Returns how many new entries were inserted.
    pub fn add<I, S>(&self, suggestions: I, source: Source, seed: &str) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let mut added = 0;
        for item in suggestions {
            let text = item.as_ref().trim();
            if text.is_empty() || entries.contains_key(text) {
                continue;
            }
            entries.insert(
                text.to_owned(),
                Provenance {
                    source,
                    seed: seed.to_owned(),
                },
            );
            added += 1;
        }
        added
    }

    /// Current number of unique suggestions.
    pub fn unique_count(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether `text` (after trimming) is already in the set.
    pub fn contains(&self, text: &str) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(text.trim())
    }

    /// Consume the aggregator, returning suggestions sorted by text.
    pub fn into_suggestions(self) -> Vec<Suggestion> {
        let entries = self
            .entries
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        let mut suggestions: Vec<Suggestion> = entries
            .into_iter()
            .map(|(text, p)| Suggestion {
                text,
                source: p.source,
                seed: p.seed,
            })
            .collect();
        suggestions.sort_by(|a, b| a.text.cmp(&b.text));
        suggestions
    }
}
