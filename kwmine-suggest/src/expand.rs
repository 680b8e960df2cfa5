//! Seed expansion by single-character suffixes.
//!
//! A seed `"cursor"` with the default alphabet expands to `"cursor"`,
//! `"cursora"` … `"cursorz"`, `"cursor0"` … `"cursor9"`: 37 queries.

use crate::config::DEFAULT_SUFFIXES;

/// Produces the query sequence for a seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixExpander {
    suffixes: Vec<char>,
}

impl Default for SuffixExpander {
    fn default() -> Self {
        Self::new(DEFAULT_SUFFIXES)
    }
}

impl SuffixExpander {
    /// Expander appending each character of `alphabet` in order.
    pub fn new(alphabet: &str) -> Self {
        Self {
            suffixes: alphabet.chars().collect(),
        }
    }

    /// Expander that yields only the bare seed.
    pub fn bare() -> Self {
        Self {
            suffixes: Vec::new(),
        }
    }

    /// Number of queries produced per seed, including the bare seed.
    pub fn queries_per_seed(&self) -> usize {
        self.suffixes.len() + 1
    }

    /// Lazily expand `seed`. The returned iterator is `Clone`, so the
    /// sequence can be restarted from any point.
    pub fn expand<'a>(&'a self, seed: &'a str) -> Expansion<'a> {
        Expansion {
            seed,
            suffixes: &self.suffixes,
            next: 0,
        }
    }
}

/// Iterator over the queries for one seed: bare seed first, then one query
/// per suffix.
#[derive(Debug, Clone)]
pub struct Expansion<'a> {
    seed: &'a str,
    suffixes: &'a [char],
    next: usize,
}

impl Iterator for Expansion<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let query = match self.next {
            0 => self.seed.to_owned(),
            n => {
                let suffix = *self.suffixes.get(n - 1)?;
                let mut query = String::with_capacity(self.seed.len() + suffix.len_utf8());
                query.push_str(self.seed);
                query.push(suffix);
                query
            }
        };
        self.next += 1;
        Some(query)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.suffixes.len() + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Expansion<'_> {}
