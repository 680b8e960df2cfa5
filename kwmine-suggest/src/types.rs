//! Core types: suggestion sources, mining tasks and mined suggestions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::error::SuggestError;
use crate::sources::{bing, google};

/// Supported autocomplete providers.
///
/// Each variant owns its response decoder; see [`Source::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Source {
    /// Google `suggestqueries` endpoint — JSON array body.
    Google,
    /// Bing `qsonhs` endpoint — JSON document body.
    Bing,
}

impl Source {
    /// Returns the human-readable name of this source.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Bing => "Bing",
        }
    }

    /// Returns all available source variants.
    pub fn all() -> &'static [Source] {
        &[Self::Google, Self::Bing]
    }

    /// Decode a raw response body from this source into suggestion strings.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::Parse`] if the body does not have the shape
    /// this source is known to produce.
    pub fn decode(&self, body: &str) -> Result<Vec<String>, SuggestError> {
        match self {
            Self::Google => google::parse_response(body),
            Self::Bing => bing::parse_response(body),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One unit of work: a single query sent to a single source.
///
/// Tasks are built up-front by [`crate::plan_tasks`] and consumed exactly
/// once by the worker pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// The seed this query was expanded from. Shared across all of the
    /// seed's tasks.
    pub seed: Arc<str>,
    /// The query string sent to the source.
    pub query: String,
    /// The source to query.
    pub source: Source,
}

/// A unique suggestion together with where it was first seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Canonical (trimmed) suggestion text.
    pub text: String,
    /// The source that first returned this suggestion.
    pub source: Source,
    /// The seed whose expansion first produced this suggestion.
    pub seed: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_display() {
        assert_eq!(Source::Google.to_string(), "Google");
        assert_eq!(Source::Bing.to_string(), "Bing");
    }

    #[test]
    fn source_all() {
        let all = Source::all();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&Source::Google));
        assert!(all.contains(&Source::Bing));
    }

    #[test]
    fn source_decode_dispatches_per_shape() {
        let google_body = r#"["rust",["rust lang","rust game"]]"#;
        let bing_body = r#"{"AS":{"Query":"rust","FullResults":1,"Results":[{"Type":"AS","Suggests":[{"Txt":"rust lang","Type":"AS","Sk":""}]}]}}"#;

        assert_eq!(
            Source::Google.decode(google_body).expect("google shape"),
            vec!["rust lang", "rust game"]
        );
        assert_eq!(
            Source::Bing.decode(bing_body).expect("bing shape"),
            vec!["rust lang"]
        );

        // Each decoder rejects the other's shape.
        assert!(Source::Google.decode(bing_body).is_err());
        assert!(Source::Bing.decode(google_body).is_err());
    }

    #[test]
    fn source_serde_uses_variant_names() {
        let json = serde_json::to_string(&Source::Bing).expect("serialize");
        assert_eq!(json, "\"Bing\"");
        let decoded: Source = serde_json::from_str("\"Google\"").expect("deserialize");
        assert_eq!(decoded, Source::Google);
    }

    #[test]
    fn task_shares_seed() {
        let seed: Arc<str> = Arc::from("cursor");
        let a = Task {
            seed: Arc::clone(&seed),
            query: "cursora".into(),
            source: Source::Google,
        };
        let b = Task {
            seed: Arc::clone(&seed),
            query: "cursora".into(),
            source: Source::Bing,
        };
        assert!(Arc::ptr_eq(&a.seed, &b.seed));
        assert_ne!(a, b);
    }
}
