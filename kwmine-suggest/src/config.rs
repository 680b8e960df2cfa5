//! Mining configuration with sensible defaults.
//!
//! [`MinerConfig`] controls which sources are queried, how many workers run,
//! request pacing and the suffix alphabet used for seed expansion. The
//! defaults are tuned for polite scraping of the public endpoints.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SuggestError;
use crate::sources::{bing, google};
use crate::types::Source;

/// Default suffix alphabet: lowercase letters followed by digits.
pub const DEFAULT_SUFFIXES: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Configuration for a mining run.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinerConfig {
    /// Which sources to query for every expanded query.
    pub sources: Vec<Source>,
    /// Number of requests allowed in flight at once.
    pub workers: usize,
    /// Random delay range in milliseconds `(min, max)` applied before each request.
    pub request_delay_ms: (u64, u64),
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Characters appended one at a time to each seed.
    pub suffixes: String,
    /// When `false`, only the bare seed is queried.
    pub expand_suffixes: bool,
    /// Fixed User-Agent string. If `None`, rotates through a built-in list
    /// of realistic browser User-Agents.
    pub user_agent: Option<String>,
    /// Google suggestion endpoint.
    pub google_endpoint: String,
    /// Bing suggestion endpoint.
    pub bing_endpoint: String,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            sources: vec![Source::Google, Source::Bing],
            workers: 5,
            request_delay_ms: (500, 1500),
            timeout_seconds: 8,
            suffixes: DEFAULT_SUFFIXES.to_owned(),
            expand_suffixes: true,
            user_agent: None,
            google_endpoint: google::DEFAULT_ENDPOINT.to_owned(),
            bing_endpoint: bing::DEFAULT_ENDPOINT.to_owned(),
        }
    }
}

impl MinerConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `workers` and `timeout_seconds` must be greater than 0
    /// - `sources` must be non-empty and free of duplicates
    /// - `request_delay_ms.0` must be <= `request_delay_ms.1`
    /// - every suffix is a unique ASCII lowercase letter or digit
    /// - both endpoints parse as URLs
    pub fn validate(&self) -> Result<(), SuggestError> {
        if self.workers == 0 {
            return Err(SuggestError::Config(
                "workers must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SuggestError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.sources.is_empty() {
            return Err(SuggestError::Config(
                "at least one source must be enabled".into(),
            ));
        }
        for (i, source) in self.sources.iter().enumerate() {
            if self.sources[..i].contains(source) {
                return Err(SuggestError::Config(format!(
                    "source {source} listed more than once"
                )));
            }
        }
        if self.request_delay_ms.0 > self.request_delay_ms.1 {
            return Err(SuggestError::Config(
                "request_delay_ms min must be <= max".into(),
            ));
        }
        for (i, c) in self.suffixes.char_indices() {
            if !(c.is_ascii_lowercase() || c.is_ascii_digit()) {
                return Err(SuggestError::Config(format!(
                    "suffix {c:?} is not a lowercase letter or digit"
                )));
            }
            if self.suffixes[..i].contains(c) {
                return Err(SuggestError::Config(format!(
                    "suffix {c:?} listed more than once"
                )));
            }
        }
        for (name, endpoint) in [
            ("google_endpoint", &self.google_endpoint),
            ("bing_endpoint", &self.bing_endpoint),
        ] {
            Url::parse(endpoint)
                .map_err(|e| SuggestError::Config(format!("{name} is not a valid URL: {e}")))?;
        }
        Ok(())
    }
}
