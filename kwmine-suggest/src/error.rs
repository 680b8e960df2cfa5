//! Error types for the kwmine-suggest crate.
//!
//! Per-task failures (`Http`, `Timeout`, `Parse`) are recovered by the
//! worker pool and only counted; `Config` and `Input` abort a run before
//! any request is sent.

/// Errors that can occur while mining suggestions.
#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    /// A request to a suggestion endpoint failed (connection, TLS, non-2xx status).
    #[error("HTTP error: {0}")]
    Http(String),

    /// A request exceeded the per-request timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The endpoint answered with a body of unexpected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid mining configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Nothing to mine.
    #[error("input error: {0}")]
    Input(String),
}

impl SuggestError {
    /// Returns `true` for transport-level failures (connection or timeout).
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Timeout(_))
    }
}

/// Convenience type alias for kwmine-suggest results.
pub type Result<T> = std::result::Result<T, SuggestError>;
