//! Suggestion fetching: one query, one source, one request.
//!
//! [`SuggestionFetcher`] is the seam the worker pool drives. The real
//! implementation is [`HttpFetcher`]; tests plug in canned fetchers.

use std::future::Future;
use std::sync::Arc;

use crate::config::MinerConfig;
use crate::error::SuggestError;
use crate::http::{self, JitterPolicy, RequestPolicy};
use crate::sources;
use crate::types::Source;

/// Fetches autocomplete suggestions for a query from a source.
///
/// All implementations must be `Send + Sync` so a single fetcher can be
/// shared by every worker.
pub trait SuggestionFetcher: Send + Sync {
    /// Fetch suggestions for `query` from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError`] if the request fails, times out, or the
    /// response cannot be decoded. No retries are attempted.
    fn fetch(
        &self,
        query: &str,
        source: Source,
    ) -> impl Future<Output = Result<Vec<String>, SuggestError>> + Send;
}

/// Fetcher that queries the live (or configured) endpoints over HTTP.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    policy: Arc<dyn RequestPolicy>,
    google_endpoint: String,
    bing_endpoint: String,
}

impl std::fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFetcher")
            .field("policy", &"<RequestPolicy>")
            .field("google_endpoint", &self.google_endpoint)
            .field("bing_endpoint", &self.bing_endpoint)
            .finish()
    }
}

impl HttpFetcher {
    /// Fetcher using a [`JitterPolicy`] derived from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &MinerConfig) -> Result<Self, SuggestError> {
        Self::with_policy(config, Arc::new(JitterPolicy::from_config(config)))
    }

    /// Fetcher using an explicit request policy.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestError::Http`] if the HTTP client cannot be built.
    pub fn with_policy(
        config: &MinerConfig,
        policy: Arc<dyn RequestPolicy>,
    ) -> Result<Self, SuggestError> {
        Ok(Self {
            client: http::build_client(config)?,
            policy,
            google_endpoint: config.google_endpoint.clone(),
            bing_endpoint: config.bing_endpoint.clone(),
        })
    }

    fn endpoint(&self, source: Source) -> &str {
        match source {
            Source::Google => &self.google_endpoint,
            Source::Bing => &self.bing_endpoint,
        }
    }
}

impl SuggestionFetcher for HttpFetcher {
    async fn fetch(&self, query: &str, source: Source) -> Result<Vec<String>, SuggestError> {
        let user_agent = self.policy.user_agent();
        let delay = self.policy.delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        tracing::trace!(query, %source, "suggestion request");

        let response = sources::build_request(source, &self.client, self.endpoint(source), query)
            .header(reqwest::header::USER_AGENT, user_agent)
            .send()
            .await
            .map_err(|e| request_error(source, "request failed", e))?
            .error_for_status()
            .map_err(|e| request_error(source, "HTTP error", e))?;

        let body = response
            .text()
            .await
            .map_err(|e| request_error(source, "response read failed", e))?;

        tracing::trace!(%source, bytes = body.len(), "suggestion response received");

        source.decode(&body)
    }
}

fn request_error(source: Source, what: &str, e: reqwest::Error) -> SuggestError {
    if e.is_timeout() {
        SuggestError::Timeout(format!("{source} {what}: {e}"))
    } else {
        SuggestError::Http(format!("{source} {what}: {e}"))
    }
}
