//! # kwmine-suggest
//!
//! Autocomplete keyword mining for kwmine.
//!
//! Each seed word is expanded with single-character suffixes (`seed`,
//! `seeda` … `seedz`, `seed0` … `seed9`), every expanded query is sent to
//! the Google and Bing suggestion endpoints, and the returned completions
//! are collected into one deduplicated set.
//!
//! ## Design
//!
//! - Tasks are planned up-front and executed by a fixed-size worker pool
//! - User-Agent rotation and randomised pre-request delay, behind an
//!   injectable [`http::RequestPolicy`]
//! - Each [`Source`] decodes its own response shape
//! - Graceful degradation: failed requests are logged and counted, and the
//!   run carries on
//! - No retries or backoff; an HTTP 429 is just another failed task
//!
//! Queries are logged only at trace level.

pub mod config;
pub mod error;
pub mod expand;
pub mod fetch;
pub mod http;
pub mod orchestrator;
pub mod progress;
pub mod sources;
pub mod types;

pub use config::MinerConfig;
pub use error::{Result, SuggestError};
pub use expand::SuffixExpander;
pub use fetch::{HttpFetcher, SuggestionFetcher};
pub use orchestrator::aggregate::Aggregator;
pub use orchestrator::pool::{RunStats, WorkerPool};
pub use orchestrator::run::{MiningReport, mine_with, plan_tasks};
pub use progress::{ProgressCallback, ProgressEvent, TaskOutcome};
pub use types::{Source, Suggestion, Task};

pub use tokio_util::sync::CancellationToken;

/// Mine suggestions for `seeds` against the live endpoints.
///
/// Builds an [`HttpFetcher`] from `config` and delegates to [`mine_with`],
/// which validates `config` before any task is planned.
///
/// # Errors
///
/// Returns [`SuggestError::Config`] for an invalid configuration,
/// [`SuggestError::Input`] if `seeds` holds no usable seed, and
/// [`SuggestError::Http`] if the HTTP client cannot be built. Individual
/// request failures never fail the run.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> kwmine_suggest::Result<()> {
/// let config = kwmine_suggest::MinerConfig::default();
/// let cancel = kwmine_suggest::CancellationToken::new();
/// let report = kwmine_suggest::mine(&["cursor".to_string()], &config, None, &cancel).await?;
/// for s in &report.suggestions {
///     println!("{} ({})", s.text, s.source);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn mine(
    seeds: &[String],
    config: &MinerConfig,
    progress: Option<&ProgressCallback>,
    cancel: &CancellationToken,
) -> Result<MiningReport> {
    let fetcher = HttpFetcher::new(config)?;
    mine_with(&fetcher, seeds, config, progress, cancel).await
}
