//! Core mining run: plan tasks, execute them, collect unique suggestions.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::MinerConfig;
use crate::error::SuggestError;
use crate::expand::SuffixExpander;
use crate::fetch::SuggestionFetcher;
use crate::progress::{ProgressCallback, ProgressEvent};
use crate::types::{Source, Suggestion, Task};

use super::aggregate::Aggregator;
use super::pool::{RunStats, WorkerPool};

/// Outcome of a mining run.
#[derive(Debug, Clone)]
pub struct MiningReport {
    /// Unique suggestions, sorted by text.
    pub suggestions: Vec<Suggestion>,
    /// Task accounting.
    pub stats: RunStats,
}

impl MiningReport {
    pub fn unique_count(&self) -> usize {
        self.suggestions.len()
    }

    /// Number of unique suggestions first produced by each source.
    pub fn per_source(&self) -> BTreeMap<Source, usize> {
        let mut counts = BTreeMap::new();
        for s in &self.suggestions {
            *counts.entry(s.source).or_insert(0) += 1;
        }
        counts
    }
}

/// Build the full task list: every seed × every expanded query × every source.
///
/// Seeds are trimmed; blank and repeated seeds are skipped (first occurrence
/// wins). Order is seed, then query, then source.
pub fn plan_tasks(seeds: &[String], expander: &SuffixExpander, sources: &[Source]) -> Vec<Task> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut tasks = Vec::new();

    for seed in seeds.iter().map(|s| s.trim()) {
        if seed.is_empty() || !seen.insert(seed) {
            continue;
        }
        let shared: Arc<str> = Arc::from(seed);
        for query in expander.expand(seed) {
            for &source in sources {
                tasks.push(Task {
                    seed: Arc::clone(&shared),
                    query: query.clone(),
                    source,
                });
            }
        }
    }

    tasks
}

/// Run a complete mining pass with an explicit fetcher.
///
/// # Pipeline
///
/// 1. Validate `config` and plan tasks from `seeds`
/// 2. Execute tasks on a [`WorkerPool`] of `config.workers` slots
/// 3. Deduplicate every successful fetch into one result set
/// 4. Emit [`ProgressEvent`]s along the way when `progress` is set
///
/// # Errors
///
/// Returns [`SuggestError::Config`] for an invalid configuration and
/// [`SuggestError::Input`] when no usable seed is supplied. Per-task
/// failures are counted in [`RunStats`], never returned.
pub async fn mine_with<F: SuggestionFetcher>(
    fetcher: &F,
    seeds: &[String],
    config: &MinerConfig,
    progress: Option<&ProgressCallback>,
    cancel: &CancellationToken,
) -> Result<MiningReport, SuggestError> {
    config.validate()?;

    let expander = if config.expand_suffixes {
        SuffixExpander::new(&config.suffixes)
    } else {
        SuffixExpander::bare()
    };
    let tasks = plan_tasks(seeds, &expander, &config.sources);
    if tasks.is_empty() {
        return Err(SuggestError::Input("no seeds supplied".into()));
    }

    let seed_count = tasks.len() / (expander.queries_per_seed() * config.sources.len());
    tracing::info!(
        seeds = seed_count,
        tasks = tasks.len(),
        workers = config.workers,
        "mining started"
    );
    if let Some(cb) = progress {
        cb(ProgressEvent::RunStarted {
            seeds: seed_count,
            total_tasks: tasks.len(),
        });
    }

    let aggregator = Aggregator::new();
    let stats = WorkerPool::new(config.workers)
        .run(tasks, fetcher, &aggregator, progress, cancel)
        .await;

    let suggestions = aggregator.into_suggestions();
    tracing::info!(
        unique = suggestions.len(),
        failed = stats.failed,
        skipped = stats.skipped,
        "mining finished"
    );
    if let Some(cb) = progress {
        cb(ProgressEvent::RunFinished {
            unique_count: suggestions.len(),
            failed: stats.failed,
        });
    }

    Ok(MiningReport { suggestions, stats })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PricingFetcher;

    impl SuggestionFetcher for PricingFetcher {
        async fn fetch(&self, _query: &str, _source: Source) -> Result<Vec<String>, SuggestError> {
            Ok(vec!["cursor pricing".into()])
        }
    }

    fn quick_config() -> MinerConfig {
        MinerConfig {
            request_delay_ms: (0, 0),
            ..Default::default()
        }
    }

    #[test]
    fn plan_one_seed_two_sources_is_74_tasks() {
        let tasks = plan_tasks(
            &["cursor".to_string()],
            &SuffixExpander::default(),
            Source::all(),
        );
        assert_eq!(tasks.len(), 74);
        assert_eq!(tasks[0].query, "cursor");
        assert_eq!(tasks[0].source, Source::Google);
        assert_eq!(tasks[1].query, "cursor");
        assert_eq!(tasks[1].source, Source::Bing);
        assert!(tasks
            .iter()
            .any(|t| t.query == "cursora" && t.source == Source::Google));
        assert!(tasks
            .iter()
            .any(|t| t.query == "cursor0" && t.source == Source::Bing));
    }

    #[test]
    fn plan_skips_blank_and_repeated_seeds() {
        let seeds: Vec<String> = vec![" a ".into(), "".into(), "a".into(), "b".into(), "   ".into()];
        let tasks = plan_tasks(&seeds, &SuffixExpander::bare(), &[Source::Google]);
        let queries: Vec<&str> = tasks.iter().map(|t| t.query.as_str()).collect();
        assert_eq!(queries, vec!["a", "b"]);
    }

    #[test]
    fn plan_single_source() {
        let tasks = plan_tasks(&["x".to_string()], &SuffixExpander::default(), &[Source::Bing]);
        assert_eq!(tasks.len(), 37);
        assert!(tasks.iter().all(|t| t.source == Source::Bing));
    }

    #[tokio::test]
    async fn constant_fetcher_yields_one_entry() {
        let report = mine_with(
            &PricingFetcher,
            &["cursor".to_string()],
            &quick_config(),
            None,
            &CancellationToken::new(),
        )
        .await
        .expect("run succeeds");

        assert_eq!(report.stats.total, 74);
        assert_eq!(report.stats.succeeded, 74);
        assert_eq!(report.unique_count(), 1);
        assert_eq!(report.suggestions[0].text, "cursor pricing");
        assert_eq!(report.suggestions[0].seed, "cursor");
    }

    #[tokio::test]
    async fn no_expansion_queries_bare_seed_only() {
        let config = MinerConfig {
            expand_suffixes: false,
            ..quick_config()
        };
        let report = mine_with(
            &PricingFetcher,
            &["cursor".to_string()],
            &config,
            None,
            &CancellationToken::new(),
        )
        .await
        .expect("run succeeds");
        assert_eq!(report.stats.total, 2);
    }

    #[tokio::test]
    async fn empty_seeds_is_input_error() {
        let err = mine_with(
            &PricingFetcher,
            &["  ".to_string()],
            &quick_config(),
            None,
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, SuggestError::Input(_)));
    }

    #[tokio::test]
    async fn invalid_config_rejected_before_fetching() {
        let config = MinerConfig {
            workers: 0,
            ..quick_config()
        };
        let err = mine_with(
            &PricingFetcher,
            &["cursor".to_string()],
            &config,
            None,
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, SuggestError::Config(_)));
    }

    #[test]
    fn per_source_counts() {
        let report = MiningReport {
            suggestions: vec![
                Suggestion {
                    text: "a".into(),
                    source: Source::Google,
                    seed: "s".into(),
                },
                Suggestion {
                    text: "b".into(),
                    source: Source::Bing,
                    seed: "s".into(),
                },
                Suggestion {
                    text: "c".into(),
                    source: Source::Google,
                    seed: "s".into(),
                },
            ],
            stats: RunStats::default(),
        };
        let counts = report.per_source();
        assert_eq!(counts.get(&Source::Google), Some(&2));
        assert_eq!(counts.get(&Source::Bing), Some(&1));
    }
}
