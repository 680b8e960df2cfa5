//! Bounded-concurrency worker pool.
//!
//! Drives a pre-built task list through a [`SuggestionFetcher`] with at
//! most `workers` requests in flight, forwarding each successful fetch to
//! the [`Aggregator`]. Failed tasks are logged, counted and dropped; they
//! never stop the remaining tasks.

use std::sync::atomic::{AtomicUsize, Ordering};

use futures::StreamExt;
use tokio_util::sync::CancellationToken;

use crate::error::SuggestError;
use crate::fetch::SuggestionFetcher;
use crate::progress::{ProgressCallback, ProgressEvent, TaskOutcome};
use crate::types::Task;

use super::aggregate::Aggregator;

/// Final task accounting for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Tasks handed to the pool.
    pub total: usize,
    /// Tasks whose fetch succeeded.
    pub succeeded: usize,
    /// Tasks whose fetch failed (`network_failures + parse_failures`).
    pub failed: usize,
    /// Failures caused by connection errors, bad statuses or timeouts.
    pub network_failures: usize,
    /// Failures caused by undecodable responses.
    pub parse_failures: usize,
    /// Tasks not attempted because the run was stopped.
    pub skipped: usize,
}

/// Shared counters updated by every worker.
#[derive(Debug, Default)]
struct RunCounters {
    completed: AtomicUsize,
    succeeded: AtomicUsize,
    network_failures: AtomicUsize,
    parse_failures: AtomicUsize,
    skipped: AtomicUsize,
}

impl RunCounters {
    /// Record a finished task; returns the number finished so far.
    fn record(&self, outcome: TaskOutcome) -> usize {
        if let TaskOutcome::Succeeded { .. } = outcome {
            self.succeeded.fetch_add(1, Ordering::Relaxed);
        } else if outcome == TaskOutcome::Skipped {
            self.skipped.fetch_add(1, Ordering::Relaxed);
        }
        self.completed.fetch_add(1, Ordering::AcqRel) + 1
    }

    fn record_failure(&self, err: &SuggestError) {
        if err.is_network() {
            self.network_failures.fetch_add(1, Ordering::Relaxed);
        } else {
            self.parse_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn snapshot(&self, total: usize) -> RunStats {
        let network_failures = self.network_failures.load(Ordering::Relaxed);
        let parse_failures = self.parse_failures.load(Ordering::Relaxed);
        RunStats {
            total,
            succeeded: self.succeeded.load(Ordering::Relaxed),
            failed: network_failures + parse_failures,
            network_failures,
            parse_failures,
            skipped: self.skipped.load(Ordering::Relaxed),
        }
    }
}

/// Fixed-size pool of concurrent fetch workers.
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    /// Pool with `workers` concurrent slots (at least one).
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Attempt every task once, returning the run's task accounting.
    ///
    /// Once `cancel` fires no further task is started and in-flight
    /// fetches are abandoned; both are counted as skipped.
    pub async fn run<F: SuggestionFetcher>(
        &self,
        tasks: Vec<Task>,
        fetcher: &F,
        aggregator: &Aggregator,
        progress: Option<&ProgressCallback>,
        cancel: &CancellationToken,
    ) -> RunStats {
        let total = tasks.len();
        let counters = RunCounters::default();
        let counters = &counters;

        tracing::debug!(total, workers = self.workers, "worker pool starting");

        futures::stream::iter(tasks)
            .for_each_concurrent(self.workers, move |task| async move {
                let outcome = run_task(&task, fetcher, aggregator, counters, cancel).await;
                let completed = counters.record(outcome);

                if let Some(cb) = progress {
                    cb(ProgressEvent::TaskFinished {
                        seed: task.seed.to_string(),
                        query: task.query,
                        source: task.source,
                        outcome,
                        unique_count: aggregator.unique_count(),
                        completed,
                        total,
                    });
                }
            })
            .await;

        let stats = counters.snapshot(total);
        tracing::debug!(
            succeeded = stats.succeeded,
            failed = stats.failed,
            skipped = stats.skipped,
            "worker pool finished"
        );
        stats
    }
}

async fn run_task<F: SuggestionFetcher>(
    task: &Task,
    fetcher: &F,
    aggregator: &Aggregator,
    counters: &RunCounters,
    cancel: &CancellationToken,
) -> TaskOutcome {
    if cancel.is_cancelled() {
        return TaskOutcome::Skipped;
    }

    let result = tokio::select! {
        biased;
        _ = cancel.cancelled() => return TaskOutcome::Skipped,
        result = fetcher.fetch(&task.query, task.source) => result,
    };

    match result {
        Ok(suggestions) => {
            let added = aggregator.add(&suggestions, task.source, &task.seed);
            tracing::debug!(
                source = %task.source,
                returned = suggestions.len(),
                added,
                "task finished"
            );
            TaskOutcome::Succeeded { added }
        }
        Err(err) => {
            tracing::warn!(
                source = %task.source,
                query = %task.query,
                error = %err,
                "suggestion fetch failed"
            );
            counters.record_failure(&err);
            TaskOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Source;
    use std::sync::{Arc, Mutex};

    struct EchoFetcher;

    impl SuggestionFetcher for EchoFetcher {
        async fn fetch(&self, query: &str, _source: Source) -> Result<Vec<String>, SuggestError> {
            match query {
                "bad-net" => Err(SuggestError::Http("connection refused".into())),
                "bad-parse" => Err(SuggestError::Parse("garbage".into())),
                q => Ok(vec![format!("{q} one"), "common".to_owned()]),
            }
        }
    }

    fn task(query: &str, source: Source) -> Task {
        Task {
            seed: Arc::from("seed"),
            query: query.to_owned(),
            source,
        }
    }

    #[tokio::test]
    async fn runs_every_task_and_dedups() {
        let tasks = vec![
            task("a", Source::Google),
            task("b", Source::Google),
            task("a", Source::Bing),
        ];
        let agg = Aggregator::new();
        let stats = WorkerPool::new(2)
            .run(tasks, &EchoFetcher, &agg, None, &CancellationToken::new())
            .await;

        assert_eq!(stats.total, 3);
        assert_eq!(stats.succeeded, 3);
        assert_eq!(stats.failed, 0);
        // "a one", "b one", "common"
        assert_eq!(agg.unique_count(), 3);
    }

    #[tokio::test]
    async fn failures_are_classified_and_isolated() {
        let tasks = vec![
            task("bad-net", Source::Google),
            task("ok", Source::Google),
            task("bad-parse", Source::Bing),
        ];
        let agg = Aggregator::new();
        let stats = WorkerPool::new(1)
            .run(tasks, &EchoFetcher, &agg, None, &CancellationToken::new())
            .await;

        assert_eq!(stats.succeeded, 1);
        assert_eq!(stats.failed, 2);
        assert_eq!(stats.network_failures, 1);
        assert_eq!(stats.parse_failures, 1);
        assert!(agg.contains("ok one"));
    }

    #[tokio::test]
    async fn cancelled_token_skips_everything() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let agg = Aggregator::new();
        let stats = WorkerPool::new(3)
            .run(
                vec![task("a", Source::Google), task("b", Source::Bing)],
                &EchoFetcher,
                &agg,
                None,
                &cancel,
            )
            .await;

        assert_eq!(stats.skipped, 2);
        assert_eq!(stats.succeeded, 0);
        assert_eq!(agg.unique_count(), 0);
    }

    #[tokio::test]
    async fn progress_reports_every_task() {
        let seen: Arc<Mutex<Vec<(usize, usize)>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let callback: ProgressCallback = Box::new(move |event| {
            if let ProgressEvent::TaskFinished {
                completed, total, ..
            } = event
            {
                let Ok(mut guard) = seen_clone.lock() else {
                    return;
                };
                guard.push((completed, total));
            }
        });

        let agg = Aggregator::new();
        WorkerPool::new(4)
            .run(
                vec![
                    task("a", Source::Google),
                    task("bad-net", Source::Google),
                    task("c", Source::Bing),
                ],
                &EchoFetcher,
                &agg,
                Some(&callback),
                &CancellationToken::new(),
            )
            .await;

        let guard = seen.lock().unwrap_or_else(|e| e.into_inner());
        assert_eq!(guard.len(), 3);
        let mut completed: Vec<usize> = guard.iter().map(|(c, _)| *c).collect();
        completed.sort_unstable();
        assert_eq!(completed, vec![1, 2, 3]);
        assert!(guard.iter().all(|(_, t)| *t == 3));
    }

    #[test]
    fn zero_workers_clamped_to_one() {
        assert_eq!(WorkerPool::new(0).workers(), 1);
        assert_eq!(WorkerPool::new(5).workers(), 5);
    }

    #[tokio::test]
    async fn empty_task_list_completes() {
        let agg = Aggregator::new();
        let stats = WorkerPool::new(5)
            .run(vec![], &EchoFetcher, &agg, None, &CancellationToken::new())
            .await;
        assert_eq!(stats, RunStats::default());
    }
}
