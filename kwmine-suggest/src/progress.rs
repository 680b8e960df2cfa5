//! Progress events for a mining run.
//!
//! Provides callback-based progress reporting that decouples the worker
//! pool from presentation (terminal progress bar, logs, tests).

use crate::types::Source;

/// How a single task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    /// The fetch succeeded; `added` suggestions were new to the result set.
    Succeeded {
        /// Number of suggestions inserted by this task.
        added: usize,
    },
    /// The fetch failed and the task was dropped.
    Failed,
    /// The run was stopped before this task started.
    Skipped,
}

/// Progress events emitted by the worker pool.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Tasks are planned and workers are about to start.
    RunStarted {
        /// Number of distinct seeds in the run.
        seeds: usize,
        /// Total number of tasks.
        total_tasks: usize,
    },

    /// A task finished (successfully, with an error, or skipped).
    TaskFinished {
        /// Seed the task's query was expanded from.
        seed: String,
        /// The query sent.
        query: String,
        /// The source queried.
        source: Source,
        /// How the task ended.
        outcome: TaskOutcome,
        /// Unique suggestions collected so far.
        unique_count: usize,
        /// Tasks finished so far, including this one.
        completed: usize,
        /// Total number of tasks.
        total: usize,
    },

    /// Every task has been attempted or skipped.
    RunFinished {
        /// Final unique suggestion count.
        unique_count: usize,
        /// Number of tasks that failed.
        failed: usize,
    },
}

/// Callback type for receiving progress events.
///
/// Invoked from worker context; implementations must return quickly.
pub type ProgressCallback = Box<dyn Fn(ProgressEvent) + Send + Sync>;
