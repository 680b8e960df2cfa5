//! Terminal progress rendering for mining runs.
//!
//! Bridges [`ProgressEvent`]s from the mining core onto an indicatif bar
//! showing the current seed and the running unique count.

use indicatif::{ProgressBar, ProgressStyle};
use kwmine_suggest::{ProgressCallback, ProgressEvent};

/// Renders mining progress to the terminal.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    /// Reporter drawing to stderr.
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        if let Ok(style) =
            ProgressStyle::with_template("  {spinner} [{bar:30}] {pos}/{len} {msg} ({elapsed})")
        {
            bar.set_style(style.progress_chars("=> "));
        }
        Self { bar }
    }

    /// Reporter that tracks state but draws nothing.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Callback to hand to the mining core.
    pub fn callback(&self) -> ProgressCallback {
        let bar = self.bar.clone();
        Box::new(move |event| render(&bar, event))
    }

    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }
}

fn render(bar: &ProgressBar, event: ProgressEvent) {
    match event {
        ProgressEvent::RunStarted { seeds, total_tasks } => {
            bar.set_length(total_tasks as u64);
            bar.set_message(format!("{seeds} seeds"));
        }
        ProgressEvent::TaskFinished {
            seed, unique_count, ..
        } => {
            bar.inc(1);
            bar.set_message(format!("{seed} | {unique_count} unique"));
        }
        ProgressEvent::RunFinished {
            unique_count,
            failed,
        } => {
            bar.finish_with_message(format!("{unique_count} unique, {failed} failed"));
        }
    }
}
