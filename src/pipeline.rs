//! One complete kwmine run: seeds in, suggestion table out.

use std::path::PathBuf;

use kwmine_suggest::{CancellationToken, MiningReport, ProgressCallback};

use crate::config::AppConfig;
use crate::error::Result;
use crate::{output, seeds};

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Mining results and task accounting.
    pub report: MiningReport,
    /// Where the suggestion table was written.
    pub output_path: PathBuf,
    /// Data rows written (one per unique suggestion).
    pub rows_written: usize,
    /// Whether the run was stopped before every task was attempted.
    pub interrupted: bool,
}

impl RunOutcome {
    /// One-line human summary.
    pub fn summary(&self) -> String {
        let stats = &self.report.stats;
        let mut line = format!(
            "{} unique suggestions from {} tasks ({} failed: {} network, {} parse)",
            self.report.unique_count(),
            stats.total,
            stats.failed,
            stats.network_failures,
            stats.parse_failures,
        );
        if self.interrupted {
            line.push_str(&format!(", {} skipped after stop", stats.skipped));
        }
        line
    }
}

/// Read seeds, mine suggestions, and write the table.
///
/// Configuration and seed-file problems are reported before any request is
/// sent, and nothing is written when either is invalid. Individual request failures only show up in the report.
///
/// # Errors
///
/// Returns [`crate::MinerError`] for invalid configuration, an unusable
/// seed file, or an unwritable output path.
pub async fn run(
    config: &AppConfig,
    progress: Option<&ProgressCallback>,
    cancel: &CancellationToken,
) -> Result<RunOutcome> {
    let delimiter = config.output.delimiter_byte()?;
    let seeds = seeds::read_seeds(&config.input.seeds_path)?;

    // The miner section is validated by `mine` before any request goes out.

    let report = kwmine_suggest::mine(&seeds, &config.miner, progress, cancel).await?;

    let rows_written = output::write_suggestions(&config.output.path, &report.suggestions, delimiter)?;
    for (source, count) in report.per_source() {
        tracing::info!(%source, count, "unique suggestions by first source");
    }

    Ok(RunOutcome {
        interrupted: report.stats.skipped > 0,
        report,
        output_path: config.output.path.clone(),
        rows_written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MinerError;
    use kwmine_suggest::RunStats;

    #[tokio::test]
    async fn missing_seed_file_fails_before_mining() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = AppConfig::default();
        config.input.seeds_path = dir.path().join("absent.txt");
        config.output.path = dir.path().join("out.csv");

        let err = run(&config, None, &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, MinerError::Input(_)));
        assert!(!config.output.path.exists());
    }

    #[tokio::test]
    async fn bad_delimiter_fails_before_reading_seeds() {
        let mut config = AppConfig::default();
        config.output.delimiter = '§';
        config.input.seeds_path = PathBuf::from("/nonexistent/seeds.txt");
        let err = run(&config, None, &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, MinerError::Config(_)));
    }

    #[tokio::test]
    async fn invalid_miner_config_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let seeds_path = dir.path().join("seeds.txt");
        std::fs::write(&seeds_path, "cursor\n").expect("write seeds");

        let mut config = AppConfig::default();
        config.miner.workers = 0;
        config.input.seeds_path = seeds_path;
        config.output.path = dir.path().join("out.csv");

        let err = run(&config, None, &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, MinerError::Mining(_)));
        assert!(err.to_string().contains("workers"));
        assert!(!config.output.path.exists());
    }

    #[test]
    fn summary_mentions_failures_and_skips() {
        let outcome = RunOutcome {
            report: MiningReport {
                suggestions: vec![],
                stats: RunStats {
                    total: 74,
                    succeeded: 60,
                    failed: 4,
                    network_failures: 3,
                    parse_failures: 1,
                    skipped: 10,
                },
            },
            output_path: PathBuf::from("out.csv"),
            rows_written: 0,
            interrupted: true,
        };
        let line = outcome.summary();
        assert!(line.contains("0 unique suggestions from 74 tasks"));
        assert!(line.contains("4 failed: 3 network, 1 parse"));
        assert!(line.contains("10 skipped"));
    }
}
