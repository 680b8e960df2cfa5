//! kwmine — autocomplete keyword miner.
//!
//! Reads seed words from a text file, expands each with single-character
//! suffixes, harvests Google and Bing autocomplete suggestions
//! concurrently, and writes the unique suggestions to a delimited file.
//! The mining itself lives in the `kwmine-suggest` crate; this crate adds
//! configuration, file I/O and terminal progress.

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod seeds;

pub use config::{AppConfig, ConfigOverrides};
pub use error::{MinerError, Result};
pub use pipeline::{RunOutcome, run};
pub use progress::ProgressReporter;
