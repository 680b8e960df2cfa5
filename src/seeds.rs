//! Seed file reading.
//!
//! One seed per line; surrounding whitespace is trimmed and blank lines
//! are skipped. A missing file or a file with no seeds is fatal.

use std::path::Path;

use crate::error::{MinerError, Result};

/// Read seeds from a newline-delimited text file.
///
/// # Errors
///
/// Returns [`MinerError::Input`] if the file cannot be read or contains no
/// non-blank line.
pub fn read_seeds(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        MinerError::Input(format!("cannot read seed file {}: {e}", path.display()))
    })?;

    let seeds = parse_seeds(&content);
    if seeds.is_empty() {
        return Err(MinerError::Input(format!(
            "seed file {} contains no seeds",
            path.display()
        )));
    }

    tracing::debug!(path = %path.display(), count = seeds.len(), "seeds loaded");
    Ok(seeds)
}

/// Split `content` into trimmed, non-blank seed lines.
pub fn parse_seeds(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
