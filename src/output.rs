//! Delimited-text output of mined suggestions.
//!
//! Columns: `suggestion`, `source`, `seed`. Rows follow the report order
//! (sorted by suggestion text).

use std::path::Path;

use kwmine_suggest::Suggestion;

use crate::error::{MinerError, Result};

/// Column headers written as the first row.
pub const HEADER: [&str; 3] = ["suggestion", "source", "seed"];

/// Write `suggestions` to `path`, creating parent directories as needed.
///
/// Returns the number of data rows written.
///
/// # Errors
///
/// Returns [`MinerError::Output`] if the file cannot be created or written.
pub fn write_suggestions(path: &Path, suggestions: &[Suggestion], delimiter: u8) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|e| MinerError::Output(format!("cannot create {}: {e}", path.display())))?;

    writer
        .write_record(HEADER)
        .map_err(|e| MinerError::Output(e.to_string()))?;
    for s in suggestions {
        writer
            .write_record([s.text.as_str(), s.source.name(), s.seed.as_str()])
            .map_err(|e| MinerError::Output(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| MinerError::Output(format!("cannot flush {}: {e}", path.display())))?;

    tracing::debug!(path = %path.display(), rows = suggestions.len(), "suggestions written");
    Ok(suggestions.len())
}
