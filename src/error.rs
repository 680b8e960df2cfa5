//! Error types for the kwmine application shell.

use kwmine_suggest::SuggestError;

/// Top-level error type for a mining run.
#[derive(Debug, thiserror::Error)]
pub enum MinerError {
    /// Seed file missing, unreadable or without any seed.
    #[error("input error: {0}")]
    Input(String),

    /// Configuration file or value error.
    #[error("config error: {0}")]
    Config(String),

    /// Writing the suggestions file failed.
    #[error("output error: {0}")]
    Output(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Mining core error (invalid miner settings, client construction).
    #[error(transparent)]
    Mining(#[from] SuggestError),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, MinerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_input() {
        let err = MinerError::Input("seed file is empty".into());
        assert_eq!(err.to_string(), "input error: seed file is empty");
    }

    #[test]
    fn mining_error_is_transparent() {
        let err: MinerError = SuggestError::Config("workers must be greater than 0".into()).into();
        assert_eq!(err.to_string(), "config error: workers must be greater than 0");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: MinerError = io.into();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
