//! Error types for sitepack
//!
//! Uses `thiserror` for library errors; commands wrap these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sitepack operations
pub type SitepackResult<T> = Result<T, SitepackError>;

/// Main error type for sitepack operations
#[derive(Error, Debug)]
pub enum SitepackError {
    /// Source root does not exist or is not a directory
    #[error("source root not found: {path}")]
    SourceRootNotFound { path: PathBuf },

    /// A page or asset path could not be read during plan assembly
    #[error("unreadable path during page discovery: {message}")]
    Discovery { message: String },

    /// A context store file contains invalid JSON
    #[error("invalid context JSON in {file}: {message}")]
    InvalidContext { file: PathBuf, message: String },

    /// A context store file holds something other than a JSON object
    #[error("context in {file} must be a JSON object")]
    ContextNotObject { file: PathBuf },

    /// Local deploy directory is missing (nothing built yet)
    #[error("local directory not found: {path} - run the build first")]
    LocalDirNotFound { path: PathBuf },

    /// An exclusion pattern failed to compile
    #[error("invalid exclusion pattern '{pattern}': {message}")]
    InvalidExclusion { pattern: String, message: String },

    /// No transfer tool available on this system
    #[error("no transfer method available - install rsync (preferred) or ensure scp is in PATH")]
    TransferUnavailable,

    /// The transfer subprocess failed
    #[error("{tool} transfer failed: {message}")]
    TransferFailed { tool: &'static str, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_source_root() {
        let err = SitepackError::SourceRootNotFound {
            path: PathBuf::from("missing/src"),
        };
        assert_eq!(err.to_string(), "source root not found: missing/src");
    }

    #[test]
    fn test_error_display_transfer_failed() {
        let err = SitepackError::TransferFailed {
            tool: "rsync",
            message: "exit code 23".to_string(),
        };
        assert_eq!(err.to_string(), "rsync transfer failed: exit code 23");
    }

    #[test]
    fn test_error_display_invalid_context() {
        let err = SitepackError::InvalidContext {
            file: PathBuf::from("stores/context.json"),
            message: "expected value at line 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid context JSON in stores/context.json: expected value at line 1"
        );
    }
}
