//! Error types for order reconciliation and batching.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Broad failure category, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A file or directory could not be read or written.
    Io,
    /// A manifest or order export is structurally malformed.
    Parse,
    /// The run was configured with unusable settings.
    Config,
}

/// Main error type for the pipelines.
#[derive(Debug, Error)]
pub enum FillError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("Failed to serialize manifest: {source}")]
    ManifestWrite {
        #[source]
        source: quick_xml::DeError,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Missing required column '{column}' in {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Batch capacity must be greater than zero")]
    InvalidCapacity,

    #[error("Batch plan violates invariants: {}", errors.join("; "))]
    InvalidBatches { errors: Vec<String> },

    #[error("{} manifest(s) failed to load: {}", failures.len(), summarize(failures))]
    ManifestLoad { failures: Vec<FillError> },

    #[error("Gave up loading manifests from {path} after {elapsed:?} (abandoned, not cancelled)")]
    Timeout { path: PathBuf, elapsed: Duration },
}

fn summarize(failures: &[FillError]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl FillError {
    /// Build an I/O error tagged with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FillError::Io {
            path: path.into(),
            source,
        }
    }

    /// Get the failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FillError::Io { .. } => ErrorKind::Io,
            FillError::Timeout { .. } => ErrorKind::Io,
            FillError::ManifestParse { .. } => ErrorKind::Parse,
            FillError::ManifestWrite { .. } => ErrorKind::Parse,
            FillError::Csv { .. } => ErrorKind::Parse,
            FillError::MissingColumn { .. } => ErrorKind::Parse,
            FillError::InvalidCapacity => ErrorKind::Config,
            FillError::InvalidBatches { .. } => ErrorKind::Config,
            // An aggregate takes the category of its first failure.
            FillError::ManifestLoad { failures } => failures
                .first()
                .map(FillError::kind)
                .unwrap_or(ErrorKind::Io),
        }
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, FillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of_io_error() {
        let err = FillError::io(
            "orders",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("orders"));
    }

    #[test]
    fn test_kind_of_aggregate_follows_first_failure() {
        let err = FillError::ManifestLoad {
            failures: vec![
                FillError::MissingColumn {
                    path: "a.csv".into(),
                    column: "Name".into(),
                },
                FillError::InvalidCapacity,
            ],
        };
        assert_eq!(err.kind(), ErrorKind::Parse);
        let message = err.to_string();
        assert!(message.starts_with("2 manifest(s) failed to load"));
        assert!(message.contains("'Name'"));
    }

    #[test]
    fn test_invalid_batches_message_lists_errors() {
        let err = FillError::InvalidBatches {
            errors: vec!["first".into(), "second".into()],
        };
        assert_eq!(
            err.to_string(),
            "Batch plan violates invariants: first; second"
        );
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_timeout_message_says_abandoned() {
        let err = FillError::Timeout {
            path: "orders".into(),
            elapsed: std::time::Duration::from_millis(250),
        };
        assert_eq!(
            err.to_string(),
            "Gave up loading manifests from orders after 250ms (abandoned, not cancelled)"
        );
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
