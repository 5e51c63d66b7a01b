//! Error types for demeter-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the demeter-io crate.
///
/// Covers failures to create an output destination and errors raised by
/// the CSV layer or the underlying file handle while writing records.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the output file cannot be created.
    #[error("failed to create {}: {reason}", path.display())]
    Create {
        /// Path that could not be created.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Wraps an I/O error raised while flushing the output file.
    #[error("io error: {reason}")]
    Io {
        /// Description of the underlying I/O failure.
        reason: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Io {
            reason: e.to_string(),
        }
    }
}
