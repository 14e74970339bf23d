//! Error handling for the oncology rate pipeline.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Specialized error type for the pipeline
#[derive(Debug, thiserror::Error)]
pub enum OncoRateError {
    /// Error opening or reading a file
    #[error("IO error for {}: {context}: {source}", .path.display())]
    Io {
        path: PathBuf,
        context: String,
        #[source]
        source: io::Error,
    },

    /// Error decoding the comma-separated trial table
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A start-year line that does not split into exactly three tab fields
    #[error("{}:{line}: expected 3 tab-separated fields, found {found}", .path.display())]
    MalformedStartYearLine {
        path: PathBuf,
        line: usize,
        found: usize,
    },

    /// A trial table row missing a column or carrying an invalid label
    #[error("trial table row {row}: {reason}")]
    MalformedTrialRow { row: usize, reason: String },

    /// Problem with the ICD-10 mapping used by the code classifier
    #[error("ICD-10 mapping error: {0}")]
    Mapping(String),

    /// Failure reported by a code classifier other than an unrecognized code
    #[error("code classifier failed on {code:?}: {reason}")]
    Classifier { code: String, reason: String },
}

impl OncoRateError {
    /// Build an I/O error tied to a path
    pub fn io(path: impl Into<PathBuf>, context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            context: context.into(),
            source,
        }
    }

    /// Build a malformed trial row error
    pub fn trial_row(row: usize, reason: impl Into<String>) -> Self {
        Self::MalformedTrialRow {
            row,
            reason: reason.into(),
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, OncoRateError>;
