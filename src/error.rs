//! Error type for index loading, building and configuration.
//!
//! Every variant is fatal for the operation that produced it. A lookup that
//! finds nothing is not an error; it returns an empty result.

use std::io;
use std::path::PathBuf;

/// Result alias defaulting to [`UnscrambleError`].
pub type Result<T, E = UnscrambleError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum UnscrambleError {
    /// An explicitly requested index file does not exist or is not a file.
    #[error("index file not found: {}", .path.display())]
    IndexNotFound { path: PathBuf },

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line of the index file does not match `<hex>+<word>[,<word>...]`.
    #[error("{}:{line}: malformed index line: {reason}", .path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A signature is not strictly greater than the one on the previous line.
    #[error("{}:{line}: index is not sorted by ascending signature", .path.display())]
    Unsorted { path: PathBuf, line: usize },

    #[error("configuration error: {0}")]
    Config(String),
}

impl UnscrambleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}
