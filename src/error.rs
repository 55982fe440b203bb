//! Error handling types and utilities.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for docdex operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods at the binary boundary.
pub type Result<T> = anyhow::Result<T>;

/// Error raised for a single corpus entry during index construction.
///
/// Build-time validation has partial-failure semantics: the offending entry is
/// skipped, the error is collected, and the build continues over the remaining
/// entries. The collected list is returned alongside the partial index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Entry has an empty `location` and cannot be addressed.
    #[error("entry #{index} has no location")]
    MissingLocation { index: usize },
    /// Entry reuses a `location` already claimed by an earlier entry.
    #[error("duplicate location '{location}'")]
    DuplicateLocation { location: String },
}

/// Error returned for malformed query or scoring configuration.
///
/// Aborts the operation with no partial results. Empty queries, unknown
/// category filters, and queries with no matches are *not* errors; they
/// produce empty result lists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// Match mode string was neither `and` nor `or`.
    #[error("unknown match mode '{0}' (expected 'and' or 'or')")]
    UnknownMatchMode(String),
    /// Title matches must outrank body matches.
    #[error("title weight {title} must exceed text weight {text}")]
    InvalidWeights { title: f32, text: f32 },
    /// A zero minimum token length would index the empty token.
    #[error("minimum token length must be at least 1")]
    InvalidMinTokenLen,
}

/// Error returned when loading a corpus payload fails.
///
/// Loading is the only I/O in the crate; the index build and the query path
/// operate purely on in-memory data and have no counterpart to this.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The payload file could not be read.
    #[error("failed to read corpus at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The payload was not valid JSON after stripping any JS preamble.
    #[error("failed to parse corpus payload: {0}")]
    Parse(#[from] serde_json::Error),
}
