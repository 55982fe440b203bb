//! Full-text search infrastructure for documentation corpora.
//!
//! This module provides tokenization, inverted-index construction, field-
//! weighted scoring, and query execution over an in-memory record set.

// Module declarations
mod index;
mod query;
mod scoring;
mod tokenize;

// Public re-exports (used via lib.rs)
pub use index::{DocId, Field, IndexConfig, Posting, SearchIndex, SharedIndex};
pub use query::{MatchMode, ScoredResult, SearchOptions};
pub use scoring::Weights;
pub use tokenize::{Tokens, tokenize};

// Internal re-exports
pub(crate) use tokenize::{DEFAULT_MIN_TOKEN_LEN, token_spans};
