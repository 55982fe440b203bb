pub mod config;
pub mod corpus;
pub mod error;
pub mod format;
pub mod search;
pub mod tracing;

pub use config::Config;
pub use corpus::{Corpus, DocEntry};
pub use error::{CorpusError, QueryError, ValidationError};
pub use format::{Excerpt, excerpt};
pub use search::{
    DocId, Field, IndexConfig, MatchMode, Posting, ScoredResult, SearchIndex, SearchOptions,
    SharedIndex, Weights,
};
