//! Inverted index construction over a documentation corpus.
//!
//! The index is built in a single pass and is read-only afterwards: queries
//! never mutate it, so any number of them may run concurrently against one
//! instance. A corpus change means a full rebuild, installed through
//! [`SharedIndex`]; there is no incremental update path.

use ahash::{AHashMap, AHashSet};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;

use super::tokenize::{DEFAULT_MIN_TOKEN_LEN, tokenize};
use crate::corpus::{Corpus, DocEntry};
use crate::error::ValidationError;

/// Dense document identifier: index into the build-order document table.
pub type DocId = u32;

/// Field a token occurred in. Title hits outrank body hits at scoring time,
/// so postings keep the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    Text,
}

/// One `(token, document, field)` occurrence record with its count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub doc: DocId,
    pub field: Field,
    pub count: u32,
}

/// Tokenizer settings captured at index build time.
///
/// The query path reads these back from the built index, which is what keeps
/// build-time and query-time normalization identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    /// Tokens shorter than this many characters are dropped.
    pub min_token_len: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
        }
    }
}

/// Inverted index plus the per-document metadata needed to render results.
///
/// Owns a copy of every surviving entry, so a built index is self-contained:
/// the loading corpus can be dropped once the build returns.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    /// Map from normalized token to its postings, sorted by `(doc, field)`.
    postings: AHashMap<String, Vec<Posting>>,
    /// Document table in build order; `DocId` indexes into it.
    docs: Vec<DocEntry>,
    config: IndexConfig,
}

impl SearchIndex {
    /// Build an index from a corpus with default tokenizer settings.
    ///
    /// Entries failing validation (empty or duplicate `location`) are skipped
    /// and reported in the returned error list; the build itself never fails.
    pub fn build(corpus: &Corpus) -> (Self, Vec<ValidationError>) {
        Self::build_with(corpus, IndexConfig::default())
    }

    /// Build an index with explicit tokenizer settings.
    pub fn build_with(corpus: &Corpus, config: IndexConfig) -> (Self, Vec<ValidationError>) {
        let start = Instant::now();
        let mut builder = IndexBuilder::new(config);
        for (position, entry) in corpus.iter().enumerate() {
            builder.add_entry(position, entry);
        }
        let (index, errors) = builder.finalize();

        tracing::info!(
            "built search index: {} documents, {} unique terms, {} skipped entries in {:?}",
            index.document_count(),
            index.term_count(),
            errors.len(),
            start.elapsed()
        );

        (index, errors)
    }

    /// Postings for a normalized token, or `None` if the token is unindexed.
    pub(crate) fn postings(&self, token: &str) -> Option<&[Posting]> {
        self.postings.get(token).map(Vec::as_slice)
    }

    /// Full record for a document, including its body text. This is what a
    /// result formatter uses to build an excerpt around a match.
    pub fn entry(&self, doc: DocId) -> Option<&DocEntry> {
        self.docs.get(doc as usize)
    }

    pub fn config(&self) -> IndexConfig {
        self.config
    }

    /// Number of unique tokens in the index.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of indexed documents (entries that passed validation).
    pub fn document_count(&self) -> usize {
        self.docs.len()
    }

    /// Total number of `(token, document, field)` postings.
    pub fn posting_count(&self) -> usize {
        self.postings.values().map(Vec::len).sum()
    }

    /// Iterate over the indexed documents in build order.
    pub fn documents(&self) -> impl Iterator<Item = (DocId, &DocEntry)> {
        self.docs
            .iter()
            .enumerate()
            .map(|(id, entry)| (id as DocId, entry))
    }
}

/// Accumulates per-field term counts before the postings table is finalized.
struct IndexBuilder {
    /// Flat map from `(token, doc, field)` to occurrence count; grouped into
    /// postings lists at finalize time.
    term_docs: AHashMap<(String, DocId, Field), u32>,
    docs: Vec<DocEntry>,
    seen_locations: AHashSet<String>,
    errors: Vec<ValidationError>,
    config: IndexConfig,
}

impl IndexBuilder {
    fn new(config: IndexConfig) -> Self {
        Self {
            term_docs: AHashMap::new(),
            docs: Vec::new(),
            seen_locations: AHashSet::new(),
            errors: Vec::new(),
            config,
        }
    }

    /// Validate and index one entry. `position` is the entry's index in the
    /// source corpus, used only for error reporting.
    fn add_entry(&mut self, position: usize, entry: &DocEntry) {
        if entry.location.is_empty() {
            self.errors
                .push(ValidationError::MissingLocation { index: position });
            return;
        }
        if !self.seen_locations.insert(entry.location.clone()) {
            // First occurrence wins; later claimants of the location are dropped
            self.errors.push(ValidationError::DuplicateLocation {
                location: entry.location.clone(),
            });
            return;
        }

        let doc = self.docs.len() as DocId;
        self.add_terms(&entry.title, doc, Field::Title);
        self.add_terms(&entry.text, doc, Field::Text);
        self.docs.push(entry.clone());
    }

    fn add_terms(&mut self, text: &str, doc: DocId, field: Field) {
        for token in tokenize(text, self.config.min_token_len) {
            *self.term_docs.entry((token, doc, field)).or_insert(0) += 1;
        }
    }

    fn finalize(self) -> (SearchIndex, Vec<ValidationError>) {
        let mut postings: AHashMap<String, Vec<Posting>> = AHashMap::new();
        for ((token, doc, field), count) in self.term_docs {
            postings
                .entry(token)
                .or_default()
                .push(Posting { doc, field, count });
        }

        // Deterministic layout: one posting per (doc, field), sorted
        for list in postings.values_mut() {
            list.sort_unstable_by_key(|p| (p.doc, p.field));
        }

        (
            SearchIndex {
                postings,
                docs: self.docs,
                config: self.config,
            },
            self.errors,
        )
    }
}

/// Atomically swappable handle for concurrent readers.
///
/// Queries take a [`snapshot`](Self::snapshot) and run against it without
/// holding any lock; [`swap`](Self::swap) installs a rebuilt index while
/// in-flight queries finish against the snapshot they already hold.
pub struct SharedIndex {
    current: RwLock<Arc<SearchIndex>>,
}

impl SharedIndex {
    pub fn new(index: SearchIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// The current index. The returned `Arc` stays valid across swaps.
    pub fn snapshot(&self) -> Arc<SearchIndex> {
        self.current.read().clone()
    }

    /// Install a rebuilt index, returning the previous one.
    pub fn swap(&self, index: SearchIndex) -> Arc<SearchIndex> {
        let mut guard = self.current.write();
        std::mem::replace(&mut *guard, Arc::new(index))
    }
}
