//! Query execution against the inverted index.
//!
//! The engine is purely functional over the immutable [`SearchIndex`]: each
//! call tokenizes the query with the index's own build-time settings, gathers
//! candidates under the requested match mode, scores them with the field
//! weights, and ranks deterministically.

use ahash::AHashMap;
use serde::Serialize;
use std::str::FromStr;

use super::index::{DocId, SearchIndex};
use super::scoring::{Weights, rank};
use super::tokenize::tokenize_unique;
use crate::error::QueryError;

/// How a multi-token query combines its tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Every query token must appear in at least one field of a candidate.
    #[default]
    And,
    /// Any query token qualifies a candidate.
    Or,
}

impl FromStr for MatchMode {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            other => Err(QueryError::UnknownMatchMode(other.to_string())),
        }
    }
}

/// Options controlling a single search call.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub match_mode: MatchMode,
    /// Restrict candidates to these categories before scoring; empty means
    /// all. A category matching no entry yields an empty result, not an error.
    pub categories: Vec<String>,
    /// Cap on returned results; `None` returns every match.
    pub limit: Option<usize>,
    pub weights: Weights,
}

/// One ranked hit. Carries the displayable fields directly and the `doc` id
/// for callers that need the full entry back (e.g. excerpt builders).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult {
    pub doc: DocId,
    pub location: String,
    pub page: String,
    pub title: String,
    pub category: String,
    pub score: f32,
}

impl SearchIndex {
    /// Answer a free-text query with a ranked result list.
    ///
    /// Returns an empty list for queries that tokenize to nothing, queries
    /// matching no document, and category filters naming no indexed category;
    /// none of these are errors.
    pub fn search(&self, query: &str, opts: &SearchOptions) -> Vec<ScoredResult> {
        let tokens = tokenize_unique(query, self.config().min_token_len);
        if tokens.is_empty() {
            return Vec::new();
        }

        // Per candidate: how many distinct query tokens hit it, and the
        // accumulated weighted score across all hits.
        let mut hits: AHashMap<DocId, (usize, f32)> = AHashMap::new();
        for token in &tokens {
            let Some(postings) = self.postings(token) else {
                continue;
            };
            // Postings are sorted by doc, so consecutive entries for the same
            // doc (title + text) bump the matched-token count only once.
            let mut last: Option<DocId> = None;
            for posting in postings {
                let slot = hits.entry(posting.doc).or_insert((0, 0.0));
                if last != Some(posting.doc) {
                    slot.0 += 1;
                    last = Some(posting.doc);
                }
                slot.1 += opts.weights.for_field(posting.field) * posting.count as f32;
            }
        }

        let required = match opts.match_mode {
            MatchMode::And => tokens.len(),
            MatchMode::Or => 1,
        };

        let mut results: Vec<ScoredResult> = hits
            .into_iter()
            .filter(|(_, (matched, _))| *matched >= required)
            .filter_map(|(doc, (_, score))| {
                let entry = self.entry(doc)?;
                if !opts.categories.is_empty()
                    && !opts.categories.iter().any(|c| *c == entry.category)
                {
                    return None;
                }
                Some(ScoredResult {
                    doc,
                    location: entry.location.clone(),
                    page: entry.page.clone(),
                    title: entry.title.clone(),
                    category: entry.category.clone(),
                    score,
                })
            })
            .collect();

        rank(&mut results);
        if let Some(limit) = opts.limit {
            results.truncate(limit);
        }
        results
    }
}
