mod common;

use assert2::check;
use common::entry;
use docdex::{Corpus, IndexConfig, SearchIndex, SearchOptions, ValidationError};

// --- Partial-Failure Validation ---

/// Test: invalid entries are skipped with collected errors while the rest
/// of the corpus still builds.
#[test]
fn invalid_entries_are_collected_not_fatal() {
    let corpus = Corpus::new(vec![
        entry("a", "P", "alpha", "section", ""),
        entry("", "P", "ghost", "section", "missing location"),
        entry("a", "P", "impostor", "section", "duplicate location"),
        entry("b", "P", "beta", "section", ""),
    ]);

    let (index, errors) = SearchIndex::build(&corpus);
    check!(index.document_count() == 2);
    check!(
        errors
            == vec![
                ValidationError::MissingLocation { index: 1 },
                ValidationError::DuplicateLocation { location: "a".to_string() },
            ]
    );
}

/// Test: skipped entries are unreachable through any query.
#[test]
fn skipped_entries_never_match() {
    let corpus = Corpus::new(vec![
        entry("a", "P", "alpha", "section", ""),
        entry("", "P", "ghost", "section", ""),
        entry("a", "P", "impostor", "section", ""),
    ]);
    let (index, _) = SearchIndex::build(&corpus);

    check!(index.search("ghost", &SearchOptions::default()).is_empty());
    check!(index.search("impostor", &SearchOptions::default()).is_empty());
    // The surviving claimant of location "a" is still fully searchable
    let results = index.search("alpha", &SearchOptions::default());
    check!(results.len() == 1);
    check!(results[0].location == "a");
}

/// Test: the build never mutates the supplied corpus.
#[test]
fn build_leaves_corpus_untouched() {
    let corpus = Corpus::new(vec![
        entry("a", "P", "alpha", "section", ""),
        entry("", "P", "ghost", "section", ""),
    ]);
    let before = corpus.entries().to_vec();
    let (_, _) = SearchIndex::build(&corpus);
    check!(corpus.entries() == &before[..]);
}

// --- Index Shape ---

/// Test: counters reflect the built structure.
#[test]
fn stats_reflect_indexed_content() {
    let corpus = Corpus::new(vec![
        entry("a", "P", "graph", "section", "graph theory"),
        entry("b", "P", "", "section", "graph"),
    ]);
    let (index, _) = SearchIndex::build(&corpus);

    check!(index.document_count() == 2);
    // Unique tokens: graph, theory
    check!(index.term_count() == 2);
    // graph appears in (a, title), (a, text), (b, text); theory in (a, text)
    check!(index.posting_count() == 4);
}

/// Test: a custom minimum token length flows from build into queries.
#[test]
fn query_uses_build_time_tokenizer_settings() {
    let corpus = Corpus::new(vec![entry("a", "P", "", "section", "g is a graph")]);
    let (index, _) = SearchIndex::build_with(&corpus, IndexConfig { min_token_len: 1 });

    // Both sides tokenize with min_len 1, so the single-char query matches
    let results = index.search("g", &SearchOptions::default());
    check!(results.len() == 1);
}

// --- Shared Handle ---

/// Test: readers holding a snapshot are unaffected by a swap.
#[test]
fn swapped_out_index_keeps_answering() {
    let (first, _) = SearchIndex::build(&Corpus::new(vec![entry(
        "old.html#a",
        "P",
        "centrality",
        "section",
        "",
    )]));
    let (second, _) = SearchIndex::build(&Corpus::new(vec![entry(
        "new.html#a",
        "P",
        "clustering",
        "section",
        "",
    )]));

    let shared = docdex::SharedIndex::new(first);
    let in_flight = shared.snapshot();
    shared.swap(second);

    // The old snapshot still answers from the old corpus
    let results = in_flight.search("centrality", &SearchOptions::default());
    check!(results.len() == 1);
    // New snapshots answer from the new corpus
    let results = shared.snapshot().search("clustering", &SearchOptions::default());
    check!(results.len() == 1);
    check!(shared.snapshot().search("centrality", &SearchOptions::default()).is_empty());
}
