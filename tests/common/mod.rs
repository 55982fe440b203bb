//! Shared test fixtures for integration tests.
//!
//! The fixture corpus is shaped like a real generated documentation payload:
//! page placeholders with empty text, prose sections, and per-function
//! anchors, so tests exercise the same mix of entries a generator emits.

use docdex::{Corpus, DocEntry, SearchIndex};
use rstest::fixture;

#[allow(dead_code)] // Used across different integration test crates
pub fn entry(location: &str, page: &str, title: &str, category: &str, text: &str) -> DocEntry {
    DocEntry {
        location: location.to_string(),
        page: page.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        text: text.to_string(),
    }
}

/// A small documentation corpus with pages, sections, and function anchors.
#[fixture]
#[allow(dead_code)] // Used across different integration test crates
pub fn corpus() -> Corpus {
    Corpus::new(vec![
        entry("index.html#", "Getting Started", "Getting Started", "page", ""),
        entry(
            "index.html#lightgraphs-1",
            "Getting Started",
            "LightGraphs",
            "section",
            "The goal of LightGraphs.jl is to offer a performant platform for network and graph \
             analysis in Julia.",
        ),
        entry(
            "traversals.html#graph-traversal-1",
            "Traversals",
            "Graph Traversal",
            "section",
            "breadth first search",
        ),
        entry(
            "notes.html#notes-1",
            "Traversals",
            "Notes",
            "section",
            "graph theory traversal example",
        ),
        entry(
            "pathing.html#lightgraphs.bfs_tree",
            "Path and Traversal",
            "LightGraphs.bfs_tree",
            "function",
            "bfs_tree(g, s) Provides a breadth-first traversal of the graph g starting with \
             source vertex s.",
        ),
        entry(
            "basics.html#lightgraphs.nv",
            "Accessing Graph Properties",
            "LightGraphs.nv",
            "function",
            "nv(g) Number of vertices in g.",
        ),
        entry(
            "basics.html#lightgraphs.ne",
            "Accessing Graph Properties",
            "LightGraphs.ne",
            "method",
            "ne(g) Number of edges in g.",
        ),
    ])
}

/// An index built from the fixture corpus; the fixture corpus must be valid.
#[fixture]
#[allow(dead_code)] // Used across different integration test crates
pub fn index(corpus: Corpus) -> SearchIndex {
    let (index, errors) = SearchIndex::build(&corpus);
    assert!(errors.is_empty(), "fixture corpus must build cleanly: {errors:?}");
    index
}
