//! Text tokenization and normalization for indexing and queries.
//!
//! Both the index builder and the query engine normalize through this module;
//! using the same pipeline on both sides is what makes matching work at all,
//! so neither side may tokenize any other way.

use std::ops::Range;

/// Default minimum token length. Single characters are mostly markup noise in
/// documentation prose; two keeps short identifiers like `nv` and `ne`.
pub(crate) const DEFAULT_MIN_TOKEN_LEN: usize = 2;

/// Lazy iterator over the normalized tokens of a string.
///
/// Splits on any run of non-alphanumeric characters, lower-cases each word,
/// and drops words shorter than `min_len` characters. Deterministic: identical
/// input always yields the identical sequence, and the sequence is restarted
/// by calling [`tokenize`] again. Empty input yields an empty sequence.
pub struct Tokens<'a> {
    spans: TokenSpans<'a>,
}

/// Tokenize `text`, dropping tokens shorter than `min_len` characters.
pub fn tokenize(text: &str, min_len: usize) -> Tokens<'_> {
    Tokens {
        spans: token_spans(text, min_len),
    }
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.spans.next().map(|(_, token)| token)
    }
}

/// Span-aware variant of [`Tokens`] yielding the byte range of each token in
/// the original text alongside its normalized form. Used by the excerpt
/// builder, which must slice the original (non-lowercased) text.
pub(crate) struct TokenSpans<'a> {
    text: &'a str,
    pos: usize,
    min_len: usize,
}

pub(crate) fn token_spans(text: &str, min_len: usize) -> TokenSpans<'_> {
    TokenSpans { text, pos: 0, min_len }
}

impl Iterator for TokenSpans<'_> {
    type Item = (Range<usize>, String);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = &self.text[self.pos..];
            let start = self.pos + rest.find(|c: char| c.is_alphanumeric())?;
            let word_rest = &self.text[start..];
            let len = word_rest
                .find(|c: char| !c.is_alphanumeric())
                .unwrap_or(word_rest.len());
            let end = start + len;
            self.pos = end;

            let word = &self.text[start..end];
            if word.chars().count() >= self.min_len {
                return Some((start..end, word.to_lowercase()));
            }
        }
    }
}

/// Tokenize a query, collapsing duplicate tokens while preserving first-seen
/// order. A repeated query word must not double-count in scoring or inflate
/// the AND-mode match requirement.
pub(crate) fn tokenize_unique(text: &str, min_len: usize) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in tokenize(text, min_len) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}
