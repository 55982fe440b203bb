//! Result presentation helpers.
//!
//! The core exposes entry text and match offsets; actual rendering
//! (highlighting, HTML, terminal colors) belongs to the caller. [`excerpt`]
//! is the one piece of shared machinery: a window of body text around the
//! first query-token match, with the match span marked for highlighting.

use std::ops::Range;

use crate::search::token_spans;

/// A window of entry text around the first query-token match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    /// Excerpt text, sliced from the original entry on character boundaries.
    pub text: String,
    /// Byte range of the matched token within `text`.
    pub highlight: Range<usize>,
    /// Whether text was cut off before the window.
    pub prefix_truncated: bool,
    /// Whether text continues past the window.
    pub suffix_truncated: bool,
}

/// Build an excerpt of `text` around the first occurrence of any of the
/// normalized `tokens`, with up to `radius` characters of context on each
/// side. Returns `None` when no token occurs, e.g. for title-only matches.
pub fn excerpt(text: &str, tokens: &[String], radius: usize) -> Option<Excerpt> {
    let (range, _) = token_spans(text, 1).find(|(_, word)| tokens.contains(word))?;

    let start = text[..range.start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(range.start, |(i, _)| i);
    let extend = text[range.end..]
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take(radius)
        .last()
        .unwrap_or(0);
    let end = range.end + extend;

    Some(Excerpt {
        text: text[start..end].to_string(),
        highlight: (range.start - start)..(range.end - start),
        prefix_truncated: start > 0,
        suffix_truncated: end < text.len(),
    })
}
