//! The immutable record store and payload loader.
//!
//! A corpus is the ordered set of documentation-entry records emitted by a
//! documentation generator. It is materialized once at startup and never
//! mutated; the index builder consumes it read-only.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::CorpusError;

/// One documentation anchor record.
///
/// `location` is the unique URL fragment where the entry renders; uniqueness
/// is enforced by the index builder, not here, so a freshly loaded corpus may
/// still carry duplicates from a buggy generator. `category` is an open
/// string set (`page`, `section`, `type`, `method`, `function`, `module` in
/// the corpora seen so far); unknown values pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DocEntry {
    pub location: String,
    pub page: String,
    pub title: String,
    pub category: String,
    pub text: String,
}

/// Payloads arrive either as a bare entry array or wrapped in a `docs` object,
/// matching the shape documentation generators emit.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Wrapped { docs: Vec<DocEntry> },
    Bare(Vec<DocEntry>),
}

/// The immutable set of documentation entries supplied by the generator.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<DocEntry>,
}

impl Corpus {
    /// Wrap an already materialized entry set.
    pub fn new(entries: Vec<DocEntry>) -> Self {
        Self { entries }
    }

    /// Parse a payload, accepting both raw JSON and the JS assignment form
    /// (`var documenterSearchIndex = {...}`) that generators write to disk.
    pub fn parse(content: &str) -> Result<Self, CorpusError> {
        let trimmed = content.trim_start();
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            Self::from_json_str(trimmed)
        } else {
            Self::from_js_payload(content)
        }
    }

    /// Parse a JSON payload: either `{"docs": [...]}` or a bare `[...]` array.
    pub fn from_json_str(json: &str) -> Result<Self, CorpusError> {
        let payload: Payload = serde_json::from_str(json)?;
        let entries = match payload {
            Payload::Wrapped { docs } => docs,
            Payload::Bare(docs) => docs,
        };
        Ok(Self::new(entries))
    }

    /// Parse the JS assignment form by stripping everything up to the first
    /// `=` and any trailing semicolon, then parsing the remainder as JSON.
    pub fn from_js_payload(js: &str) -> Result<Self, CorpusError> {
        let json = js.split_once('=').map_or(js, |(_, rest)| rest);
        let json = json.trim().trim_end_matches(';').trim_end();
        Self::from_json_str(json)
    }

    /// Read a payload file and parse it, dispatching on content rather than
    /// file extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("loaded corpus payload from {}", path.display());
        Self::parse(&content)
    }

    pub fn entries(&self) -> &[DocEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DocEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a DocEntry;
    type IntoIter = std::slice::Iter<'a, DocEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn parses_bare_array() {
        let corpus = Corpus::parse(r#"[{"location": "a.html#x", "page": "P"}]"#).unwrap();
        check!(corpus.len() == 1);
        check!(corpus.entries()[0].location == "a.html#x");
        // Fields absent from the payload default to empty strings
        check!(corpus.entries()[0].text == "");
    }

    #[test]
    fn parses_docs_wrapper() {
        let corpus = Corpus::parse(r#"{"docs": [{"location": "a"}, {"location": "b"}]}"#).unwrap();
        check!(corpus.len() == 2);
    }

    #[test]
    fn parses_js_assignment_form() {
        let js = "var documenterSearchIndex = {\"docs\": [\n{\"location\": \"index.html#\", \"page\": \"Getting Started\", \"title\": \"Getting Started\", \"category\": \"page\", \"text\": \"\"}\n]}\n";
        let corpus = Corpus::parse(js).unwrap();
        check!(corpus.len() == 1);
        check!(corpus.entries()[0].category == "page");
    }

    #[test]
    fn js_form_tolerates_trailing_semicolon() {
        let corpus = Corpus::parse("var idx = [{\"location\": \"a\"}];\n").unwrap();
        check!(corpus.len() == 1);
    }

    #[test]
    fn equals_signs_inside_text_survive() {
        let js = r#"var idx = [{"location": "a", "text": "g = PathGraph(6)"}]"#;
        let corpus = Corpus::parse(js).unwrap();
        check!(corpus.entries()[0].text == "g = PathGraph(6)");
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        let result = Corpus::parse("var idx = {not json}");
        check!(matches!(result, Err(CorpusError::Parse(_))));
    }
}
