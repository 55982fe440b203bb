//! Runtime configuration for indexing and querying.
//!
//! All knobs are optional and default to the engine's built-in values; a
//! config file only needs the keys it wants to change.

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{QueryError, Result};
use crate::search::{DEFAULT_MIN_TOKEN_LEN, IndexConfig, Weights};

/// Tunable engine settings, loadable from a TOML file.
///
/// `title_weight > text_weight` and `min_token_len >= 1` are enforced at
/// load time, so a successfully loaded config is always usable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Tokens shorter than this many characters are dropped.
    pub min_token_len: usize,
    /// Score weight of a title-field hit.
    pub title_weight: f32,
    /// Score weight of a body-field hit.
    pub text_weight: f32,
    /// Result cap applied when the caller does not pass one.
    pub default_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        let weights = Weights::default();
        Self {
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            title_weight: weights.title,
            text_weight: weights.text,
            default_limit: None,
        }
    }
}

impl Config {
    /// Parse and validate a TOML configuration string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("invalid config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    pub fn index_config(&self) -> IndexConfig {
        IndexConfig {
            min_token_len: self.min_token_len,
        }
    }

    pub fn weights(&self) -> Weights {
        Weights {
            title: self.title_weight,
            text: self.text_weight,
        }
    }

    fn validate(&self) -> std::result::Result<(), QueryError> {
        if self.min_token_len == 0 {
            return Err(QueryError::InvalidMinTokenLen);
        }
        self.weights().validate()?;
        Ok(())
    }
}
