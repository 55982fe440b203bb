//! Field weighting and result ranking.

use serde::Deserialize;

use super::index::Field;
use super::query::ScoredResult;
use crate::error::QueryError;

/// Relative weight of each field in a match score.
///
/// A candidate's score is `Σ_token weight(field) × occurrences`. The concrete
/// values are tunable; the ordering `title > text` is a contract, so title
/// hits always outrank body hits of equal count.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Weights {
    pub title: f32,
    pub text: f32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            title: 2.0,
            text: 1.0,
        }
    }
}

impl Weights {
    /// Check the `title > text` contract, rejecting non-finite values too.
    pub fn validate(self) -> Result<Self, QueryError> {
        if self.title.is_finite() && self.text.is_finite() && self.title > self.text {
            Ok(self)
        } else {
            Err(QueryError::InvalidWeights {
                title: self.title,
                text: self.text,
            })
        }
    }

    pub(crate) fn for_field(self, field: Field) -> f32 {
        match field {
            Field::Title => self.title,
            Field::Text => self.text,
        }
    }
}

/// Order results by score descending, breaking ties by ascending `location`.
///
/// Locations are unique within an index, so the resulting order is total and
/// reproducible for identical inputs.
pub(crate) fn rank(results: &mut [ScoredResult]) {
    results.sort_unstable_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.location.cmp(&b.location))
    });
}
