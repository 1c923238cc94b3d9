//! Search-Related Value Objects

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SEARCH_K;

/// Value Object: Ranked Result
///
/// A payload paired with its cosine similarity to the query. Scores lie in
/// `[-1, 1]`; vectors from the hash embedder stay within `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult<P> {
    /// The matched payload
    pub payload: P,
    /// Cosine similarity to the query (higher is better)
    pub score: f64,
}

impl<P> RankedResult<P> {
    /// Pair a payload with its score
    pub fn new(payload: P, score: f64) -> Self {
        Self { payload, score }
    }

    /// Transform the payload, keeping the score
    pub fn map<Q>(self, f: impl FnOnce(P) -> Q) -> RankedResult<Q> {
        RankedResult {
            payload: f(self.payload),
            score: self.score,
        }
    }
}

/// Value Object: Search Query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Raw query text
    pub text: String,
    /// Maximum number of results
    pub k: usize,
    /// Minimum similarity; `None` disables filtering
    pub threshold: Option<f64>,
}

impl SearchQuery {
    /// Query with the default `k` and no threshold
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            k: DEFAULT_SEARCH_K,
            threshold: None,
        }
    }

    /// Set the result limit
    #[must_use]
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the similarity threshold
    #[must_use]
    pub fn with_threshold(mut self, threshold: Option<f64>) -> Self {
        self.threshold = threshold;
        self
    }
}
