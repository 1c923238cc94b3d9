//! Search configuration types

use kb_application::{Ranker, SearchSettings};
use kb_domain::constants::{DEFAULT_MAX_SEARCH_K, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_SEARCH_K};
use serde::{Deserialize, Serialize};

/// Search configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Results returned when the request has no `k`
    pub default_k: usize,
    /// Largest `k` a request may ask for
    pub max_k: usize,
    /// Candidate count above which ranking runs in parallel
    pub parallel_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_k: DEFAULT_SEARCH_K,
            max_k: DEFAULT_MAX_SEARCH_K,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SearchConfig {
    /// Request limits derived from this configuration
    pub fn settings(&self) -> SearchSettings {
        SearchSettings {
            default_k: self.default_k,
            max_k: self.max_k,
        }
    }

    /// Ranker tuned by this configuration
    pub fn ranker(&self) -> Ranker {
        Ranker::new(self.parallel_threshold)
    }
}
