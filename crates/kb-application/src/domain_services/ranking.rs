//! Similarity Ranking
//!
//! Orders candidate `(vector, payload)` pairs by cosine similarity to a
//! query vector.
//!
//! ## Ordering
//!
//! Results are sorted by score descending. Equal scores keep the order in
//! which candidates were supplied, so the sort key is `(score desc, index asc)`.
//! Large candidate sets are scanned in parallel shards; each shard keeps its
//! own top `k` under the same key and the shards are merged with it, which
//! makes the parallel result identical to the sequential one.

use std::cmp::Ordering;

use kb_domain::constants::DEFAULT_PARALLEL_THRESHOLD;
use kb_domain::error::{Error, Result};
use kb_domain::value_objects::RankedResult;
use rayon::prelude::*;

/// Minimum number of candidates handled by one parallel shard
const DEFAULT_MIN_SHARD_LEN: usize = 1024;

/// Cosine similarity of two vectors of equal length
///
/// Returns `0.0` when either vector has zero magnitude.
///
/// # Errors
///
/// [`Error::DimensionMismatch`] when the lengths differ.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::dimension_mismatch(a.len(), b.len()));
    }
    Ok(cosine_with_norm(a, b, norm(a)))
}

fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity with a precomputed norm for `a`; lengths must match
fn cosine_with_norm(a: &[f64], b: &[f64], norm_a: f64) -> f64 {
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    // Adding `0.0` turns `-0.0` into `0.0` so equal scores tie under `total_cmp`.
    dot / (norm_a * norm_b) + 0.0
}

struct Scored<P> {
    index: usize,
    score: f64,
    payload: P,
}

fn rank_order<P>(a: &Scored<P>, b: &Scored<P>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.index.cmp(&b.index))
}

/// Keep the best `k` entries of `items` under [`rank_order`]
fn truncate_top_k<P>(items: &mut Vec<Scored<P>>, k: usize) {
    items.sort_by(rank_order);
    items.truncate(k);
}

/// Cosine ranker
///
/// Stateless apart from its tuning knobs; cheap to copy and safe to share.
///
/// # Example
///
/// ```rust
/// use kb_application::Ranker;
///
/// let ranker = Ranker::default();
/// let candidates = vec![(vec![1.0, 0.0], "x"), (vec![0.0, 1.0], "y")];
/// let results = ranker.rank(&[1.0, 0.1], candidates, 1, None).unwrap();
/// assert_eq!(results[0].payload, "x");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranker {
    parallel_threshold: usize,
    min_shard_len: usize,
}

impl Ranker {
    /// Create a ranker that shards candidate sets larger than `parallel_threshold`
    pub fn new(parallel_threshold: usize) -> Self {
        Self {
            parallel_threshold,
            min_shard_len: DEFAULT_MIN_SHARD_LEN,
        }
    }

    /// Override the minimum shard size used by the parallel scan
    #[must_use]
    pub fn with_min_shard_len(mut self, min_shard_len: usize) -> Self {
        self.min_shard_len = min_shard_len.max(1);
        self
    }

    /// Candidate count above which ranking runs in parallel
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Rank `candidates` against `query`
    ///
    /// Scores below `threshold` are dropped before the list is cut to `k`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] when `k` is zero or `threshold` is NaN or
    ///   outside `[-1, 1]`
    /// - [`Error::DimensionMismatch`] for the first candidate whose length
    ///   differs from the query
    pub fn rank<V, P>(
        &self,
        query: &[f64],
        candidates: Vec<(V, P)>,
        k: usize,
        threshold: Option<f64>,
    ) -> Result<Vec<RankedResult<P>>>
    where
        V: AsRef<[f64]> + Send,
        P: Send,
    {
        if k == 0 {
            return Err(Error::invalid_argument("k must be at least 1"));
        }
        if let Some(t) = threshold
            && (t.is_nan() || !(-1.0..=1.0).contains(&t))
        {
            return Err(Error::invalid_argument(format!(
                "threshold must be between -1 and 1, got {t}"
            )));
        }
        if let Some((vector, _)) = candidates
            .iter()
            .find(|(vector, _)| vector.as_ref().len() != query.len())
        {
            return Err(Error::dimension_mismatch(
                query.len(),
                vector.as_ref().len(),
            ));
        }

        let query_norm = norm(query);
        let keep = |score: f64| threshold.is_none_or(|t| score >= t);

        let ranked = if candidates.len() > self.parallel_threshold {
            self.rank_parallel(query, query_norm, candidates, k, &keep)
        } else {
            let mut scored: Vec<Scored<P>> = candidates
                .into_iter()
                .enumerate()
                .map(|(index, (vector, payload))| Scored {
                    index,
                    score: cosine_with_norm(query, vector.as_ref(), query_norm),
                    payload,
                })
                .filter(|s| keep(s.score))
                .collect();
            truncate_top_k(&mut scored, k);
            scored
        };

        Ok(ranked
            .into_iter()
            .map(|s| RankedResult::new(s.payload, s.score))
            .collect())
    }

    fn rank_parallel<V, P, F>(
        &self,
        query: &[f64],
        query_norm: f64,
        candidates: Vec<(V, P)>,
        k: usize,
        keep: &F,
    ) -> Vec<Scored<P>>
    where
        V: AsRef<[f64]> + Send,
        P: Send,
        F: Fn(f64) -> bool + Sync,
    {
        let mut merged = candidates
            .into_par_iter()
            .enumerate()
            .with_min_len(self.min_shard_len)
            .fold(Vec::new, |mut shard: Vec<Scored<P>>, (index, (vector, payload))| {
                let score = cosine_with_norm(query, vector.as_ref(), query_norm);
                if keep(score) {
                    shard.push(Scored {
                        index,
                        score,
                        payload,
                    });
                    if shard.len() >= k.saturating_mul(2) {
                        truncate_top_k(&mut shard, k);
                    }
                }
                shard
            })
            .map(|mut shard| {
                truncate_top_k(&mut shard, k);
                shard
            })
            .reduce(Vec::new, |mut left, right| {
                left.extend(right);
                truncate_top_k(&mut left, k);
                left
            });
        truncate_top_k(&mut merged, k);
        merged
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(DEFAULT_PARALLEL_THRESHOLD)
    }
}
