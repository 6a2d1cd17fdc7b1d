//! Sentence centrality ranking
//!
//! This module provides damped PageRank over the sentence graph.

pub mod standard;

pub use standard::{rank, StandardPageRank};

/// Scores within this distance of each other are treated as tied
const SCORE_RESOLUTION: f64 = 1e-12;

/// Result of a PageRank computation
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// Scores for each node (indexed by sentence index), summing to 1
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta (L1 norm)
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// All node indices, highest score first; ties by index ascending
    pub fn ranked(&self) -> Vec<usize> {
        rank_order(&self.scores)
    }

    /// Get top N nodes by score
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|i| (i, self.scores[i]))
            .collect()
    }

    /// Get the score for a specific node
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }
}

/// Quantize a score so that values differing only by rounding noise compare
/// equal and fall through to the index tie-break.
fn score_key(score: f64) -> i64 {
    (score / SCORE_RESOLUTION).round() as i64
}

/// Order indices `0..scores.len()` by score descending, then index ascending
pub fn rank_order(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    sort_by_score(&mut order, scores);
    order
}

/// Sort indices in place by score descending, then index ascending
pub(crate) fn sort_by_score(indices: &mut [usize], scores: &[f64]) {
    indices.sort_by(|&a, &b| {
        score_key(scores[b])
            .cmp(&score_key(scores[a]))
            .then(a.cmp(&b))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order_ties_by_index() {
        let order = rank_order(&[0.1, 0.3, 0.3, 0.05, 0.25]);
        assert_eq!(order, vec![1, 2, 4, 0, 3]);
    }

    #[test]
    fn test_rank_order_ignores_rounding_noise() {
        let third = 1.0 / 3.0;
        let order = rank_order(&[third, third + 1e-16, third - 1e-16]);
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_top_n_and_score() {
        let result = PageRankResult::new(vec![0.2, 0.5, 0.3], 10, 1e-7, true);

        assert_eq!(result.top_n(2), vec![(1, 0.5), (2, 0.3)]);
        assert_eq!(result.score(0), 0.2);
        assert_eq!(result.score(9), 0.0);
    }
}
