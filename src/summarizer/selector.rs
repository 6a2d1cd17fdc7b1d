//! Top-K sentence selection
//!
//! Picks the highest-scoring sentences and emits them in document order.

use crate::errors::{Result, SummaryError};
use crate::pagerank::sort_by_score;
use crate::types::Sentence;

/// Selects the `k` best sentences by score, preserving document order
#[derive(Debug, Clone, Copy)]
pub struct SentenceSelector {
    k: usize,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self { k: 5 }
    }
}

impl SentenceSelector {
    /// Create a selector keeping `k` sentences
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Number of sentences to keep
    pub fn k(&self) -> usize {
        self.k
    }

    /// Select sentences by score.
    ///
    /// `scores[i]` belongs to `sentences[i]`. When `k` covers every sentence
    /// all of them are returned unchanged.
    pub fn select(&self, sentences: &[Sentence], scores: &[f64]) -> Result<Vec<Sentence>> {
        if scores.len() != sentences.len() {
            return Err(SummaryError::internal(format!(
                "got {} scores for {} sentences",
                scores.len(),
                sentences.len()
            )));
        }

        let candidates: Vec<usize> = (0..sentences.len()).collect();
        let chosen = select_indices(&candidates, scores, self.k)?;
        Ok(chosen.into_iter().map(|i| sentences[i].clone()).collect())
    }
}

/// Choose `k` indices out of `candidates`.
///
/// Candidates are ordered by score descending (ties by index ascending),
/// truncated to `k`, then returned in ascending index order. The order in
/// which `candidates` is given does not affect the result.
pub fn select_indices(candidates: &[usize], scores: &[f64], k: usize) -> Result<Vec<usize>> {
    if k == 0 {
        return Err(SummaryError::invalid_input(
            "summary length must be at least 1",
        ));
    }
    if let Some(&bad) = candidates.iter().find(|&&i| i >= scores.len()) {
        return Err(SummaryError::internal(format!(
            "candidate {} has no score ({} scores)",
            bad,
            scores.len()
        )));
    }

    let mut order = candidates.to_vec();
    order.sort_unstable();
    order.dedup();

    if k < order.len() {
        sort_by_score(&mut order, scores);
        order.truncate(k);
        order.sort_unstable();
    }
    Ok(order)
}

/// Select the `k` highest-scoring sentences, in document order
pub fn select(sentences: &[Sentence], scores: &[f64], k: usize) -> Result<Vec<Sentence>> {
    SentenceSelector::new(k).select(sentences, scores)
}
