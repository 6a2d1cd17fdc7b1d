//! Term-frequency sentence scoring
//!
//! A graph-free alternative to PageRank: every sentence scores the mean
//! document-wide frequency of its tokens. Stopwords contribute a frequency of
//! zero but still count towards the sentence length.

use crate::nlp::stopwords::StopwordFilter;
use crate::types::{Sentence, StringPool};

/// Scores sentences by the document frequency of their words
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyScorer;

impl FrequencyScorer {
    /// Create a new scorer
    pub fn new() -> Self {
        Self
    }

    /// One score per sentence, normalized to sum to 1.
    ///
    /// When no sentence has a countable term every sentence gets `1/N`.
    pub fn score(&self, sentences: &[Sentence], stopwords: &StopwordFilter) -> Vec<f64> {
        let n = sentences.len();
        if n == 0 {
            return Vec::new();
        }

        // Term IDs per sentence; stopwords map to None
        let mut pool = StringPool::new();
        let ids: Vec<Vec<Option<u32>>> = sentences
            .iter()
            .map(|sentence| {
                sentence
                    .tokens
                    .iter()
                    .map(|token| (!stopwords.is_stopword(token)).then(|| pool.intern(token)))
                    .collect()
            })
            .collect();

        let mut frequency = vec![0u64; pool.len()];
        for id in ids.iter().flatten().flatten() {
            frequency[*id as usize] += 1;
        }

        let raw: Vec<f64> = ids
            .iter()
            .map(|sentence| {
                if sentence.is_empty() {
                    return 0.0;
                }
                let total: u64 = sentence
                    .iter()
                    .flatten()
                    .map(|&id| frequency[id as usize])
                    .sum();
                total as f64 / sentence.len() as f64
            })
            .collect();

        normalize(raw)
    }
}

fn normalize(mut scores: Vec<f64>) -> Vec<f64> {
    let sum: f64 = scores.iter().sum();
    if sum > 0.0 {
        for score in &mut scores {
            *score /= sum;
        }
    } else {
        let uniform = 1.0 / scores.len() as f64;
        scores.fill(uniform);
    }
    scores
}
