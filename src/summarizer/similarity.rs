//! Cosine similarity between sentence term-frequency vectors
//!
//! Counts are kept as integers and only the final ratio is computed in
//! floating point, so `similarity(a, b)` and `similarity(b, a)` are
//! bit-identical.

use crate::nlp::stopwords::StopwordFilter;
use crate::types::{Sentence, StringPool};

/// A sparse term-frequency vector over interned term IDs.
///
/// Entries are sorted by term ID; stopwords never get an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermVector {
    entries: Vec<(u32, u32)>,
    norm_sq: u64,
}

impl TermVector {
    /// Build a vector from tokens, interning terms into `pool`
    pub fn from_tokens<S: AsRef<str>>(
        tokens: &[S],
        stopwords: &StopwordFilter,
        pool: &mut StringPool,
    ) -> Self {
        let mut ids: Vec<u32> = tokens
            .iter()
            .map(|token| token.as_ref())
            .filter(|token| !stopwords.is_stopword(token))
            .map(|token| pool.intern(token))
            .collect();
        ids.sort_unstable();

        let mut entries: Vec<(u32, u32)> = Vec::new();
        for id in ids {
            match entries.last_mut() {
                Some((last, count)) if *last == id => *count += 1,
                _ => entries.push((id, 1)),
            }
        }

        let norm_sq = entries.iter().map(|&(_, c)| u64::from(c) * u64::from(c)).sum();
        Self { entries, norm_sq }
    }

    /// True when every token was a stopword (or there were no tokens)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Cosine similarity with another vector, in `[0, 1]`
    pub fn cosine(&self, other: &TermVector) -> f64 {
        if self.norm_sq == 0 || other.norm_sq == 0 {
            return 0.0;
        }

        let (mut i, mut j) = (0, 0);
        let mut dot: u64 = 0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_id, a_count) = self.entries[i];
            let (b_id, b_count) = other.entries[j];
            match a_id.cmp(&b_id) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += u64::from(a_count) * u64::from(b_count);
                    i += 1;
                    j += 1;
                }
            }
        }

        cosine_from_counts(dot, self.norm_sq, other.norm_sq)
    }
}

fn cosine_from_counts(dot: u64, norm_sq_a: u64, norm_sq_b: u64) -> f64 {
    if dot == 0 || norm_sq_a == 0 || norm_sq_b == 0 {
        return 0.0;
    }
    let denominator = (norm_sq_a as f64).sqrt() * (norm_sq_b as f64).sqrt();
    (dot as f64 / denominator).clamp(0.0, 1.0)
}

/// Build one term vector per sentence over a shared vocabulary
pub fn term_vectors(sentences: &[Sentence], stopwords: &StopwordFilter) -> Vec<TermVector> {
    let mut pool = StringPool::with_capacity(sentences.len() * 8);
    sentences
        .iter()
        .map(|sentence| TermVector::from_tokens(&sentence.tokens, stopwords, &mut pool))
        .collect()
}

/// Cosine similarity between two token sequences.
///
/// Both sequences are counted over their union vocabulary, skipping
/// stopwords. Returns 0.0 when either side has no countable terms.
pub fn similarity<S: AsRef<str>>(a: &[S], b: &[S], stopwords: &StopwordFilter) -> f64 {
    let mut vocabulary: Vec<&str> = a
        .iter()
        .chain(b.iter())
        .map(|token| token.as_ref())
        .collect();
    vocabulary.sort_unstable();
    vocabulary.dedup();

    let count = |tokens: &[S]| -> Vec<u64> {
        let mut counts = vec![0u64; vocabulary.len()];
        for token in tokens.iter().map(|token| token.as_ref()) {
            if stopwords.is_stopword(token) {
                continue;
            }
            if let Ok(slot) = vocabulary.binary_search(&token) {
                counts[slot] += 1;
            }
        }
        counts
    };
    let counts_a = count(a);
    let counts_b = count(b);

    let dot = counts_a.iter().zip(&counts_b).map(|(x, y)| x * y).sum();
    let norm_sq_a = counts_a.iter().map(|x| x * x).sum();
    let norm_sq_b = counts_b.iter().map(|x| x * x).sum();
    cosine_from_counts(dot, norm_sq_a, norm_sq_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn no_stopwords() -> StopwordFilter {
        StopwordFilter::empty()
    }

    #[test]
    fn test_identical_sentences() {
        let a = words("graph ranking works well");
        let sim = similarity(&a, &a, &no_stopwords());
        assert!((sim - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_sentences() {
        let a = words("graph ranking");
        let b = words("coffee beans");
        assert_eq!(similarity(&a, &b, &no_stopwords()), 0.0);
    }

    #[test]
    fn test_known_value() {
        // a = {x:2, y:1}, b = {x:1, z:1}: dot = 2, |a| = sqrt(5), |b| = sqrt(2)
        let a = words("x x y");
        let b = words("x z");
        let expected = 2.0 / (5.0f64.sqrt() * 2.0f64.sqrt());
        assert!((similarity(&a, &b, &no_stopwords()) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_stopwords_do_not_count() {
        let stopwords = StopwordFilter::from_list(&["the", "of"]);
        let a = words("the end of the road");
        let b = words("the middle of the night");
        assert_eq!(similarity(&a, &b, &stopwords), 0.0);
        assert!(similarity(&a, &b, &no_stopwords()) > 0.0);
    }

    #[test]
    fn test_all_stopwords_or_empty_is_zero() {
        let stopwords = StopwordFilter::from_list(&["the", "a"]);
        let a = words("the a the");
        let b = words("the a");
        let empty: Vec<String> = Vec::new();

        assert_eq!(similarity(&a, &b, &stopwords), 0.0);
        assert_eq!(similarity(&empty, &b, &no_stopwords()), 0.0);
        assert_eq!(similarity(&empty, &empty, &no_stopwords()), 0.0);
    }

    #[test]
    fn test_symmetric_bitwise() {
        let a = words("rust graph rank rank sentence");
        let b = words("sentence rank summary graph graph graph");
        let ab = similarity(&a, &b, &no_stopwords());
        let ba = similarity(&b, &a, &no_stopwords());
        assert_eq!(ab.to_bits(), ba.to_bits());
    }

    #[test]
    fn test_term_vector_matches_similarity() {
        let stopwords = StopwordFilter::from_list(&["is"]);
        let a = words("rust is fast and rust is safe");
        let b = words("safe code is fast code");

        let mut pool = StringPool::new();
        let va = TermVector::from_tokens(&a, &stopwords, &mut pool);
        let vb = TermVector::from_tokens(&b, &stopwords, &mut pool);

        assert_eq!(va.cosine(&vb).to_bits(), similarity(&a, &b, &stopwords).to_bits());
        assert_eq!(va.cosine(&vb).to_bits(), vb.cosine(&va).to_bits());
    }

    #[test]
    fn test_term_vector_counts() {
        let mut pool = StringPool::new();
        let v = TermVector::from_tokens(&words("b a b c b"), &no_stopwords(), &mut pool);
        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());

        let stopwords = StopwordFilter::from_list(&["a", "b", "c"]);
        let v = TermVector::from_tokens(&words("b a b c b"), &stopwords, &mut pool);
        assert!(v.is_empty());
    }
}
