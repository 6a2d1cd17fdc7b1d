//! Dense sentence similarity matrix
//!
//! Entry `[i][j]` holds the cosine similarity of sentences `i` and `j`; the
//! diagonal is always 0.0. Building costs O(N²) sentence-pair comparisons,
//! which bounds how large a document the summarizer can handle.

use crate::errors::{Result, SummaryError};
use crate::nlp::stopwords::StopwordFilter;
use crate::summarizer::similarity::{term_vectors, TermVector};
use crate::types::Sentence;
use rayon::prelude::*;

/// A symmetric N×N matrix stored row-major in a flat vector
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// An all-zero matrix for `n` sentences
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            values: vec![0.0; n * n],
        }
    }

    /// Build the matrix sequentially
    pub fn build(sentences: &[Sentence], stopwords: &StopwordFilter) -> Self {
        let vectors = term_vectors(sentences, stopwords);
        let n = vectors.len();
        let mut matrix = Self::zeros(n);

        for i in 0..n {
            for j in (i + 1)..n {
                let value = vectors[i].cosine(&vectors[j]);
                matrix.values[i * n + j] = value;
                matrix.values[j * n + i] = value;
            }
        }
        matrix
    }

    /// Build the matrix with one rayon task per row.
    ///
    /// Produces exactly the same values as [`SimilarityMatrix::build`].
    pub fn build_parallel(sentences: &[Sentence], stopwords: &StopwordFilter) -> Self {
        let vectors = term_vectors(sentences, stopwords);
        let n = vectors.len();

        let rows: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| row_values(&vectors, i))
            .collect();

        Self {
            n,
            values: rows.into_iter().flatten().collect(),
        }
    }

    /// Build a matrix from explicit rows.
    ///
    /// Rows must form a square matrix of finite values in `[0, 1]`. The
    /// diagonal is forced to 0.0.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut values = Vec::with_capacity(n * n);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(SummaryError::invalid_input(format!(
                    "similarity matrix row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            for (j, value) in row.into_iter().enumerate() {
                if !(0.0..=1.0).contains(&value) {
                    return Err(SummaryError::invalid_input(format!(
                        "similarity at [{i}][{j}] is {value}, expected a value in [0, 1]"
                    )));
                }
                values.push(if i == j { 0.0 } else { value });
            }
        }

        Ok(Self { n, values })
    }

    /// Number of sentences (rows)
    pub fn len(&self) -> usize {
        self.n
    }

    /// Check if the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Entry `[i][j]`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Row `i`
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }

    /// True when no two sentences share a countable term
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }

    /// The largest off-diagonal entry as `(i, j, value)` with `i < j`.
    ///
    /// Ties keep the first pair in row-major order.
    pub fn max_entry(&self) -> Option<(usize, usize, f64)> {
        let mut best: Option<(usize, usize, f64)> = None;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                let value = self.get(i, j);
                if best.map_or(true, |(_, _, b)| value > b) {
                    best = Some((i, j, value));
                }
            }
        }
        best
    }

    /// Number of sentence pairs with a non-zero similarity
    pub fn nonzero_pairs(&self) -> usize {
        (0..self.n)
            .map(|i| self.row(i)[i + 1..].iter().filter(|&&v| v > 0.0).count())
            .sum()
    }
}

fn row_values(vectors: &[TermVector], i: usize) -> Vec<f64> {
    vectors
        .iter()
        .enumerate()
        .map(|(j, other)| if i == j { 0.0 } else { vectors[i].cosine(other) })
        .collect()
}

/// Build the similarity matrix for a list of tokenized sentences
pub fn build_matrix(sentences: &[Sentence], stopwords: &StopwordFilter) -> SimilarityMatrix {
    SimilarityMatrix::build(sentences, stopwords)
}
