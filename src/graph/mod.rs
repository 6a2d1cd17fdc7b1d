//! Sentence similarity graph
//!
//! The graph is never materialized separately: [`SentenceGraph`] is a
//! weighted, undirected view over a [`SimilarityMatrix`].

pub mod matrix;
pub mod sentence_graph;

pub use matrix::{build_matrix, SimilarityMatrix};
pub use sentence_graph::SentenceGraph;
