//! # rapid_sentrank
//!
//! Extractive summarization with a sentence-graph TextRank.
//!
//! A document is split into sentences, every pair of sentences is compared by
//! cosine similarity over non-stopword terms, and PageRank over the resulting
//! weighted graph picks the most central sentences. The summary keeps those
//! sentences verbatim, in document order.
//!
//! ## Features
//!
//! - **Deterministic**: identical input always yields byte-identical output
//! - **Total**: segmentation falls back through simpler tiers instead of failing
//! - **Unicode-aware**: UAX #29 sentence and word boundaries (`unicode` feature)
//! - **Parallel**: optional rayon-built similarity matrix
//!
//! ```
//! use rapid_sentrank::{summarize, StopwordFilter};
//!
//! let text = "Rust is fast. Rust is safe. The sky is blue today.";
//! let result = summarize(text, &StopwordFilter::default(), 5).unwrap();
//! assert_eq!(result.summary_text, text);
//! ```

#[macro_use]
mod macros;

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummaryError};
pub use types::{
    RankingStrategy, Sentence, StringPool, SummarizerConfig, SummaryDiagnostics, SummaryFallback,
    SummaryResult,
};

// Re-export main functionality
pub use graph::{build_matrix, SentenceGraph, SimilarityMatrix};
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::{
    segment_sentences, tokenize_words, Segmentation, SegmentationStrategy, Segmenter, Tokenizer,
    WordTokenizer,
};
pub use pagerank::{rank, PageRankResult, StandardPageRank};
pub use summarizer::{
    select, similarity, summarize, summarize_bytes, FrequencyScorer, SentenceSelector,
    Summarizer,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
