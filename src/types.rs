//! Core types for rapid_sentrank
//!
//! This module defines the data structures shared by every stage of the
//! summarizer: string interning for term vectors, sentences, configuration,
//! and the summary result with its diagnostics.

use crate::errors::{Result, SummaryError};
use crate::nlp::tokenizer::SegmentationStrategy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// String Interning
// ============================================================================

/// A pool for string interning.
///
/// Term vectors are built over interned IDs so that every vocabulary entry
/// maps to a fixed slot, and pairwise scoring never iterates a hash map.
#[derive(Debug, Default)]
pub struct StringPool {
    /// Maps strings to their interned IDs
    string_to_id: FxHashMap<Arc<str>, u32>,
    /// Maps IDs back to strings
    id_to_string: Vec<Arc<str>>,
}

impl StringPool {
    /// Create a new empty string pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a string pool with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            string_to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            id_to_string: Vec::with_capacity(capacity),
        }
    }

    /// Intern a string, returning its ID
    pub fn intern(&mut self, s: &str) -> u32 {
        if let Some(&id) = self.string_to_id.get(s) {
            return id;
        }

        let id = self.id_to_string.len() as u32;
        let arc: Arc<str> = s.into();
        self.string_to_id.insert(arc.clone(), id);
        self.id_to_string.push(arc);
        id
    }

    /// Look up the ID of an already-interned string
    pub fn id_of(&self, s: &str) -> Option<u32> {
        self.string_to_id.get(s).copied()
    }

    /// Get a string by its ID
    pub fn get(&self, id: u32) -> Option<&str> {
        self.id_to_string.get(id as usize).map(|s| s.as_ref())
    }

    /// Get the number of unique strings in the pool
    pub fn len(&self) -> usize {
        self.id_to_string.len()
    }

    /// Check if the pool is empty
    pub fn is_empty(&self) -> bool {
        self.id_to_string.is_empty()
    }
}

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// The trimmed sentence text, used verbatim in the summary
    pub text: String,
    /// Start byte offset in the original document
    pub start: usize,
    /// End byte offset in the original document (exclusive)
    pub end: usize,
    /// Sentence index within the document
    pub index: usize,
    /// Lowercased word tokens used for scoring
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Create a new sentence without tokens
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
            tokens: Vec::new(),
        }
    }

    /// Attach a token sequence
    pub fn with_tokens(mut self, tokens: Vec<String>) -> Self {
        self.tokens = tokens;
        self
    }

    /// Number of characters in the sentence text
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

// ============================================================================
// Ranking Strategy
// ============================================================================

/// How sentence importance is scored before selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingStrategy {
    /// PageRank over the cosine-similarity sentence graph
    #[default]
    Graph,
    /// Mean document frequency of each sentence's terms
    Frequency,
}

impl RankingStrategy {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "frequency" | "freq" | "tf" => RankingStrategy::Frequency,
            _ => RankingStrategy::Graph,
        }
    }
}

impl std::str::FromStr for RankingStrategy {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(RankingStrategy::parse(value))
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for extractive summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Number of sentences to keep
    pub summary_length: usize,
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Maximum iterations for PageRank convergence
    pub max_iterations: usize,
    /// Convergence threshold (stop when the L1 delta drops to this value)
    pub convergence_threshold: f64,
    /// Fragments shorter than this (in characters) are dropped during segmentation
    pub min_sentence_chars: usize,
    /// Target size (in characters) of word chunks in the last segmentation tier
    pub chunk_chars: usize,
    /// Characters of raw input used when every other fallback is empty
    pub fallback_prefix_chars: usize,
    /// Language code for stopwords (e.g., "en", "de", "fr")
    pub language: String,
    /// Additional stopwords (extends the built-in list)
    pub stopwords: Vec<String>,
    /// Sentence scoring strategy
    pub strategy: RankingStrategy,
    /// Build the similarity matrix with rayon
    pub parallel: bool,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            summary_length: 5,
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
            min_sentence_chars: 10,
            chunk_chars: 100,
            fallback_prefix_chars: 500,
            language: "en".to_string(),
            stopwords: Vec::new(),
            strategy: RankingStrategy::Graph,
            parallel: false,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.summary_length == 0 {
            return Err(SummaryError::invalid_config("summary_length must be > 0"));
        }

        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummaryError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummaryError::invalid_config("max_iterations must be > 0"));
        }

        if self.convergence_threshold <= 0.0 {
            return Err(SummaryError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        if self.chunk_chars == 0 {
            return Err(SummaryError::invalid_config("chunk_chars must be > 0"));
        }

        if self.fallback_prefix_chars == 0 {
            return Err(SummaryError::invalid_config(
                "fallback_prefix_chars must be > 0",
            ));
        }

        Ok(())
    }

    /// Builder method: set the number of summary sentences
    pub fn with_summary_length(mut self, summary_length: usize) -> Self {
        self.summary_length = summary_length;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set the minimum sentence length in characters
    pub fn with_min_sentence_chars(mut self, min_chars: usize) -> Self {
        self.min_sentence_chars = min_chars;
        self
    }

    /// Builder method: set the word-chunk size in characters
    pub fn with_chunk_chars(mut self, chunk_chars: usize) -> Self {
        self.chunk_chars = chunk_chars;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords(mut self, words: Vec<String>) -> Self {
        self.stopwords = words;
        self
    }

    /// Builder method: set ranking strategy
    pub fn with_strategy(mut self, strategy: RankingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder method: build the similarity matrix in parallel
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

// ============================================================================
// Summary Result
// ============================================================================

/// Which fallback, if any, produced the summary text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryFallback {
    /// The ranked (or bypassed) selection was used as-is
    #[default]
    None,
    /// The selection joined to nothing; the leading sentences were used
    LeadingSentences,
    /// No sentences were usable; a prefix of the raw input was used
    RawPrefix,
}

/// How the summary was produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryDiagnostics {
    /// Number of sentences found in the document
    pub sentence_count: usize,
    /// Segmentation tier that produced the sentences
    pub tier: Option<SegmentationStrategy>,
    /// Scoring strategy in effect
    pub strategy: RankingStrategy,
    /// True when the document had no more sentences than requested
    pub bypassed: bool,
    /// PageRank iterations (0 when ranking was skipped)
    pub iterations: usize,
    /// Whether the ranking converged (true when ranking was skipped)
    pub converged: bool,
    /// True when no two sentences share a non-stopword term
    pub degenerate_matrix: bool,
    /// Fallback used to guarantee a non-empty summary
    pub fallback: SummaryFallback,
}

/// The output of one summarization call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Selected sentences joined with single spaces, in document order
    pub summary_text: String,
    /// Character count of the input document
    pub original_length: usize,
    /// Character count of `summary_text`
    pub summary_length: usize,
    /// The selected sentences, in document order
    pub sentences: Vec<Sentence>,
    /// How the summary was produced
    pub diagnostics: SummaryDiagnostics,
}
