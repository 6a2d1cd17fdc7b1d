//! Extractive summarization pipeline
//!
//! segment → similarity matrix → PageRank → top-K selection → join.
//! Documents with no more sentences than requested skip straight to the
//! join.

use super::frequency::FrequencyScorer;
use super::selector::select;
use crate::errors::{Result, SummaryError};
use crate::graph::matrix::SimilarityMatrix;
use crate::graph::sentence_graph::SentenceGraph;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::pagerank::StandardPageRank;
use crate::types::{
    RankingStrategy, Sentence, SummarizerConfig, SummaryDiagnostics, SummaryFallback,
    SummaryResult,
};

/// Sentences taken from the top of the document when a selection is empty
const LEADING_FALLBACK_SENTENCES: usize = 5;

/// Extractive summarizer
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    stopwords: StopwordFilter,
    tokenizer: Tokenizer,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a summarizer with the default config and English stopwords
    pub fn new() -> Self {
        let config = SummarizerConfig::default();
        Self {
            stopwords: StopwordFilter::from_config(&config),
            tokenizer: Tokenizer::from_config(&config),
            config,
        }
    }

    /// Create a summarizer from a validated config.
    ///
    /// The stopword list for `config.language` is loaded here, once.
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            stopwords: StopwordFilter::from_config(&config),
            tokenizer: Tokenizer::from_config(&config),
            config,
        })
    }

    /// Replace the stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Replace the tokenizer
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// The active configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// The active stopword filter
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Summarize text to `config.summary_length` sentences
    pub fn summarize(&self, text: &str) -> Result<SummaryResult> {
        self.run(text, self.config.summary_length)
    }

    /// Summarize text to `k` sentences
    pub fn summarize_with_length(&self, text: &str, k: usize) -> Result<SummaryResult> {
        self.run(text, k)
    }

    /// Summarize raw bytes, which must be UTF-8 text
    pub fn summarize_bytes(&self, bytes: &[u8]) -> Result<SummaryResult> {
        let text = std::str::from_utf8(bytes)?;
        self.summarize(text)
    }

    fn run(&self, text: &str, k: usize) -> Result<SummaryResult> {
        if k == 0 {
            return Err(SummaryError::invalid_input(
                "summary length must be at least 1",
            ));
        }

        let segmentation = {
            trace_stage!("segment");
            self.tokenizer.segment_sentences(text)
        };
        let sentences = segmentation.sentences;
        let n = sentences.len();

        let mut diagnostics = SummaryDiagnostics {
            sentence_count: n,
            tier: segmentation.tier,
            strategy: self.config.strategy,
            bypassed: false,
            iterations: 0,
            converged: true,
            degenerate_matrix: false,
            fallback: SummaryFallback::None,
        };

        let mut selected = if n <= k {
            diagnostics.bypassed = true;
            sentences.clone()
        } else {
            let scores = self.score(&sentences, &mut diagnostics);
            trace_stage!("select");
            select(&sentences, &scores, k)?
        };

        let mut summary_text = join(&selected);
        if summary_text.is_empty() && !text.is_empty() {
            (selected, summary_text, diagnostics.fallback) =
                fallback_summary(&sentences, text, self.config.fallback_prefix_chars);
            trace_event!(
                warn,
                fallback = ?diagnostics.fallback,
                "selection produced an empty summary"
            );
        }

        trace_event!(
            debug,
            sentences = n,
            selected = selected.len(),
            bypassed = diagnostics.bypassed,
            "summary ready"
        );

        Ok(SummaryResult {
            original_length: text.chars().count(),
            summary_length: summary_text.chars().count(),
            summary_text,
            sentences: selected,
            diagnostics,
        })
    }

    fn score(&self, sentences: &[Sentence], diagnostics: &mut SummaryDiagnostics) -> Vec<f64> {
        let stopwords = &self.stopwords;
        match self.config.strategy {
            RankingStrategy::Graph => {
                let matrix = {
                    trace_stage!("matrix");
                    if self.config.parallel {
                        SimilarityMatrix::build_parallel(sentences, stopwords)
                    } else {
                        SimilarityMatrix::build(sentences, stopwords)
                    }
                };
                if matrix.is_zero() {
                    diagnostics.degenerate_matrix = true;
                    trace_event!(
                        debug,
                        sentences = sentences.len(),
                        "no sentences share a term, ranking is uniform"
                    );
                }

                trace_stage!("rank");
                let result =
                    StandardPageRank::from_config(&self.config).run(&SentenceGraph::new(&matrix));
                diagnostics.iterations = result.iterations;
                diagnostics.converged = result.converged;
                result.scores
            }
            RankingStrategy::Frequency => {
                trace_stage!("rank");
                FrequencyScorer::new().score(sentences, stopwords)
            }
        }
    }
}

fn join(sentences: &[Sentence]) -> String {
    sentences
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replacement for a selection that joined to nothing.
///
/// The built-in segmenter never yields a sentence with empty text, so the
/// leading-sentences step only fires for custom sentence sources; the raw
/// prefix covers documents with no sentences at all.
fn fallback_summary(
    sentences: &[Sentence],
    text: &str,
    prefix_chars: usize,
) -> (Vec<Sentence>, String, SummaryFallback) {
    let leading: Vec<Sentence> = sentences
        .iter()
        .take(LEADING_FALLBACK_SENTENCES)
        .cloned()
        .collect();
    let joined = join(&leading);
    if !joined.is_empty() {
        return (leading, joined, SummaryFallback::LeadingSentences);
    }
    (
        Vec::new(),
        raw_prefix(text, prefix_chars),
        SummaryFallback::RawPrefix,
    )
}

/// The first `limit` characters of the trimmed text, with `...` appended when
/// cut. Whitespace-only text is used as-is.
fn raw_prefix(text: &str, limit: usize) -> String {
    let source = match text.trim() {
        "" => text,
        trimmed => trimmed,
    };
    let mut prefix: String = source.chars().take(limit).collect();
    if prefix.len() < source.len() {
        prefix.push_str("...");
    }
    prefix
}

/// Summarize `text` to `k` sentences using the given stopwords and default
/// settings otherwise
pub fn summarize(text: &str, stopwords: &StopwordFilter, k: usize) -> Result<SummaryResult> {
    let config = SummarizerConfig::default();
    let summarizer = Summarizer {
        stopwords: stopwords.clone(),
        tokenizer: Tokenizer::from_config(&config),
        config,
    };
    summarizer.run(text, k)
}

/// Like [`summarize`], for input that has not yet been checked to be UTF-8
pub fn summarize_bytes(bytes: &[u8], stopwords: &StopwordFilter, k: usize) -> Result<SummaryResult> {
    let text = std::str::from_utf8(bytes)?;
    summarize(text, stopwords, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::{SegmentationStrategy, Segmenter};

    const DOC: &str = "Rust programs are compiled ahead of time. \
        The borrow checker rejects programs with data races. \
        Many teams adopt Rust for systems programming. \
        The weather was pleasant yesterday afternoon. \
        Compiled Rust programs avoid data races at runtime. \
        Lunch included soup and bread.";

    #[test]
    fn test_summarize_selects_k_sentences_in_order() {
        let result = summarize(DOC, &StopwordFilter::default(), 2).unwrap();

        assert_eq!(result.sentences.len(), 2);
        assert!(result.sentences[0].index < result.sentences[1].index);
        assert!(!result.diagnostics.bypassed);
        assert!(result.diagnostics.iterations > 0);
        assert_eq!(result.summary_length, result.summary_text.chars().count());
        assert_eq!(result.original_length, DOC.chars().count());
    }

    #[test]
    fn test_short_document_bypasses_ranking() {
        let text = "First sentence here. Second sentence here.";
        let result = summarize(text, &StopwordFilter::default(), 5).unwrap();

        assert!(result.diagnostics.bypassed);
        assert_eq!(result.diagnostics.iterations, 0);
        assert_eq!(result.summary_text, text);
    }

    #[test]
    fn test_zero_length_is_input_error() {
        let err = summarize(DOC, &StopwordFilter::default(), 0).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_invalid_utf8_is_input_error() {
        let err = summarize_bytes(&[0x66, 0xff, 0xfe], &StopwordFilter::default(), 3).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_empty_text_gives_empty_summary() {
        let result = summarize("", &StopwordFilter::default(), 3).unwrap();
        assert_eq!(result.summary_text, "");
        assert_eq!(result.diagnostics.sentence_count, 0);
        assert_eq!(result.diagnostics.fallback, SummaryFallback::None);
    }

    #[test]
    fn test_raw_prefix_fallback_when_no_tier_applies() {
        let tokenizer = Tokenizer::new()
            .with_segmenter(Segmenter::new(vec![SegmentationStrategy::Punctuation]));
        let summarizer = Summarizer::new().with_tokenizer(tokenizer);

        let result = summarizer
            .summarize_with_length("no boundary anywhere in this text", 3)
            .unwrap();

        assert_eq!(result.summary_text, "no boundary anywhere in this text");
        assert_eq!(result.diagnostics.fallback, SummaryFallback::RawPrefix);
        assert!(result.sentences.is_empty());
    }

    #[test]
    fn test_raw_prefix_truncates() {
        assert_eq!(raw_prefix("  abcdef  ", 3), "abc...");
        assert_eq!(raw_prefix("abc", 3), "abc");
        assert_eq!(raw_prefix("ééé", 2), "éé...");
        assert_eq!(raw_prefix(" \n\t ", 500), " \n\t ");
        assert_eq!(raw_prefix("     ", 2), "  ...");
    }

    #[test]
    fn test_whitespace_only_text_is_never_empty() {
        let text = "   \n\t  ";
        let result = summarize(text, &StopwordFilter::default(), 3).unwrap();

        assert_eq!(result.summary_text, text);
        assert_eq!(result.diagnostics.fallback, SummaryFallback::RawPrefix);
        assert_eq!(result.diagnostics.sentence_count, 0);
        assert_eq!(result.original_length, 7);
        assert_eq!(result.summary_length, 7);
    }

    #[test]
    fn test_fallback_uses_leading_sentences_first() {
        let sentences: Vec<Sentence> = (0..7)
            .map(|i| {
                let text = if i == 0 { String::new() } else { format!("Line {i}.") };
                Sentence::new(text, 0, 0, i)
            })
            .collect();

        let (selected, text, fallback) = fallback_summary(&sentences, "ignored", 500);

        assert_eq!(fallback, SummaryFallback::LeadingSentences);
        assert_eq!(selected.len(), 5);
        assert_eq!(text, " Line 1. Line 2. Line 3. Line 4.");
    }

    #[test]
    fn test_fallback_uses_raw_prefix_without_text() {
        let sentences = vec![Sentence::new("", 0, 0, 0)];

        let (selected, text, fallback) = fallback_summary(&sentences, "  raw input  ", 3);

        assert_eq!(fallback, SummaryFallback::RawPrefix);
        assert!(selected.is_empty());
        assert_eq!(text, "raw...");
    }

    #[test]
    fn test_free_function_uses_given_stopwords() {
        let text = "Alpha shared words appear here. Beta shared words appear there. \
                    Gamma lonely sentence stands apart.";
        let all = StopwordFilter::from_list(&[
            "alpha", "beta", "gamma", "shared", "words", "appear", "here", "there", "lonely",
            "sentence", "stands", "apart",
        ]);

        let result = summarize(text, &all, 1).unwrap();
        assert!(result.diagnostics.degenerate_matrix);
        assert_eq!(result.sentences[0].index, 0);

        let result = summarize(text, &StopwordFilter::empty(), 1).unwrap();
        assert!(!result.diagnostics.degenerate_matrix);
    }

    #[test]
    fn test_frequency_strategy() {
        let config = SummarizerConfig::default()
            .with_strategy(RankingStrategy::Frequency)
            .with_summary_length(2);
        let summarizer = Summarizer::with_config(config).unwrap();
        let result = summarizer.summarize(DOC).unwrap();

        assert_eq!(result.sentences.len(), 2);
        assert_eq!(result.diagnostics.strategy, RankingStrategy::Frequency);
        assert_eq!(result.diagnostics.iterations, 0);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = SummarizerConfig::default().with_damping(-0.1);
        assert!(Summarizer::with_config(config).is_err());
    }

    #[test]
    fn test_summarize_bytes_method() {
        let summarizer = Summarizer::new();
        let from_bytes = summarizer.summarize_bytes(DOC.as_bytes()).unwrap();
        let from_str = summarizer.summarize(DOC).unwrap();
        assert_eq!(from_bytes, from_str);
    }
}
