//! Sentence segmentation and word tokenization
//!
//! Segmentation is an ordered list of [`SegmentationStrategy`] tiers. The
//! first tier that yields a non-empty fragment wins, so degraded input (PDF
//! extractions with missing punctuation, mangled line breaks) still produces
//! at least one sentence-like unit whenever the text is not blank. A long
//! run of text with no sentence marks at all skips to word chunking.
//!
//! The preferred tiers use UAX #29 segmentation from `unicode-segmentation`
//! (the default `unicode` feature). Without that feature the Unicode tier is
//! skipped and word tokenization uses a regex over alphanumeric runs.

use crate::types::{Sentence, SummarizerConfig};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
#[cfg(feature = "unicode")]
use unicode_segmentation::UnicodeSegmentation;

/// `.`, `!` or `?` (plus closing quotes/brackets) followed by whitespace
static TERMINATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]+["'”’)\]]*\s+"#).expect("valid terminator regex"));

/// A line break, optional horizontal whitespace, and another line break
static BLANK_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n[ \t\r\f\v]*\n\s*").expect("valid blank-line regex"));

static WORD_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{Alphabetic}\p{N}]+").expect("valid word regex"));

static NON_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("valid regex"));

/// A lone Unicode fragment longer than this many word chunks is handed on
const RUN_ON_CHUNKS: usize = 4;

/// Abbreviations that end with a period but do not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "vs.", "etc.", "e.g.", "i.e.",
];

// ============================================================================
// Segmentation strategies
// ============================================================================

/// One tier of sentence segmentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentationStrategy {
    /// UAX #29 sentence boundaries, with wrapped lines and abbreviations rejoined
    Unicode,
    /// Split after `.`, `!` or `?` followed by whitespace
    Punctuation,
    /// Split on blank lines (paragraphs)
    BlankLines,
    /// Group whitespace-separated words into chunks of roughly `chunk_chars`
    WordChunks,
}

impl SegmentationStrategy {
    /// The default fallback order
    pub const TIERS: [SegmentationStrategy; 4] = [
        SegmentationStrategy::Unicode,
        SegmentationStrategy::Punctuation,
        SegmentationStrategy::BlankLines,
        SegmentationStrategy::WordChunks,
    ];

    /// Whether the tooling behind this strategy is compiled in
    pub fn is_available(self) -> bool {
        match self {
            SegmentationStrategy::Unicode => cfg!(feature = "unicode"),
            _ => true,
        }
    }

    /// Raw byte spans of the fragments this strategy finds.
    ///
    /// Punctuation and BlankLines return nothing when the text has no
    /// boundary of their kind, which hands the text to the next tier. The
    /// Unicode tier does the same when it finds a single fragment longer
    /// than `RUN_ON_CHUNKS` word chunks.
    fn spans(self, text: &str, chunk_chars: usize) -> Vec<(usize, usize)> {
        match self {
            SegmentationStrategy::Unicode => {
                let spans = unicode_sentence_spans(text);
                let merged = merge_spans(text, spans, |frag| {
                    ends_with_abbreviation(frag) || (!is_terminal(frag) && !ends_paragraph(frag))
                });
                // One run-on fragment means the text has no usable sentence marks
                match merged.as_slice() {
                    [(start, end)]
                        if text[*start..*end].trim().chars().count()
                            > RUN_ON_CHUNKS * chunk_chars =>
                    {
                        Vec::new()
                    }
                    _ => merged,
                }
            }
            SegmentationStrategy::Punctuation => {
                let spans = split_after(text, &TERMINATOR_RE);
                if spans.len() < 2 {
                    return Vec::new();
                }
                merge_spans(text, spans, ends_with_abbreviation)
            }
            SegmentationStrategy::BlankLines => {
                let spans = split_after(text, &BLANK_LINE_RE);
                if spans.len() < 2 {
                    return Vec::new();
                }
                spans
            }
            SegmentationStrategy::WordChunks => word_chunk_spans(text, chunk_chars),
        }
    }
}

#[cfg(feature = "unicode")]
fn unicode_sentence_spans(text: &str) -> Vec<(usize, usize)> {
    text.split_sentence_bound_indices()
        .map(|(start, sentence)| (start, start + sentence.len()))
        .collect()
}

#[cfg(not(feature = "unicode"))]
fn unicode_sentence_spans(_text: &str) -> Vec<(usize, usize)> {
    Vec::new()
}

/// Split `text` into contiguous spans, each ending after a separator match.
fn split_after(text: &str, separator: &Regex) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;
    for m in separator.find_iter(text) {
        if m.end() > start {
            spans.push((start, m.end()));
            start = m.end();
        }
    }
    if start < text.len() {
        spans.push((start, text.len()));
    }
    spans
}

/// Greedily join each span into its successor while `should_merge` holds
/// for the accumulated fragment.
fn merge_spans(
    text: &str,
    spans: Vec<(usize, usize)>,
    should_merge: impl Fn(&str) -> bool,
) -> Vec<(usize, usize)> {
    let mut merged = Vec::with_capacity(spans.len());
    let mut pending: Option<usize> = None;

    for (start, end) in spans {
        let span = (pending.take().unwrap_or(start), end);
        if should_merge(&text[span.0..span.1]) {
            pending = Some(span.0);
        } else {
            merged.push(span);
        }
    }
    if let Some(start) = pending {
        merged.push((start, text.len()));
    }
    merged
}

fn ends_with_abbreviation(fragment: &str) -> bool {
    fragment
        .split_whitespace()
        .next_back()
        .map(|word| {
            let lower = word.to_lowercase();
            ABBREVIATIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

fn is_terminal(fragment: &str) -> bool {
    fragment
        .trim_end()
        .trim_end_matches(|c: char| matches!(c, '"' | '\'' | ')' | ']' | '”' | '’'))
        .ends_with(|c: char| matches!(c, '.' | '!' | '?' | '…' | '。' | '！' | '？'))
}

fn ends_paragraph(fragment: &str) -> bool {
    let tail = &fragment[fragment.trim_end().len()..];
    tail.matches('\n').count() >= 2
}

/// Chunk words into spans whose joined text just exceeds `chunk_chars`.
fn word_chunk_spans(text: &str, chunk_chars: usize) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut current: Option<(usize, usize)> = None;
    let mut joined_chars = 0;

    for word in NON_SPACE_RE.find_iter(text) {
        let word_chars = word.as_str().chars().count();
        let (start, _) = current.unwrap_or((word.start(), word.end()));
        joined_chars += if current.is_some() { word_chars + 1 } else { word_chars };
        current = Some((start, word.end()));

        if joined_chars > chunk_chars {
            spans.extend(current.take());
            joined_chars = 0;
        }
    }
    spans.extend(current);
    spans
}

/// Shrink a span to exclude surrounding whitespace; `None` if nothing remains.
fn trim_span(text: &str, (start, end): (usize, usize)) -> Option<(usize, usize)> {
    let slice = &text[start..end];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lead = slice.len() - slice.trim_start().len();
    Some((start + lead, start + lead + trimmed.len()))
}

// ============================================================================
// Segmenter
// ============================================================================

/// The sentences of a document and the tier that produced them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segmentation {
    pub sentences: Vec<Sentence>,
    pub tier: Option<SegmentationStrategy>,
}

impl Segmentation {
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Tiered sentence segmenter
#[derive(Debug, Clone)]
pub struct Segmenter {
    strategies: Vec<SegmentationStrategy>,
    min_chars: usize,
    chunk_chars: usize,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(SegmentationStrategy::TIERS.to_vec())
    }
}

impl Segmenter {
    /// Create a segmenter that tries `strategies` in order
    pub fn new(strategies: Vec<SegmentationStrategy>) -> Self {
        Self {
            strategies,
            min_chars: 10,
            chunk_chars: 100,
        }
    }

    /// Create the default segmenter with thresholds taken from a config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self::default()
            .with_min_chars(config.min_sentence_chars)
            .with_chunk_chars(config.chunk_chars)
    }

    /// Set the minimum fragment length in characters
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Set the word-chunk target size in characters
    pub fn with_chunk_chars(mut self, chunk_chars: usize) -> Self {
        self.chunk_chars = chunk_chars.max(1);
        self
    }

    /// The tiers this segmenter tries, in order
    pub fn strategies(&self) -> &[SegmentationStrategy] {
        &self.strategies
    }

    /// Split text into sentences. Never fails; blank text yields no sentences.
    ///
    /// Within the winning tier, fragments shorter than the minimum length are
    /// dropped unless that would drop all of them.
    pub fn segment(&self, text: &str) -> Segmentation {
        for &strategy in &self.strategies {
            if !strategy.is_available() {
                trace_event!(warn, ?strategy, "segmentation tier unavailable, skipping");
                continue;
            }

            let spans: Vec<(usize, usize)> = strategy
                .spans(text, self.chunk_chars)
                .into_iter()
                .filter_map(|span| trim_span(text, span))
                .collect();
            if spans.is_empty() {
                trace_event!(debug, ?strategy, "segmentation tier found no fragments");
                continue;
            }

            let long: Vec<(usize, usize)> = spans
                .iter()
                .copied()
                .filter(|&(start, end)| text[start..end].chars().count() >= self.min_chars)
                .collect();
            let kept = if long.is_empty() { spans } else { long };

            let sentences = kept
                .into_iter()
                .enumerate()
                .map(|(index, (start, end))| Sentence::new(&text[start..end], start, end, index))
                .collect();

            return Segmentation {
                sentences,
                tier: Some(strategy),
            };
        }

        Segmentation::default()
    }
}

// ============================================================================
// Word tokenization
// ============================================================================

/// Splits sentence text into lowercase word tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordTokenizer {
    /// UAX #29 word boundaries
    Unicode,
    /// Regex over alphanumeric runs
    Regex,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        if cfg!(feature = "unicode") {
            WordTokenizer::Unicode
        } else {
            WordTokenizer::Regex
        }
    }
}

impl WordTokenizer {
    /// Tokenize text into lowercase words. Never fails.
    pub fn tokenize(self, text: &str) -> Vec<String> {
        match self {
            WordTokenizer::Unicode => unicode_words(text).unwrap_or_else(|| {
                trace_event!(debug, "unicode word tokenizer unavailable, using regex");
                regex_words(text)
            }),
            WordTokenizer::Regex => regex_words(text),
        }
    }
}

#[cfg(feature = "unicode")]
fn unicode_words(text: &str) -> Option<Vec<String>> {
    Some(
        text.unicode_words()
            .filter(|word| word.chars().any(char::is_alphanumeric))
            .map(str::to_lowercase)
            .collect(),
    )
}

#[cfg(not(feature = "unicode"))]
fn unicode_words(_text: &str) -> Option<Vec<String>> {
    None
}

fn regex_words(text: &str) -> Vec<String> {
    WORD_RUN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

// ============================================================================
// Tokenizer
// ============================================================================

/// Sentence segmentation plus per-sentence word tokenization
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    segmenter: Segmenter,
    words: WordTokenizer,
}

impl Tokenizer {
    /// Create a tokenizer with default tiers and thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer with thresholds taken from a config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            segmenter: Segmenter::from_config(config),
            words: WordTokenizer::default(),
        }
    }

    /// Replace the segmenter
    pub fn with_segmenter(mut self, segmenter: Segmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Replace the word tokenizer
    pub fn with_word_tokenizer(mut self, words: WordTokenizer) -> Self {
        self.words = words;
        self
    }

    /// Segment text into sentences, each carrying its token sequence
    pub fn segment_sentences(&self, text: &str) -> Segmentation {
        let mut segmentation = self.segmenter.segment(text);
        for sentence in &mut segmentation.sentences {
            sentence.tokens = self.words.tokenize(&sentence.text);
        }
        segmentation
    }

    /// Tokenize a sentence into lowercase words
    pub fn tokenize_words(&self, sentence_text: &str) -> Vec<String> {
        self.words.tokenize(sentence_text)
    }
}

/// Segment text with the default tokenizer
pub fn segment_sentences(text: &str) -> Vec<Sentence> {
    Tokenizer::new().segment_sentences(text).sentences
}

/// Tokenize text into lowercase words with the default tokenizer
pub fn tokenize_words(text: &str) -> Vec<String> {
    WordTokenizer::default().tokenize(text)
}
