//! Sentence scoring, selection and the summarization pipeline

pub mod extractive;
pub mod frequency;
pub mod selector;
pub mod similarity;

pub use extractive::{summarize, summarize_bytes, Summarizer};
pub use frequency::FrequencyScorer;
pub use selector::{select, select_indices, SentenceSelector};
pub use similarity::{similarity, TermVector};
