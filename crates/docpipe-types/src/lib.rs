//! # docpipe-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the data structures exchanged between docpipe stages:
//! processed document records, the corpus report and the stage completion
//! markers. It contains only data types and Serde definitions.
//!
//! ## Stability Policy
//!
//! **JSON-first stability**: the primary contract is the JSON written to disk.
//! Field names and field order of [`CorpusReport`] are part of that contract
//! and are consumed by downstream tooling as-is.
//!
//! ## What belongs here
//! * Pure data structs (records, reports, rows, markers)
//! * Serialization/Deserialization logic
//! * Report size constants
//!
//! ## What does NOT belong here
//! * File I/O
//! * Tokenization or aggregation
//! * CLI argument parsing

use serde::{Deserialize, Serialize};

/// Number of entries emitted in `top_100_words`.
pub const TOP_WORDS: usize = 100;

/// Number of entries emitted in `top_bigrams` / `top_trigrams`.
pub const TOP_NGRAMS: usize = 100;

/// Decimal places used for word frequencies and similarity scores.
pub const RATIO_DECIMALS: u32 = 6;

/// Decimal places used for the readability averages.
pub const AVERAGE_DECIMALS: u32 = 3;

/// Per-document counts produced by the processing stage.
///
/// Every field defaults so that partially populated `statistics` objects
/// still deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentStatistics {
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub sentence_count: usize,
    #[serde(default)]
    pub paragraph_count: usize,
    #[serde(default)]
    pub avg_word_length: f64,
}

/// A document as seen by the corpus aggregator.
///
/// Immutable once ingested: the aggregator only ever borrows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Stable identifier, unique within a run (the record file name).
    pub id: String,
    /// Markup-free, whitespace-collapsed text.
    pub text: String,
    /// Counts precomputed upstream, when the record carried them.
    pub source_statistics: Option<DocumentStatistics>,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            source_statistics: None,
        }
    }

    pub fn with_statistics(mut self, statistics: DocumentStatistics) -> Self {
        self.source_statistics = Some(statistics);
        self
    }
}

/// One processed page as written by `docpipe process`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessedRecord {
    pub source_file: String,
    pub text: String,
    pub statistics: DocumentStatistics,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub processed_at: String,
}

// -----------------
// Corpus report
// -----------------

/// The single output object of the analysis stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorpusReport {
    pub processing_timestamp: String,
    pub documents_processed: usize,
    pub total_words: usize,
    pub unique_words: usize,
    pub top_100_words: Vec<WordRow>,
    pub document_similarity: Vec<SimilarityRow>,
    pub top_bigrams: Vec<BigramRow>,
    pub top_trigrams: Vec<TrigramRow>,
    pub readability: Readability,
}

impl CorpusReport {
    /// The report for a run that ingested no documents.
    pub fn empty(processing_timestamp: impl Into<String>) -> Self {
        Self {
            processing_timestamp: processing_timestamp.into(),
            documents_processed: 0,
            total_words: 0,
            unique_words: 0,
            top_100_words: Vec::new(),
            document_similarity: Vec::new(),
            top_bigrams: Vec::new(),
            top_trigrams: Vec::new(),
            readability: Readability::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordRow {
    pub word: String,
    pub count: usize,
    pub frequency: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityRow {
    pub doc1: String,
    pub doc2: String,
    pub similarity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BigramRow {
    pub bigram: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrigramRow {
    pub trigram: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Readability {
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    pub complexity_score: f64,
}

// -----------------
// Stage markers
// -----------------

/// Written after the report, signals that the report is final.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletionMarker {
    pub timestamp: String,
    pub output: String,
}

/// Written by the processing stage once every record is on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessMarker {
    pub timestamp: String,
    pub processed_files: Vec<String>,
}
