//! # docpipe-corpus
//!
//! **Tier 2 (Aggregation)**
//!
//! Builds corpus-wide statistics from an ordered list of documents:
//!
//! 1. Tokenize every document once into a [`CorpusIndex`]
//! 2. Rank lower-cased terms by corpus frequency
//! 3. Mine bigrams/trigrams from the concatenated token stream
//! 4. Compute Jaccard similarity for every unordered document pair
//! 5. Average per-document sentence and word lengths into a readability summary
//!
//! Everything here is a pure function of the input documents. The only
//! non-deterministic field of a [`CorpusReport`](docpipe_types::CorpusReport)
//! is `processing_timestamp`, and [`build_report_at`] lets callers pin it.

mod frequency;
mod index;
mod readability;
mod report;
mod similarity;

pub use frequency::{NgramCount, top_ngrams, top_words};
pub use index::CorpusIndex;
pub use readability::readability;
pub use report::{ReportOptions, build_report, build_report_at, utc_timestamp};
pub use similarity::{jaccard, pairwise_similarity};
