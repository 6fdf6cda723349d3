use docpipe_types::{BigramRow, CorpusReport, Document, TOP_NGRAMS, TOP_WORDS, TrigramRow};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::{CorpusIndex, pairwise_similarity, readability, top_ngrams, top_words};

/// Table sizes for a report run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub top_words: usize,
    pub top_ngrams: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_words: TOP_WORDS,
            top_ngrams: TOP_NGRAMS,
        }
    }
}

/// Current UTC time as an RFC 3339 string.
pub fn utc_timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}

/// Build the corpus report, stamping it with the current UTC time once
/// every statistic is computed.
pub fn build_report(documents: &[Document], options: &ReportOptions) -> CorpusReport {
    let mut report = build_report_at(documents, options, String::new());
    report.processing_timestamp = utc_timestamp();
    report
}

/// Build the corpus report with a caller-supplied timestamp.
pub fn build_report_at(
    documents: &[Document],
    options: &ReportOptions,
    processing_timestamp: String,
) -> CorpusReport {
    if documents.is_empty() {
        return CorpusReport::empty(processing_timestamp);
    }

    let index = CorpusIndex::build(documents);
    tracing::debug!(
        documents = index.len(),
        total_words = index.total_words(),
        unique_words = index.unique_words(),
        "corpus index built"
    );

    let top_bigrams = top_ngrams(&index, 2, options.top_ngrams)
        .into_iter()
        .map(|g| BigramRow {
            bigram: g.gram,
            count: g.count,
        })
        .collect();
    let top_trigrams = top_ngrams(&index, 3, options.top_ngrams)
        .into_iter()
        .map(|g| TrigramRow {
            trigram: g.gram,
            count: g.count,
        })
        .collect();

    CorpusReport {
        processing_timestamp,
        documents_processed: index.len(),
        total_words: index.total_words(),
        unique_words: index.unique_words(),
        top_100_words: top_words(&index, options.top_words),
        document_similarity: pairwise_similarity(&index),
        top_bigrams,
        top_trigrams,
        readability: readability(&index),
    }
}
