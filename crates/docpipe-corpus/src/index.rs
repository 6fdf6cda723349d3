use std::collections::{BTreeMap, BTreeSet};

use docpipe_math::mean_usize;
use docpipe_tokenize::{avg_token_chars, sentence_lengths, tokenize};
use docpipe_types::Document;

/// Per-document readability inputs, computed once at ingest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DocProfile {
    pub(crate) avg_sentence_len: f64,
    pub(crate) avg_word_len: f64,
}

/// Token tables for one run, built in a single pass and never mutated.
#[derive(Debug, Clone)]
pub struct CorpusIndex<'a> {
    documents: &'a [Document],
    streams: Vec<Vec<String>>,
    term_sets: Vec<BTreeSet<String>>,
    profiles: Vec<DocProfile>,
    term_freq: BTreeMap<String, usize>,
    doc_freq: BTreeMap<String, usize>,
    total_words: usize,
}

impl<'a> CorpusIndex<'a> {
    pub fn build(documents: &'a [Document]) -> Self {
        let mut streams = Vec::with_capacity(documents.len());
        let mut term_sets = Vec::with_capacity(documents.len());
        let mut profiles = Vec::with_capacity(documents.len());
        let mut term_freq: BTreeMap<String, usize> = BTreeMap::new();
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        let mut total_words = 0usize;

        for doc in documents {
            let tokens = tokenize(&doc.text);
            if let Some(stats) = &doc.source_statistics
                && stats.word_count != tokens.len()
            {
                tracing::debug!(
                    doc_id = %doc.id,
                    recorded = stats.word_count,
                    tokenized = tokens.len(),
                    "word_count differs from re-tokenized text; using tokenized count"
                );
            }

            profiles.push(DocProfile {
                avg_sentence_len: mean_usize(&sentence_lengths(&doc.text)),
                avg_word_len: avg_token_chars(&tokens),
            });

            let stream: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
            let set: BTreeSet<String> = stream.iter().cloned().collect();

            total_words += stream.len();
            for term in &stream {
                *term_freq.entry(term.clone()).or_insert(0) += 1;
            }
            for term in &set {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }

            streams.push(stream);
            term_sets.push(set);
        }

        Self {
            documents,
            streams,
            term_sets,
            profiles,
            term_freq,
            doc_freq,
            total_words,
        }
    }

    pub fn documents(&self) -> &'a [Document] {
        self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Sum of per-document token counts.
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Number of distinct lower-cased tokens across the corpus.
    pub fn unique_words(&self) -> usize {
        self.term_freq.len()
    }

    /// Total occurrences of `term` (lower-cased) across all documents.
    pub fn term_frequency(&self, term: &str) -> usize {
        self.term_freq.get(term).copied().unwrap_or(0)
    }

    /// Number of documents containing `term` (lower-cased) at least once.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    /// Corpus term counts, keyed by lower-cased token in ascending order.
    pub fn term_counts(&self) -> &BTreeMap<String, usize> {
        &self.term_freq
    }

    /// Lower-cased token set of document `idx`.
    pub fn term_set(&self, idx: usize) -> &BTreeSet<String> {
        &self.term_sets[idx]
    }

    /// The lower-cased token streams of all documents, concatenated in order.
    pub fn corpus_stream(&self) -> impl Iterator<Item = &str> + '_ {
        self.streams.iter().flatten().map(String::as_str)
    }

    pub(crate) fn profiles(&self) -> &[DocProfile] {
        &self.profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs() -> Vec<Document> {
        vec![
            Document::new("a.json", "Cats chase mice. Mice run fast."),
            Document::new("b.json", "Dogs chase cats."),
        ]
    }

    #[test]
    fn totals_match_scenario() {
        let docs = docs();
        let index = CorpusIndex::build(&docs);
        assert_eq!(index.total_words(), 9);
        assert_eq!(index.unique_words(), 6);
    }

    #[test]
    fn term_and_document_frequency_differ() {
        let docs = docs();
        let index = CorpusIndex::build(&docs);
        assert_eq!(index.term_frequency("mice"), 2);
        assert_eq!(index.document_frequency("mice"), 1);
        assert_eq!(index.term_frequency("cats"), 2);
        assert_eq!(index.document_frequency("cats"), 2);
        assert_eq!(index.document_frequency("absent"), 0);
    }

    #[test]
    fn corpus_stream_concatenates_in_order() {
        let docs = docs();
        let index = CorpusIndex::build(&docs);
        let stream: Vec<&str> = index.corpus_stream().collect();
        assert_eq!(stream.first(), Some(&"cats"));
        assert_eq!(stream[6], "dogs");
        assert_eq!(stream.len(), 9);
    }

    #[test]
    fn profiles_follow_document_order() {
        let docs = docs();
        let index = CorpusIndex::build(&docs);
        assert_eq!(index.profiles()[0].avg_sentence_len, 3.0);
        assert_eq!(index.profiles()[0].avg_word_len, 4.0);
        assert!((index.profiles()[1].avg_word_len - 13.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_corpus_builds() {
        let index = CorpusIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.total_words(), 0);
        assert_eq!(index.corpus_stream().count(), 0);
    }
}
