use std::collections::BTreeMap;

use docpipe_math::safe_ratio;
use docpipe_types::{RATIO_DECIMALS, WordRow};

use crate::CorpusIndex;

/// An n-gram and its occurrence count in the corpus stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NgramCount {
    pub gram: String,
    pub count: usize,
}

/// Top `k` lower-cased terms by corpus frequency.
///
/// Ordered by descending count, ties by ascending term. `frequency` is
/// `count / total_words` rounded to 6 places.
pub fn top_words(index: &CorpusIndex<'_>, k: usize) -> Vec<WordRow> {
    let total = index.total_words();
    let mut rows: Vec<(&str, usize)> = index
        .term_counts()
        .iter()
        .map(|(term, count)| (term.as_str(), *count))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    rows.truncate(k);

    rows.into_iter()
        .map(|(word, count)| WordRow {
            word: word.to_string(),
            count,
            frequency: safe_ratio(count, total, RATIO_DECIMALS),
        })
        .collect()
}

/// Top `k` n-grams of the concatenated corpus stream.
///
/// N-grams run across document boundaries. Ordered by descending count,
/// ties by ascending n-gram text. `n == 0` yields nothing.
pub fn top_ngrams(index: &CorpusIndex<'_>, n: usize, k: usize) -> Vec<NgramCount> {
    if n == 0 {
        return Vec::new();
    }
    let stream: Vec<&str> = index.corpus_stream().collect();
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for window in stream.windows(n) {
        *counts.entry(window.join(" ")).or_insert(0) += 1;
    }

    let mut rows: Vec<NgramCount> = counts
        .into_iter()
        .map(|(gram, count)| NgramCount { gram, count })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.gram.cmp(&b.gram)));
    rows.truncate(k);
    rows
}
