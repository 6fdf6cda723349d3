use std::collections::BTreeSet;

use docpipe_math::round_f64;
use docpipe_types::{RATIO_DECIMALS, SimilarityRow};

use crate::CorpusIndex;

/// |A ∩ B| / |A ∪ B|, or 0.0 when both sets are empty.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let shared = a.intersection(b).count();
    let union = a.len() + b.len() - shared;
    if union == 0 {
        return 0.0;
    }
    shared as f64 / union as f64
}

/// Jaccard similarity of every unordered document pair.
///
/// Pairs are emitted as combinations in ingestion order: (0,1), (0,2), ...,
/// (1,2), ... with no self-pairs and no reversed duplicates.
pub fn pairwise_similarity(index: &CorpusIndex<'_>) -> Vec<SimilarityRow> {
    let docs = index.documents();
    let n = docs.len();
    let mut rows = Vec::with_capacity(n.saturating_sub(1) * n / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            let similarity = jaccard(index.term_set(i), index.term_set(j));
            rows.push(SimilarityRow {
                doc1: docs[i].id.clone(),
                doc2: docs[j].id.clone(),
                similarity: round_f64(similarity, RATIO_DECIMALS),
            });
        }
    }
    rows
}
